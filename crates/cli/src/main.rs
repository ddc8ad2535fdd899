use std::io::{Read, Write};

use clap::Parser;
use api_fortune_core::config::Settings;
use api_fortune_core::domain::reading::Reading;
use api_fortune_core::render;
use api_fortune_core::teller::FortuneTeller;
use anyhow::Context;
use rand::Rng;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;

#[derive(Debug, Parser)]
#[command(name = "api-fortune-teller", about = "Predicts what your API will return before it disappoints you")]
struct Args {
    /// Seed the random source for a reproducible reading. Overrides FORTUNE_SEED.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so stdout carries only the reading.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env();
    let args = Args::parse();

    let mut teller = match resolve_seed(&args, &settings) {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            FortuneTeller::seeded(seed)
        }
        None => FortuneTeller::from_entropy(),
    };

    run(std::io::stdin().lock(), &mut std::io::stdout().lock(), &mut teller)?;
    Ok(())
}

fn resolve_seed(args: &Args, settings: &Settings) -> Option<u64> {
    args.seed.or(settings.seed)
}

/// Greets, reads the pasted response, and prints its reading.
fn run<R: Rng>(
    reader: impl Read,
    out: &mut impl Write,
    teller: &mut FortuneTeller<R>,
) -> anyhow::Result<Reading> {
    render::greet(out).context("write greeting failed")?;

    let text = input::or_lazy_fallback(input::read_response(reader)?);

    let reading = teller.analyze(&text);
    render::render(&reading, out).context("write reading failed")?;

    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_fortune_core::domain::catalog::{
        ADMITS_ERROR_FORTUNE, FORTUNES, NOT_JSON_FORTUNE, RECOMMENDATIONS,
    };

    fn run_seeded(input: &str, seed: u64) -> (Reading, String) {
        let mut out = Vec::new();
        let mut teller = FortuneTeller::seeded(seed);
        let reading = run(input.as_bytes(), &mut out, &mut teller).unwrap();
        (reading, String::from_utf8(out).unwrap())
    }

    #[test]
    fn blank_stdin_prints_greeting_then_lazy_user_reading() {
        let (reading, out) = run_seeded("  \n", 5);
        assert_eq!(reading.fortune, ADMITS_ERROR_FORTUNE);

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "🔮 API Fortune Teller 🔮");
        assert!(lines[1].starts_with("Paste your API response"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "=== YOUR API FORTUNE ===");
        assert_eq!(lines[5], format!("🔮 {ADMITS_ERROR_FORTUNE}"));
        assert_eq!(lines[6], format!("📊 Confidence: {}%", reading.confidence));
        assert_eq!(lines[7], format!("💡 Recommendation: {}", reading.recommendation));
        assert!(lines[8].starts_with("⏰ Timestamp: "));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn html_error_page_gets_not_json_reading() {
        let (reading, out) = run_seeded("<html>\n<body>502</body>\n</html>\n", 5);
        assert_eq!(reading.fortune, NOT_JSON_FORTUNE);
        assert!(out.contains("📊 Confidence: 95%"));
    }

    #[test]
    fn ordinary_json_draws_from_catalogs() {
        let (reading, out) = run_seeded("{\n  \"status\": \"ok\"\n}\n", 11);
        assert!(FORTUNES.contains(&reading.fortune));
        assert!(RECOMMENDATIONS.contains(&reading.recommendation));
        assert!(out.contains(reading.fortune));
    }

    #[test]
    fn seed_flag_overrides_env_seed() {
        let settings = Settings { seed: Some(1) };

        let args = Args::try_parse_from(["api-fortune-teller", "--seed", "7"]).unwrap();
        assert_eq!(resolve_seed(&args, &settings), Some(7));

        let args = Args::try_parse_from(["api-fortune-teller"]).unwrap();
        assert_eq!(resolve_seed(&args, &settings), Some(1));
        assert_eq!(resolve_seed(&args, &Settings::default()), None);
    }
}
