use std::io::{self, Write};

use crate::domain::reading::Reading;

pub const GREETING: &str = "🔮 API Fortune Teller 🔮\n\
Paste your API response (JSON or otherwise). Press Ctrl+D when done:\n";

pub fn greet(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    out.flush()
}

pub fn render(reading: &Reading, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n=== YOUR API FORTUNE ===")?;
    writeln!(out, "🔮 {}", reading.fortune)?;
    writeln!(out, "📊 Confidence: {}%", reading.confidence)?;
    writeln!(out, "💡 Recommendation: {}", reading.recommendation)?;
    writeln!(out, "⏰ Timestamp: {}", reading.timestamp_iso())?;
    out.flush()
}
