pub mod analysis;
pub mod domain;
pub mod render;
pub mod teller;

pub mod config {
    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub seed: Option<u64>,
    }

    impl Settings {
        pub fn from_env() -> Self {
            Self::from_seed_var(std::env::var("FORTUNE_SEED").ok().as_deref())
        }

        /// An unparsable seed is ignored; the reading must still be printed.
        fn from_seed_var(raw: Option<&str>) -> Self {
            let seed = raw
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .and_then(|s| match s.parse::<u64>() {
                    Ok(seed) => Some(seed),
                    Err(err) => {
                        tracing::warn!(value = s, error = %err, "ignoring invalid FORTUNE_SEED");
                        None
                    }
                });
            Self { seed }
        }
    }

}
