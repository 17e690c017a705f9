pub mod domain;
pub mod error;
pub mod mock;
pub mod navigation;

pub mod config {
    use anyhow::Context;
    use std::path::PathBuf;

    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_STATIC_DIR: &str = "dist";
    pub const DEFAULT_ENVIRONMENT: &str = "development";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub static_dir: PathBuf,
        pub mock_seed: Option<u64>,
        pub sentry_dsn: Option<String>,
        /// Deployment name reported to Sentry (`APP_ENV`).
        pub environment: String,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                port: DEFAULT_PORT,
                static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
                mock_seed: None,
                sentry_dsn: None,
                environment: DEFAULT_ENVIRONMENT.to_string(),
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

            let port = match var("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a port number (got {v})"))?,
                None => DEFAULT_PORT,
            };

            let mock_seed = var("MOCK_SEED")
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .with_context(|| format!("MOCK_SEED must be an unsigned integer (got {v})"))
                })
                .transpose()?;

            Ok(Self {
                port,
                static_dir: var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
                mock_seed,
                sentry_dsn: var("SENTRY_DSN"),
                environment: var("APP_ENV")
                    .map(|v| v.trim().to_string())
                    .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn defaults_when_unset() {
            let s = Settings::from_lookup(lookup(&[])).unwrap();
            assert_eq!(s.port, DEFAULT_PORT);
            assert_eq!(s.static_dir, PathBuf::from("dist"));
            assert!(s.mock_seed.is_none());
            assert!(s.sentry_dsn.is_none());
            assert_eq!(s.environment, DEFAULT_ENVIRONMENT);
        }

        #[test]
        fn reads_overrides() {
            let s = Settings::from_lookup(lookup(&[
                ("PORT", "8080"),
                ("STATIC_DIR", "web/build"),
                ("MOCK_SEED", "42"),
                ("SENTRY_DSN", ""),
                ("APP_ENV", " staging "),
            ]))
            .unwrap();
            assert_eq!(s.port, 8080);
            assert_eq!(s.static_dir, PathBuf::from("web/build"));
            assert_eq!(s.mock_seed, Some(42));
            // Blank values count as unset.
            assert!(s.sentry_dsn.is_none());
            assert_eq!(s.environment, "staging");
        }

        #[test]
        fn rejects_invalid_port() {
            assert!(Settings::from_lookup(lookup(&[("PORT", "http")])).is_err());
            assert!(Settings::from_lookup(lookup(&[("PORT", "70000")])).is_err());
        }
    }
}
