pub mod domain;
pub mod fetch;
pub mod transform;

pub mod config {
    use crate::fetch::{FetcherConfig, DEFAULT_ENDPOINT_URL, DEFAULT_TIMEOUT_SECS};
    use anyhow::Context;
    use std::time::Duration;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub endpoint_url: String,
        pub timeout_secs: u64,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let endpoint_url = lookup("DIET_INSIGHTS_ENDPOINT_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

            let timeout_secs = match lookup("DIET_INSIGHTS_TIMEOUT_SECS") {
                Some(s) => s.trim().parse::<u64>().with_context(|| {
                    format!("DIET_INSIGHTS_TIMEOUT_SECS must be an integer (got {s:?})")
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            };

            Ok(Self {
                endpoint_url,
                timeout_secs,
                sentry_dsn: lookup("SENTRY_DSN").filter(|s| !s.trim().is_empty()),
            })
        }

        /// Zero seconds disables the client-side timeout.
        pub fn fetcher_config(&self) -> FetcherConfig {
            let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
            FetcherConfig::new(self.endpoint_url.clone()).with_timeout(timeout)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key: &str| vars.get(key).cloned()
        }

        #[test]
        fn unset_environment_uses_defaults() {
            let settings = Settings::from_lookup(lookup(&[])).unwrap();
            assert_eq!(settings.endpoint_url, DEFAULT_ENDPOINT_URL);
            assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
            assert_eq!(settings.sentry_dsn, None);
        }

        #[test]
        fn blank_endpoint_falls_back_to_deployed_url() {
            let settings =
                Settings::from_lookup(lookup(&[("DIET_INSIGHTS_ENDPOINT_URL", "   ")])).unwrap();
            assert_eq!(settings.endpoint_url, DEFAULT_ENDPOINT_URL);
        }

        #[test]
        fn reads_all_variables() {
            let settings = Settings::from_lookup(lookup(&[
                ("DIET_INSIGHTS_ENDPOINT_URL", "http://127.0.0.1:7071/api/process"),
                ("DIET_INSIGHTS_TIMEOUT_SECS", " 5 "),
                ("SENTRY_DSN", "https://key@sentry.example/1"),
            ]))
            .unwrap();
            assert_eq!(settings.endpoint_url, "http://127.0.0.1:7071/api/process");
            assert_eq!(settings.timeout_secs, 5);
            assert_eq!(settings.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
        }

        #[test]
        fn non_integer_timeout_is_an_error() {
            let err = Settings::from_lookup(lookup(&[("DIET_INSIGHTS_TIMEOUT_SECS", "soon")]))
                .unwrap_err();
            assert!(
                err.to_string().contains("DIET_INSIGHTS_TIMEOUT_SECS"),
                "{err:#}"
            );
        }

        fn settings(timeout_secs: u64) -> Settings {
            Settings {
                endpoint_url: "http://localhost:7071/api/process".to_string(),
                timeout_secs,
                sentry_dsn: None,
            }
        }

        #[test]
        fn fetcher_config_carries_url_and_timeout() {
            let config = settings(12).fetcher_config();
            assert_eq!(config.endpoint_url, "http://localhost:7071/api/process");
            assert_eq!(config.timeout, Some(Duration::from_secs(12)));
        }

        #[test]
        fn zero_timeout_means_none() {
            assert_eq!(settings(0).fetcher_config().timeout, None);
        }
    }
}
