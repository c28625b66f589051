pub mod client;
pub mod domain;
pub mod panel;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub base_url: Option<String>,
        pub session_cookie: Option<String>,
        pub http_timeout_secs: Option<u64>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let http_timeout_secs = match std::env::var("STOCKDESK_HTTP_TIMEOUT_SECS") {
                Ok(s) => Some(
                    s.trim()
                        .parse::<u64>()
                        .with_context(|| format!("STOCKDESK_HTTP_TIMEOUT_SECS is not a number: {s}"))?,
                ),
                Err(_) => None,
            };

            Ok(Self {
                base_url: non_empty_var("STOCKDESK_BASE_URL"),
                session_cookie: non_empty_var("STOCKDESK_SESSION_COOKIE"),
                http_timeout_secs,
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        pub fn require_base_url(&self) -> anyhow::Result<&str> {
            self.base_url
                .as_deref()
                .context("STOCKDESK_BASE_URL is required")
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn require_base_url_reports_missing_variable() {
            let settings = Settings::default();
            let err = settings.require_base_url().unwrap_err();
            assert!(err.to_string().contains("STOCKDESK_BASE_URL"));
        }

        #[test]
        fn require_base_url_returns_configured_value() {
            let settings = Settings {
                base_url: Some("http://localhost:5000".to_string()),
                ..Default::default()
            };
            assert_eq!(settings.require_base_url().unwrap(), "http://localhost:5000");
        }
    }
}
