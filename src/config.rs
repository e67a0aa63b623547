use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

pub struct Config {
    pub bind_addr: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("CODEFEED_ADDR").unwrap_or_else(|| {
            let port = var("PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("0.0.0.0:{port}")
        });

        Self {
            bind_addr,
            gemini_api_key: var("GEMINI_API_KEY").or_else(|| var("GOOGLE_AI_API_KEY")),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            upstream_timeout: Duration::from_secs(
                var("CODEFEED_UPSTREAM_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            ),
        }
    }
}
