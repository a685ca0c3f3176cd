//! Client configuration loaded from layered sources.

use serde::Deserialize;

const CONFIG_FILE: &str = "book-tracker";
const ENV_PREFIX: &str = "BOOK_TRACKER";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "ClientConfig::default_base_url")]
    pub base_url: String,
}

impl ClientConfig {
    /// Load from `.env`, an optional `book-tracker.toml` and `BOOK_TRACKER_*`
    /// environment variables, later sources winning.
    pub fn load() -> Result<Self, config::ConfigError> {
        // A missing `.env` is fine.
        let _ = dotenvy::dotenv();

        config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    fn default_base_url() -> String {
        "http://127.0.0.1:3000".to_string()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_local_mock_server() {
        assert_eq!(ClientConfig::default().base_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: ClientConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn base_url_can_be_overridden() {
        let cfg: ClientConfig = config::Config::builder()
            .set_override("base_url", "http://books.internal")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.base_url, "http://books.internal");
    }
}
