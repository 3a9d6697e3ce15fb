//! Client configuration
//!
//! Embedded TOML defaults, with the API origin overridable at build time via
//! the `TOKO_API_BASE` environment variable.

use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute API origin. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
    /// Send `ngrok-skip-browser-warning` on every request
    #[serde(default)]
    pub skip_ngrok_warning: bool,
}

const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
skip_ngrok_warning = true
"#;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse configuration from TOML text, applying the build-time override
pub fn parse_config(text: &str, base_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(text)?;
    if let Some(base) = base_override.filter(|b| !b.trim().is_empty()) {
        config.api.base_url = base.trim().trim_end_matches('/').to_string();
    }
    Ok(config)
}

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        match parse_config(DEFAULT_CONFIG, option_env!("TOKO_API_BASE")) {
            Ok(config) => config,
            Err(e) => {
                // DEFAULT_CONFIG is a literal; this only fires if it is edited badly
                log::error!("Invalid embedded config: {}", e);
                AppConfig {
                    api: ApiConfig {
                        base_url: String::new(),
                        port: 3000,
                        skip_ngrok_warning: true,
                    },
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.port, 3000);
        assert!(config.api.skip_ngrok_warning);
    }

    #[test]
    fn test_base_override_trims_trailing_slash() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://toko.example.com/api/")).unwrap();
        assert_eq!(config.api.base_url, "https://toko.example.com/api");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "");
    }
}
