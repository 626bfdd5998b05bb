use serde::Deserialize;

use super::request::DEFAULT_SORT_BY;
use super::response::DecodeMode;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub endpoint: String,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default)]
    pub strict_decoding: bool,
}

fn default_sort_by() -> String {
    DEFAULT_SORT_BY.to_string()
}

impl SearchConfig {
    pub fn decode_mode(&self) -> DecodeMode {
        DecodeMode::from_strict_flag(self.strict_decoding)
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[search]
endpoint = "https://vit-tm-task.api.trademarkia.app/api/v3/us"
sort_by = "default"
strict_decoding = false
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.search.endpoint.trim().is_empty() {
        anyhow::bail!("search.endpoint must not be empty");
    }
    Ok(config)
}

/// Load configuration, preferring an override when it parses.
///
/// Search order:
/// 1. `override_toml` (e.g. supplied by the host page)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<Config> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Using overridden search configuration");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }

    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = load_config(None).unwrap();
        assert!(config.search.endpoint.starts_with("https://"));
        assert_eq!(config.search.sort_by, "default");
        assert_eq!(config.search.decode_mode(), DecodeMode::Lenient);
    }

    #[test]
    fn test_override_config() {
        let config = load_config(Some(
            "[search]\nendpoint = \"http://localhost:9000/api\"\nstrict_decoding = true\n",
        ))
        .unwrap();
        assert_eq!(config.search.endpoint, "http://localhost:9000/api");
        assert_eq!(config.search.sort_by, "default");
        assert_eq!(config.search.decode_mode(), DecodeMode::Strict);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("not = [valid")).unwrap();
        assert_eq!(config, parse_config(DEFAULT_CONFIG).unwrap());

        assert!(parse_config("[search]\nendpoint = \"  \"\n").is_err());
    }
}
