use serde::{Deserialize, Serialize};

/// Conversion defaults, read once at startup and threaded into the
/// facade functions. Nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Decimal digits retained in any returned result
    #[serde(default = "default_precision")]
    pub precision: u32,

    #[serde(default)]
    pub temperature: TemperatureDefaults,
}

/// Fallback units when a temperature conversion omits from/to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemperatureDefaults {
    #[serde(default = "default_from")]
    pub default_from: String,

    #[serde(default = "default_to")]
    pub default_to: String,
}

fn default_precision() -> u32 {
    2
}

fn default_from() -> String {
    "C".to_string()
}

fn default_to() -> String {
    "F".to_string()
}

impl Default for TemperatureDefaults {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            temperature: TemperatureDefaults::default(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.precision, 2);
        assert_eq!(config.temperature.default_from, "C");
        assert_eq!(config.temperature.default_to, "F");
    }

    #[test]
    fn test_parse_full_document() {
        let config: Config = toml::from_str(
            r#"
precision = 3

[temperature]
default_from = "K"
default_to = "C"
"#,
        )
        .unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(config.temperature.default_from, "K");
        assert_eq!(config.temperature.default_to, "C");
    }

    #[test]
    fn test_partial_document_falls_back() {
        let config: Config = toml::from_str("precision = 4").unwrap();
        assert_eq!(config.precision, 4);
        assert_eq!(config.temperature.default_from, "C");
        assert_eq!(config.temperature.default_to, "F");

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(toml::from_str::<Config>("precision = \"two\"").is_err());
    }
}
