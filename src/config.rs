use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_name")]
    pub base_name: String,
}

fn default_base_name() -> String {
    "fortune-cookies".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_name: "fortune-cookies".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_name, "fortune-cookies");
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_name, "fortune-cookies");
    }

    #[test]
    fn test_deserialize_base_name() {
        let config: Config = serde_json::from_str(r#"{"base_name": "quotes"}"#).unwrap();
        assert_eq!(config.base_name, "quotes");
    }
}
