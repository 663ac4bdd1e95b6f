use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Service configuration, read once from `config.json` before the listener
/// starts. The file uses the same keys every generation of the service has
/// used (`Port`, `WebRoot`); a missing or malformed file falls back to the
/// documented defaults instead of failing startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "Port")]
    pub port: u16,
    /// Public root URL substituted into the endpoint catalog, including the
    /// `/api` suffix clients dereference, e.g. `https://tirea.example.org/api`.
    #[serde(rename = "WebRoot")]
    pub web_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            web_root: "https://localhost".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `config.json` (or the file named by the
    /// `FWEW_API_CONFIG` environment variable).
    pub fn load() -> Self {
        let path = env::var("FWEW_API_CONFIG").unwrap_or_else(|_| "config.json".to_string());
        Self::load_from(Path::new(&path))
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("malformed {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::warn!("no config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.json"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.web_root, "https://localhost");
    }

    #[test]
    fn parses_original_config_keys() {
        let config: Config =
            serde_json::from_str(r#"{"Port": 9000, "WebRoot": "https://fwew.example/api"}"#)
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.web_root, "https://fwew.example/api");
    }
}
