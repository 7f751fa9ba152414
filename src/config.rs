use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Application configuration, read from `config.toml` next to the binary.
///
/// Every field has a default, so a missing or partial file is fine.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the shelter REST backend
    pub api_base_url: String,
    /// Base URL of the CEP (postal code) lookup service
    pub cep_base_url: String,
    /// Directory for locally persisted state (session keys)
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            cep_base_url: "https://viacep.com.br/ws".to_string(),
            data_dir: "./data".to_string(),
        }
    }
}

const CONFIG_FILE: &str = "config.toml";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loaded configuration, read once per process.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(|| load_from(Path::new(CONFIG_FILE)))
}

fn load_from(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid {}: {} (using defaults)", path.display(), e);
                AppConfig::default()
            }
        },
        Err(_) => {
            log::debug!("No {} found, using defaults", path.display());
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            api_base_url = "https://shelter.example.org/api"
            cep_base_url = "https://cep.example.org"
            data_dir = "/var/lib/gatil"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://shelter.example.org/api");
        assert_eq!(config.cep_base_url, "https://cep.example.org");
        assert_eq!(config.data_dir, "/var/lib/gatil");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: AppConfig =
            toml::from_str(r#"api_base_url = "https://shelter.example.org/api""#).unwrap();
        assert_eq!(config.api_base_url, "https://shelter.example.org/api");
        assert_eq!(config.cep_base_url, AppConfig::default().cep_base_url);
        assert_eq!(config.data_dir, AppConfig::default().data_dir);
    }

    #[test]
    fn test_absent_file_yields_defaults() {
        let config = load_from(Path::new("./does-not-exist-gatil.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
