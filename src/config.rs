use serde::{Deserialize, Serialize};

pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_PORT: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// Checked on every request, not at startup.
    #[serde(alias = "apikey", rename = "api_key")]
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(alias = "baseurl", rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            language: default_language(),
            page: default_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> String {
    "8081".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3/".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// Loads the optional config file, then applies `TMDB_API_KEY` and `PORT`
    /// from the process environment.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.tmdb.api_key = Some(key);
        }
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            self.listen.port = port;
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.tmdb.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen.port, "8081");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3/");
        assert_eq!(config.tmdb.language, "en-US");
        assert_eq!(config.tmdb.page, 1);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
listen:
  address: 127.0.0.1
  port: "9000"
tmdb:
  apikey: secret
  timeout_secs: 5
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.listen.address.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.listen.port, "9000");
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.tmdb.timeout_secs, 5);
        assert_eq!(config.tmdb.language, "en-US");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(ENV_API_KEY, "from-env"), (ENV_PORT, "8123")].into();
        let mut config = Config::default();
        config.apply_env(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.api_key(), Some("from-env"));
        assert_eq!(config.listen.port, "8123");
    }

    #[test]
    fn test_empty_env_is_unset() {
        let mut config = Config::default();
        config.apply_env(|_| Some(String::new()));
        assert!(config.api_key().is_none());
        assert_eq!(config.listen.port, "8081");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen:\n  port: \"9000\"\ntmdb:\n  api_key: from-file").unwrap();
        let path = file.path().to_str().unwrap();

        let mut config = Config::from_file(path).unwrap();
        assert_eq!(config.listen.port, "9000");
        assert_eq!(config.api_key(), Some("from-file"));

        let env: HashMap<&str, &str> = [(ENV_API_KEY, "from-env"), (ENV_PORT, "8123")].into();
        config.apply_env(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.listen.port, "8123");
        assert_eq!(config.api_key(), Some("from-env"));
    }

    #[test]
    fn test_file_kept_without_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen:\n  port: \"9000\"").unwrap();

        let mut config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        config.apply_env(|_| None);
        assert_eq!(config.listen.port, "9000");
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/movie-relay.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(..)));
    }
}
