use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// API base URL, e.g. http://localhost:5000/api
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token attached to every request.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where downloaded PDFs and print files land. Defaults to the system
    /// download directory.
    pub download_dir: Option<PathBuf>,
    /// Signature used in generated invoice emails.
    pub company_name: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let app_dir = home_dir.join(".config").join("royalty-console");
        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir.join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;
        Ok(())
    }

    /// Persist a token change (set or clear).
    pub fn set_token(&mut self, token: Option<String>) -> Result<()> {
        self.auth.token = token;
        self.save()
    }

    /// Base URL with a local default for development setups.
    pub fn base_url(&self) -> String {
        self.server
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:5000/api".to_string())
    }

    pub fn download_dir(&self) -> PathBuf {
        self.export
            .download_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn company_name(&self) -> String {
        self.export
            .company_name
            .clone()
            .unwrap_or_else(|| "Royalty Desk".to_string())
    }
}

/// Validate a configured base URL before any request uses it.
pub fn validate_url(raw: &str) -> Result<(), String> {
    if raw.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    url::Url::parse(raw).map_err(|e| format!("Invalid URL: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_accepts_http_and_https() {
        assert!(validate_url("http://localhost:5000").is_ok());
        assert!(validate_url("https://api.example.com/v1").is_ok());
    }

    #[test]
    fn validate_url_rejects_other_schemes_and_garbage() {
        assert!(validate_url("").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("localhost:5000").is_err());
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn partial_config_files_load_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            base_url = "http://localhost:5000/api"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "http://localhost:5000/api");
        assert!(config.auth.token.is_none());
        assert_eq!(config.company_name(), "Royalty Desk");
    }

    #[test]
    fn base_url_falls_back_to_local_default() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://localhost:5000/api");
    }
}
