use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `server.default_host`
pub const HOST_ENV: &str = "STARGATE_HOST";
/// Environment variable overriding `server.auth_token`
pub const AUTH_TOKEN_ENV: &str = "STARGATE_AUTH_TOKEN";

/// Complete configuration (saved to <config dir>/settings.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
}

/// How to reach the schema server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host used when the command line does not name one
    #[serde(default = "default_host")]
    pub default_host: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Sent as X-Cassandra-Token when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

fn default_host() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("stargate-cli/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            default_host: default_host(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
            auth_token: None,
        }
    }
}

impl Settings {
    /// Load settings from the config directory, then apply environment overrides
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = crate::util::paths::get_settings_path()?;
        let mut settings = Self::load_from(&settings_path)?;

        settings.apply_overrides(
            std::env::var(HOST_ENV).ok(),
            std::env::var(AUTH_TOKEN_ENV).ok(),
        );

        settings.validate()?;

        tracing::debug!(
            "Settings loaded: default_host={}, timeout={}s",
            settings.server.default_host,
            settings.server.timeout
        );

        Ok(settings)
    }

    /// Read settings from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        if !path.exists() {
            tracing::info!("Settings file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read {:?}", path))?;
        let settings: Settings = toml::from_str(&content)
            .context(format!("Failed to parse {:?}", path))?;

        Ok(settings)
    }

    /// Apply environment overrides; empty values are ignored
    pub fn apply_overrides(&mut self, host: Option<String>, auth_token: Option<String>) {
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            tracing::debug!("Default host overridden by {}: {}", HOST_ENV, host);
            self.server.default_host = host;
        }

        if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
            tracing::debug!("Auth token overridden by {}", AUTH_TOKEN_ENV);
            self.server.auth_token = Some(token);
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Err(errors) = crate::app::settings::validate_settings(self) {
            return Err(anyhow::anyhow!(
                "Invalid configuration: {}",
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_settings_toml() -> &'static str {
        r#"
[server]
default_host = "https://stargate.internal:8443"
timeout = 5
connect_timeout = 2
user_agent = "CustomAgent/1.0"
auth_token = "secret"
"#
    }

    fn clear_env() {
        crate::util::paths::set_config_dir_override(None);
        unsafe { std::env::remove_var(HOST_ENV) };
        unsafe { std::env::remove_var(AUTH_TOKEN_ENV) };
        unsafe { std::env::remove_var(crate::util::paths::CONFIG_DIR_ENV) };
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.default_host, "http://localhost:8080");
        assert_eq!(settings.server.timeout, 30);
        assert_eq!(settings.server.connect_timeout, 10);
        assert!(settings.server.user_agent.starts_with("stargate-cli/"));
        assert_eq!(settings.server.auth_token, None);
    }

    #[test]
    fn test_load_from_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, create_test_settings_toml()).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.default_host, "https://stargate.internal:8443");
        assert_eq!(settings.server.timeout, 5);
        assert_eq!(settings.server.connect_timeout, 2);
        assert_eq!(settings.server.user_agent, "CustomAgent/1.0");
        assert_eq!(settings.server.auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_load_from_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "[server]\ntimeout = 60\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.timeout, 60);
        assert_eq!(settings.server.default_host, "http://localhost:8080");
    }

    #[test]
    fn test_load_from_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "[server\ntimeout = ").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings::default();
        settings.apply_overrides(
            Some("http://other:9090".to_string()),
            Some("token".to_string()),
        );
        assert_eq!(settings.server.default_host, "http://other:9090");
        assert_eq!(settings.server.auth_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_apply_overrides_ignores_empty_values() {
        let mut settings = Settings::default();
        settings.apply_overrides(Some(String::new()), Some(String::new()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_load_uses_config_dir_and_env() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settings.toml"),
            create_test_settings_toml(),
        )
        .unwrap();

        crate::util::paths::set_config_dir_override(Some(temp_dir.path().to_path_buf()));
        unsafe { std::env::set_var(HOST_ENV, "http://from-env:8080") };

        let settings = Settings::load().unwrap();
        assert_eq!(settings.server.default_host, "http://from-env:8080");
        assert_eq!(settings.server.timeout, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_values() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settings.toml"),
            "[server]\ntimeout = 0\n",
        )
        .unwrap();

        crate::util::paths::set_config_dir_override(Some(temp_dir.path().to_path_buf()));

        let err = Settings::load().unwrap_err().to_string();
        assert!(err.starts_with("Invalid configuration:"));
        assert!(err.contains("timeout"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_accepts_unusable_default_host() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settings.toml"),
            "[server]\ndefault_host = \"stargate:8080\"\n",
        )
        .unwrap();

        crate::util::paths::set_config_dir_override(Some(temp_dir.path().to_path_buf()));

        let settings = Settings::load().unwrap();
        assert_eq!(settings.server.default_host, "stargate:8080");

        clear_env();
    }
}
