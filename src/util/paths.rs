use anyhow::Result;
use std::path::PathBuf;
use std::sync::RwLock;

// Global config directory override (for --config flag and tests)
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Environment variable naming the settings directory
pub const CONFIG_DIR_ENV: &str = "STARGATE_CONFIG_DIR";

/// Set config directory override (used by --config flag and tests)
pub fn set_config_dir_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *override_path = path;
}

/// Get current config directory override
pub fn get_config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Find config directory by searching in priority order:
/// 1. Override from --config flag or set_config_dir_override() (highest priority)
/// 2. Environment variable STARGATE_CONFIG_DIR
/// 3. User config directory (`~/.config/stargate/` on Unix, `%APPDATA%\stargate\` on Windows)
///
/// The directory is not created; a missing directory just means default settings.
pub fn find_config_directory() -> Result<PathBuf> {
    // Priority 1: Override from --config flag or tests
    if let Some(override_path) = get_config_dir_override() {
        tracing::debug!("Using config directory override: {:?}", override_path);
        return Ok(override_path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV) {
        if !env_path.is_empty() {
            let env_config = PathBuf::from(env_path);
            tracing::debug!("Using config directory from {}: {:?}", CONFIG_DIR_ENV, env_config);
            return Ok(env_config);
        }
    }

    // Priority 3: User config directory (platform standard location)
    get_user_config_dir()
}

/// Get platform-specific user config directory
/// - Windows: `%APPDATA%\stargate`
/// - Unix: `~/.config/stargate`
fn get_user_config_dir() -> Result<PathBuf> {
    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine user config directory"))?;
    Ok(base_dir.join("stargate"))
}

/// Get absolute path to settings.toml
pub fn get_settings_path() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join("settings.toml"))
}
