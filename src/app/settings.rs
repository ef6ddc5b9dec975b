use super::config::Settings;

/// Validation errors for settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A timeout of zero would fail every request
    ZeroTimeout(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroTimeout(field) => {
                write!(f, "server.{} must be greater than 0 seconds", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate loaded settings.
///
/// `default_host` is not checked here: it only matters when no host is given on the
/// command line, and the applier rejects it at that point.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let server = &settings.server;

    if server.timeout == 0 {
        errors.push(ValidationError::ZeroTimeout("timeout"));
    }

    if server.connect_timeout == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_timeout"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
