use std::path::PathBuf;
use thiserror::Error;

use super::http_errors::HttpErrorInfo;

/// Errors reported by an [`Apply`](super::Apply) implementation
#[derive(Error, Debug)]
pub enum ApplyError {
    /// Server URL could not be used
    #[error("Invalid server URL \"{host}\": {reason}")]
    InvalidHost { host: String, reason: String },

    /// Failed to read the schema document
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Schema document has no content
    #[error("Schema document {} is empty", .0.display())]
    EmptyDocument(PathBuf),

    /// Schema document path has no file name to derive a schema name from
    #[error("Cannot derive a schema name from {}", .0.display())]
    UnnamedDocument(PathBuf),

    /// Server rejected the schema; the message is shown to the user as-is
    #[error("{message}")]
    Invalid { message: String },

    /// Server answered with an unexpected status
    #[error("{}: {}", .info.format(), .detail)]
    Http { info: HttpErrorInfo, detail: String },

    /// Request never reached the server
    #[error("{}: {}", .info.format(), .info.suggestion)]
    Network { info: HttpErrorInfo },

    /// Request exceeded the configured timeout
    #[error("Request to {host} timed out after {seconds}s")]
    Timeout { host: String, seconds: u64 },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl ApplyError {
    /// Build the error for a non-success response.
    pub fn from_response(status: u16, message: Option<String>) -> Self {
        let info = HttpErrorInfo::from_status(status);

        if info.is_schema_rejection() {
            return Self::Invalid {
                message: message.unwrap_or_else(|| info.format()),
            };
        }

        let detail = message.unwrap_or_else(|| info.suggestion.clone());
        Self::Http { info, detail }
    }
}
