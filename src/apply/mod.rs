//! The Apply collaborator: sends a schema document to the server for an action.
//!
//! Commands only see the [`Apply`] trait. [`http_client::HttpApplier`] is the
//! implementation used by the binary; tests substitute their own.

use std::fmt;
use std::future::Future;
use std::path::Path;

pub mod document;
pub mod error;
pub mod http_client;
pub mod http_errors;

pub use error::ApplyError;

/// Schema operation requested from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Check the document without changing anything
    Validate,
    /// Install the document as the active schema
    Apply,
}

impl Action {
    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Validate => "validate",
            Action::Apply => "apply",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performs a schema action for the document at `path`.
///
/// `url` is the server URL exactly as the user gave it; an empty string means
/// none was given and the implementation picks its default.
pub trait Apply {
    fn apply(
        &self,
        action: Action,
        path: &Path,
        url: &str,
    ) -> impl Future<Output = Result<(), ApplyError>> + Send;
}
