/// HTTP error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorCategory {
    Network,    // Connection errors (no status code)
    Client,     // 4xx errors
    Server,     // 5xx errors
    Auth,       // 401, 403
    RateLimit,  // 429
}

/// Enriched HTTP error information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpErrorInfo {
    pub status_code: Option<u16>,
    pub category: HttpErrorCategory,
    pub description: String,
    pub suggestion: String,
}

impl HttpErrorInfo {
    /// Create from HTTP status code
    pub fn from_status(status: u16) -> Self {
        let (category, description, suggestion) = match status {
            400 => (
                HttpErrorCategory::Client,
                "Bad Request".to_string(),
                "The server rejected the schema document.".to_string(),
            ),
            401 => (
                HttpErrorCategory::Auth,
                "Unauthorized".to_string(),
                "Authentication required. Set auth_token in settings.toml or STARGATE_AUTH_TOKEN.".to_string(),
            ),
            403 => (
                HttpErrorCategory::Auth,
                "Forbidden".to_string(),
                "The auth token is not allowed to change this schema.".to_string(),
            ),
            404 => (
                HttpErrorCategory::Client,
                "Not Found".to_string(),
                "No schema endpoint at this URL. Check the server host and port.".to_string(),
            ),
            405 => (
                HttpErrorCategory::Client,
                "Method Not Allowed".to_string(),
                "The server does not accept schema uploads at this URL.".to_string(),
            ),
            413 => (
                HttpErrorCategory::Client,
                "Payload Too Large".to_string(),
                "The schema document exceeds the server's size limit.".to_string(),
            ),
            422 => (
                HttpErrorCategory::Client,
                "Unprocessable Entity".to_string(),
                "The schema document failed validation.".to_string(),
            ),
            429 => (
                HttpErrorCategory::RateLimit,
                "Too Many Requests".to_string(),
                "Rate limited. Wait a moment and run the command again.".to_string(),
            ),
            500 => (
                HttpErrorCategory::Server,
                "Internal Server Error".to_string(),
                "Server-side issue. Check the server logs.".to_string(),
            ),
            502 => (
                HttpErrorCategory::Server,
                "Bad Gateway".to_string(),
                "Server connection issue. Retry may succeed.".to_string(),
            ),
            503 => (
                HttpErrorCategory::Server,
                "Service Unavailable".to_string(),
                "Server temporarily unavailable. It may still be starting up.".to_string(),
            ),
            504 => (
                HttpErrorCategory::Server,
                "Gateway Timeout".to_string(),
                "Server response timeout. Retry may succeed.".to_string(),
            ),
            // Generic fallbacks
            _ if (400..500).contains(&status) => (
                HttpErrorCategory::Client,
                format!("Client Error ({})", status),
                "Check the server URL and the schema document.".to_string(),
            ),
            _ if status >= 500 => (
                HttpErrorCategory::Server,
                format!("Server Error ({})", status),
                "Server-side issue. Retry may help.".to_string(),
            ),
            _ => (
                HttpErrorCategory::Client,
                format!("HTTP Error ({})", status),
                "Unexpected response. Run with --verbose for details.".to_string(),
            ),
        };

        Self {
            status_code: Some(status),
            category,
            description,
            suggestion,
        }
    }

    /// Create for network errors (no status code)
    pub fn network_error(message: &str) -> Self {
        Self {
            status_code: None,
            category: HttpErrorCategory::Network,
            description: "Network Error".to_string(),
            suggestion: format!(
                "Connection failed: {}. Check that the server is running and reachable.",
                message
            ),
        }
    }

    /// Format for display
    pub fn format(&self) -> String {
        if let Some(code) = self.status_code {
            format!("HTTP {} - {}", code, self.description)
        } else {
            self.description.clone()
        }
    }

    /// True when the server judged the document itself, rather than the request
    pub fn is_schema_rejection(&self) -> bool {
        matches!(self.status_code, Some(400) | Some(422))
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Servers answer with either a JSON error object or plain text. JSON objects are
/// searched for `description`, then `message`, then an `errors` list whose entries
/// are strings or objects with a `message` field.
pub fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => return Some(trimmed.to_string()),
    };

    let object = value.as_object()?;

    for key in ["description", "message"] {
        if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }

    let errors = object.get("errors")?.as_array()?;
    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|entry| {
            entry
                .as_str()
                .or_else(|| entry.get("message").and_then(|m| m.as_str()))
        })
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("\n"))
    }
}
