use reqwest::header::CONTENT_TYPE;
use std::path::Path;
use std::time::Duration;
use url::Url;

use super::document::SchemaDocument;
use super::error::ApplyError;
use super::http_errors::{HttpErrorInfo, server_message};
use super::{Action, Apply};
use crate::app::config::ServerSettings;

/// Header carrying the auth token
pub const AUTH_TOKEN_HEADER: &str = "X-Cassandra-Token";

const DOCUMENT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Parse a server host, accepting only http and https URLs
pub fn parse_host(host: &str) -> Result<Url, String> {
    let url = Url::parse(host).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!(
            "unsupported scheme '{}', expected http or https",
            other
        )),
    }
}

/// Build `<base>/v1/schema/<action>?name=<name>`, keeping any path prefix on `base`
pub fn endpoint(base: &Url, action: Action, name: &str) -> Result<Url, ApplyError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| ApplyError::InvalidHost {
            host: base.to_string(),
            reason: "URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(["v1", "schema", action.as_str()]);

    url.query_pairs_mut().append_pair("name", name);

    Ok(url)
}

/// [`Apply`] implementation that posts schema documents to a server over HTTP
pub struct HttpApplier {
    client: reqwest::Client,
    default_host: String,
    auth_token: Option<String>,
    timeout: u64,
}

impl HttpApplier {
    /// Create a new HTTP applier from server settings
    pub fn new(settings: &ServerSettings) -> Result<Self, ApplyError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout))
            .connect_timeout(Duration::from_secs(settings.connect_timeout))
            .build()?;

        Ok(Self {
            client,
            default_host: settings.default_host.clone(),
            auth_token: settings.auth_token.clone(),
            timeout: settings.timeout,
        })
    }

    /// The host a request goes to: `url` itself, or the default when it is empty
    pub fn resolve_host<'a>(&'a self, url: &'a str) -> &'a str {
        if url.is_empty() {
            &self.default_host
        } else {
            url
        }
    }

    fn send_error(&self, err: reqwest::Error, host: &str) -> ApplyError {
        if err.is_timeout() {
            ApplyError::Timeout {
                host: host.to_string(),
                seconds: self.timeout,
            }
        } else {
            ApplyError::Network {
                info: HttpErrorInfo::network_error(&err.to_string()),
            }
        }
    }
}

impl Apply for HttpApplier {
    async fn apply(&self, action: Action, path: &Path, url: &str) -> Result<(), ApplyError> {
        let host = self.resolve_host(url);
        let base = parse_host(host).map_err(|reason| ApplyError::InvalidHost {
            host: host.to_string(),
            reason,
        })?;

        let document = SchemaDocument::load(path).await?;
        let target = endpoint(&base, action, &document.name)?;

        tracing::info!(
            "Sending {} request for schema '{}' to {}",
            action,
            document.name,
            target
        );

        let mut request = self
            .client
            .post(target)
            .header(CONTENT_TYPE, DOCUMENT_CONTENT_TYPE)
            .body(document.contents);

        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.send_error(e, host))?;

        let status = response.status();
        tracing::debug!(
            "Server answered {} for {} of '{}'",
            status,
            action,
            document.name
        );

        if status.is_success() {
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(self.send_error(e, host)),
            Err(e) => {
                tracing::debug!("Failed to read error response body: {}", e);
                String::new()
            }
        };
        tracing::trace!("Error response body: {}", body);

        Err(ApplyError::from_response(status.as_u16(), server_message(&body)))
    }
}
