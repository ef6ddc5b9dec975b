use std::path::{Path, PathBuf};
use std::process::Output;
use stargate_cli::app::config::ServerSettings;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sample schema document used across tests
pub const TODO_SCHEMA: &str = r#"
Todo {
  fields {
    id: uuid
    title: text
    done: boolean
  }
  keys.partition: [id]
}
"#;

/// Setup a mock schema server answering `POST /v1/schema/<action>?name=<name>`
/// Returns (MockServer, base_url)
pub async fn setup_schema_server(
    action: &str,
    name: &str,
    response: ResponseTemplate,
) -> (MockServer, String) {
    let server = MockServer::start().await;
    let uri = server.uri();

    Mock::given(method("POST"))
        .and(path(format!("/v1/schema/{}", action)))
        .and(query_param("name", name))
        .respond_with(response)
        .mount(&server)
        .await;

    (server, uri)
}

/// Write a schema document into `dir` and return its path
pub fn write_schema(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Server settings pointing at `host` with short timeouts
#[allow(dead_code)]
pub fn test_settings(host: &str) -> ServerSettings {
    ServerSettings {
        default_host: host.to_string(),
        timeout: 5,
        connect_timeout: 2,
        ..ServerSettings::default()
    }
}

/// A localhost URL nothing is listening on
#[allow(dead_code)]
pub fn unreachable_host() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Run the stargate binary with an isolated config directory
#[allow(dead_code)]
pub async fn run_stargate(config_dir: &Path, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_stargate"))
        .args(args)
        .env("STARGATE_CONFIG_DIR", config_dir)
        .env_remove("STARGATE_HOST")
        .env_remove("STARGATE_AUTH_TOKEN")
        .env_remove("STARGATE_LOG")
        .output()
        .await
        .unwrap()
}
