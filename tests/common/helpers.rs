use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use axum::body::Body;
use axum::routing::get;
use axum::Router;
use czds::{ClientBuilder, CzdsClient, Engine};
use czds::{Credentials, Endpoints, HttpClientConfig, ProgressDisplay, StyleOptions};
use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_USERNAME: &str = "zone-user@example.com";
pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const TEST_TOKEN: &str = "tok-1";
pub const AUTH_PATH: &str = "/api/authenticate/";
pub const LINKS_PATH: &str = "/czds/downloads/links";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

// === Mock CZDS Helpers ===

/// Full URL of the zone file `name` on the mock server.
pub fn zone_url(server: &MockServer, name: &str) -> String {
    format!("{}/czds/downloads/{}.zone", server.uri(), name)
}

/// Path of the zone file `name` on the mock server.
pub fn zone_path(name: &str) -> String {
    format!("/czds/downloads/{}.zone", name)
}

/// Authentication mock accepting the test credentials and returning `token`.
pub fn auth_mock(token: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": TEST_USERNAME,
            "password": TEST_PASSWORD,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": token,
            "message": "Authentication Successful",
        })))
}

/// Link listing mock answering with `links` for requests carrying `token`.
pub fn links_mock(token: &str, links: &[String]) -> Mock {
    Mock::given(method("GET"))
        .and(path(LINKS_PATH))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(links))
}

/// Zone file mock answering with `body`.
pub fn zone_mock(name: &str, body: &[u8]) -> Mock {
    Mock::given(method("GET"))
        .and(path(zone_path(name)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
}

/// Mounts authentication for [`TEST_TOKEN`] and the link listing.
pub async fn mount_catalog(server: &MockServer, links: &[String]) {
    auth_mock(TEST_TOKEN).mount(server).await;
    links_mock(TEST_TOKEN, links).mount(server).await;
}

// === Client Helpers ===

/// Creates an engine talking to `server` with hidden progress bars.
pub fn create_test_engine(server: &MockServer) -> Engine {
    Engine::new(
        Credentials::new(TEST_USERNAME, TEST_PASSWORD),
        Endpoints::new(&server.uri(), &server.uri()).expect("Invalid mock endpoints"),
        HttpClientConfig::default(),
        ProgressDisplay::new(StyleOptions::hidden()),
    )
    .expect("Failed to create engine")
}

/// Creates a builder talking to `server` and downloading into `dir`.
pub fn create_test_client_builder(server: &MockServer, dir: &Path) -> ClientBuilder {
    ClientBuilder::new(TEST_USERNAME, TEST_PASSWORD)
        .hidden()
        .auth_endpoint(server.uri())
        .api_endpoint(server.uri())
        .download_dir(dir.to_path_buf())
}

/// Creates a client talking to `server` and downloading into `dir`.
pub fn create_test_client(server: &MockServer, dir: &Path) -> CzdsClient {
    create_test_client_builder(server, dir)
        .build()
        .expect("Failed to create client")
}

// === Streaming Server Helpers ===

/// Serves `chunks` as a chunked body without Content-Length on any
/// `/czds/downloads/:name` path.
pub async fn start_streaming_server(chunks: Vec<Vec<u8>>) -> (SocketAddr, JoinHandle<()>) {
    let app = Router::new().route(
        "/czds/downloads/:name",
        get(move || {
            let chunks = chunks.clone();
            async move {
                Body::from_stream(futures::stream::iter(
                    chunks.into_iter().map(Ok::<_, std::io::Error>),
                ))
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}
