// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for network module using wiremock.
//!
//! Tests the Downloader with HTTP mocking, covering:
//! - File downloads and partial file handling
//! - JSON lookups
//! - Error handling (HTTP errors, missing params, bad bodies)
//! - Interrupt support
//! - Custom headers

use modpack_installer::error::{InstallerError, NetworkError};
use modpack_installer::net::{Downloader, partial_path};
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn network_error(err: InstallerError) -> NetworkError {
    match err {
        InstallerError::Network(boxed) => *boxed,
        other => panic!("Expected InstallerError::Network, got {other:?}"),
    }
}

// =============================================================================
// download (file) tests
// =============================================================================

#[tokio::test]
async fn test_download_file_success() {
    let mock_server = MockServer::start().await;

    let body_content = "PK\u{3}\u{4} pretend this is a jar";
    Mock::given(method("GET"))
        .and(path("/files/4712/866/jei.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body_content))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("jei.jar");

    let url = format!("{}/files/4712/866/jei.jar", mock_server.uri());
    let downloader = Downloader::new().url(&url).file(&output_file).silent();
    let result = downloader.download().await;

    assert!(result.is_ok(), "Download failed: {:?}", result.err());
    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), body_content);
    assert!(
        !partial_path(&output_file).exists(),
        "partial file should be renamed into place"
    );
}

#[tokio::test]
async fn test_download_file_creates_parent_dirs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("nested content"))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("instance").join("mods").join("data.jar");
    assert!(!output_file.parent().unwrap().exists());

    let url = format!("{}/data.jar", mock_server.uri());
    let result = Downloader::new()
        .url(&url)
        .file(&output_file)
        .silent()
        .download()
        .await;

    assert!(result.is_ok(), "Download failed: {:?}", result.err());
    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), "nested content");
}

#[tokio::test]
async fn test_download_file_http_errors() {
    for status in [404, 500] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.jar"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let temp_dir = temp_dir();
        let output_file = temp_dir.path().join("missing.jar");

        let url = format!("{}/missing.jar", mock_server.uri());
        let err = Downloader::new()
            .url(&url)
            .file(&output_file)
            .silent()
            .download()
            .await
            .unwrap_err();

        match network_error(err) {
            NetworkError::HttpError {
                status: actual_status,
                ..
            } => assert_eq!(actual_status, status),
            other => panic!("Expected NetworkError::HttpError for {status}, got {other:?}"),
        }
        assert!(!output_file.exists());
        assert!(!partial_path(&output_file).exists());
    }
}

#[test]
fn test_partial_path() {
    let partial = partial_path(std::path::Path::new("/mods/a b.jar"));
    assert_eq!(partial, std::path::PathBuf::from("/mods/a b.jar.part"));
}

// =============================================================================
// fetch_json tests
// =============================================================================

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct Lookup {
    id: u64,
    name: String,
}

#[tokio::test]
async fn test_fetch_json_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"id": 7, "name": "lookup", "extra": true}"#),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/lookup", mock_server.uri());
    let lookup: Lookup = Downloader::new().url(&url).fetch_json().await.unwrap();

    assert_eq!(
        lookup,
        Lookup {
            id: 7,
            name: "lookup".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_json_unexpected_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/lookup", mock_server.uri());
    let err = Downloader::new()
        .url(&url)
        .fetch_json::<Lookup>()
        .await
        .unwrap_err();

    match network_error(err) {
        NetworkError::UnexpectedResponse { url: reported, .. } => assert_eq!(reported, url),
        other => panic!("Expected NetworkError::UnexpectedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_json_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let url = format!("{}/lookup", mock_server.uri());
    let err = Downloader::new()
        .url(&url)
        .fetch_json::<Lookup>()
        .await
        .unwrap_err();

    assert!(matches!(
        network_error(err),
        NetworkError::HttpError { status: 403, .. }
    ));
}

// =============================================================================
// Interrupt tests
// =============================================================================

#[tokio::test]
async fn test_download_interrupted() {
    let mock_server = MockServer::start().await;

    // Large body so at least one chunk is read
    let body_content = "x".repeat(1024 * 1024);
    Mock::given(method("GET"))
        .and(path("/large.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body_content))
        .mount(&mock_server)
        .await;

    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("large.jar");

    let url = format!("{}/large.jar", mock_server.uri());
    let downloader = Downloader::new().url(&url).file(&output_file).silent();
    downloader.interrupt_handle().store(true, Ordering::SeqCst);

    let err = downloader.download().await.unwrap_err();

    assert!(err.is_interrupted(), "expected interruption, got {err:?}");
    assert!(!output_file.exists(), "no file should appear at the destination");
    assert!(
        !partial_path(&output_file).exists(),
        "partial file should be cleaned up"
    );
}

#[tokio::test]
async fn test_shared_interrupt_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 1, "name": "x"}"#))
        .mount(&mock_server)
        .await;

    let flag = Arc::new(AtomicBool::new(true));
    let url = format!("{}/lookup", mock_server.uri());
    let err = Downloader::new()
        .url(&url)
        .with_interrupt(Arc::clone(&flag))
        .fetch_json::<Lookup>()
        .await
        .unwrap_err();

    assert!(err.is_interrupted());
}

// =============================================================================
// Custom headers tests
// =============================================================================

#[tokio::test]
async fn test_custom_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 2, "name": "ok"}"#))
        .mount(&mock_server)
        .await;

    let url = format!("{}/auth", mock_server.uri());
    let lookup: Lookup = Downloader::new()
        .url(&url)
        .header("x-api-key", "test-key")
        .fetch_json()
        .await
        .unwrap();

    assert_eq!(lookup.id, 2);
}

#[tokio::test]
async fn test_user_agent_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header(
            "User-Agent",
            format!("modpack-installer/{}", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 3, "name": "ua"}"#))
        .mount(&mock_server)
        .await;

    let url = format!("{}/ua", mock_server.uri());
    let result = Downloader::new().url(&url).fetch_json::<Lookup>().await;

    assert!(result.is_ok(), "Download failed: {:?}", result.err());
}

// =============================================================================
// Error handling tests
// =============================================================================

#[tokio::test]
async fn test_download_no_url_errors() {
    let temp_dir = temp_dir();
    let output_file = temp_dir.path().join("test.jar");
    let err = Downloader::new()
        .file(&output_file)
        .silent()
        .download()
        .await
        .unwrap_err();

    match network_error(err) {
        NetworkError::InvalidUrl(msg) => assert!(msg.contains("no URL provided")),
        other => panic!("Expected NetworkError::InvalidUrl for download, got {other:?}"),
    }

    let err = Downloader::new().fetch_json::<Lookup>().await.unwrap_err();
    assert!(matches!(network_error(err), NetworkError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_download_no_file_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("content"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/test.jar", mock_server.uri());
    let err = Downloader::new()
        .url(&url)
        .silent()
        .download()
        .await
        .unwrap_err();

    match network_error(err) {
        NetworkError::DownloadFailed { message, .. } => {
            assert!(message.contains("no output file specified"));
        }
        other => panic!("Expected NetworkError::DownloadFailed, got {other:?}"),
    }
}
