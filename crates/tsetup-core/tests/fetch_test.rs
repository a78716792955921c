//! HTTP-level tests for the fetch stage using wiremock

use std::fs;
use std::io::{Cursor, Write};

use tempfile::TempDir;
use tsetup_core::error::SetupError;
use tsetup_core::fetch::fetch;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::FileOptions;
use zip::ZipWriter;

/// Build an in-memory zip bundle with the given entries.
fn zip_bundle(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = ZipWriter::new(&mut cursor);
        for (name, contents) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

#[tokio::test]
async fn test_fetch_extracts_entry_script() {
    let server = MockServer::start().await;
    let bundle = zip_bundle(&[
        ("setup.js", "console.log('hello');"),
        ("config/readme.txt", "bundled config"),
    ]);
    Mock::given(method("GET"))
        .and(path("/setup.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bundle))
        .mount(&server)
        .await;

    let dest = TempDir::new().unwrap();
    let script = fetch(&format!("{}/setup.zip", server.uri()), dest.path())
        .await
        .unwrap();

    assert_eq!(script, dest.path().join("setup.js"));
    assert_eq!(
        fs::read_to_string(&script).unwrap(),
        "console.log('hello');"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("config/readme.txt")).unwrap(),
        "bundled config"
    );
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/setup.zip"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dest = TempDir::new().unwrap();
    let err = fetch(&format!("{}/setup.zip", server.uri()), dest.path())
        .await
        .unwrap_err();

    match err {
        SetupError::Network { message, .. } => assert!(message.contains("404")),
        other => panic!("unexpected error: {other}"),
    }

    // Extraction never ran
    assert!(!dest.path().join("setup.js").exists());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let dest = TempDir::new().unwrap();
    // .invalid never resolves, so this fails at DNS time
    let err = fetch("http://tsetup.invalid/setup.zip", dest.path())
        .await
        .unwrap_err();

    assert!(matches!(err, SetupError::Network { .. }));
}

#[tokio::test]
async fn test_malformed_archive_is_extraction_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/setup.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not a zip file".to_vec()))
        .mount(&server)
        .await;

    let dest = TempDir::new().unwrap();
    let err = fetch(&format!("{}/setup.zip", server.uri()), dest.path())
        .await
        .unwrap_err();

    assert!(matches!(err, SetupError::Extraction(_)));
}

#[tokio::test]
async fn test_bundle_without_entry_script_is_error() {
    let server = MockServer::start().await;
    let bundle = zip_bundle(&[("other.js", "console.log('nope');")]);
    Mock::given(method("GET"))
        .and(path("/setup.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bundle))
        .mount(&server)
        .await;

    let dest = TempDir::new().unwrap();
    let err = fetch(&format!("{}/setup.zip", server.uri()), dest.path())
        .await
        .unwrap_err();

    assert!(matches!(err, SetupError::EntryScriptMissing(_)));
}
