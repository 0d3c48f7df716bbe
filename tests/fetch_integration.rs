//! Fetcher tests against a mock HTTP server.

mod common;

use std::path::{Path, PathBuf};

use image_ingest::download::download_item;
use image_ingest::{FetchConfig, FetchFailure, ImageFetcher, ItemOutcome, WorkItem};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{fast_config, fast_fetcher};

fn item(server: &MockServer, url_path: &str, out_dir: &Path) -> WorkItem {
    WorkItem::new(
        &format!("{}{}", server.uri(), url_path),
        None,
        None,
        out_dir,
    )
}

fn image_response(content_type: &str, body: &[u8]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_vec(), content_type)
}

#[tokio::test]
async fn test_fetch_sends_browser_headers_and_referer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a.jpg"))
        .and(header("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"))
        .and(header("referer", format!("{}/", server.uri()).as_str()))
        .respond_with(image_response("image/jpeg", b"jpeg"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let fetched = fast_fetcher()
        .fetch(&item(&server, "/a.jpg", dir.path()))
        .await
        .expect("fetch should succeed");

    assert_eq!(fetched.bytes, b"jpeg");
    assert_eq!(fetched.output_path, dir.path().join("a.jpg"));
}

#[tokio::test]
async fn test_fetch_uses_user_agent_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a.png"))
        .and(header("user-agent", "dataset-bot/2.0"))
        .respond_with(image_response("image/png", b"png"))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetchConfig {
        user_agent: "dataset-bot/2.0".into(),
        ..fast_config()
    };
    let dir = TempDir::new().unwrap();
    let fetcher = ImageFetcher::new(&config).unwrap();

    assert!(fetcher
        .fetch(&item(&server, "/a.png", dir.path()))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_head_probe_is_sent_and_its_failure_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/a.gif"))
        .respond_with(ResponseTemplate::new(405))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a.gif"))
        .respond_with(image_response("image/gif", b"gif"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let fetched = fast_fetcher()
        .fetch(&item(&server, "/a.gif", dir.path()))
        .await
        .unwrap();
    assert_eq!(fetched.content_type, "image/gif");
}

#[tokio::test]
async fn test_retryable_status_is_retried_until_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky.jpg"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky.jpg"))
        .respond_with(image_response("image/jpeg", b"finally"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let fetched = fast_fetcher()
        .fetch(&item(&server, "/flaky.jpg", dir.path()))
        .await
        .unwrap();
    assert_eq!(fetched.bytes, b"finally");
}

#[tokio::test]
async fn test_exhausted_retries_report_last_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/busy.jpg"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let config = FetchConfig {
        max_attempts: 3,
        ..fast_config()
    };
    let dir = TempDir::new().unwrap();
    let result = ImageFetcher::new(&config)
        .unwrap()
        .fetch(&item(&server, "/busy.jpg", dir.path()))
        .await;

    assert!(matches!(result, Err(FetchFailure::Status(429))));
}

#[tokio::test]
async fn test_non_retryable_status_fails_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let result = fast_fetcher()
        .fetch(&item(&server, "/gone.jpg", dir.path()))
        .await;

    assert!(matches!(result, Err(FetchFailure::Status(404))));
}

#[tokio::test]
async fn test_html_response_is_rejected_and_not_written() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page.jpg"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                "<html>\n<body>Access denied</body></html>",
                "text/html; charset=utf-8",
            ),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let work_item = item(&server, "/page.jpg", dir.path());
    let outcome = download_item(&fast_fetcher(), &work_item).await;

    match outcome {
        ItemOutcome::Failed {
            failure:
                FetchFailure::NotAnImage {
                    content_type,
                    snippet,
                },
        } => {
            assert_eq!(content_type, "text/html; charset=utf-8");
            assert!(snippet.starts_with("<html> <body>Access denied"));
        }
        other => panic!("expected NotAnImage, got {:?}", other),
    }
    assert!(!work_item.output_path.exists());
}

#[tokio::test]
async fn test_extensionless_target_gets_extension_from_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photo/42"))
        .respond_with(image_response("image/png; charset=binary", b"png bytes"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let work_item = item(&server, "/photo/42", dir.path());
    let outcome = download_item(&fast_fetcher(), &work_item).await;

    let expected = work_item.output_path.with_extension("png");
    match outcome {
        ItemOutcome::Written { path, bytes } => {
            assert_eq!(path, expected);
            assert_eq!(bytes, 9);
        }
        other => panic!("expected Written, got {:?}", other),
    }
    assert_eq!(std::fs::read(&expected).unwrap(), b"png bytes");
}

#[tokio::test]
async fn test_unknown_image_type_falls_back_to_img() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/icon"))
        .respond_with(image_response("image/x-icon", b"ico"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let work_item = WorkItem::new(
        &format!("{}/icon", server.uri()),
        Some(dir.path().join("favicon").to_str().unwrap()),
        None,
        Path::new("unused"),
    );

    let outcome = download_item(&fast_fetcher(), &work_item).await;
    assert!(outcome.is_ok());
    assert!(dir.path().join("favicon.img").exists());
}

#[tokio::test]
async fn test_second_download_is_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/same.webp"))
        .respond_with(image_response("image/webp", b"webp"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let fetcher = fast_fetcher();
    let work_item = item(&server, "/same.webp", dir.path());

    let first = download_item(&fetcher, &work_item).await;
    let second = download_item(&fetcher, &work_item).await;

    assert!(matches!(first, ItemOutcome::Written { .. }));
    match second {
        ItemOutcome::Unchanged { path } => assert_eq!(path, dir.path().join("same.webp")),
        other => panic!("expected Unchanged, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_failure() {
    let config = FetchConfig {
        max_attempts: 2,
        ..fast_config()
    };
    let fetcher = ImageFetcher::new(&config).unwrap();
    let work_item = WorkItem::new(
        "http://127.0.0.1:9/nothing.jpg",
        None,
        None,
        &PathBuf::from("unused"),
    );

    let outcome = download_item(&fetcher, &work_item).await;
    assert!(matches!(
        outcome,
        ItemOutcome::Failed {
            failure: FetchFailure::Transport(_)
        }
    ));
}
