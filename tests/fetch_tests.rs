//! Mock HTTP tests for the image fetch client.
//!
//! These tests cover:
//! - Successful downloads
//! - HTTP status failures
//! - The download size cap
//! - Retry behavior for gateway errors
//! - The fetch-decode-render path end to end

use std::io::Cursor;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use asciigram::ascii::{render, RenderOptions};
use asciigram::decode::decode_image;
use asciigram::fetch::{FetchClient, FetchError, DEFAULT_MAX_BYTES};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

#[tokio::test]
async fn test_fetch_success_returns_body_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cat.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3, 4]))
        .mount(&server)
        .await;

    let client = FetchClient::new().unwrap();
    let bytes = client
        .fetch(&format!("{}/cat.png", server.uri()))
        .await
        .unwrap();
    assert_eq!(bytes, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_fetch_404_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = FetchClient::new().unwrap();
    let result = client.fetch(&format!("{}/missing.png", server.uri())).await;
    match result {
        Err(FetchError::Status { status }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other.map(|b| b.len())),
    }
}

#[tokio::test]
async fn test_fetch_rejects_body_over_cap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/huge.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 1024]))
        .mount(&server)
        .await;

    let client = FetchClient::with_limits(Duration::from_secs(5), 100, 0).unwrap();
    let result = client.fetch(&format!("{}/huge.png", server.uri())).await;
    assert!(matches!(result, Err(FetchError::TooLarge { limit: 100 })));
}

#[tokio::test]
async fn test_fetch_gateway_error_exhausts_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky.png"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // Zero retries: the transient failure surfaces immediately as a
    // network error with the attempt count.
    let client = FetchClient::with_limits(Duration::from_secs(5), DEFAULT_MAX_BYTES, 0).unwrap();
    let result = client.fetch(&format!("{}/flaky.png", server.uri())).await;
    match result {
        Err(FetchError::Network { attempts, .. }) => assert_eq!(attempts, 1),
        other => panic!("expected network error, got {:?}", other.map(|b| b.len())),
    }
}

#[tokio::test]
async fn test_fetch_recovers_after_transient_503() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recovering.png"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recovering.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![9, 9, 9]))
        .mount(&server)
        .await;

    let client = FetchClient::with_limits(Duration::from_secs(5), DEFAULT_MAX_BYTES, 2).unwrap();
    let bytes = client
        .fetch(&format!("{}/recovering.png", server.uri()))
        .await
        .unwrap();
    assert_eq!(bytes, vec![9, 9, 9]);
}

#[tokio::test]
async fn test_fetch_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.png"))
        .respond_with(ResponseTemplate::new(410))
        .expect(1)
        .mount(&server)
        .await;

    let client = FetchClient::with_limits(Duration::from_secs(5), DEFAULT_MAX_BYTES, 3).unwrap();
    let result = client.fetch(&format!("{}/gone.png", server.uri())).await;
    assert!(matches!(result, Err(FetchError::Status { .. })));
    // The mock's expect(1) verifies on drop that no retry happened.
}

#[tokio::test]
async fn test_fetch_decode_render_end_to_end() {
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(60, 30, Rgb([255, 255, 255])))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("png encoding");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/white.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png))
        .mount(&server)
        .await;

    let client = FetchClient::new().unwrap();
    let bytes = client
        .fetch(&format!("{}/white.png", server.uri()))
        .await
        .unwrap();

    let image = decode_image(&bytes).unwrap();
    let options = RenderOptions {
        max_cols: 10,
        ..Default::default()
    };
    let art = render(&image, &options).unwrap();
    assert_eq!((art.cols, art.rows), (10, 3));
    assert!(art.chars.iter().all(|&c| c == '@'));
}
