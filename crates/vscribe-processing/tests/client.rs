//! Processing client integration tests against a mock service.

use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vscribe_processing::{ProcessRequest, ProcessingError, ProcessorClient, ProcessorConfig};

fn client_for(server: &MockServer) -> ProcessorClient {
    ProcessorClient::new(ProcessorConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn request() -> ProcessRequest {
    ProcessRequest {
        video_path: "https://storage.googleapis.com/viddyscribe/clip.mp4".to_string(),
        add_bg_music: true,
    }
}

#[tokio::test]
async fn test_process_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process_video"))
        .and(body_json(serde_json::json!({
            "video_path": "https://storage.googleapis.com/viddyscribe/clip.mp4",
            "add_bg_music": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "completed",
            "output_url": "https://storage.googleapis.com/viddyscribe/clip_output.mp4",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = client_for(&server).process(&request()).await.unwrap();
    assert_eq!(
        output.output_url,
        "https://storage.googleapis.com/viddyscribe/clip_output.mp4"
    );
}

#[tokio::test]
async fn test_process_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process_video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "message": "audio track missing",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).process(&request()).await.unwrap_err();
    assert!(matches!(err, ProcessingError::Failed(msg) if msg == "audio track missing"));
}

#[tokio::test]
async fn test_process_malformed_descriptor() {
    let server = MockServer::start().await;

    // Descriptor without a status field is not a recognized shape
    Mock::given(method("POST"))
        .and(path("/process_video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "done",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).process(&request()).await.unwrap_err();
    assert!(matches!(err, ProcessingError::InvalidDescriptor(_)));
}

#[tokio::test]
async fn test_process_success_without_output_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process_video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "completed",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).process(&request()).await.unwrap_err();
    assert!(matches!(err, ProcessingError::InvalidDescriptor(_)));
}

#[tokio::test]
async fn test_process_http_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process_video"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).process(&request()).await.unwrap_err();
    assert!(matches!(err, ProcessingError::RequestFailed(_)));
}
