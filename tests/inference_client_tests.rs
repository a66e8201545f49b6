use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;
use summarizer::clients::InferenceClient;
use summarizer::clients::inference_client::REQUEST_TIMEOUT;
use summarizer::core::config::AppConfig;
use summarizer::errors::SummarizerError;

const MODEL_PATH: &str = "/models/mosaicml/mpt-30b";

fn config_for(server_url: &str, token: Option<&str>) -> AppConfig {
    let base = format!("{server_url}/models");
    let token = token.map(str::to_string);
    AppConfig::from_lookup(move |name| match name {
        "HF_API_BASE_URL" => Some(base.clone()),
        "HF_API_TOKEN" => token.clone(),
        _ => None,
    })
}

#[tokio::test]
async fn test_summarize_sends_expected_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .match_header("authorization", "Bearer fake_hf_token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "inputs": "Large transcription text",
            "parameters": {
                "max_new_tokens": 5000,
                "do_sample": true,
                "temperature": 0.7
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"generated_text": "This is the mocked summary"}]"#)
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server.url(), Some("fake_hf_token"));
    let client = InferenceClient::new(reqwest::Client::new(), &config).unwrap();
    let summary = client.summarize("Large transcription text").await.unwrap();

    assert_eq!(summary, "This is the mocked summary");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_token_sends_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server.url(), None);
    let client = InferenceClient::new(reqwest::Client::new(), &config).unwrap();
    let err = client.summarize("text").await.unwrap_err();

    assert!(matches!(err, SummarizerError::ConfigError(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_reported_with_api_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MODEL_PATH)
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Model mosaicml/mpt-30b is currently loading", "estimated_time": 120.0}"#)
        .create_async()
        .await;

    let config = config_for(&server.url(), Some("fake_hf_token"));
    let client = InferenceClient::new(reqwest::Client::new(), &config).unwrap();

    match client.summarize("text").await {
        Err(SummarizerError::InferenceError(msg)) => {
            assert!(msg.contains("503"), "unexpected message: {msg}");
            assert!(msg.contains("currently loading"), "unexpected message: {msg}");
        }
        other => panic!("expected InferenceError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_response_without_generated_text_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"summary_text": "wrong task"}]"#)
        .create_async()
        .await;

    let config = config_for(&server.url(), Some("fake_hf_token"));
    let client = InferenceClient::new(reqwest::Client::new(), &config).unwrap();
    let err = client.summarize("text").await.unwrap_err();

    assert!(matches!(err, SummarizerError::InferenceError(_)));
}

#[tokio::test]
async fn test_transport_failure_is_http_error() {
    // Nothing listens on port 1
    let config = config_for("http://127.0.0.1:1", Some("fake_hf_token"));
    let client = InferenceClient::new(reqwest::Client::new(), &config).unwrap();
    let err = client.summarize("text").await.unwrap_err();

    assert!(matches!(err, SummarizerError::HttpError(_)));
}

#[test]
fn test_invalid_endpoint_is_config_error() {
    let config = AppConfig::from_lookup(|name| match name {
        "HF_API_BASE_URL" => Some("not a url".to_string()),
        _ => None,
    });

    let result = InferenceClient::new(reqwest::Client::new(), &config);
    assert!(matches!(result, Err(SummarizerError::ConfigError(_))));
}

#[test]
fn test_build_request_uses_fixed_parameters() {
    let config = AppConfig::from_lookup(|_| None);
    let client = InferenceClient::new(reqwest::Client::new(), &config).unwrap();
    let body = serde_json::to_value(client.build_request("hello")).unwrap();

    assert_eq!(body["inputs"], "hello");
    assert_eq!(body["parameters"]["max_new_tokens"], 5000);
    assert_eq!(body["parameters"]["do_sample"], true);
    assert_eq!(client.timeout(), Duration::from_secs(300));
    assert_eq!(
        client.endpoint().as_str(),
        "https://api-inference.huggingface.co/models/mosaicml/mpt-30b"
    );
}

#[test]
fn test_request_timeout_is_five_minutes() {
    assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(300));
}

#[tokio::test]
async fn test_stalled_endpoint_times_out_as_http_error() {
    // Accepts connections but never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stalled = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = config_for(&format!("http://{addr}"), Some("fake_hf_token"));
    let client = InferenceClient::new(reqwest::Client::new(), &config)
        .unwrap()
        .with_timeout(Duration::from_millis(200));

    let result = tokio::time::timeout(Duration::from_secs(10), client.summarize("text"))
        .await
        .expect("client timeout should fire before the test guard");

    match result {
        Err(SummarizerError::HttpError(msg)) => {
            assert!(msg.contains("Inference API request failed"), "unexpected message: {msg}");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
    stalled.abort();
}
