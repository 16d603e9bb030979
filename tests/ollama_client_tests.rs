use std::sync::Arc;

use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use symptom_referral_server::config::AppConfig;
use symptom_referral_server::core::error::AppError;
use symptom_referral_server::features::ollama::{ChatBackend, OllamaClient};

fn config_for(server: &MockServer) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        port: 0,
        ollama_base_url: server.base_url(),
        model: "deepseek-r1:1.5b".to_string(),
        disable_proxy: true,
    })
}

#[tokio::test]
async fn complete_posts_single_turn_chat_request() {
    let server = MockServer::start_async().await;

    let chat_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat").json_body(json!({
                "model": "deepseek-r1:1.5b",
                "messages": [{"role": "user", "content": "i have a headache"}],
                "stream": false
            }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "message": {
                        "role": "assistant",
                        "content": "<think>triage</think>See a general physician."
                    }
                }));
        })
        .await;

    let client = OllamaClient::new(config_for(&server)).expect("client builds");
    let content = client
        .complete("i have a headache")
        .await
        .expect("completion succeeds");

    chat_mock.assert_async().await;
    // Raw content comes back untouched; sanitization belongs to the service.
    assert_eq!(content, "<think>triage</think>See a general physician.");
}

#[tokio::test]
async fn backend_error_status_maps_to_model_unavailable() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat");
            then.status(500).body("model load failed");
        })
        .await;

    let client = OllamaClient::new(config_for(&server)).expect("client builds");
    let error = client
        .complete("dizzy spells")
        .await
        .expect_err("error status should fail");

    assert!(matches!(error, AppError::ModelUnavailable(_)));
}

#[tokio::test]
async fn undecodable_body_maps_to_model_unavailable() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        })
        .await;

    let client = OllamaClient::new(config_for(&server)).expect("client builds");
    let error = client
        .complete("blurred vision")
        .await
        .expect_err("bad body should fail");

    assert!(matches!(error, AppError::ModelUnavailable(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_model_unavailable() {
    // Bind a listener to reserve a port, then drop it so nothing answers.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let config = Arc::new(AppConfig {
        port: 0,
        ollama_base_url: format!("http://127.0.0.1:{port}"),
        model: "deepseek-r1:1.5b".to_string(),
        disable_proxy: true,
    });

    let client = OllamaClient::new(config).expect("client builds");
    let error = client
        .complete("numb fingers")
        .await
        .expect_err("unreachable backend should fail");

    assert!(matches!(error, AppError::ModelUnavailable(_)));
}
