//! Tests for [`openai_client::OpenAIClient`] against a mockito server speaking the
//! OpenAI-compatible wire format.

use openai_client::{
    ChatCompletionRequestUserMessageArgs, FinishReason, OpenAIClient, OpenAIError,
};

fn user_message(text: &str) -> Vec<openai_client::ChatCompletionRequestMessage> {
    vec![ChatCompletionRequestUserMessageArgs::default()
        .content(text)
        .build()
        .unwrap()
        .into()]
}

fn completion_body(content: &str, finish_reason: &str) -> String {
    format!(
        r#"{{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1706529600,
            "model": "gemini-2.0-flash",
            "choices": [{{
                "index": 0,
                "message": {{"role": "assistant", "content": "{}"}},
                "finish_reason": "{}"
            }}],
            "usage": {{"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}}
        }}"#,
        content, finish_reason
    )
}

#[tokio::test]
async fn chat_completion_returns_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Define porosity.", "stop"))
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key".to_string(), server.url());
    let completion = client
        .chat_completion("gemini-2.0-flash", user_message("Ask me something"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(completion.content.as_deref(), Some("Define porosity."));
    assert_eq!(completion.finish_reason, Some(FinishReason::Stop));
}

#[tokio::test]
async fn chat_completion_reports_content_filter_finish_reason() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("", "content_filter"))
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key".to_string(), format!("{}/", server.url()));
    let completion = client
        .chat_completion("gemini-2.0-flash", user_message("blocked"))
        .await
        .unwrap();

    assert_eq!(completion.finish_reason, Some(FinishReason::ContentFilter));
}

#[tokio::test]
async fn chat_completion_surfaces_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"message": "API key not valid", "type": "invalid_request_error", "param": null, "code": null}}"#,
        )
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("bad-key".to_string(), server.url());
    let err = client
        .chat_completion("gemini-2.0-flash", user_message("hi"))
        .await
        .unwrap_err();

    match err {
        OpenAIError::ApiError(api) => assert_eq!(api.message, "API key not valid"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn list_models_returns_ids() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "object": "list",
                "data": [
                    {"id": "gemini-2.0-flash", "object": "model", "created": 0, "owned_by": "google"},
                    {"id": "gemini-1.5-pro", "object": "model", "created": 0, "owned_by": "google"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key".to_string(), server.url());
    let models = client.list_models().await.unwrap();

    assert_eq!(models, vec!["gemini-2.0-flash", "gemini-1.5-pro"]);
}
