use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};
use std::time::Duration;
use uniquest_chat::config::Config;
use uniquest_chat::error::ChatError;
use uniquest_chat::message::{ChatRequest, Sender};
use uniquest_chat::services::backend::{ChatBackend, HttpBackend};
use uniquest_chat::services::networked::{CONNECTION_APOLOGY, NetworkedClient};

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn echo_router() -> Router {
    // Json extractor rejects bodies without a JSON content type.
    Router::new().route(
        "/chat",
        post(|Json(req): Json<ChatRequest>| async move {
            Json(json!({ "response": format!("**Top pick**: {}", req.message) }))
        }),
    )
}

#[tokio::test]
async fn test_chat_endpoint_success() {
    let url = spawn_backend(echo_router()).await;
    let backend = HttpBackend::new(&Config::new(url)).unwrap();

    let reply = backend.ask("X").await.unwrap();
    assert_eq!(reply, "**Top pick**: X");
}

#[tokio::test]
async fn test_client_renders_backend_reply() {
    let url = spawn_backend(echo_router()).await;
    let backend = HttpBackend::new(&Config::new(format!("{url}/"))).unwrap();
    let mut client = NetworkedClient::new(backend);

    let reply = client.send_message("X").await.unwrap();
    assert!(reply.content().contains("<strong>Top pick</strong>: X"));
    assert!(!reply.content().contains("**"));
}

#[tokio::test]
async fn test_server_error_status() {
    let app = Router::new().route(
        "/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred: boom" })),
            )
        }),
    );
    let url = spawn_backend(app).await;
    let backend = HttpBackend::new(&Config::new(url)).unwrap();

    let err = backend.ask("hello").await.unwrap_err();
    assert!(matches!(err, ChatError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR));

    let mut client = NetworkedClient::new(backend);
    let reply = client.send_message("hello").await.unwrap();
    assert_eq!(reply.content(), CONNECTION_APOLOGY);
    assert!(client.input().is_enabled());
}

#[tokio::test]
async fn test_error_field_with_ok_status() {
    let app = Router::new().route(
        "/chat",
        post(|| async { Json(json!({ "error": "No message provided" })) }),
    );
    let url = spawn_backend(app).await;
    let backend = HttpBackend::new(&Config::new(url)).unwrap();

    let err = backend.ask("hello").await.unwrap_err();
    assert!(matches!(err, ChatError::Backend(msg) if msg == "No message provided"));
}

#[tokio::test]
async fn test_unparseable_body() {
    let app = Router::new().route("/chat", post(|| async { "not json" }));
    let url = spawn_backend(app).await;
    let mut client = NetworkedClient::new(HttpBackend::new(&Config::new(url)).unwrap());

    let reply = client.send_message("hello").await.unwrap();
    assert_eq!(reply.content(), CONNECTION_APOLOGY);
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::new(format!("http://{addr}")).with_timeout(Duration::from_secs(5));
    let backend = HttpBackend::new(&config).unwrap();
    assert!(matches!(
        backend.ask("hello").await,
        Err(ChatError::Transport(_))
    ));

    let mut client = NetworkedClient::new(backend);
    let before = client.transcript().len();
    let reply = client.send_message("hello").await.unwrap();

    assert_eq!(reply.content(), CONNECTION_APOLOGY);
    assert_eq!(client.transcript().len(), before + 2);
    assert_eq!(client.transcript().last().map(|m| m.sender()), Some(Sender::Bot));
    assert!(client.input().is_enabled());
    assert!(!client.input().is_typing());
}

#[tokio::test]
async fn test_request_body_shape() {
    let app = Router::new().route(
        "/chat",
        post(|Json(body): Json<Value>| async move {
            let keys: Vec<String> = body.as_object().unwrap().keys().cloned().collect();
            Json(json!({ "response": keys.join(",") }))
        }),
    );
    let url = spawn_backend(app).await;
    let backend = HttpBackend::new(&Config::new(url)).unwrap();

    assert_eq!(backend.ask("hi").await.unwrap(), "message");
}
