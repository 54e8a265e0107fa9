use std::io::Write;
use std::time::Duration;

use crewdeck_client::{BackendClient, ClientError, FeedSource, SubmitError};
use crewdeck_core::build_payload;
use crewdeck_core::domain::client::ClientProfile;
use crewdeck_core::domain::job::{JobKind, SubmissionPayload};
use crewdeck_core::domain::settings::SettingsRegistry;
use crewdeck_core::domain::update::TaskId;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> SubmissionPayload {
    build_payload(
        JobKind::Autoblogging,
        "draft text",
        Some(&ClientProfile::new("c1")),
        SettingsRegistry::new().settings_for(JobKind::Autoblogging),
        None,
    )
}

#[tokio::test]
async fn submit_returns_task_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute-crew"))
        .and(body_partial_json(json!({
            "crew": "autoblogging",
            "data": { "content": "draft text", "client_id": "c1", "special_instructions": "" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "task_id": "t100" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let task_id = client.submit(payload()).await.expect("submit ok");

    assert_eq!(task_id, TaskId::new("t100"));
}

#[tokio::test]
async fn submit_accepts_numeric_task_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute-crew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "task_id": 100 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let task_id = client.submit(payload()).await.expect("submit ok");

    assert_eq!(task_id, TaskId::new("100"));
    assert!(task_id.matches(&json!(100)));
}

#[tokio::test]
async fn submit_sends_authoring_settings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute-crew"))
        .and(body_partial_json(json!({
            "data": { "settings": { "release_urgency": "normal", "target_word_count": "500" } }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "task_id": "t7" })))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    assert_eq!(client.submit(payload()).await.unwrap().as_str(), "t7");
}

#[tokio::test]
async fn submit_rejection_carries_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute-crew"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "client required" })),
        )
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client.submit(payload()).await.unwrap_err();

    match err {
        SubmitError::Rejected { status, reason } => {
            assert_eq!(status, 400);
            assert_eq!(reason, "client required");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_rejection_without_body_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute-crew"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client.submit(payload()).await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Rejected { status: 500, ref reason } if reason == "Failed to execute crew"
    ));
}

#[tokio::test]
async fn submit_with_malformed_success_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/execute-crew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "final_result": "ok" })))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client.submit(payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn submit_to_unreachable_backend_is_transport_error() {
    // Non-pooled server so dropping it actually closes the listener
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = BackendClient::with_timeout(uri, Duration::from_secs(2)).unwrap();
    let err = client.submit(payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn fetch_feed_returns_all_tasks_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent-output"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "task_id": "t1", "type": "progress" },
                { "task_id": "t2", "type": "success" },
                { "type": "progress", "message": { "task_id": "t1" } }
            ]
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let source: &dyn FeedSource = &client;
    let feed = source.fetch_feed().await.unwrap();

    assert_eq!(feed.len(), 3);
    assert!(feed[2].belongs_to(&TaskId::new("t1")));
}

#[tokio::test]
async fn fetch_feed_unsuccessful_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent-output"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    assert!(client.fetch_feed().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_feed_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent-output"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client.fetch_feed().await.unwrap_err();

    assert!(err.is_server_error());
}

#[tokio::test]
async fn fetch_feed_garbage_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent-output"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client.fetch_feed().await.unwrap_err();

    assert!(matches!(err, ClientError::ParseError(_)));
}

#[tokio::test]
async fn list_files_returns_descriptors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": ["brief.pdf", { "name": "notes.txt", "size": 10 }]
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let files = client.list_files().await.unwrap();

    let names: Vec<_> = files.iter().filter_map(|f| f.name()).collect();
    assert_eq!(names, vec!["brief.pdf", "notes.txt"]);
}

#[tokio::test]
async fn upload_file_posts_multipart() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "press kit")?;

    let client = BackendClient::new(server.uri());
    client.upload_file(file.path()).await?;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("press kit"));
    Ok(())
}

#[tokio::test]
async fn upload_rejection_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(413).set_body_string("too large"))
        .mount(&server)
        .await;

    let file = tempfile::NamedTempFile::new().unwrap();
    let client = BackendClient::new(server.uri());
    let err = client.upload_file(file.path()).await.unwrap_err();

    assert!(err.is_client_error());
}

#[tokio::test]
async fn upload_missing_file_is_io_error() {
    let client = BackendClient::new("http://127.0.0.1:9");
    let err = client
        .upload_file(std::path::Path::new("/definitely/not/here.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Io(_)));
}
