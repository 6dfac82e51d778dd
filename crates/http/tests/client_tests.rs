//! Integration tests for the sayhi HTTP client

use reqwest::{RequestBuilder, StatusCode};
use sayhi_http::client::error::ClientError;
use sayhi_http::client::interceptor::{RequestInterceptor, ResponseInterceptor};
use sayhi_http::types::{
    Credentials, Encoding, GenerateMode, PositionConfig, PositionValueRequest, TemplateRequest,
};
use sayhi_http::ApiClient;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records the status of every failure it sees
#[derive(Default)]
struct RecordingInterceptor {
    seen: Mutex<Vec<Option<StatusCode>>>,
}

impl ResponseInterceptor for RecordingInterceptor {
    fn on_error(&self, error: &ClientError) {
        self.seen.lock().unwrap().push(error.status());
    }
}

/// Adds a fixed header
struct TagInterceptor(&'static str, &'static str);

impl RequestInterceptor for TagInterceptor {
    fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(self.0, self.1)
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8080/")
        .bearer_token("test-key")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
    assert_eq!(
        client.api_url("/positions"),
        "http://localhost:8080/api/positions"
    );
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_envelope_is_stripped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let request = client.request(reqwest::Method::GET, "/auth/user");
    let payload: Value = client.execute(request).await.unwrap();

    assert_eq!(payload, json!({"id": 1}));
}

#[tokio::test]
async fn test_content_type_and_bearer_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/positions"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"positions": {"a": ["x", "y"]}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .bearer_token("test-api-key")
        .build()
        .unwrap();

    let response = client.get_all_positions().await.unwrap();
    assert_eq!(response.positions["a"], vec!["x", "y"]);
}

#[tokio::test]
async fn test_request_interceptors_run_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(headers("x-stage", vec!["first", "second"]))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 3, "username": "carol"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .request_interceptor(Arc::new(TagInterceptor("x-stage", "first")))
        .request_interceptor(Arc::new(TagInterceptor("x-stage", "second")))
        .build()
        .unwrap();

    let user = client.get_user_info().await.unwrap();
    assert_eq!(user.username, "carol");
}

#[tokio::test]
async fn test_server_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/template/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let recorder = Arc::new(RecordingInterceptor::default());
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .response_interceptor(recorder.clone())
        .build()
        .unwrap();

    let request = TemplateRequest {
        template: Some("{a} {b}".to_string()),
        encoding: Some(Encoding::Unicode),
        encodings: BTreeMap::new(),
        generate_mode: GenerateMode::Random,
        positions: PositionConfig::default(),
        speech_groups: BTreeMap::new(),
        selected_positions: vec![],
    };

    let error = client.generate_template(&request).await.unwrap_err();
    assert_eq!(error.to_string(), "boom");
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![Some(StatusCode::INTERNAL_SERVER_ERROR)]
    );
}

#[tokio::test]
async fn test_error_handling_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/positions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let recorder = Arc::new(RecordingInterceptor::default());
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .response_interceptor(recorder.clone())
        .build()
        .unwrap();

    let result = client.get_all_positions().await;
    let error = result.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(error.message(), "Request failed with status code 401");
    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![Some(StatusCode::UNAUTHORIZED)]
    );
}

#[tokio::test]
async fn test_transport_failure_has_message() {
    let recorder = Arc::new(RecordingInterceptor::default());
    let client = ApiClient::builder()
        .base_url("http://127.0.0.1:1")
        .response_interceptor(recorder.clone())
        .build()
        .unwrap();

    let error = client.get_all_positions().await.unwrap_err();
    assert!(matches!(error, ClientError::Transport { .. }));
    assert!(!error.message().is_empty());
    assert_eq!(*recorder.seen.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn test_unexpected_payload_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/positions/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let error = client.get_position_values("a").await.unwrap_err();
    assert!(matches!(error, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_position_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/positions"))
        .and(body_json(json!({"position": "b", "value": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "added"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/positions/c"))
        .and(body_json(json!({"values": ["one", "two"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "set"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/positions/d"))
        .and(query_param("value", "a b&c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let added = client
        .add_position_value(&PositionValueRequest {
            position: "b".to_string(),
            value: "hello".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(added.message, "added");

    let set = client
        .set_position_values("c", vec!["one".to_string(), "two".to_string()])
        .await
        .unwrap();
    assert_eq!(set.message, "set");

    let deleted = client.delete_position_value("d", "a b&c").await.unwrap();
    assert_eq!(deleted.message, "deleted");
}

#[tokio::test]
async fn test_login_and_register() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "username": "alice",
            "message": "ok"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "username taken"})),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let credentials = Credentials {
        username: "alice".to_string(),
        password: "secret1".to_string(),
    };

    let login = client.login(&credentials).await.unwrap();
    assert_eq!(login.token, "jwt-token");
    assert_eq!(login.username, "alice");

    let error = client.register(&credentials).await.unwrap_err();
    assert_eq!(error.to_string(), "username taken");
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_speech_groups_and_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/speech-groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "groups": [{"id": 1, "name": "greetings", "description": "", "speeches": ["hi"]}],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/speech-groups/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let groups = client.list_speech_groups().await.unwrap();
    assert_eq!(groups.total, 1);
    assert_eq!(groups.groups[0].speeches, vec!["hi"]);

    let error = client.delete_speech_group(1).await.unwrap_err();
    assert_eq!(error.to_string(), "not found");

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
}

/// In-memory log sink
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failed_request_logs_below_warn() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || sink.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let error = client.get_user_info().await.unwrap_err();
    assert!(error.is_unauthorized());

    // Callers and response interceptors report the failure; the client itself
    // stays quiet at the default CLI level
    assert!(logs.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_timeout_override_applies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/positions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"positions": {}}))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();

    let error = client.get_all_positions().await.unwrap_err();
    assert!(matches!(error, ClientError::Transport { .. }));
    assert_eq!(error.status(), None);
}
