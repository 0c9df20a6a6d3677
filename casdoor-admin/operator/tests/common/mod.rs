#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use casdoor_admin_core::config::ProviderConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "cli";
pub const CLIENT_SECRET: &str = "cli-secret";
/// `Basic base64("cli:cli-secret")`
pub const BASIC_AUTHORIZATION: &str = "Basic Y2xpOmNsaS1zZWNyZXQ=";

pub const SIGNING_KEY: &str = include_str!("../fixtures/token_signing_key.pem");
pub const SIGNING_CERTIFICATE: &str = include_str!("../fixtures/token_signing_cert.pem");

/// A request as the mock Casdoor saw it.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    response: Arc<Value>,
}

impl MockState {
    fn record(&self, uri: &Uri, headers: &HeaderMap, query: HashMap<String, String>, body: Value) {
        let authorization = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        self.requests.lock().unwrap().push(RecordedRequest {
            path: uri.path().to_string(),
            authorization,
            query,
            body,
        });
    }

    fn respond(&self) -> Response { (self.status, Json(self.response.as_ref().clone())).into_response() }
}

/// In-process stand-in for Casdoor answering every route with one canned
/// response.
pub struct MockCasdoor {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockCasdoor {
    pub async fn start(response: Value) -> Self { Self::start_with_status(StatusCode::OK, response).await }

    pub async fn start_with_status(status: StatusCode, response: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { requests: Arc::clone(&requests), status, response: Arc::new(response) };

        let router = Router::new()
            .route("/api/get-applications", get(handle_get))
            .route("/api/add-application", post(handle_json))
            .route("/api/delete-application", post(handle_json))
            .route("/api/login/oauth/access_token", post(handle_form))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(tokio::spawn(async move { axum::serve(listener, router).await.unwrap() }));

        Self { endpoint: format!("http://{address}"), requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> { self.requests.lock().unwrap().clone() }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            endpoint: self.endpoint.clone(),
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
            certificate: SIGNING_CERTIFICATE.to_string(),
            organization_name: "built-in".to_string(),
            application_name: "app-built-in".to_string(),
            verify_ssl: true,
        }
    }
}

pub fn envelope(status: &str, msg: &str, data: Value) -> Value {
    json!({ "status": status, "msg": msg, "data": data })
}

/// Signs claims for `name` with the fixture key.
pub fn sign_token(name: &str, roles: &[&str], audience: &str, expires_in_seconds: i64) -> String {
    let claims = json!({
        "owner": "built-in",
        "name": name,
        "displayName": name,
        "roles": roles
            .iter()
            .map(|role| json!({ "owner": "built-in", "name": role }))
            .collect::<Vec<_>>(),
        "aud": [audience],
        "exp": chrono::Utc::now().timestamp() + expires_in_seconds,
    });

    let key = jsonwebtoken::EncodingKey::from_rsa_pem(SIGNING_KEY.as_bytes()).unwrap();
    jsonwebtoken::encode(&jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256), &claims, &key)
        .unwrap()
}

async fn handle_get(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record(&uri, &headers, query, Value::Null);
    state.respond()
}

async fn handle_json(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    state.record(&uri, &headers, query, body);
    state.respond()
}

async fn handle_form(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.record(&uri, &headers, HashMap::new(), json!(form));
    state.respond()
}
