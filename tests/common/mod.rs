//! In-process fixture backend for integration tests.
//!
//! Serves the same routes and payload shapes as the tender API and records
//! every request (method, URI, Authorization header) so tests can assert on
//! exactly what went over the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use url::Url;

use optibots_client::config::{Environment, Settings};
use optibots_client::session::{MemoryTokenStore, Navigator, RecordingNavigator, Route, TokenStore};
use optibots_client::App;

pub const ADMIN_TOKEN: &str = "tok-admin";
pub const APPLICANT_TOKEN: &str = "tok-applicant";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub uri: String,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreatedTenderForm {
    pub title: String,
    pub description: String,
    pub published: String,
    pub file_name: Option<String>,
}

pub struct ServerState {
    pub hits: Mutex<Vec<Recorded>>,
    pub notifications: Mutex<Vec<Value>>,
    pub created: Mutex<Vec<CreatedTenderForm>>,
}

impl ServerState {
    fn new() -> Self {
        Self {
            hits: Mutex::new(Vec::new()),
            notifications: Mutex::new(vec![
                json!({
                    "application_id": 5,
                    "tender_id": 2,
                    "offer": {"message": "We would like to proceed"}
                }),
                json!({
                    "application_id": 6,
                    "tender_id": 3,
                    "offer": null
                }),
            ]),
            created: Mutex::new(Vec::new()),
        }
    }
}

pub struct TestBackend {
    pub addr: SocketAddr,
    pub state: Arc<ServerState>,
}

impl TestBackend {
    pub fn hits(&self) -> Vec<Recorded> {
        self.state.hits.lock().clone()
    }

    pub fn hits_to(&self, path: &str) -> Vec<Recorded> {
        self.hits().into_iter().filter(|r| r.uri == path).collect()
    }
}

pub struct TestClient {
    pub app: App,
    pub store: Arc<MemoryTokenStore>,
    pub nav: Arc<RecordingNavigator>,
}

pub async fn spawn_backend() -> TestBackend {
    let state = Arc::new(ServerState::new());

    let router = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        .route("/tenders", get(public_tenders))
        .route("/admin/tenders", get(admin_tenders).post(create_tender))
        .route("/admin/applications", get(admin_applications))
        .route("/admin/applications/:id", get(application_detail))
        .route("/admin/applications/:id/offer", post(send_offer))
        .route("/admin/tenders/:id/summary", post(summary))
        .route("/admin/accepted-offers", get(admin_accepted))
        .route("/applicant/submit_application", post(submit_application))
        .route("/applicant/notifications", get(notifications))
        .route("/applicant/offer/:id/respond", post(respond_offer))
        .route("/applicant/accepted", get(applicant_accepted))
        .route("/download/:file", get(download))
        .route("/plain", get(plain))
        .route("/teapot", get(teapot))
        .route("/fail-plain", get(fail_plain))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture backend");
    let addr = listener.local_addr().expect("fixture addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fixture");
    });

    TestBackend { addr, state }
}

/// Client wired to the fixture, starting at the given route with an optional
/// pre-stored token.
pub fn client_for(backend: &TestBackend, at: Route, token: Option<&str>) -> TestClient {
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let nav = Arc::new(RecordingNavigator::starting_at(at));

    let settings = Settings {
        env: Environment::Dev,
        api_base_url: Url::parse(&format!("http://{}", backend.addr)).expect("fixture url"),
        http_timeout_seconds: 5,
        credentials_path: None,
    };

    let token_store: Arc<dyn TokenStore> = store.clone();
    let navigator: Arc<dyn Navigator> = nav.clone();
    let app = App::new(settings, token_store, navigator).expect("build app context");

    TestClient { app, store, nav }
}

// --- middleware ---

async fn record(State(state): State<Arc<ServerState>>, req: Request, next: Next) -> Response {
    let auth = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.hits.lock().push(Recorded {
        method: req.method().to_string(),
        uri: req.uri().to_string(),
        auth,
    });
    next.run(req).await
}

// --- auth helpers ---

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Not authenticated"})),
    )
        .into_response()
}

fn require_admin(headers: &HeaderMap) -> Result<(), Response> {
    match bearer(headers).as_deref() {
        Some(ADMIN_TOKEN) => Ok(()),
        Some(APPLICANT_TOKEN) => Err((
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "Admin only"})),
        )
            .into_response()),
        _ => Err(unauthorized()),
    }
}

fn require_user(headers: &HeaderMap) -> Result<(), Response> {
    match bearer(headers).as_deref() {
        Some(ADMIN_TOKEN) | Some(APPLICANT_TOKEN) => Ok(()),
        _ => Err(unauthorized()),
    }
}

// --- handlers ---

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (email, password) {
        ("notoken@x.com", _) => Json(json!({"token_type": "bearer"})).into_response(),
        ("ghost@x.com", _) => {
            Json(json!({"access_token": "tok-ghost", "token_type": "bearer"})).into_response()
        }
        ("admin@x.com", "pw") => {
            Json(json!({"access_token": ADMIN_TOKEN, "token_type": "bearer"})).into_response()
        }
        ("a@b.com", "pw") => {
            Json(json!({"access_token": APPLICANT_TOKEN, "token_type": "bearer"})).into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        )
            .into_response(),
    }
}

async fn register(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({"status": "registered", "user_id": 9}))
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers).as_deref() {
        Some(ADMIN_TOKEN) => {
            Json(json!({"id": 1, "email": "admin@x.com", "role": "admin"})).into_response()
        }
        Some(APPLICANT_TOKEN) => {
            Json(json!({"id": 2, "email": "a@b.com", "role": "applicant"})).into_response()
        }
        _ => unauthorized(),
    }
}

async fn public_tenders() -> Json<Value> {
    Json(json!([
        {"id": 1, "title": "Office chairs", "description": "200 ergonomic chairs", "status": "public"},
        {"id": 2, "title": "Catering", "description": "Daily lunch service", "status": "public"}
    ]))
}

async fn admin_tenders(headers: HeaderMap) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }
    Json(json!([
        {
            "id": 1, "title": "Office chairs",
            "description": "200 ergonomic chairs for the new wing",
            "status": "public", "applicant_count": 3,
            "files": ["spec.pdf"]
        },
        {
            "id": 2, "title": "Catering",
            "description": "Daily lunch service",
            "status": "public", "applicant_count": 0,
            "files": []
        }
    ]))
    .into_response()
}

async fn admin_applications(headers: HeaderMap) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }
    let apps: Vec<Value> = (1..=7)
        .map(|i| {
            json!({
                "id": i,
                "user_email": format!("user{i}@x.com"),
                "tender_title": "Office chairs",
                "status": "submitted"
            })
        })
        .collect();
    Json(Value::Array(apps)).into_response()
}

async fn create_tender(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }

    let mut form = CreatedTenderForm::default();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = field.text().await.unwrap_or_default(),
            "description" => form.description = field.text().await.unwrap_or_default(),
            "published" => form.published = field.text().await.unwrap_or_default(),
            "file" => {
                form.file_name = field.file_name().map(str::to_string);
                let _ = field.bytes().await;
            }
            _ => {}
        }
    }
    state.created.lock().push(form);
    Json(json!({"id": 42})).into_response()
}

async fn application_detail(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }
    if id != 3 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Application not found"})),
        )
            .into_response();
    }
    Json(json!({
        "id": 3,
        "tender_title": "Office chairs",
        "user_email": "user3@x.com",
        "applicant_text": "We can deliver within two weeks.",
        "status": "submitted"
    }))
    .into_response()
}

async fn send_offer(headers: HeaderMap, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }
    let message = body["message"].as_str().unwrap_or_default();
    if message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Offer message required"})),
        )
            .into_response();
    }
    Json(json!({"status": "offered", "application_id": id})).into_response()
}

async fn summary(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }
    if id == 2 {
        return Json(json!({"error": "No applications to summarize"})).into_response();
    }
    Json(json!({
        "best_application": {
            "email": "x@y.com", "price": "100", "sku": "A1",
            "verdict": "good", "brief": "ok"
        },
        "comparison": [
            {"email": "p@q.com", "price": "90",
             "strengths": ["fast"], "weaknesses": ["pricey"]}
        ]
    }))
    .into_response()
}

async fn admin_accepted(headers: HeaderMap) -> Response {
    if let Err(resp) = require_admin(&headers) {
        return resp;
    }
    Json(json!([{
        "application_id": 5,
        "applicant_email": "a@b.com",
        "tender_title": "Catering",
        "offer": {"message": "We would like to proceed"},
        "status": "accepted"
    }]))
    .into_response()
}

async fn submit_application(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(resp) = require_user(&headers) {
        return resp;
    }
    if body["text"].as_str().unwrap_or_default().trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Application text cannot be empty"})),
        )
            .into_response();
    }
    Json(json!({"status": "submitted", "application_id": 77})).into_response()
}

async fn notifications(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if let Err(resp) = require_user(&headers) {
        return resp;
    }
    Json(Value::Array(state.notifications.lock().clone())).into_response()
}

async fn respond_offer(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = require_user(&headers) {
        return resp;
    }
    let decision = params.get("decision").map(String::as_str);
    let status = match decision {
        Some("accept") => "accepted",
        Some("reject") => "rejected",
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Decision must be 'accept' or 'reject'"})),
            )
                .into_response()
        }
    };

    state
        .notifications
        .lock()
        .retain(|n| n["application_id"].as_i64() != Some(id));

    Json(json!({"status": status, "application_id": id})).into_response()
}

async fn applicant_accepted(headers: HeaderMap) -> Response {
    if let Err(resp) = require_user(&headers) {
        return resp;
    }
    Json(json!([{
        "application_id": 5,
        "tender_title": "Catering",
        "offer": {"message": "We would like to proceed"},
        "status": "accepted"
    }]))
    .into_response()
}

async fn download(Path(file): Path<String>) -> Response {
    (
        [(axum::http::header::CONTENT_TYPE, "application/octet-stream")],
        format!("FILE:{file}").into_bytes(),
    )
        .into_response()
}

async fn plain() -> Response {
    ([(axum::http::header::CONTENT_TYPE, "text/plain")], "pong").into_response()
}

async fn teapot() -> Response {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({"detail": "I'm a teapot"})),
    )
        .into_response()
}

async fn fail_plain() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(axum::http::header::CONTENT_TYPE, "text/plain")],
        "boom",
    )
        .into_response()
}
