// In-process stand-in for the backend API. Each test starts its own
// instance on a free port, seeds rows, and points an ApiClient at it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path, Query, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use url::Url;

use aegis_console::client::ApiClient;
use aegis_console::session::Auth;

pub const JWT_SECRET: &[u8] = b"stub-signing-secret";
pub const PASSWORD: &str = "letmein";

/// One REST collection and how its rows are keyed and shaped.
#[derive(Clone, Copy)]
pub struct Collection {
    key: &'static str,
    id_field: &'static str,
    paged: bool,
}

pub const DEPARTMENTS: Collection = Collection {
    key: "departments",
    id_field: "dept_id",
    paged: true,
};
pub const EMPLOYEES: Collection = Collection {
    key: "employees",
    id_field: "employee_id",
    paged: true,
};
// The access-level endpoint answers with a bare array, not a page.
pub const ACCESS_LEVELS: Collection = Collection {
    key: "access_levels",
    id_field: "access_id",
    paged: false,
};
pub const THREATS: Collection = Collection {
    key: "threats",
    id_field: "id",
    paged: true,
};
pub const COMPLIANCE: Collection = Collection {
    key: "compliance",
    id_field: "id",
    paged: true,
};
pub const ACCESS_LOGS: Collection = Collection {
    key: "access_logs",
    id_field: "id",
    paged: true,
};
pub const ACTIVITY_LOGS: Collection = Collection {
    key: "activity_logs",
    id_field: "id",
    paged: true,
};
pub const ERROR_LOGS: Collection = Collection {
    key: "error_logs",
    id_field: "id",
    paged: true,
};

pub struct StubState {
    collections: Mutex<HashMap<&'static str, Vec<Value>>>,
    next_id: AtomicU64,
    /// "METHOD /path" -> remaining injected 503 responses.
    failures: Mutex<HashMap<String, usize>>,
    requests: Mutex<Vec<String>>,
    threat_data: Mutex<Value>,
}

impl Default for StubState {
    fn default() -> Self {
        StubState {
            collections: Mutex::default(),
            next_id: AtomicU64::new(1),
            failures: Mutex::default(),
            requests: Mutex::default(),
            threat_data: Mutex::new(default_threat_data()),
        }
    }
}

impl StubState {
    pub fn seed(&self, col: Collection, rows: Vec<Value>) {
        let mut max_id = 0;
        for row in &rows {
            if let Some(id) = row.get(col.id_field).and_then(Value::as_u64) {
                max_id = max_id.max(id);
            }
        }
        self.next_id.fetch_max(max_id + 1, Ordering::SeqCst);
        self.collections.lock().unwrap().insert(col.key, rows);
    }

    pub fn rows(&self, col: Collection) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(col.key)
            .cloned()
            .unwrap_or_default()
    }

    /// Make the next `times` requests matching "METHOD /path" answer 503.
    pub fn fail_next(&self, method_and_path: &str, times: usize) {
        self.failures
            .lock()
            .unwrap()
            .insert(method_and_path.to_string(), times);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, method_and_path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.as_str() == method_and_path)
            .count()
    }

    pub fn set_threat_data(&self, data: Value) {
        *self.threat_data.lock().unwrap() = data;
    }

    fn alloc_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

pub struct StubServer {
    pub addr: SocketAddr,
    pub state: Arc<StubState>,
}

impl StubServer {
    pub async fn start() -> Result<Self> {
        let state = Arc::new(StubState::default());
        let app = router(state.clone());

        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(StubServer { addr, state })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client holding a valid bearer token for user 1.
    pub fn api_client(&self) -> ApiClient {
        let base = Url::parse(&self.base_url()).unwrap();
        ApiClient::new(base, Auth::Bearer(mint_token(1))).unwrap()
    }

    pub fn anon_client(&self) -> ApiClient {
        let base = Url::parse(&self.base_url()).unwrap();
        ApiClient::new(base, Auth::Anonymous).unwrap()
    }
}

pub fn mint_token(user_id: u64) -> String {
    let claims = json!({
        "token_type": "access",
        "user_id": user_id,
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(JWT_SECRET)).unwrap()
}

// Seed row builders, shaped like the backend's serializer output.

pub fn dept(id: u64, name: &str, tier: &str, risk: u64) -> Value {
    json!({
        "dept_id": id,
        "dept_name": name,
        "description": "",
        "access_level": tier,
        "breach_risk_score": risk,
    })
}

pub fn employee(id: u64, name: &str, email: &str, role: &str, dept_id: u64, dept_name: &str) -> Value {
    json!({
        "employee_id": id,
        "full_name": name,
        "email": email,
        "role": role,
        "department": {"dept_id": dept_id, "dept_name": dept_name},
        "risk_score": 10,
    })
}

pub fn access_level(id: u64, name: &str, description: &str) -> Value {
    json!({
        "access_id": id,
        "access_name": name,
        "description": description,
    })
}

pub fn threat(id: u64, title: &str, severity: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "severity": severity,
        "status": status,
        "detected_at": "2026-03-01T09:30:00Z",
    })
}

pub fn compliance_record(id: u64, title: &str, category: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "category": category,
        "description": "",
        "requirements": "",
        "status": status,
        "due_date": null,
        "notes": "",
    })
}

pub fn access_log(id: u64, username: &str, ip: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "ip_address": ip,
        "timestamp": "2026-03-01T09:30:00Z",
    })
}

pub fn activity_log(id: u64, username: &str, action: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "action": action,
        "timestamp": "2026-03-01T09:31:00Z",
    })
}

pub fn error_log(id: u64, message: &str) -> Value {
    json!({
        "id": id,
        "message": message,
        "stack_trace": "",
        "timestamp": "2026-03-01T09:32:00Z",
    })
}

pub fn default_threat_data() -> Value {
    json!({
        "nodes": [
            {"id": "login", "label": "Off Hours Login", "type": "action",
             "suspiciousLevel": "high", "status": "flagged"},
            {"id": "vpn", "label": "VPN Gateway", "type": "system"},
            {"id": "db", "label": "Customer Records Database", "type": "resource"},
            {"id": "share", "label": "Backup Share", "type": "resource"}
        ],
        "edges": [
            {"id": "e1", "source": "login", "target": "vpn", "label": "tunnels", "pathId": null},
            {"id": "e2", "source": "login", "target": "db", "label": "queries", "pathId": "p2"},
            {"id": "e3", "source": "vpn", "target": "db", "label": "reaches", "pathId": "p1"}
        ],
        "paths": [
            {"id": "p1", "name": "Perimeter breach", "severity": 8.5, "entryPoint": "login",
             "criticalResources": ["Customer Records Database"],
             "riskFactors": ["stale VPN credentials"],
             "recommendation": "Enforce MFA on the gateway"},
            {"id": "p2", "name": "Direct query", "severity": 5.2, "entryPoint": "login"}
        ]
    })
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/api/auth/token/", post(auth_token))
        .route("/api/auth/register/", post(auth_register))
        .route("/api/auth/profile/", get(auth_profile))
        .route(
            "/api/access/departments/",
            get(departments_index).post(departments_create),
        )
        .route(
            "/api/access/departments/:id/",
            get(departments_show)
                .put(departments_update)
                .delete(departments_delete),
        )
        .route("/api/access/departments/:id/employees/", get(departments_roster))
        .route(
            "/api/access/employees/",
            get(employees_index).post(employees_create),
        )
        .route(
            "/api/access/employees/:id/",
            get(employees_show).put(employees_update).delete(employees_delete),
        )
        .route(
            "/api/access/access-levels/",
            get(levels_index).post(levels_create),
        )
        .route(
            "/api/access/access-levels/:id/",
            get(levels_show).put(levels_update).delete(levels_delete),
        )
        .route("/api/logs/threat/", get(threats_index).post(threats_create))
        .route(
            "/api/logs/threat/:id/",
            get(threats_show).put(threats_update).delete(threats_delete),
        )
        .route(
            "/api/security/compliance/",
            get(compliance_index).post(compliance_create),
        )
        .route(
            "/api/security/compliance/:id/",
            get(compliance_show)
                .put(compliance_update)
                .delete(compliance_delete),
        )
        .route(
            "/api/security/compliance/:id/change_status/",
            post(compliance_change_status),
        )
        .route("/api/security/chatbot/", post(chatbot))
        .route("/api/security/explain-compliance/", get(explain_compliance))
        .route("/api/logs/access/", get(access_logs_index))
        .route("/api/logs/activity/", get(activity_logs_index))
        .route("/api/logs/error/", get(error_logs_index))
        .route("/api/threat-data/", get(threat_data))
        .layer(middleware::from_fn_with_state(state.clone(), gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Request log, failure injection, and bearer auth in one layer, in that
/// order: attempts are counted even when they are about to fail.
async fn gate(State(state): State<Arc<StubState>>, req: Request, next: Next) -> Response {
    let key = format!("{} {}", req.method(), req.uri().path());
    state.requests.lock().unwrap().push(key.clone());

    if let Some(remaining) = state.failures.lock().unwrap().get_mut(&key) {
        if *remaining > 0 {
            *remaining -= 1;
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "upstream unavailable"})),
            )
                .into_response();
        }
    }

    let path = req.uri().path();
    let open = path == "/api/auth/token/" || path == "/api/auth/register/";
    if path.starts_with("/api/") && !open && !bearer_ok(&req) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Authentication credentials were not provided."})),
        )
            .into_response();
    }

    next.run(req).await
}

fn bearer_ok(req: &Request) -> bool {
    let Some(value) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return false;
    };
    let validation = Validation::new(Algorithm::HS256);
    decode::<Value>(token, &DecodingKey::from_secret(JWT_SECRET), &validation).is_ok()
}

// Auth endpoints.

async fn auth_token(Json(body): Json<Value>) -> Response {
    let username = body.get("username").and_then(Value::as_str).unwrap_or("");
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");
    if username.is_empty() || password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "No active account found with the given credentials"})),
        )
            .into_response();
    }
    Json(json!({"access": mint_token(7), "refresh": "stub-refresh"})).into_response()
}

async fn auth_register(Json(body): Json<Value>) -> Response {
    let username = body.get("username").and_then(Value::as_str).unwrap_or("");
    if username.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "username is required"})),
        )
            .into_response();
    }
    Json(json!({
        "username": username,
        "access": mint_token(8),
        "refresh": "stub-refresh",
    }))
    .into_response()
}

async fn auth_profile() -> Response {
    Json(json!({"username": "ada", "email": "ada@example.com"})).into_response()
}

// Generic collection behavior.

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response()
}

fn row_id(row: &Value, id_field: &str) -> Option<u64> {
    row.get(id_field).and_then(Value::as_u64)
}

/// Fields the draft does not carry survive an update, the way the
/// backend's serializer treats read-only fields.
fn merge_missing(new: &mut Value, old: &Value) {
    if let (Value::Object(new), Value::Object(old)) = (new, old) {
        for (key, value) in old {
            if !new.contains_key(key) {
                new.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Writes address the department by id; reads carry it nested. Threats
/// get a server-side detection timestamp on create.
fn enrich(state: &StubState, col: Collection, row: &mut Value) {
    if col.key == EMPLOYEES.key {
        if let Some(dept_id) = row.get("department").and_then(Value::as_u64) {
            let dept = state
                .rows(DEPARTMENTS)
                .into_iter()
                .find(|d| row_id(d, "dept_id") == Some(dept_id));
            row["department"] = match dept {
                Some(dept) => json!({"dept_id": dept_id, "dept_name": dept["dept_name"]}),
                None => Value::Null,
            };
        }
    }
    if col.key == THREATS.key && row.get("detected_at").is_none() {
        row["detected_at"] = json!(chrono::Utc::now().to_rfc3339());
    }
}

fn duplicate_department_name(state: &StubState, body: &Value, skip_id: Option<u64>) -> bool {
    let Some(name) = body.get("dept_name").and_then(Value::as_str) else {
        return false;
    };
    state.rows(DEPARTMENTS).iter().any(|row| {
        row.get("dept_name").and_then(Value::as_str) == Some(name)
            && row_id(row, "dept_id") != skip_id
    })
}

fn write_check(state: &StubState, col: Collection, body: &Value, skip_id: Option<u64>) -> Option<Response> {
    if col.key == DEPARTMENTS.key && duplicate_department_name(state, body, skip_id) {
        return Some(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "department with this name already exists"})),
            )
                .into_response(),
        );
    }
    None
}

fn decorate_department(state: &StubState, mut row: Value) -> Value {
    let id = row_id(&row, "dept_id");
    let count = state
        .rows(EMPLOYEES)
        .iter()
        .filter(|emp| {
            emp.get("department")
                .and_then(|dept| dept.get("dept_id"))
                .and_then(Value::as_u64)
                == id
        })
        .count();
    row["employee_count"] = json!(count);
    row
}

fn list_rows(state: &StubState, col: Collection, params: &HashMap<String, String>) -> Response {
    let mut rows = state.rows(col);
    if col.key == DEPARTMENTS.key {
        rows = rows
            .into_iter()
            .map(|row| decorate_department(state, row))
            .collect();
    }
    if col.key == COMPLIANCE.key {
        rows.retain(|row| {
            params
                .get("category")
                .map_or(true, |want| row.get("category") == Some(&json!(want)))
                && params
                    .get("status")
                    .map_or(true, |want| row.get("status") == Some(&json!(want)))
        });
    }
    if col.paged {
        Json(json!({"count": rows.len(), "results": rows})).into_response()
    } else {
        Json(Value::Array(rows)).into_response()
    }
}

fn get_row(state: &StubState, col: Collection, id: u64) -> Response {
    match state
        .rows(col)
        .into_iter()
        .find(|row| row_id(row, col.id_field) == Some(id))
    {
        Some(row) if col.key == DEPARTMENTS.key => Json(decorate_department(state, row)).into_response(),
        Some(row) => Json(row).into_response(),
        None => not_found(),
    }
}

fn create_row(state: &StubState, col: Collection, mut body: Value) -> Response {
    if let Some(rejection) = write_check(state, col, &body, None) {
        return rejection;
    }
    let id = state.alloc_id();
    body[col.id_field] = json!(id);
    enrich(state, col, &mut body);
    state
        .collections
        .lock()
        .unwrap()
        .entry(col.key)
        .or_default()
        .push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

fn update_row(state: &StubState, col: Collection, id: u64, mut body: Value) -> Response {
    if let Some(rejection) = write_check(state, col, &body, Some(id)) {
        return rejection;
    }
    body[col.id_field] = json!(id);
    // Merge before enriching, or the old row's read-only fields (like a
    // threat's detected_at) would be re-stamped instead of carried over.
    let old = state
        .rows(col)
        .into_iter()
        .find(|row| row_id(row, col.id_field) == Some(id));
    let Some(old) = old else {
        return not_found();
    };
    merge_missing(&mut body, &old);
    enrich(state, col, &mut body);

    let mut collections = state.collections.lock().unwrap();
    let rows = collections.entry(col.key).or_default();
    match rows
        .iter_mut()
        .find(|row| row_id(row, col.id_field) == Some(id))
    {
        Some(row) => {
            *row = body.clone();
            Json(body).into_response()
        }
        None => not_found(),
    }
}

fn delete_row(state: &StubState, col: Collection, id: u64) -> Response {
    let mut collections = state.collections.lock().unwrap();
    let rows = collections.entry(col.key).or_default();
    let before = rows.len();
    rows.retain(|row| row_id(row, col.id_field) != Some(id));
    if rows.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

// Thin route handlers.

async fn departments_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, DEPARTMENTS, &params)
}

async fn departments_create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    create_row(&state, DEPARTMENTS, body)
}

async fn departments_show(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    get_row(&state, DEPARTMENTS, id)
}

async fn departments_update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    update_row(&state, DEPARTMENTS, id, body)
}

async fn departments_delete(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    delete_row(&state, DEPARTMENTS, id)
}

async fn departments_roster(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    let members: Vec<Value> = state
        .rows(EMPLOYEES)
        .into_iter()
        .filter(|emp| {
            emp.get("department")
                .and_then(|dept| dept.get("dept_id"))
                .and_then(Value::as_u64)
                == Some(id)
        })
        .collect();
    Json(json!({"count": members.len(), "results": members})).into_response()
}

async fn employees_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, EMPLOYEES, &params)
}

async fn employees_create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    create_row(&state, EMPLOYEES, body)
}

async fn employees_show(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    get_row(&state, EMPLOYEES, id)
}

async fn employees_update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    update_row(&state, EMPLOYEES, id, body)
}

async fn employees_delete(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    delete_row(&state, EMPLOYEES, id)
}

async fn levels_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, ACCESS_LEVELS, &params)
}

async fn levels_create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    create_row(&state, ACCESS_LEVELS, body)
}

async fn levels_show(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    get_row(&state, ACCESS_LEVELS, id)
}

async fn levels_update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    update_row(&state, ACCESS_LEVELS, id, body)
}

async fn levels_delete(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    delete_row(&state, ACCESS_LEVELS, id)
}

async fn threats_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, THREATS, &params)
}

async fn threats_create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    create_row(&state, THREATS, body)
}

async fn threats_show(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    get_row(&state, THREATS, id)
}

async fn threats_update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    update_row(&state, THREATS, id, body)
}

async fn threats_delete(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    delete_row(&state, THREATS, id)
}

async fn compliance_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, COMPLIANCE, &params)
}

async fn compliance_create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    create_row(&state, COMPLIANCE, body)
}

async fn compliance_show(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    get_row(&state, COMPLIANCE, id)
}

async fn compliance_update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    update_row(&state, COMPLIANCE, id, body)
}

async fn compliance_delete(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    delete_row(&state, COMPLIANCE, id)
}

async fn compliance_change_status(
    State(state): State<Arc<StubState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    let Some(status) = body.get("status").and_then(Value::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "status is required"})),
        )
            .into_response();
    };

    let mut collections = state.collections.lock().unwrap();
    let rows = collections.entry(COMPLIANCE.key).or_default();
    match rows.iter_mut().find(|row| row_id(row, "id") == Some(id)) {
        Some(row) => {
            row["status"] = json!(status);
            Json(row.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn chatbot(Json(body): Json<Value>) -> Response {
    let query = body.get("query").and_then(Value::as_str).unwrap_or("");
    Json(json!({"response": format!("stub answer: {query}")})).into_response()
}

async fn explain_compliance(Query(params): Query<HashMap<String, String>>) -> Response {
    let category = params.get("category").map(String::as_str).unwrap_or("OTHER");
    Json(json!({"explanation": format!("{category} requires periodic review.")})).into_response()
}

async fn access_logs_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, ACCESS_LOGS, &params)
}

async fn activity_logs_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, ACTIVITY_LOGS, &params)
}

async fn error_logs_index(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    list_rows(&state, ERROR_LOGS, &params)
}

async fn threat_data(State(state): State<Arc<StubState>>) -> Response {
    Json(state.threat_data.lock().unwrap().clone()).into_response()
}
