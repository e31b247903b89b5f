//! `RosterServer`, the Axum HTTP server for the employee API.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use roster_store::EmployeeStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handlers::employees;
use crate::health::{self, HealthResponse};
use crate::shutdown::ShutdownCoordinator;

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee record access.
    pub store: EmployeeStore,
    /// When the server started.
    pub start_time: Instant,
}

/// The roster API server.
pub struct RosterServer {
    config: ServerConfig,
    store: EmployeeStore,
    shutdown: Arc<ShutdownCoordinator>,
    start_time: Instant,
}

impl RosterServer {
    /// Create a new server over an opened store.
    pub fn new(config: ServerConfig, store: EmployeeStore) -> Self {
        Self {
            config,
            store,
            shutdown: Arc::new(ShutdownCoordinator::new()),
            start_time: Instant::now(),
        }
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            store: self.store.clone(),
            start_time: self.start_time,
        };
        let prefix = self.config.api_prefix.as_str();

        Router::new()
            .route("/health", get(health_handler))
            .route(prefix, get(employees::list).post(employees::create))
            .route(
                &format!("{prefix}/{{id}}"),
                get(employees::get_one)
                    .put(employees::update)
                    .delete(employees::delete),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Serve on `listener` until the shutdown coordinator fires.
    pub async fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        info!(%addr, prefix = %self.config.api_prefix, "roster server listening");

        let token = self.shutdown.token();
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move { token.cancelled().await })
            .await?;

        info!("roster server stopped");
        Ok(())
    }

    /// Get the shutdown coordinator.
    pub fn shutdown(&self) -> &Arc<ShutdownCoordinator> {
        &self.shutdown
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health::health_check(state.start_time))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use roster_core::EmployeeDraft;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn make_server() -> RosterServer {
        RosterServer::new(ServerConfig::default(), EmployeeStore::in_memory().unwrap())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn seeded() -> (RosterServer, Router) {
        let server = make_server();
        for (name, email) in [("Ann", "ann@x.com"), ("Dan", "dan@x.com"), ("Bob", "bob@x.com")] {
            server
                .store
                .insert(&EmployeeDraft::new(name, email, "Eng"))
                .unwrap();
        }
        let app = server.router();
        (server, app)
    }

    // ── router basics ───────────────────────────────────────────────

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = make_server().router();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["uptime_secs"].is_number());
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = make_server().router();
        let req = Request::builder().uri("/nonexistent").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn shutdown_coordinator_accessible() {
        let server = make_server();
        assert!(!server.shutdown().is_shutting_down());
        assert_eq!(server.config().api_prefix, "/api/employees");
    }

    #[tokio::test]
    async fn custom_prefix_is_honoured() {
        let config = ServerConfig {
            api_prefix: "/staff".into(),
            ..ServerConfig::default()
        };
        let app = RosterServer::new(config, EmployeeStore::in_memory().unwrap()).router();
        let (status, body) = send(&app, "GET", "/staff", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    // ── list ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn list_returns_all_in_envelope() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "GET", "/api/employees", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["message"], "Employees fetched successfully.");
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_with_empty_search_returns_all() {
        let (_server, app) = seeded();
        let (_, body) = send(&app, "GET", "/api/employees?search=", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_search_is_case_sensitive_substring() {
        let (_server, app) = seeded();
        let (_, body) = send(&app, "GET", "/api/employees?search=an", None).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "Dan");
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty_array() {
        let app = make_server().router();
        let (status, body) = send(&app, "GET", "/api/employees?search=zzz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    // ── get ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_existing() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "GET", "/api/employees/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Employee fetched successfully.");
        assert_eq!(body["data"], json!({"id": 1, "name": "Ann", "email": "ann@x.com", "position": "Eng"}));
    }

    #[tokio::test]
    async fn get_missing_is_404() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "GET", "/api/employees/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Employee with ID 99 not found.");
    }

    #[tokio::test]
    async fn get_non_numeric_id_is_404() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "GET", "/api/employees/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Employee with ID abc not found.");
    }

    // ── create ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_returns_201_with_record() {
        let app = make_server().router();
        let (status, body) = send(
            &app,
            "POST",
            "/api/employees",
            Some(json!({"name": "Ann", "email": "ann@x.com", "position": "Eng"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["message"], "Employee added successfully.");
        assert!(body["data"]["id"].as_i64().unwrap() > 0);
        assert_eq!(body["data"]["email"], "ann@x.com");
    }

    #[tokio::test]
    async fn create_duplicate_email_is_409() {
        let (_server, app) = seeded();
        let (status, body) = send(
            &app,
            "POST",
            "/api/employees",
            Some(json!({"name": "Other", "email": "ann@x.com", "position": "Ops"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Email already exists.");
        assert_eq!(body["errors"], json!(["The email address 'ann@x.com' is already in use."]));

        let (_, first) = send(&app, "GET", "/api/employees/1", None).await;
        assert_eq!(first["data"]["name"], "Ann");
    }

    #[tokio::test]
    async fn create_validation_failures() {
        let app = make_server().router();
        for body in [
            json!({"name": "", "email": "a@b.co", "position": "P"}),
            json!({"name": "A", "email": "foo", "position": "P"}),
            json!({"name": "A", "email": "a@b.co", "position": ""}),
            json!({}),
        ] {
            let (status, resp) = send(&app, "POST", "/api/employees", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(resp["message"], "Validation failed.");
            assert!(!resp["errors"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn create_all_fields_bad_lists_two_problems() {
        let app = make_server().router();
        let (status, body) = send(
            &app,
            "POST",
            "/api/employees",
            Some(json!({"name": "", "email": "foo", "position": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"],
            json!(["All fields (name, email, position) are required.", "Invalid email format."])
        );
    }

    #[tokio::test]
    async fn create_malformed_json_is_400() {
        let app = make_server().router();
        let (status, body) = send_raw(&app, "POST", "/api/employees", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Malformed request body.");
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_without_json_content_type_fails_validation() {
        let app = make_server().router();
        let req = Request::builder()
            .method("POST")
            .uri("/api/employees")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("name=Ann"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Validation failed.");
        assert_eq!(body["errors"], json!(["All fields (name, email, position) are required."]));
    }

    #[tokio::test]
    async fn update_without_body_fails_validation() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "PUT", "/api/employees/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed.");
    }

    // ── update ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn update_echoes_submitted_fields() {
        let (_server, app) = seeded();
        let (status, body) = send(
            &app,
            "PUT",
            "/api/employees/2",
            Some(json!({"name": "Dan B", "email": "dan@x.com", "position": "Lead"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Employee updated successfully.");
        assert_eq!(body["data"], json!({"id": 2, "name": "Dan B", "email": "dan@x.com", "position": "Lead"}));
    }

    #[tokio::test]
    async fn update_missing_is_404_and_store_unchanged() {
        let (server, app) = seeded();
        let before = server.store.list(None).unwrap();
        let (status, body) = send(
            &app,
            "PUT",
            "/api/employees/99",
            Some(json!({"name": "X", "email": "x@x.com", "position": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Employee with ID 99 not found or no changes were made.");
        assert_eq!(server.store.list(None).unwrap(), before);
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let (_server, app) = seeded();
        let (status, _) = send(
            &app,
            "PUT",
            "/api/employees/99",
            Some(json!({"name": "X", "email": "bad", "position": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_to_taken_email_is_409() {
        let (server, app) = seeded();
        let (status, body) = send(
            &app,
            "PUT",
            "/api/employees/2",
            Some(json!({"name": "Dan", "email": "ann@x.com", "position": "Eng"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["errors"], json!(["Cannot update: another employee uses this email."]));
        let dan = server
            .store
            .get_by_id(roster_core::EmployeeId::new(2))
            .unwrap()
            .unwrap();
        assert_eq!(dan.email, "dan@x.com");
    }

    // ── delete ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "DELETE", "/api/employees/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Employee deleted successfully.");
        assert_eq!(body["data"], Value::Null);

        let (status, _) = send(&app, "GET", "/api/employees/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_is_404() {
        let (_server, app) = seeded();
        let (status, body) = send(&app, "DELETE", "/api/employees/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Employee with ID 42 not found.");
    }

    // ── unexpected failures ─────────────────────────────────────────

    fn broken_server() -> Router {
        let pool = roster_store::new_in_memory(&roster_store::ConnectionConfig::default()).unwrap();
        roster_store::run_migrations(&*pool.get().unwrap()).unwrap();
        pool.get()
            .unwrap()
            .execute_batch("DROP TABLE employees")
            .unwrap();
        RosterServer::new(ServerConfig::default(), EmployeeStore::new(pool)).router()
    }

    #[tokio::test]
    async fn store_failure_on_list_is_500_with_message() {
        let app = broken_server();
        let (status, body) = send(&app, "GET", "/api/employees", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("no such table"));
        assert_eq!(body["errors"], json!([]));
    }

    #[tokio::test]
    async fn store_failure_on_create_is_500() {
        let app = broken_server();
        let (status, body) = send(
            &app,
            "POST",
            "/api/employees",
            Some(json!({"name": "Ann", "email": "ann@x.com", "position": "Eng"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("employees"));
    }
}
