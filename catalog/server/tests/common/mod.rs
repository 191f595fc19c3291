#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower::ServiceExt;

/// Opens a private in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one connection; every SQLite connection to
/// `:memory:` would otherwise see its own empty database.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Response status and parsed JSON body.
pub struct JsonResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

/// Sends a request with an optional JSON body and parses the JSON response.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> JsonResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    read_json(app, request).await
}

/// Sends a request with an urlencoded form body and parses the JSON response.
pub async fn send_form(app: &Router, method: Method, uri: &str, form: &str) -> JsonResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap();
    read_json(app, request).await
}

async fn read_json(app: &Router, request: Request<Body>) -> JsonResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    JsonResponse { status, body }
}
