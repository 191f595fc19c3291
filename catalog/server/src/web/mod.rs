use std::path::Path;
use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use sea_orm::Database;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;

pub mod api;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

impl AppState {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let db = Database::connect(&config.database_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");
    tracing::info!(
        "API documentation available at http://{}/api-docs",
        server_address
    );

    let state = Arc::new(AppState::new(db));
    let app = create_app_router(state, Path::new(&config.static_dir));

    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the full application: JSON API, Swagger UI and the front-end.
///
/// Requests that match neither the API nor the documentation are served from
/// `static_dir`, falling back to its `index.html` so client-side routes resolve.
pub fn create_app_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let api_router = api::create_api_router(state);
    let swagger_ui =
        SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api::ApiDoc::openapi());
    let front_end =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(api_router)
        .merge(swagger_ui)
        .fallback_service(front_end)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}
