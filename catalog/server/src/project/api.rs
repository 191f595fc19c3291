use crate::project::{Project, ProjectFields, ProjectService, ProjectServiceError};
use crate::web::AppState;
use crate::web::api::{ApiError, ErrorResponse, MessageResponse, RequestBody};
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON representation of a Project for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectJson {
    /// Auto-generated project ID
    pub id: i32,
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// Project icon (emoji)
    pub icon: String,
    /// Project color (hex)
    pub color: String,
    /// Project category
    pub category: String,
    /// Project tags
    pub tags: Vec<String>,
    /// Project link
    pub link: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectJson {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            icon: project.icon,
            color: project.color,
            category: project.category,
            tags: project.tags,
            link: project.link,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Request body for creating or updating a project.
///
/// `title`, `description` and `category` are required on create. On update,
/// empty or missing fields keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "🚀")]
    pub icon: Option<String>,
    #[schema(example = "#4CAF50")]
    pub color: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[schema(example = "#")]
    pub link: Option<String>,
}

impl From<ProjectRequest> for ProjectFields {
    fn from(request: ProjectRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            icon: request.icon,
            color: request.color,
            category: request.category,
            tags: request.tags,
            link: request.link,
        }
    }
}

/// Maps a service error to the API error returned for `action`.
fn api_error(err: ProjectServiceError, action: &str) -> ApiError {
    match err {
        ProjectServiceError::ProjectNotFound(_) => {
            ApiError::not_found("Project not found", err.to_string())
        }
        ProjectServiceError::MissingFields(_) => ApiError::bad_request(
            "Title, description and category are required",
            err.to_string(),
        ),
        ProjectServiceError::Database(_) => {
            tracing::error!("{}: {}", action, err);
            ApiError::internal(action, err.to_string())
        }
    }
}

/// Parses a path ID; IDs that are not integers can never match a project.
fn parse_id(id: &str) -> Result<i32, ApiError> {
    id.parse::<i32>().map_err(|_| {
        ApiError::not_found(
            "Project not found",
            format!("Project with ID {} not found", id),
        )
    })
}

/// Handler for GET /api/projects - Returns all projects.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Successfully retrieved projects", body = [ProjectJson]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn get_projects_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectJson>>, ApiError> {
    let service = ProjectService::new(&state.db);
    let projects = service
        .get_all_projects()
        .await
        .map_err(|err| api_error(err, "Failed to retrieve projects"))?;
    Ok(Json(projects.into_iter().map(ProjectJson::from).collect()))
}

/// Handler for GET /api/projects/{id} - Returns a single project.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Successfully retrieved project", body = ProjectJson),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn get_project_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProjectJson>, ApiError> {
    let id = parse_id(&id)?;
    let service = ProjectService::new(&state.db);
    let project = service
        .get_project_by_id(id)
        .await
        .map_err(|err| api_error(err, "Failed to retrieve project"))?;
    Ok(Json(ProjectJson::from(project)))
}

/// Handler for GET /api/projects/category/{category} - Returns projects in a category.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/projects/category/{category}",
    params(("category" = String, Path, description = "Project category")),
    responses(
        (status = 200, description = "Successfully retrieved projects", body = [ProjectJson]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn get_projects_by_category_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ProjectJson>>, ApiError> {
    let service = ProjectService::new(&state.db);
    let projects = service
        .get_projects_by_category(&category)
        .await
        .map_err(|err| api_error(err, "Failed to retrieve projects"))?;
    Ok(Json(projects.into_iter().map(ProjectJson::from).collect()))
}

/// Handler for POST /api/projects - Creates a project.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body(content(
        (ProjectRequest = "application/json"),
        (ProjectRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 201, description = "Project created", body = ProjectJson),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn create_project_handler(
    State(state): State<Arc<AppState>>,
    RequestBody(request): RequestBody<ProjectRequest>,
) -> Result<(StatusCode, Json<ProjectJson>), ApiError> {
    let service = ProjectService::new(&state.db);
    let project = service
        .create_project(request.into())
        .await
        .map_err(|err| api_error(err, "Failed to create project"))?;
    Ok((StatusCode::CREATED, Json(ProjectJson::from(project))))
}

/// Handler for PUT /api/projects/{id} - Updates a project.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    request_body(content(
        (ProjectRequest = "application/json"),
        (ProjectRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Project updated", body = ProjectJson),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn update_project_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    RequestBody(request): RequestBody<ProjectRequest>,
) -> Result<Json<ProjectJson>, ApiError> {
    let id = parse_id(&id)?;
    let service = ProjectService::new(&state.db);
    let project = service
        .update_project_by_id(id, request.into())
        .await
        .map_err(|err| api_error(err, "Failed to update project"))?;
    Ok(Json(ProjectJson::from(project)))
}

/// Handler for DELETE /api/projects/{id} - Deletes a project.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn delete_project_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let service = ProjectService::new(&state.db);
    service
        .delete_project_by_id(id)
        .await
        .map_err(|err| api_error(err, "Failed to delete project"))?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// Creates and returns the projects API router.
pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/projects",
            get(get_projects_handler).post(create_project_handler),
        )
        .route(
            "/projects/{id}",
            get(get_project_handler)
                .put(update_project_handler)
                .delete(delete_project_handler),
        )
        .route(
            "/projects/category/{category}",
            get(get_projects_by_category_handler),
        )
        .with_state(state)
}
