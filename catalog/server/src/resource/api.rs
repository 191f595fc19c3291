use crate::resource::{Resource, ResourceFields, ResourceService, ResourceServiceError};
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

/// JSON representation of a Resource for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceJson {
    /// Auto-generated resource ID
    pub id: i32,
    /// Resource title
    pub title: String,
    /// Resource description
    pub description: String,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource category, e.g. tutorial, tool
    pub category: String,
    /// Publication date
    pub date: String,
    /// Author name
    pub author: String,
    /// Resource link
    pub link: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceJson {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title,
            description: resource.description,
            kind: resource.kind,
            category: resource.category,
            date: resource.date,
            author: resource.author,
            link: resource.link,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

/// Request body for creating or updating a resource.
///
/// Everything but `link` is required on create. On update, empty or missing
/// fields keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    #[schema(example = "2023-06-15")]
    pub date: Option<String>,
    pub author: Option<String>,
    #[schema(example = "#")]
    pub link: Option<String>,
}

impl From<ResourceRequest> for ResourceFields {
    fn from(request: ResourceRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            kind: request.kind,
            category: request.category,
            date: request.date,
            author: request.author,
            link: request.link,
        }
    }
}

/// Maps a service error to the API error returned for `action`.
fn api_error(err: ResourceServiceError, action: &str) -> ApiError {
    match err {
        ResourceServiceError::ResourceNotFound(_) => {
            ApiError::not_found("Resource not found", err.to_string())
        }
        ResourceServiceError::MissingFields(_) => ApiError::bad_request(
            "Title, description, type, category, date and author are required",
            err.to_string(),
        ),
        ResourceServiceError::Database(_) => {
            tracing::error!("{}: {}", action, err);
            ApiError::internal(action, err.to_string())
        }
    }
}

/// Parses a path ID; IDs that are not integers can never match a resource.
fn parse_id(id: &str) -> Result<i32, ApiError> {
    id.parse::<i32>().map_err(|_| {
        ApiError::not_found(
            "Resource not found",
            format!("Resource with ID {} not found", id),
        )
    })
}

/// Handler for GET /api/resources - Returns all resources.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/resources",
    responses(
        (status = 200, description = "Successfully retrieved resources", body = [ResourceJson]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn get_resources_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ResourceJson>>, ApiError> {
    let service = ResourceService::new(&state.db);
    let resources = service
        .get_all_resources()
        .await
        .map_err(|err| api_error(err, "Failed to retrieve resources"))?;
    Ok(Json(resources.into_iter().map(ResourceJson::from).collect()))
}

/// Handler for GET /api/resources/{id} - Returns a single resource.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/resources/{id}",
    params(("id" = String, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Successfully retrieved resource", body = ResourceJson),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn get_resource_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ResourceJson>, ApiError> {
    let id = parse_id(&id)?;
    let service = ResourceService::new(&state.db);
    let resource = service
        .get_resource_by_id(id)
        .await
        .map_err(|err| api_error(err, "Failed to retrieve resource"))?;
    Ok(Json(ResourceJson::from(resource)))
}

/// Handler for GET /api/resources/category/{category} - Returns resources in a category.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/resources/category/{category}",
    params(("category" = String, Path, description = "Resource category")),
    responses(
        (status = 200, description = "Successfully retrieved resources", body = [ResourceJson]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn get_resources_by_category_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ResourceJson>>, ApiError> {
    let service = ResourceService::new(&state.db);
    let resources = service
        .get_resources_by_category(&category)
        .await
        .map_err(|err| api_error(err, "Failed to retrieve resources"))?;
    Ok(Json(resources.into_iter().map(ResourceJson::from).collect()))
}

/// Handler for POST /api/resources - Creates a resource.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/resources",
    request_body(content(
        (ResourceRequest = "application/json"),
        (ResourceRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 201, description = "Resource created", body = ResourceJson),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn create_resource_handler(
    State(state): State<Arc<AppState>>,
    RequestBody(request): RequestBody<ResourceRequest>,
) -> Result<(StatusCode, Json<ResourceJson>), ApiError> {
    let service = ResourceService::new(&state.db);
    let resource = service
        .create_resource(request.into())
        .await
        .map_err(|err| api_error(err, "Failed to create resource"))?;
    Ok((StatusCode::CREATED, Json(ResourceJson::from(resource))))
}

/// Handler for PUT /api/resources/{id} - Updates a resource.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    put,
    path = "/api/resources/{id}",
    params(("id" = String, Path, description = "Resource ID")),
    request_body(content(
        (ResourceRequest = "application/json"),
        (ResourceRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Resource updated", body = ResourceJson),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn update_resource_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    RequestBody(request): RequestBody<ResourceRequest>,
) -> Result<Json<ResourceJson>, ApiError> {
    let id = parse_id(&id)?;
    let service = ResourceService::new(&state.db);
    let resource = service
        .update_resource_by_id(id, request.into())
        .await
        .map_err(|err| api_error(err, "Failed to update resource"))?;
    Ok(Json(ResourceJson::from(resource)))
}

/// Handler for DELETE /api/resources/{id} - Deletes a resource.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/api/resources/{id}",
    params(("id" = String, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource deleted", body = MessageResponse),
        (status = 404, description = "Resource not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn delete_resource_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let service = ResourceService::new(&state.db);
    service
        .delete_resource_by_id(id)
        .await
        .map_err(|err| api_error(err, "Failed to delete resource"))?;
    Ok(Json(MessageResponse::new("Resource deleted successfully")))
}

/// Creates and returns the resources API router.
pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/resources",
            get(get_resources_handler).post(create_resource_handler),
        )
        .route(
            "/resources/{id}",
            get(get_resource_handler)
                .put(update_resource_handler)
                .delete(delete_resource_handler),
        )
        .route(
            "/resources/category/{category}",
            get(get_resources_by_category_handler),
        )
        .with_state(state)
}

