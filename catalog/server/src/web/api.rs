use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use utoipa::{OpenApi, ToSchema};

use crate::web::AppState;
use crate::{project, resource};

/// JSON response for API errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Summary of what failed
    pub message: String,
    /// Underlying error text
    pub error: String,
}

/// JSON response carrying a confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error returned by the JSON API handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                message: message.into(),
                error: error.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, error)
    }

    pub fn bad_request(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, error)
    }

    pub fn internal(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("Invalid request body", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Request body accepted as JSON or as an urlencoded form.
///
/// A request without a content type carries no fields, so it extracts as
/// `T::default()`. Malformed bodies are rejected with a 400 `ApiError`.
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<S, T> FromRequest<S> for RequestBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    ApiError::bad_request("Invalid request body", rejection.body_text())
                })?;
            return Ok(Self(value));
        }

        let value = Option::<Json<T>>::from_request(req, state)
            .await?
            .map(|Json(value)| value)
            .unwrap_or_default();
        Ok(Self(value))
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "API for managing projects and resources"
    ),
    paths(
        project::api::get_projects_handler,
        project::api::get_project_handler,
        project::api::get_projects_by_category_handler,
        project::api::create_project_handler,
        project::api::update_project_handler,
        project::api::delete_project_handler,
        resource::api::get_resources_handler,
        resource::api::get_resource_handler,
        resource::api::get_resources_by_category_handler,
        resource::api::create_resource_handler,
        resource::api::update_resource_handler,
        resource::api::delete_resource_handler,
    ),
    components(schemas(
        project::api::ProjectJson,
        project::api::ProjectRequest,
        resource::api::ResourceJson,
        resource::api::ResourceRequest,
        ErrorResponse,
        MessageResponse,
    )),
    tags(
        (name = "Projects", description = "Project management API"),
        (name = "Resources", description = "Resource management API")
    )
)]
pub struct ApiDoc;

/// Creates the API routes for JSON API endpoints.
pub fn create_api_router(state: Arc<AppState>) -> Router {
    let projects_router = project::api::create_api_router(state.clone());
    let resources_router = resource::api::create_api_router(state);
    Router::new().nest("/api", projects_router.merge(resources_router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[tokio::test]
    async fn can_render_error_body_with_message_and_error() {
        let response =
            ApiError::not_found("Project not found", "Project with ID 7 not found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_yaml_snapshot!(error, @r"
        message: Project not found
        error: Project with ID 7 not found
        ");
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Sample {
        title: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Sample, ApiError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(axum::body::Body::from(body)).unwrap();
        RequestBody::<Sample>::from_request(request, &())
            .await
            .map(|RequestBody(sample)| sample)
    }

    #[tokio::test]
    async fn can_extract_missing_body_as_default() {
        assert_eq!(extract(None, "").await.unwrap(), Sample::default());
    }

    #[tokio::test]
    async fn can_extract_json_and_form_bodies() {
        let expected = Sample {
            title: Some("Hello world".to_string()),
        };
        let json = extract(Some("application/json"), r#"{"title":"Hello world"}"#).await;
        let form = extract(
            Some("application/x-www-form-urlencoded"),
            "title=Hello+world",
        )
        .await;

        assert_eq!(json.unwrap(), expected);
        assert_eq!(form.unwrap(), expected);
    }

    #[tokio::test]
    async fn can_reject_malformed_json_body() {
        let err = extract(Some("application/json"), "{\"title\":").await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn can_reject_unsupported_content_type() {
        let err = extract(Some("text/plain"), "title").await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn can_document_every_catalog_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert_eq!(
            paths,
            vec![
                "/api/projects",
                "/api/projects/category/{category}",
                "/api/projects/{id}",
                "/api/resources",
                "/api/resources/category/{category}",
                "/api/resources/{id}",
            ]
        );
    }
}
