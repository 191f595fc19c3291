use crate::entities::project::Tags;
use crate::entities::*;
use crate::fields;
use chrono::{DateTime, Utc};
use sea_orm::*;

pub mod api;

pub const DEFAULT_ICON: &str = "🚀";
pub const DEFAULT_COLOR: &str = "#4CAF50";
pub const DEFAULT_LINK: &str = "#";

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub category: String,
    pub tags: Vec<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<project::Model> for Project {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            icon: model.icon,
            color: model.color,
            category: model.category,
            tags: model.tags.0,
            link: model.link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Field values supplied by a caller when creating or updating a project.
///
/// Every field is optional here; which ones are required and how absent
/// values are treated depends on the operation.
#[derive(Debug, Clone, Default)]
pub struct ProjectFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub link: Option<String>,
}

/// Error type for ProjectService operations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectServiceError {
    /// Represents a project not found error.
    #[error("Project with ID {0} not found")]
    ProjectNotFound(i32),
    /// Represents a create request without all required fields.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub struct ProjectService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl ProjectService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> ProjectService<'_> {
        ProjectService { db }
    }

    /// Retrieves all projects, ordered by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        let projects = project::Entity::find()
            .order_by_asc(project::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Project::from)
            .collect();
        Ok(projects)
    }

    /// Retrieves a project by its ID.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Project` if found, or `ProjectNotFound` otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_project_by_id(&self, id: i32) -> Result<Project, ProjectServiceError> {
        let model = project::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(id))?;
        Ok(Project::from(model))
    }

    /// Retrieves the projects whose category is exactly `category`.
    #[tracing::instrument(skip(self))]
    pub async fn get_projects_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Project>, ProjectServiceError> {
        let projects = project::Entity::find()
            .filter(project::Column::Category.eq(category))
            .order_by_asc(project::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Project::from)
            .collect();
        Ok(projects)
    }

    /// Creates a new project.
    ///
    /// `title`, `description` and `category` are required. Absent optional
    /// fields take their defaults: [`DEFAULT_ICON`], [`DEFAULT_COLOR`],
    /// [`DEFAULT_LINK`] and no tags.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Project`, or `MissingFields` if any
    /// required field is absent, in which case nothing is stored.
    #[tracing::instrument(skip(self))]
    pub async fn create_project(
        &self,
        values: ProjectFields,
    ) -> Result<Project, ProjectServiceError> {
        let missing = fields::missing_fields(&[
            ("title", &values.title),
            ("description", &values.description),
            ("category", &values.category),
        ]);
        let (Some(title), Some(description), Some(category), true) = (
            values.title,
            values.description,
            values.category,
            missing.is_empty(),
        ) else {
            return Err(ProjectServiceError::MissingFields(missing));
        };

        let now = Utc::now();
        let active_model = project::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            icon: ActiveValue::Set(fields::or_default(values.icon, DEFAULT_ICON)),
            color: ActiveValue::Set(fields::or_default(values.color, DEFAULT_COLOR)),
            category: ActiveValue::Set(category),
            tags: ActiveValue::Set(Tags(values.tags.unwrap_or_default())),
            link: ActiveValue::Set(fields::or_default(values.link, DEFAULT_LINK)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        tracing::info!("Created project {}", created_model.id);
        Ok(Project::from(created_model))
    }

    /// Updates a project by its ID.
    ///
    /// Each string field that is absent or empty keeps its stored value.
    /// `tags` is replaced whenever it is supplied, so an empty list clears it.
    #[tracing::instrument(skip(self))]
    pub async fn update_project_by_id(
        &self,
        id: i32,
        values: ProjectFields,
    ) -> Result<Project, ProjectServiceError> {
        let project_to_update = project::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(id))?;

        let current = project_to_update.clone();
        let mut active_model: project::ActiveModel = project_to_update.into();
        active_model.title =
            ActiveValue::Set(fields::keep_unless_absent(current.title, values.title));
        active_model.description = ActiveValue::Set(fields::keep_unless_absent(
            current.description,
            values.description,
        ));
        active_model.icon = ActiveValue::Set(fields::keep_unless_absent(current.icon, values.icon));
        active_model.color =
            ActiveValue::Set(fields::keep_unless_absent(current.color, values.color));
        active_model.category = ActiveValue::Set(fields::keep_unless_absent(
            current.category,
            values.category,
        ));
        active_model.tags = ActiveValue::Set(values.tags.map(Tags).unwrap_or(current.tags));
        active_model.link = ActiveValue::Set(fields::keep_unless_absent(current.link, values.link));
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let updated_model = active_model.update(self.db).await?;

        Ok(Project::from(updated_model))
    }

    /// Deletes a project by its ID.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deleted `Project` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_project_by_id(&self, id: i32) -> Result<Project, ProjectServiceError> {
        let project_to_delete = project::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(id))?;

        let deleted = Project::from(project_to_delete);
        project::Entity::delete_by_id(id).exec(self.db).await?;
        tracing::info!("Deleted project {}", id);
        Ok(deleted)
    }
}
