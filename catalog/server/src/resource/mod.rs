use crate::entities::*;
use crate::fields;
use chrono::{DateTime, Utc};
use sea_orm::*;

pub mod api;

pub const DEFAULT_LINK: &str = "#";

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Resource {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub category: String,
    pub date: String,
    pub author: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<resource::Model> for Resource {
    fn from(model: resource::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            kind: model.kind,
            category: model.category,
            date: model.date,
            author: model.author,
            link: model.link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Field values supplied when creating or updating a resource.
#[derive(Debug, Clone, Default)]
pub struct ResourceFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub link: Option<String>,
}

/// Error type for ResourceService operations.
#[derive(Debug, thiserror::Error)]
pub enum ResourceServiceError {
    /// Represents a resource not found error.
    #[error("Resource with ID {0} not found")]
    ResourceNotFound(i32),
    /// Represents a create request without all required fields.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub struct ResourceService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl ResourceService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> ResourceService<'_> {
        ResourceService { db }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_resources(&self) -> Result<Vec<Resource>, ResourceServiceError> {
        let resources = resource::Entity::find()
            .order_by_asc(resource::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from)
            .collect();
        Ok(resources)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_resource_by_id(&self, id: i32) -> Result<Resource, ResourceServiceError> {
        let model = resource::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ResourceServiceError::ResourceNotFound(id))?;
        Ok(Resource::from(model))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_resources_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Resource>, ResourceServiceError> {
        let resources = resource::Entity::find()
            .filter(resource::Column::Category.eq(category))
            .order_by_asc(resource::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from)
            .collect();
        Ok(resources)
    }

    /// Creates a new resource.
    ///
    /// Every field except `link` is required; an absent link becomes [`DEFAULT_LINK`].
    #[tracing::instrument(skip(self))]
    pub async fn create_resource(
        &self,
        values: ResourceFields,
    ) -> Result<Resource, ResourceServiceError> {
        let missing = fields::missing_fields(&[
            ("title", &values.title),
            ("description", &values.description),
            ("type", &values.kind),
            ("category", &values.category),
            ("date", &values.date),
            ("author", &values.author),
        ]);
        let (
            Some(title),
            Some(description),
            Some(kind),
            Some(category),
            Some(date),
            Some(author),
            true,
        ) = (
            values.title,
            values.description,
            values.kind,
            values.category,
            values.date,
            values.author,
            missing.is_empty(),
        ) else {
            return Err(ResourceServiceError::MissingFields(missing));
        };

        let now = Utc::now();
        let active_model = resource::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            kind: ActiveValue::Set(kind),
            category: ActiveValue::Set(category),
            date: ActiveValue::Set(date),
            author: ActiveValue::Set(author),
            link: ActiveValue::Set(fields::or_default(values.link, DEFAULT_LINK)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        tracing::info!("Created resource {}", created_model.id);
        Ok(Resource::from(created_model))
    }

    /// Updates a resource by its ID. Absent or empty fields keep their stored value.
    #[tracing::instrument(skip(self))]
    pub async fn update_resource_by_id(
        &self,
        id: i32,
        values: ResourceFields,
    ) -> Result<Resource, ResourceServiceError> {
        let resource_to_update = resource::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ResourceServiceError::ResourceNotFound(id))?;

        let current = resource_to_update.clone();
        let mut active_model: resource::ActiveModel = resource_to_update.into();
        active_model.title =
            ActiveValue::Set(fields::keep_unless_absent(current.title, values.title));
        active_model.description = ActiveValue::Set(fields::keep_unless_absent(
            current.description,
            values.description,
        ));
        active_model.kind = ActiveValue::Set(fields::keep_unless_absent(current.kind, values.kind));
        active_model.category = ActiveValue::Set(fields::keep_unless_absent(
            current.category,
            values.category,
        ));
        active_model.date = ActiveValue::Set(fields::keep_unless_absent(current.date, values.date));
        active_model.author =
            ActiveValue::Set(fields::keep_unless_absent(current.author, values.author));
        active_model.link = ActiveValue::Set(fields::keep_unless_absent(current.link, values.link));
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let updated_model = active_model.update(self.db).await?;

        Ok(Resource::from(updated_model))
    }

    /// Deletes a resource by its ID, returning the deleted resource.
    #[tracing::instrument(skip(self))]
    pub async fn delete_resource_by_id(&self, id: i32) -> Result<Resource, ResourceServiceError> {
        let resource_to_delete = resource::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ResourceServiceError::ResourceNotFound(id))?;

        let deleted = Resource::from(resource_to_delete);
        resource::Entity::delete_by_id(id).exec(self.db).await?;
        tracing::info!("Deleted resource {}", id);
        Ok(deleted)
    }
}
