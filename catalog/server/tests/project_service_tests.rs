use catalog_server::entities::project;
use catalog_server::entities::project::Tags;
use catalog_server::project::{ProjectFields, ProjectService, ProjectServiceError};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

mod common;

pub struct TestContext {
    pub db: DatabaseConnection,
}

async fn setup() -> anyhow::Result<TestContext> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let db = common::setup_db().await?;
    Ok(TestContext { db })
}

fn full_fields() -> ProjectFields {
    ProjectFields {
        title: Some("Data Visualization Platform".to_string()),
        description: Some("Dashboards for everyone".to_string()),
        icon: Some("📊".to_string()),
        color: Some("#8BC34A".to_string()),
        category: Some("Website".to_string()),
        tags: Some(vec!["D3.js".to_string(), "Vue.js".to_string()]),
        link: Some("https://example.com/dataviz".to_string()),
    }
}

/// Inserts a project directly through the entity, bypassing the service.
async fn insert_project(db: &DatabaseConnection, title: &str, category: &str) -> project::Model {
    let now = Utc::now();
    project::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(format!("{} description", title)),
        icon: ActiveValue::Set("🧩".to_string()),
        color: ActiveValue::Set("#66BB6A".to_string()),
        category: ActiveValue::Set(category.to_string()),
        tags: ActiveValue::Set(Tags(vec!["Rust".to_string()])),
        link: ActiveValue::Set("#".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert project")
}

#[tokio::test]
async fn can_create_project_with_all_fields() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ProjectService::new(&state.db);

    let created = service
        .create_project(full_fields())
        .await
        .expect("Failed to create project");

    assert_eq!(created.title, "Data Visualization Platform");
    assert_eq!(created.icon, "📊");
    assert_eq!(created.color, "#8BC34A");
    assert_eq!(created.category, "Website");
    assert_eq!(created.tags, vec!["D3.js", "Vue.js"]);
    assert_eq!(created.link, "https://example.com/dataviz");
    assert_eq!(created.created_at, created.updated_at);

    let stored = service
        .get_project_by_id(created.id)
        .await
        .expect("Failed to get project");
    assert_eq!(stored, created);
}

#[tokio::test]
async fn can_apply_defaults_to_omitted_optional_fields() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ProjectService::new(&state.db);

    let created = service
        .create_project(ProjectFields {
            title: Some("Developer Toolkit".to_string()),
            description: Some("Tools".to_string()),
            category: Some("Tool".to_string()),
            icon: Some(String::new()),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    assert_eq!(created.icon, "🚀");
    assert_eq!(created.color, "#4CAF50");
    assert_eq!(created.link, "#");
    assert!(created.tags.is_empty());
}

#[tokio::test]
async fn can_reject_project_missing_required_fields() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ProjectService::new(&state.db);

    let result = service
        .create_project(ProjectFields {
            title: Some("No category".to_string()),
            description: Some(String::new()),
            ..Default::default()
        })
        .await;

    match result {
        Err(ProjectServiceError::MissingFields(missing)) => {
            assert_eq!(missing, vec!["description", "category"]);
        }
        other => panic!("Expected MissingFields, got {:?}", other),
    }

    let count = project::Entity::find()
        .count(&state.db)
        .await
        .expect("Failed to count projects");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn can_handle_get_when_project_not_found() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ProjectService::new(&state.db);

    let result = service.get_project_by_id(999).await;

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Project with ID 999 not found");
    }
}

#[tokio::test]
async fn can_get_all_projects_in_id_order() {
    let state = setup().await.expect("Failed to setup test context");
    let first = insert_project(&state.db, "First", "Tool").await;
    let second = insert_project(&state.db, "Second", "Website").await;
    let service = ProjectService::new(&state.db);

    let projects = service
        .get_all_projects()
        .await
        .expect("Failed to get all projects");

    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn can_handle_empty_projects_list() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ProjectService::new(&state.db);

    let projects = service
        .get_all_projects()
        .await
        .expect("Failed to get all projects");

    assert!(projects.is_empty());
}

#[tokio::test]
async fn can_filter_projects_by_exact_category() {
    let state = setup().await.expect("Failed to setup test context");
    let tool_a = insert_project(&state.db, "Tool A", "Tool").await;
    insert_project(&state.db, "Site", "Website").await;
    let tool_b = insert_project(&state.db, "Tool B", "Tool").await;
    insert_project(&state.db, "Lowercase tool", "tool").await;
    let service = ProjectService::new(&state.db);

    let tools = service
        .get_projects_by_category("Tool")
        .await
        .expect("Failed to filter projects");

    let ids: Vec<i32> = tools.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![tool_a.id, tool_b.id]);
    assert!(tools.iter().all(|p| p.category == "Tool"));

    let none = service
        .get_projects_by_category("Games")
        .await
        .expect("Failed to filter projects");
    assert!(none.is_empty());
}

#[tokio::test]
async fn can_update_only_supplied_fields() {
    let state = setup().await.expect("Failed to setup test context");
    let existing = insert_project(&state.db, "Original", "Tool").await;
    let service = ProjectService::new(&state.db);

    let updated = service
        .update_project_by_id(
            existing.id,
            ProjectFields {
                title: Some("Renamed".to_string()),
                color: Some("#000000".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update project");

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.color, "#000000");
    assert_eq!(updated.description, existing.description);
    assert_eq!(updated.icon, existing.icon);
    assert_eq!(updated.category, existing.category);
    assert_eq!(updated.tags, existing.tags.0);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at >= existing.updated_at);
}

#[tokio::test]
async fn can_keep_existing_values_when_update_fields_are_empty() {
    let state = setup().await.expect("Failed to setup test context");
    let existing = insert_project(&state.db, "Keep me", "Tool").await;
    let service = ProjectService::new(&state.db);

    let updated = service
        .update_project_by_id(
            existing.id,
            ProjectFields {
                title: Some(String::new()),
                description: Some(String::new()),
                link: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update project");

    assert_eq!(updated.title, "Keep me");
    assert_eq!(updated.description, existing.description);
    assert_eq!(updated.link, "#");
}

#[tokio::test]
async fn can_clear_tags_with_empty_list() {
    let state = setup().await.expect("Failed to setup test context");
    let existing = insert_project(&state.db, "Tagged", "Tool").await;
    let service = ProjectService::new(&state.db);

    let updated = service
        .update_project_by_id(
            existing.id,
            ProjectFields {
                tags: Some(Vec::new()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update project");

    assert!(updated.tags.is_empty());
}

#[tokio::test]
async fn can_handle_update_when_project_not_found() {
    let state = setup().await.expect("Failed to setup test context");
    let existing = insert_project(&state.db, "Exists", "Tool").await;
    let service = ProjectService::new(&state.db);

    let non_existent_id = existing.id + 1;
    let result = service
        .update_project_by_id(non_existent_id, full_fields())
        .await;

    assert!(matches!(
        result,
        Err(ProjectServiceError::ProjectNotFound(id)) if id == non_existent_id
    ));
}

#[tokio::test]
async fn can_delete_project() {
    let state = setup().await.expect("Failed to setup test context");
    let existing = insert_project(&state.db, "Doomed", "Tool").await;
    let service = ProjectService::new(&state.db);

    let deleted = service
        .delete_project_by_id(existing.id)
        .await
        .expect("Failed to delete project");
    assert_eq!(deleted.id, existing.id);
    assert_eq!(deleted.title, "Doomed");

    let result = service.get_project_by_id(existing.id).await;
    assert!(matches!(result, Err(ProjectServiceError::ProjectNotFound(_))));
}

#[tokio::test]
async fn can_handle_delete_when_project_not_found() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ProjectService::new(&state.db);

    let result = service.delete_project_by_id(42).await;

    assert!(matches!(
        result,
        Err(ProjectServiceError::ProjectNotFound(42))
    ));
}
