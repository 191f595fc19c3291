use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Icon,
    Color,
    Category,
    Tags,
    Link,
    CreatedAt,
    UpdatedAt,
}

const IDX_PROJECTS_CATEGORY: &str = "idx-projects-category";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string(Projects::Title))
                    .col(text(Projects::Description))
                    .col(string(Projects::Icon).default("🚀"))
                    .col(string(Projects::Color).default("#4CAF50"))
                    .col(string(Projects::Category))
                    .col(json(Projects::Tags))
                    .col(string(Projects::Link).default("#"))
                    .col(
                        timestamp_with_time_zone(Projects::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Projects::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_PROJECTS_CATEGORY)
                    .table(Projects::Table)
                    .col(Projects::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table takes the category index with it.
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}
