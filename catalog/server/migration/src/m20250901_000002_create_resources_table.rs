use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    Title,
    Description,
    Type,
    Category,
    Date,
    Author,
    Link,
    CreatedAt,
    UpdatedAt,
}

const IDX_RESOURCES_CATEGORY: &str = "idx-resources-category";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(pk_auto(Resources::Id))
                    .col(string(Resources::Title))
                    .col(text(Resources::Description))
                    .col(string(Resources::Type))
                    .col(string(Resources::Category))
                    .col(string(Resources::Date))
                    .col(string(Resources::Author))
                    .col(string(Resources::Link).default("#"))
                    .col(
                        timestamp_with_time_zone(Resources::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Resources::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_RESOURCES_CATEGORY)
                    .table(Resources::Table)
                    .col(Resources::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table takes the category index with it.
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await
    }
}
