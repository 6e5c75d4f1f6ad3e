use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Services {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UploadedImages {
    Table,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every list endpoint orders by creation time.
        manager
            .create_index(
                Index::create()
                    .name("idx_services_created_at")
                    .table(Services::Table)
                    .col(Services::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_created_at")
                    .table(Portfolio::Table)
                    .col(Portfolio::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_uploaded_images_created_at")
                    .table(UploadedImages::Table)
                    .col(UploadedImages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_uploaded_images_created_at")
                    .table(UploadedImages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolio_created_at")
                    .table(Portfolio::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_services_created_at")
                    .table(Services::Table)
                    .to_owned(),
            )
            .await
    }
}
