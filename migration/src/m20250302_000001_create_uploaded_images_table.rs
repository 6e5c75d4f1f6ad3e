use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum UploadedImages {
    Table,
    Id,
    Filename,
    OriginalFilename,
    Url,
    Size,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UploadedImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UploadedImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UploadedImages::Filename)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UploadedImages::OriginalFilename)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UploadedImages::Url).string().not_null())
                    .col(ColumnDef::new(UploadedImages::Size).big_integer().not_null())
                    .col(
                        ColumnDef::new(UploadedImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadedImages::Table).to_owned())
            .await
    }
}
