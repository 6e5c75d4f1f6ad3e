use sea_orm::*;
use uuid::Uuid;

use crate::models::uploaded_images;
use crate::storage::StoredFile;

/// Record a file that was just written to the upload directory.
pub async fn insert_image(
    db: &DatabaseConnection,
    stored: StoredFile,
    original_filename: String,
    url: String,
) -> Result<uploaded_images::Model, DbErr> {
    let image = uploaded_images::ActiveModel {
        id: Set(stored.id),
        filename: Set(stored.filename),
        original_filename: Set(original_filename),
        url: Set(url),
        size: Set(stored.size),
        created_at: Set(chrono::Utc::now()),
    };

    image.insert(db).await
}

/// Fetch all uploaded images, oldest first.
pub async fn get_all_images(
    db: &DatabaseConnection,
) -> Result<Vec<uploaded_images::Model>, DbErr> {
    uploaded_images::Entity::find()
        .order_by_asc(uploaded_images::Column::CreatedAt)
        .order_by_asc(uploaded_images::Column::Id)
        .all(db)
        .await
}

pub async fn get_image_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<uploaded_images::Model>, DbErr> {
    uploaded_images::Entity::find_by_id(id).one(db).await
}

pub async fn delete_image(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    uploaded_images::Entity::delete_by_id(id).exec(db).await
}
