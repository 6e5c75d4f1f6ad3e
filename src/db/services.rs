use sea_orm::*;
use uuid::Uuid;

use crate::models::services::{self, ServiceInput};

/// Insert a new service with a server-assigned id.
pub async fn insert_service(
    db: &DatabaseConnection,
    input: ServiceInput,
) -> Result<services::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
        detailed_description: Set(input.detailed_description),
        price: Set(input.price),
        images: Set(input.images.into()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_service.insert(db).await
}

/// Fetch all services, oldest first.
pub async fn get_all_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .order_by_asc(services::Column::CreatedAt)
        .order_by_asc(services::Column::Id)
        .all(db)
        .await
}

/// Replace every writable field of a service. `Ok(None)` when the id is unknown.
pub async fn replace_service(
    db: &DatabaseConnection,
    id: Uuid,
    input: ServiceInput,
) -> Result<Option<services::Model>, DbErr> {
    let Some(service) = services::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: services::ActiveModel = service.into();
    active.name = Set(input.name);
    active.description = Set(input.description);
    active.detailed_description = Set(input.detailed_description);
    active.price = Set(input.price);
    active.images = Set(input.images.into());
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map(Some)
}

/// Delete a service by ID.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_by_id(id).exec(db).await
}
