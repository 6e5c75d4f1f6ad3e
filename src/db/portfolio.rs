use sea_orm::*;
use uuid::Uuid;

use crate::models::portfolio::{self, PortfolioInput};

/// Insert a new portfolio item.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: PortfolioInput,
) -> Result<portfolio::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_item = portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        image: Set(input.image),
        category: Set(input.category),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_item.insert(db).await
}

/// Fetch all portfolio items, oldest first.
pub async fn get_all_portfolio(db: &DatabaseConnection) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .order_by_asc(portfolio::Column::CreatedAt)
        .order_by_asc(portfolio::Column::Id)
        .all(db)
        .await
}

/// Replace a portfolio item. `Ok(None)` when the id is unknown.
pub async fn replace_portfolio(
    db: &DatabaseConnection,
    id: Uuid,
    input: PortfolioInput,
) -> Result<Option<portfolio::Model>, DbErr> {
    let Some(item) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: portfolio::ActiveModel = item.into();
    active.title = Set(input.title);
    active.image = Set(input.image);
    active.category = Set(input.category);
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map(Some)
}

/// Delete a portfolio item by ID.
pub async fn delete_portfolio(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}
