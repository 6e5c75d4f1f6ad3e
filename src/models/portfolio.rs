use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolio` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub image: String,
    /// Free-text label, e.g. "Saunas" or "Furniture".
    pub category: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_input(&self) -> PortfolioInput {
        PortfolioInput {
            title: self.title.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
        }
    }
}

// ── DTOs ──

/// Body of `POST /portfolio` and `PUT /portfolio/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioInput {
    pub title: String,
    pub image: String,
    pub category: String,
}

/// Distinct categories in first-seen order.
pub fn categories(items: &[Model]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item.category.as_str()) {
            seen.push(item.category.as_str());
        }
    }
    seen
}
