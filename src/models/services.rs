use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered image URLs stored as a JSON array. The first entry is the thumbnail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct ImageList(pub Vec<String>);

impl From<Vec<String>> for ImageList {
    fn from(urls: Vec<String>) -> Self {
        Self(urls)
    }
}

/// SeaORM entity for the `services` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(default)]
    pub detailed_description: Option<String>,
    /// Display string such as "from 150 000 ₽", never parsed.
    pub price: String,
    #[sea_orm(column_type = "Json")]
    #[serde(default)]
    pub images: ImageList,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Thumbnail shown on cards, if the service has any imagery at all.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.0.first().map(String::as_str)
    }

    /// The writable part of the record, used to submit a full replacement.
    pub fn to_input(&self) -> ServiceInput {
        ServiceInput {
            name: self.name.clone(),
            description: self.description.clone(),
            detailed_description: self.detailed_description.clone(),
            price: self.price.clone(),
            images: self.images.0.clone(),
        }
    }
}

// ── DTOs ──

/// Body of `POST /services` and `PUT /services/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub price: String,
    #[serde(default)]
    pub images: Vec<String>,
}
