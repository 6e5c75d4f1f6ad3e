use sea_orm::*;

use crate::models::contacts::{self, Contacts, SINGLETON_ID, normalize_whatsapp};

/// Fetch the company record, if it has been seeded.
pub async fn get_contacts(db: &DatabaseConnection) -> Result<Option<Contacts>, DbErr> {
    Ok(contacts::Entity::find_by_id(SINGLETON_ID)
        .one(db)
        .await?
        .map(Contacts::from))
}

/// Replace the company record, creating the singleton row if it is missing.
pub async fn replace_contacts(db: &DatabaseConnection, input: Contacts) -> Result<Contacts, DbErr> {
    let existing = contacts::Entity::find_by_id(SINGLETON_ID).one(db).await?;

    let row = contacts::ActiveModel {
        id: Set(SINGLETON_ID),
        name: Set(input.name),
        tagline: Set(input.tagline),
        phone: Set(input.phone),
        whatsapp: Set(normalize_whatsapp(&input.whatsapp)),
        email: Set(input.email),
        updated_at: Set(chrono::Utc::now()),
    };

    let saved = match existing {
        Some(_) => row.update(db).await?,
        None => row.insert(db).await?,
    };
    Ok(saved.into())
}
