use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The only row id the `contacts` table ever holds.
pub const SINGLETON_ID: i32 = 1;

/// SeaORM entity for the singleton `contacts` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Company contact record as exchanged over the API (no identifier).
///
/// `GET /contacts` returns it and `PUT /contacts` accepts it as a full
/// replacement; `updatedAt` is ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub phone: String,
    /// Digits only, no leading `+`.
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for Contacts {
    fn from(m: Model) -> Self {
        Self {
            name: m.name,
            tagline: m.tagline,
            phone: m.phone,
            whatsapp: m.whatsapp,
            email: m.email,
            updated_at: Some(m.updated_at),
        }
    }
}

/// Strip everything but ASCII digits, so "+7 (999) 123-45-67" becomes "79991234567".
pub fn normalize_whatsapp(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

impl Contacts {
    /// `https://wa.me/<digits>?text=<message>` link for the chat button.
    pub fn whatsapp_link(&self, text: &str) -> String {
        let digits = normalize_whatsapp(&self.whatsapp);
        let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
        format!("https://wa.me/{digits}?text={encoded}")
    }

    pub fn phone_link(&self) -> Option<String> {
        (!self.phone.is_empty()).then(|| {
            let compact: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
            format!("tel:{compact}")
        })
    }

    pub fn email_link(&self) -> Option<String> {
        (!self.email.is_empty()).then(|| format!("mailto:{}", self.email))
    }
}
