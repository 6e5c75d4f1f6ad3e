use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AdminUser;
use crate::db::contacts as contacts_db;
use crate::models::contacts::Contacts;

/// GET /api/contacts — the company record (public).
pub async fn get_contacts(db: web::Data<DatabaseConnection>) -> impl Responder {
    match contacts_db::get_contacts(db.get_ref()).await {
        Ok(Some(contacts)) => HttpResponse::Ok().json(contacts),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "detail": "Contacts not found",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/contacts — replace the company record (admin only).
pub async fn update_contacts(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<Contacts>,
) -> impl Responder {
    match contacts_db::replace_contacts(db.get_ref(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to update contacts: {e}"),
        })),
    }
}
