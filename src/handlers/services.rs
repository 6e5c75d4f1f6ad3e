use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::services as service_db;
use crate::models::admin::ActionResponse;
use crate::models::services::ServiceInput;

/// GET /api/services — list every service (public).
pub async fn get_services(db: web::Data<DatabaseConnection>) -> impl Responder {
    match service_db::get_all_services(db.get_ref()).await {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(e) => {
            tracing::error!("Failed to fetch services: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Failed to fetch services: {e}"),
            }))
        }
    }
}

/// POST /api/services — create a service (admin only). Returns the stored entity.
pub async fn create_service(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<ServiceInput>,
) -> impl Responder {
    match service_db::insert_service(db.get_ref(), body.into_inner()).await {
        Ok(service) => {
            tracing::info!("Created service {}", service.id);
            HttpResponse::Ok().json(service)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to create service: {e}"),
        })),
    }
}

/// PUT /api/services/{id} — replace a service (admin only).
pub async fn update_service(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<ServiceInput>,
) -> impl Responder {
    let id = path.into_inner();
    match service_db::replace_service(db.get_ref(), id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "detail": "Service not found",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to update service: {e}"),
        })),
    }
}

/// DELETE /api/services/{id} — delete a service (admin only).
pub async fn delete_service(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match service_db::delete_service(db.get_ref(), id).await {
        Ok(result) if result.rows_affected > 0 => {
            tracing::info!("Deleted service {id}");
            HttpResponse::Ok().json(ActionResponse::ok("Service deleted successfully"))
        }
        Ok(_) => HttpResponse::NotFound().json(serde_json::json!({
            "detail": "Service not found",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to delete service: {e}"),
        })),
    }
}
