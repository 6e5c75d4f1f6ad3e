use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::portfolio as portfolio_db;
use crate::models::admin::ActionResponse;
use crate::models::portfolio::PortfolioInput;

/// GET /api/portfolio — list every portfolio item (public).
pub async fn get_portfolio(db: web::Data<DatabaseConnection>) -> impl Responder {
    match portfolio_db::get_all_portfolio(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            tracing::error!("Failed to fetch portfolio: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Failed to fetch portfolio: {e}"),
            }))
        }
    }
}

/// POST /api/portfolio — create a portfolio item (admin only).
pub async fn create_portfolio(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<PortfolioInput>,
) -> impl Responder {
    match portfolio_db::insert_portfolio(db.get_ref(), body.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to create portfolio item: {e}"),
        })),
    }
}

/// PUT /api/portfolio/{id} — replace a portfolio item (admin only).
pub async fn update_portfolio(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<PortfolioInput>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::replace_portfolio(db.get_ref(), id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "detail": "Portfolio item not found",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to update portfolio item: {e}"),
        })),
    }
}

/// DELETE /api/portfolio/{id} — delete a portfolio item (admin only).
pub async fn delete_portfolio(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::delete_portfolio(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(ActionResponse::ok("Portfolio item deleted successfully"))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "detail": "Portfolio item not found",
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to delete portfolio item: {e}"),
        })),
    }
}
