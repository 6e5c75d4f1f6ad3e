use actix_files::Files;
use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::config::Settings;
use crate::handlers;
use crate::storage::UploadStore;

/// Everything the REST service needs, registered on an `App` via `.configure(...)`.
///
/// Shared by `main` and the integration tests so both run the same routes,
/// app data and static file mount.
pub fn configure_app(
    db: DatabaseConnection,
    settings: Settings,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let store = UploadStore::new(settings.upload_dir.clone());
    let uploads_dir = store.dir().to_path_buf();
    let db_data = web::Data::new(db);
    let settings_data = web::Data::new(settings);
    let store_data = web::Data::new(store);

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(db_data.clone())
            .app_data(settings_data.clone())
            .app_data(store_data.clone())
            .app_data(json_config())
            .app_data(path_config())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(Files::new("/uploads", uploads_dir.clone()));
    }
}

/// Malformed JSON bodies answer 422 with the usual `detail` field.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(serde_json::json!({ "detail": detail })),
        )
        .into()
    })
}

/// An id that does not parse can never match a record: 404 like any unknown id.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!("Unparseable path {}: {err}", req.path());
        InternalError::from_response(
            err,
            HttpResponse::NotFound().json(serde_json::json!({ "detail": not_found_detail(req) })),
        )
        .into()
    })
}

fn not_found_detail(req: &HttpRequest) -> &'static str {
    let path = req.path();
    if path.starts_with("/api/services/") {
        "Service not found"
    } else if path.starts_with("/api/portfolio/") {
        "Portfolio item not found"
    } else if path.starts_with("/api/uploaded-images/") {
        "Image not found"
    } else {
        "Not found"
    }
}
