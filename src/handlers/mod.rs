pub mod admin;
pub mod contacts;
pub mod images;
pub mod portfolio;
pub mod services;

use actix_web::{HttpResponse, Responder, web};

/// GET /api/ — liveness banner.
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Knyazhiy Terem API" }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));

    // ── Services (reads public, writes require an admin token) ──
    cfg.service(
        web::resource("/services")
            .route(web::get().to(services::get_services))
            .route(web::post().to(services::create_service)),
    );
    cfg.service(
        web::resource("/services/{id}")
            .route(web::put().to(services::update_service))
            .route(web::delete().to(services::delete_service)),
    );

    // ── Portfolio ──
    cfg.service(
        web::resource("/portfolio")
            .route(web::get().to(portfolio::get_portfolio))
            .route(web::post().to(portfolio::create_portfolio)),
    );
    cfg.service(
        web::resource("/portfolio/{id}")
            .route(web::put().to(portfolio::update_portfolio))
            .route(web::delete().to(portfolio::delete_portfolio)),
    );

    // ── Contacts (singleton) ──
    cfg.service(
        web::resource("/contacts")
            .route(web::get().to(contacts::get_contacts))
            .route(web::put().to(contacts::update_contacts)),
    );

    // ── Admin ──
    cfg.route("/admin/login", web::post().to(admin::login));

    // ── Images ──
    cfg.route("/upload-image", web::post().to(images::upload_image));
    cfg.route("/uploaded-images", web::get().to(images::get_images));
    cfg.route("/uploaded-images/{id}", web::delete().to(images::delete_image));
}
