use actix_web::{HttpResponse, Responder, web};

use crate::auth::jwt;
use crate::config::Settings;
use crate::models::admin::{AdminLogin, AdminResponse};

/// POST /api/admin/login — check the shared credential pair and issue a session token.
///
/// Wrong credentials are not an HTTP error: the body says `success: false`.
pub async fn login(settings: web::Data<Settings>, body: web::Json<AdminLogin>) -> impl Responder {
    let AdminLogin { login, password } = body.into_inner();

    let accepted = !login.is_empty()
        && !password.is_empty()
        && login == settings.admin_login
        && password == settings.admin_password;

    if !accepted {
        tracing::warn!("Rejected admin login for {login:?}");
        return HttpResponse::Ok().json(AdminResponse {
            success: false,
            message: "Invalid credentials".to_string(),
            token: None,
            issued_at: None,
            expires_at: None,
        });
    }

    match jwt::issue_token(&login, &settings.jwt_secret, settings.session_ttl_secs) {
        Ok(issued) => {
            tracing::info!("Admin {login:?} logged in");
            HttpResponse::Ok().json(AdminResponse {
                success: true,
                message: "Login successful".to_string(),
                token: Some(issued.token),
                issued_at: Some(issued.issued_at),
                expires_at: Some(issued.expires_at),
            })
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": e,
        })),
    }
}
