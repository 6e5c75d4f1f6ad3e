use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt::{self, Claims};
use crate::config::Settings;

/// Extractor guarding every write endpoint: requires a valid admin bearer token.
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let bearer = BearerAuth::extract(&req)
                .await
                .map_err(|_| unauthorized("Authorization header must be: Bearer <token>"))?;

            // 2. Settings carry the signing secret.
            let settings = req.app_data::<web::Data<Settings>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Settings not configured")
            })?;

            // 3. Validate the token.
            let claims = jwt::validate_token(bearer.token(), &settings.jwt_secret).map_err(|e| {
                tracing::warn!("Rejected admin token: {e}");
                unauthorized(&format!("Invalid token: {e}"))
            })?;

            Ok(AdminUser(claims))
        })
    }
}

/// 401 with the `{"detail": ...}` body every error response carries.
fn unauthorized(detail: &str) -> Error {
    InternalError::from_response(
        detail.to_string(),
        HttpResponse::Unauthorized().json(serde_json::json!({ "detail": detail })),
    )
    .into()
}
