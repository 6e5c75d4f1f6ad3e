use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use futures_util::TryStreamExt;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::config::Settings;
use crate::db::images as image_db;
use crate::models::admin::ActionResponse;
use crate::models::uploaded_images::ImageUploadResponse;
use crate::storage::{StorageError, UploadStore};

/// The `file` part of an upload form, fully buffered.
struct FilePart {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// POST /api/upload-image — store one multipart `file` part (admin only).
/// A missing or non-multipart content type surfaces from the first read as a 400.
pub async fn upload_image(
    _admin: AdminUser,
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    settings: web::Data<Settings>,
    store: web::Data<UploadStore>,
    body: web::Payload,
) -> impl Responder {
    let mut payload = Multipart::new(req.headers(), body);
    let limit = settings.max_upload_bytes as usize;
    let mut file: Option<FilePart> = None;

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "detail": format!("Malformed multipart body: {e}"),
                }));
            }
        };

        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        if disposition.get_name() != Some("file") || file.is_some() {
            continue;
        }
        let filename = disposition.get_filename().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

        let mut bytes = Vec::new();
        loop {
            match field.try_next().await {
                Ok(Some(chunk)) => {
                    if bytes.len() + chunk.len() > limit {
                        tracing::warn!("Rejected upload {filename:?}: over {limit} bytes");
                        return HttpResponse::PayloadTooLarge().json(serde_json::json!({
                            "detail": format!("File exceeds the {limit} byte limit"),
                        }));
                    }
                    bytes.extend_from_slice(&chunk);
                }
                Ok(None) => break,
                Err(e) => {
                    return HttpResponse::BadRequest().json(serde_json::json!({
                        "detail": format!("Failed to read upload: {e}"),
                    }));
                }
            }
        }

        file = Some(FilePart {
            filename,
            content_type,
            bytes,
        });
    }

    let Some(file) = file else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "detail": "Missing multipart field 'file'",
        }));
    };

    let stored = match store
        .save(&file.filename, file.content_type.as_deref(), &file.bytes)
        .await
    {
        Ok(stored) => stored,
        Err(e @ StorageError::NotAnImage(_)) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "detail": e.to_string(),
            }));
        }
        Err(e) => {
            tracing::error!("{e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": e.to_string(),
            }));
        }
    };

    let url = settings.image_url(&stored.filename);
    let filename = stored.filename.clone();
    match image_db::insert_image(db.get_ref(), stored, file.filename, url).await {
        Ok(image) => HttpResponse::Ok().json(ImageUploadResponse {
            success: true,
            message: "Image uploaded successfully".to_string(),
            image: Some(image),
        }),
        Err(e) => {
            // Don't leave an orphaned file behind a failed insert.
            if let Err(cleanup) = store.remove(&filename).await {
                tracing::warn!("Failed to remove {filename} after insert error: {cleanup}");
            }
            HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Failed to record upload: {e}"),
            }))
        }
    }
}

/// GET /api/uploaded-images — list every stored image (public).
pub async fn get_images(db: web::Data<DatabaseConnection>) -> impl Responder {
    match image_db::get_all_images(db.get_ref()).await {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to fetch images: {e}"),
        })),
    }
}

/// DELETE /api/uploaded-images/{id} — drop the record and its file (admin only).
///
/// Services and portfolio items referencing the URL are left as they are.
pub async fn delete_image(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    store: web::Data<UploadStore>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let image = match image_db::get_image_by_id(db.get_ref(), id).await {
        Ok(Some(image)) => image,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "detail": "Image not found",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Database error: {e}"),
            }));
        }
    };

    if let Err(e) = image_db::delete_image(db.get_ref(), id).await {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "detail": format!("Failed to delete image: {e}"),
        }));
    }

    if let Err(e) = store.remove(&image.filename).await {
        tracing::warn!("Image {id} deleted but file {} remains: {e}", image.filename);
    }

    HttpResponse::Ok().json(ActionResponse::ok("Image deleted successfully"))
}
