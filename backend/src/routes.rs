use std::path::PathBuf;

use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use futures::TryStreamExt;
use log::{error, info, warn};
use serde_json::json;
use shared::ClassificationResult;
use uuid::Uuid;

use crate::detection::{detect_disease, image_digest};
use crate::error::ApiError;

/// Multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct UploadLimits {
    pub max_upload_bytes: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: Option<PathBuf>) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/detect").route(web::post().to(detect)));

    if let Some(dir) = frontend_dir {
        cfg.service(Files::new("/app", dir).index_file("index.html"));
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Plant Leaf Disease Detection API"
    }))
}

async fn detect(
    req: HttpRequest,
    payload: web::Payload,
    limits: web::Data<UploadLimits>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let multipart = Multipart::new(req.headers(), payload);

    match run_detection(request_id, multipart, limits.max_upload_bytes).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            if e.is_client_error() {
                warn!("[{}] Rejected upload: {}", request_id, e);
            } else {
                error!("[{}] Detection failed: {:?}", request_id, e);
            }
            Err(e)
        }
    }
}

async fn run_detection(
    request_id: Uuid,
    multipart: Multipart,
    limit: usize,
) -> Result<ClassificationResult, ApiError> {
    let image_data = read_image_field(multipart, limit).await?;
    info!(
        "[{}] Received {} bytes (sha256 {})",
        request_id,
        image_data.len(),
        image_digest(&image_data)
    );

    let result = web::block(move || detect_disease(&image_data)).await??;
    info!(
        "[{}] {}% diseased pixels -> {}",
        request_id, result.disease_percentage, result.disease_name
    );
    Ok(result)
}

fn accepts_content_type(type_: &str, essence: &str) -> bool {
    type_ == "image" || essence == "application/octet-stream"
}

/// Returns the bytes of the `file` part, skipping any other parts.
async fn read_image_field(mut payload: Multipart, limit: usize) -> Result<Vec<u8>, ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        let is_file = field.content_disposition().and_then(|cd| cd.get_name()) == Some(FILE_FIELD);
        if !is_file {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let rejected = field
            .content_type()
            .filter(|ct| !accepts_content_type(ct.type_().as_str(), ct.essence_str()))
            .map(|ct| ct.to_string());
        if let Some(content_type) = rejected {
            return Err(ApiError::UnsupportedContentType(content_type));
        }

        let mut image_data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if image_data.len() + chunk.len() > limit {
                return Err(ApiError::PayloadTooLarge { limit });
            }
            image_data.extend_from_slice(&chunk);
        }

        if image_data.is_empty() {
            return Err(ApiError::MissingFile(FILE_FIELD));
        }
        return Ok(image_data);
    }

    Err(ApiError::MissingFile(FILE_FIELD))
}
