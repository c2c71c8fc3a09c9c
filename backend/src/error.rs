use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::DetectionErrorResponse;

use crate::detection::DecodeError;

/// Anything that can go wrong while serving `POST /detect`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("no `{0}` file field in the upload")]
    MissingFile(&'static str),
    #[error("unsupported content type `{0}`, expected an image")]
    UnsupportedContentType(String),
    #[error("upload exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },
    #[error("failed to read upload: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
    #[error("image worker failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ApiError {
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::MissingFile(_) | ApiError::UnsupportedContentType(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Multipart(e) => e.status_code(),
            ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(DetectionErrorResponse::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn error_body_has_standard_shape() {
        let err = ApiError::from(DecodeError::UnknownFormat);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Error processing image: cannot identify image file",
                "is_diseased": false,
                "disease_percentage": 0
            })
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::PayloadTooLarge { limit: 10 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert!(ApiError::MissingFile("file").is_client_error());
        assert!(ApiError::UnsupportedContentType("text/plain".into()).is_client_error());
    }

    #[actix_web::test]
    async fn blocking_pool_failure_is_internal() {
        let err = actix_web::web::block(|| -> u8 { panic!("detection worker died") })
            .await
            .unwrap_err();
        let err = ApiError::from(err);
        assert!(!err.is_client_error());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["is_diseased"], false);
        assert_eq!(json["disease_percentage"], 0);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .starts_with(shared::ERROR_MESSAGE_PREFIX)
        );
    }
}
