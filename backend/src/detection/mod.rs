pub mod classifier;
pub mod decoder;
pub mod hsv;

use sha2::{Digest, Sha256};
use shared::ClassificationResult;

pub use decoder::DecodeError;

/// Decodes an uploaded image and classifies it.
pub fn detect_disease(image_bytes: &[u8]) -> Result<ClassificationResult, DecodeError> {
    let image = decoder::decode(image_bytes)?;
    let result = classifier::classify(&image);
    log::debug!(
        "{}x{} image: {}% in disease band -> {}",
        image.width(),
        image.height(),
        result.disease_percentage,
        result.disease_name
    );
    Ok(result)
}

/// Short SHA-256 fingerprint of an upload, for log correlation.
pub fn image_digest(image_bytes: &[u8]) -> String {
    let digest = Sha256::digest(image_bytes);
    hex::encode(&digest[..8])
}
