use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ClassificationResult, DetectionOutcome};

/// Base URL of the detection API, empty for same-origin deployments.
const API_URL: &str = match option_env!("LEAFSPOT_API_URL") {
    Some(url) => url,
    None => "",
};

pub fn detect_url() -> String {
    format!("{}/detect", API_URL.trim_end_matches('/'))
}

/// Uploads `file` as the `file` multipart field and returns the classification,
/// or a message suitable for display.
pub async fn detect(file: &GlooFile) -> Result<ClassificationResult, String> {
    let form_data = web_sys::FormData::new()
        .map_err(|e| format!("Error detecting disease: {:?}", e))?;
    let raw: &web_sys::File = file.as_ref();
    form_data
        .append_with_blob_and_filename("file", raw, &file.name())
        .map_err(|e| format!("Error detecting disease: {:?}", e))?;

    let response = Request::post(&detect_url())
        .body(form_data)
        .map_err(|e| format!("Error detecting disease: {}", e))?
        .send()
        .await
        .map_err(|e| {
            error!(format!("Fetch error: {:?}", e));
            format!("Error detecting disease: {}", e)
        })?;

    let status = response.status();
    match response.json::<DetectionOutcome>().await {
        Ok(DetectionOutcome::Classified(result)) => Ok(result),
        Ok(DetectionOutcome::Failed(failure)) => Err(failure.message),
        Err(e) if response.ok() => Err(format!("Error detecting disease: {}", e)),
        Err(_) => Err(format!("Error detecting disease: HTTP error! status: {}", status)),
    }
}
