use crate::api::ApiClient;
use crate::error::AppError;

/// Uploads image bytes as multipart form data and returns the public
/// URL issued by the backend.
///
/// Callers hand over bytes already downscaled by
/// `image_processing::prepare_for_upload`; the generated file name keeps
/// uploads from colliding on the server side.
pub async fn upload_image(client: &ApiClient, bytes: Vec<u8>) -> Result<String, AppError> {
    let file_name = format!("{}.jpg", uuid::Uuid::new_v4());
    log::debug!("Uploading image as {} ({} bytes)", file_name, bytes.len());

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("image/jpeg")?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let url = client.post_multipart_text("/images/upload", form).await?;
    if url.is_empty() {
        return Err(AppError::Json(
            "Upload endpoint returned an empty URL".to_string(),
        ));
    }
    Ok(url)
}
