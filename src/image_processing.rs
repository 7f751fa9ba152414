use crate::error::AppError;
use base64::Engine;
use std::io::Cursor;
use std::path::Path;

/// Longest edge an uploaded photo may have
const MAX_UPLOAD_DIMENSION: u32 = 1280;

/// Simple MIME type from the file extension
fn guess_mime_from_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}

/// Reads an image from `path` and returns a data URL (Base64) for
/// in-form previews.
pub fn image_path_to_data_url(path: &str) -> Result<String, AppError> {
    let p = Path::new(path);
    let mime = guess_mime_from_ext(p);
    let data = std::fs::read(p)
        .map_err(|e| AppError::Image(format!("Failed to read image: {}", e)))?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(data);
    Ok(format!("data:{};base64,{}", mime, b64))
}

/// Loads a local photo, downscales it to at most
/// `MAX_UPLOAD_DIMENSION` on the longest edge and re-encodes it as JPEG
/// for upload.
pub fn prepare_for_upload(path: &str) -> Result<Vec<u8>, AppError> {
    let img = image::open(path)
        .map_err(|e| AppError::Image(format!("Failed to open image: {}", e)))?;

    let (width, height) = image::GenericImageView::dimensions(&img);
    let (new_width, new_height) =
        calculate_resize_dimensions(width, height, MAX_UPLOAD_DIMENSION, MAX_UPLOAD_DIMENSION);

    let img = if (new_width, new_height) != (width, height) {
        img.thumbnail(new_width, new_height)
    } else {
        img
    };

    let mut buffer = Cursor::new(Vec::new());
    img.to_rgb8()
        .write_to(&mut buffer, image::ImageFormat::Jpeg)
        .map_err(|e| AppError::Image(format!("Failed to encode JPEG: {}", e)))?;

    Ok(buffer.into_inner())
}

/// Resize an image maintaining aspect ratio
fn calculate_resize_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    let ratio =
        (original_width as f32 / max_width as f32).max(original_height as f32 / max_height as f32);

    if ratio > 1.0 {
        let new_width = (original_width as f32 / ratio) as u32;
        let new_height = (original_height as f32 / ratio) as u32;
        (new_width, new_height)
    } else {
        (original_width, original_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_dimensions() {
        // Image larger than max
        let (w, h) = calculate_resize_dimensions(2000, 1500, 1024, 1024);
        assert!(w <= 1024);
        assert!(h <= 1024);
        assert_eq!(w as f32 / h as f32, 2000.0 / 1500.0); // Maintain aspect ratio

        // Image smaller than max
        let (w, h) = calculate_resize_dimensions(800, 600, 1024, 1024);
        assert_eq!(w, 800);
        assert_eq!(h, 600);
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(guess_mime_from_ext(Path::new("a.PNG")), "image/png");
        assert_eq!(guess_mime_from_ext(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(guess_mime_from_ext(Path::new("photo")), "image/jpeg");
    }
}
