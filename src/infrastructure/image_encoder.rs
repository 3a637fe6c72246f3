use anyhow::{Context, Result};
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::core::models::{CapturedImage, EncodedImage};
use crate::global_constants::{
    DATA_URL_BASE64_MARKER, LOG_TAG_ENCODER, UPLOAD_JPEG_QUALITY, UPLOAD_MIME_TYPE,
};

const DATA_URL_PREVIEW_LENGTH: usize = 64;

/// Decodes the captured bytes, shrinks the picture so its longest edge fits
/// `max_dimension`, and re-encodes it as base64 JPEG text.
pub fn prepare_for_upload(image: &CapturedImage, max_dimension: u32) -> Result<EncodedImage> {
    log::debug!(
        "{} preparing '{}' ({}, {} bytes) for upload",
        LOG_TAG_ENCODER,
        image.source_name,
        image.format.mime_type(),
        image.size_bytes()
    );

    let decoded = image::load_from_memory(image.raw_data())
        .with_context(|| format!("Failed to decode image '{}'", image.source_name))?;

    let resized = resize_if_needed(decoded, max_dimension);
    let jpeg_bytes = encode_as_jpeg(&resized)?;
    let base64_data = base64::engine::general_purpose::STANDARD.encode(&jpeg_bytes);

    log::info!(
        "{} encoded {}x{} image, {} base64 characters",
        LOG_TAG_ENCODER,
        resized.width(),
        resized.height(),
        base64_data.len()
    );

    let encoded = EncodedImage::new(UPLOAD_MIME_TYPE, base64_data);
    if log::log_enabled!(log::Level::Trace) {
        let data_url = to_data_url(&encoded);
        log::trace!(
            "{} upload preview {}...",
            LOG_TAG_ENCODER,
            &data_url[..data_url.len().min(DATA_URL_PREVIEW_LENGTH)]
        );
    }

    Ok(encoded)
}

fn resize_if_needed(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());

    if max_dimension == 0 || (width <= max_dimension && height <= max_dimension) {
        return image;
    }

    log::debug!(
        "{} downscaling {}x{} to fit {}",
        LOG_TAG_ENCODER,
        width,
        height,
        max_dimension
    );

    image.resize(
        max_dimension,
        max_dimension,
        image::imageops::FilterType::Lanczos3,
    )
}

fn encode_as_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
    let rgb_image = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, UPLOAD_JPEG_QUALITY);

    rgb_image
        .write_with_encoder(encoder)
        .context("Failed to encode image as JPEG")?;

    Ok(buffer)
}

/// Returns the payload after the first `base64,` marker, or the whole input
/// when there is no data-URL header.
pub fn strip_data_url_prefix(text: &str) -> &str {
    match text.find(DATA_URL_BASE64_MARKER) {
        Some(index) => &text[index + DATA_URL_BASE64_MARKER.len()..],
        None => text,
    }
}

pub fn to_data_url(image: &EncodedImage) -> String {
    format!(
        "data:{};{}{}",
        image.mime_type, DATA_URL_BASE64_MARKER, image.base64_data
    )
}

pub fn is_data_url(text: &str) -> bool {
    text.trim_start().starts_with("data:") && text.contains(DATA_URL_BASE64_MARKER)
}

/// Decodes the base64 payload of a data URL (or of bare base64 text) back
/// into raw image bytes.
pub fn decode_data_url(text: &str) -> Result<Vec<u8>> {
    let payload = strip_data_url_prefix(text.trim());
    if payload.is_empty() {
        anyhow::bail!("Data URL carries no payload");
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .context("Data URL payload is not valid base64")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([10, 200, 120, 128]),
        ));
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn decode_base64(encoded: &EncodedImage) -> DynamicImage {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&encoded.base64_data)
            .unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_prepare_for_upload_converts_png_to_jpeg() {
        let captured = CapturedImage::build_from_raw_data("scene.png", create_png_bytes(32, 16)).unwrap();

        let encoded = prepare_for_upload(&captured, 2048).unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&encoded.base64_data)
            .unwrap();

        assert_eq!(encoded.mime_type, "image/jpeg");
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
        assert!(!encoded.base64_data.contains(DATA_URL_BASE64_MARKER));
    }

    #[test]
    fn test_prepare_for_upload_downscales_large_images_keeping_aspect_ratio() {
        let captured = CapturedImage::build_from_raw_data("wide.png", create_png_bytes(400, 100)).unwrap();

        let encoded = prepare_for_upload(&captured, 200).unwrap();
        let decoded = decode_base64(&encoded);

        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 50);
    }

    #[test]
    fn test_prepare_for_upload_keeps_small_images_untouched() {
        let captured = CapturedImage::build_from_raw_data("small.png", create_png_bytes(40, 30)).unwrap();

        let decoded = decode_base64(&prepare_for_upload(&captured, 200).unwrap());

        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }

    #[test]
    fn test_prepare_for_upload_fails_on_truncated_image() {
        let mut bytes = create_png_bytes(32, 32);
        bytes.truncate(20);
        let captured = CapturedImage::build_from_raw_data("broken.png", bytes).unwrap();

        assert!(prepare_for_upload(&captured, 2048).is_err());
    }

    #[test]
    fn test_strip_data_url_prefix_removes_header() {
        assert_eq!(strip_data_url_prefix("data:image/jpeg;base64,AAAA"), "AAAA");
    }

    #[test]
    fn test_strip_data_url_prefix_leaves_plain_base64_alone() {
        assert_eq!(strip_data_url_prefix("QUJDRA=="), "QUJDRA==");
    }

    #[test]
    fn test_to_data_url_adds_header_that_strip_removes() {
        let encoded = EncodedImage::new("image/jpeg", "QUJDRA==");

        let data_url = to_data_url(&encoded);

        assert_eq!(data_url, "data:image/jpeg;base64,QUJDRA==");
        assert!(is_data_url(&data_url));
        assert_eq!(strip_data_url_prefix(&data_url), encoded.base64_data);
    }

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,AAAA"));
        assert!(!is_data_url("/home/me/photo.jpg"));
        assert!(!is_data_url("data:text/plain,hello"));
    }

    #[test]
    fn test_decode_data_url_returns_original_bytes() {
        let bytes = create_png_bytes(4, 4);
        let data_url = format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&bytes)
        );

        assert_eq!(decode_data_url(&data_url).unwrap(), bytes);
    }

    #[test]
    fn test_decode_data_url_rejects_empty_or_invalid_payload() {
        assert!(decode_data_url("data:image/jpeg;base64,").is_err());
        assert!(decode_data_url("data:image/jpeg;base64,@@@").is_err());
    }
}
