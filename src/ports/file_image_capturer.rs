use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::interfaces::ports::ImageCapturer;
use crate::core::models::CapturedImage;
use crate::global_constants::LOG_TAG_CAPTURE;
use crate::infrastructure::image_encoder;

/// Acquires image bytes from a file path, or from an inline
/// `data:image/...;base64,` URL.
pub struct FileImageCapturer;

impl FileImageCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing file image capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn resolve_path(&self, source: &str) -> Result<PathBuf> {
        let trimmed = source.trim().trim_matches(|c| c == '"' || c == '\'');
        if trimmed.is_empty() {
            anyhow::bail!("No image path given");
        }

        Ok(PathBuf::from(trimmed))
    }

    async fn read_image_file(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file {:?}", path))
    }
}

#[async_trait]
impl ImageCapturer for FileImageCapturer {
    async fn capture_image(&self, source: &str) -> Result<CapturedImage> {
        if image_encoder::is_data_url(source) {
            log::debug!("{} capturing image from inline data URL", LOG_TAG_CAPTURE);
            let raw_data = image_encoder::decode_data_url(source)?;
            return CapturedImage::build_from_raw_data("inline data URL", raw_data);
        }

        let path = self.resolve_path(source)?;
        log::debug!("{} capturing image from {:?}", LOG_TAG_CAPTURE, path);

        let raw_data = self.read_image_file(&path).await?;
        let captured_image =
            CapturedImage::build_from_raw_data(path.display().to_string(), raw_data)?;

        log::info!(
            "{} captured {:?} image, {} bytes",
            LOG_TAG_CAPTURE,
            captured_image.format,
            captured_image.size_bytes()
        );

        Ok(captured_image)
    }
}
