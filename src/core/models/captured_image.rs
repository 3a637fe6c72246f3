use anyhow::Result;

use crate::core::models::ImageFormat;

#[derive(Clone)]
pub struct CapturedImage {
    pub source_name: String,
    pub format: ImageFormat,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedImage")
            .field("source_name", &self.source_name)
            .field("format", &self.format)
            .field("size_bytes", &self.raw_data.len())
            .finish()
    }
}

impl CapturedImage {
    pub fn build_from_raw_data(source_name: impl Into<String>, raw_data: Vec<u8>) -> Result<Self> {
        let source_name = source_name.into();

        if raw_data.is_empty() {
            anyhow::bail!("Captured image '{}' is empty", source_name);
        }

        let format = ImageFormat::detect_from_bytes(&raw_data).ok_or_else(|| {
            anyhow::anyhow!("'{}' is not a supported image format", source_name)
        })?;

        log::debug!(
            "[CAPTURED_IMAGE] building image from '{}': {:?}, {} bytes",
            source_name,
            format,
            raw_data.len()
        );

        Ok(Self {
            source_name,
            format,
            raw_data,
        })
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    pub fn size_bytes(&self) -> usize {
        self.raw_data.len()
    }
}
