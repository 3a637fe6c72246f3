use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::CapturedImage;

#[async_trait]
pub trait ImageCapturer: Send + Sync {
    async fn capture_image(&self, source: &str) -> Result<CapturedImage>;
}
