use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{CameraSettings, EncodedImage};

#[async_trait]
pub trait SceneAnalyzer: Send + Sync {
    async fn analyze_scene(&self, image: &EncodedImage) -> Result<CameraSettings>;
}
