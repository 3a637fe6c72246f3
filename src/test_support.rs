use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::core::interfaces::adapters::SceneAnalyzer;
use crate::core::interfaces::ports::ImageCapturer;
use crate::core::models::{CameraSettings, CapturedImage, EncodedImage};

pub fn create_png_bytes() -> Vec<u8> {
    let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(8, 8));
    let mut buffer = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
        .unwrap();
    buffer
}

pub fn create_test_settings() -> CameraSettings {
    CameraSettings {
        iso: 800,
        aperture: "f/2".to_string(),
        shutter_speed: "1/125s".to_string(),
        white_balance: "Cloudy".to_string(),
        focal_length: "50mm".to_string(),
        explanation: "陰天光線柔和".to_string(),
        tips: vec!["開大光圈".to_string(), "用反光板補光".to_string()],
    }
}

pub struct MockImageCapturer {
    pub requested_sources: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockImageCapturer {
    pub fn new(should_fail: bool) -> Self {
        Self {
            requested_sources: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }
}

#[async_trait]
impl ImageCapturer for MockImageCapturer {
    async fn capture_image(&self, source: &str) -> Result<CapturedImage> {
        self.requested_sources
            .lock()
            .unwrap()
            .push(source.to_string());
        if self.should_fail {
            anyhow::bail!("camera unavailable");
        }
        CapturedImage::build_from_raw_data(source, create_png_bytes())
    }
}

/// Answers every request with a fixed raw model output, parsed the same way
/// the Gemini adapter parses it.
pub struct MockSceneAnalyzer {
    pub received_images: Arc<Mutex<Vec<EncodedImage>>>,
    raw_model_output: String,
}

impl MockSceneAnalyzer {
    pub fn returning(raw_model_output: &str) -> Self {
        Self {
            received_images: Arc::new(Mutex::new(Vec::new())),
            raw_model_output: raw_model_output.to_string(),
        }
    }

    pub fn returning_settings(settings: &CameraSettings) -> Self {
        Self::returning(&serde_json::to_string(settings).unwrap())
    }

    pub fn get_call_count(&self) -> usize {
        self.received_images.lock().unwrap().len()
    }
}

#[async_trait]
impl SceneAnalyzer for MockSceneAnalyzer {
    async fn analyze_scene(&self, image: &EncodedImage) -> Result<CameraSettings> {
        self.received_images.lock().unwrap().push(image.clone());
        CameraSettings::parse_from_model_output(&self.raw_model_output)
    }
}
