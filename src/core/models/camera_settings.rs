use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Camera settings recommended by the model for a single scene.
///
/// Field names on the wire are camelCase, matching the response schema sent to
/// the model. `focalLength` is not part of the schema's required list, so it
/// falls back to an empty string when the model leaves it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub iso: u32,
    pub aperture: String,
    pub shutter_speed: String,
    pub white_balance: String,
    #[serde(default)]
    pub focal_length: String,
    pub explanation: String,
    pub tips: Vec<String>,
}

impl CameraSettings {
    pub fn parse_from_model_output(json_text: &str) -> Result<Self> {
        let trimmed = json_text.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Model output is empty");
        }

        let settings: CameraSettings = serde_json::from_str(trimmed)
            .context("Model output does not match the camera settings schema")?;

        log::debug!(
            "[CAMERA_SETTINGS] parsed settings: iso={}, aperture={}, shutter={}, tips={}",
            settings.iso,
            settings.aperture,
            settings.shutter_speed,
            settings.tips.len()
        );

        Ok(settings)
    }

    pub fn has_focal_length(&self) -> bool {
        !self.focal_length.trim().is_empty()
    }
}
