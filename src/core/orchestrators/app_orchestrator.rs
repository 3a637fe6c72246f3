use std::sync::Arc;

use crate::core::interfaces::adapters::SceneAnalyzer;
use crate::core::interfaces::ports::ImageCapturer;
use crate::core::models::{AppState, CameraSettings, CapturedImage};
use crate::global_constants::{LOG_TAG_ORCHESTRATOR, USER_MESSAGE_ANALYSIS_FAILED};
use crate::infrastructure::image_encoder;

#[derive(Clone)]
pub enum OrchestratorMessage {
    CaptureRequested(String),
    ImageCaptured(CapturedImage),
    CaptureFailed(String),
    AnalysisComplete(Result<CameraSettings, String>),
    Reset,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::CaptureRequested(source) => {
                if image_encoder::is_data_url(source) {
                    write!(f, "CaptureRequested(<data url>)")
                } else {
                    write!(f, "CaptureRequested({})", source)
                }
            }
            OrchestratorMessage::ImageCaptured(image) => {
                write!(f, "ImageCaptured({})", image.source_name)
            }
            OrchestratorMessage::CaptureFailed(e) => write!(f, "CaptureFailed({})", e),
            OrchestratorMessage::AnalysisComplete(result) => {
                write!(f, "AnalysisComplete({:?})", result.is_ok())
            }
            OrchestratorMessage::Reset => write!(f, "Reset"),
        }
    }
}

/// Side effect requested by `update`; `perform` runs it and produces the
/// follow-up message.
#[derive(Debug)]
pub enum Command {
    None,
    Capture(String),
    Analyze(CapturedImage),
}

pub struct AppOrchestrator {
    image_capturer: Arc<dyn ImageCapturer>,
    scene_analyzer: Arc<dyn SceneAnalyzer>,
    max_image_dimension: u32,
    state: AppState,
}

impl AppOrchestrator {
    pub fn build(
        image_capturer: Arc<dyn ImageCapturer>,
        scene_analyzer: Arc<dyn SceneAnalyzer>,
        max_image_dimension: u32,
    ) -> Self {
        Self {
            image_capturer,
            scene_analyzer,
            max_image_dimension,
            state: AppState::Idle,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Command {
        log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            OrchestratorMessage::CaptureRequested(source) => self.handle_capture_requested(source),
            OrchestratorMessage::ImageCaptured(image) => self.handle_image_captured(image),
            OrchestratorMessage::CaptureFailed(error) => {
                self.handle_failure(&format!("capture failed: {}", error));
                Command::None
            }
            OrchestratorMessage::AnalysisComplete(result) => {
                self.handle_analysis_complete(result);
                Command::None
            }
            OrchestratorMessage::Reset => {
                self.reset();
                Command::None
            }
        }
    }

    pub async fn perform(&self, command: Command) -> Option<OrchestratorMessage> {
        match command {
            Command::None => None,
            Command::Capture(source) => Some(self.perform_capture(&source).await),
            Command::Analyze(image) => Some(self.perform_analysis(&image).await),
        }
    }

    /// Feeds `message` through the state machine and keeps performing the
    /// resulting commands until nothing is left to do.
    pub async fn dispatch(&mut self, message: OrchestratorMessage) -> &AppState {
        let mut next_message = Some(message);

        while let Some(message) = next_message {
            let command = self.update(message);
            next_message = self.perform(command).await;
        }

        &self.state
    }

    pub fn reset(&mut self) {
        log::info!(
            "{} Resetting from {} to {}",
            LOG_TAG_ORCHESTRATOR,
            self.state,
            AppState::Idle
        );
        self.state = AppState::Idle;
    }

    fn handle_capture_requested(&mut self, source: String) -> Command {
        if self.state.is_analyzing() {
            log::warn!(
                "{} Analysis already in flight, ignoring capture request",
                LOG_TAG_ORCHESTRATOR
            );
            return Command::None;
        }

        self.state = AppState::Analyzing;
        Command::Capture(source)
    }

    fn handle_image_captured(&mut self, image: CapturedImage) -> Command {
        if !self.state.is_analyzing() {
            log::warn!(
                "{} Discarding captured image while {}",
                LOG_TAG_ORCHESTRATOR,
                self.state
            );
            return Command::None;
        }

        Command::Analyze(image)
    }

    fn handle_analysis_complete(&mut self, result: Result<CameraSettings, String>) {
        if !self.state.is_analyzing() {
            log::warn!(
                "{} Discarding analysis result while {}",
                LOG_TAG_ORCHESTRATOR,
                self.state
            );
            return;
        }

        match result {
            Ok(settings) => {
                log::info!(
                    "{} Analysis succeeded with {} tips",
                    LOG_TAG_ORCHESTRATOR,
                    settings.tips.len()
                );
                self.state = AppState::Success(settings);
            }
            Err(error) => self.handle_failure(&error),
        }
    }

    fn handle_failure(&mut self, error: &str) {
        if !self.state.is_analyzing() {
            log::warn!(
                "{} Discarding failure while {}: {}",
                LOG_TAG_ORCHESTRATOR,
                self.state,
                error
            );
            return;
        }

        log::error!("{} Analysis failed: {}", LOG_TAG_ORCHESTRATOR, error);
        self.state = AppState::Error(USER_MESSAGE_ANALYSIS_FAILED.to_string());
    }

    async fn perform_capture(&self, source: &str) -> OrchestratorMessage {
        match self.image_capturer.capture_image(source).await {
            Ok(image) => OrchestratorMessage::ImageCaptured(image),
            Err(e) => OrchestratorMessage::CaptureFailed(format!("{:#}", e)),
        }
    }

    async fn perform_analysis(&self, image: &CapturedImage) -> OrchestratorMessage {
        let encoded_image = match image_encoder::prepare_for_upload(image, self.max_image_dimension)
        {
            Ok(encoded_image) => encoded_image,
            Err(e) => {
                return OrchestratorMessage::AnalysisComplete(Err(format!(
                    "encoding failed: {:#}",
                    e
                )))
            }
        };

        let result = self
            .scene_analyzer
            .analyze_scene(&encoded_image)
            .await
            .map_err(|e| format!("{:#}", e));

        OrchestratorMessage::AnalysisComplete(result)
    }
}
