use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::adapters::GeminiSceneAnalyzer;
use crate::core::interfaces::adapters::SceneAnalyzer;
use crate::core::interfaces::ports::ImageCapturer;
use crate::core::models::{AppState, UserSettings};
use crate::core::orchestrators::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants::{
    LOG_TAG_APP, SESSION_PROMPT_CONTINUE, SESSION_PROMPT_IMAGE_PATH, SESSION_QUIT_COMMAND,
    USER_MESSAGE_ANALYSIS_FAILED,
};
use crate::ports::FileImageCapturer;
use crate::presentation;

pub struct ProLensApp {
    orchestrator: AppOrchestrator,
}

impl ProLensApp {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        log::info!("{} Initializing application", LOG_TAG_APP);

        if settings.api_key.is_none() {
            log::warn!(
                "{} No API key configured, every analysis will fail until one is set",
                LOG_TAG_APP
            );
        }

        let scene_analyzer = Arc::new(GeminiSceneAnalyzer::build(settings)?);

        Ok(Self::with_services(
            Arc::new(FileImageCapturer::initialize()),
            scene_analyzer,
            settings.max_image_dimension,
        ))
    }

    pub fn with_services(
        image_capturer: Arc<dyn ImageCapturer>,
        scene_analyzer: Arc<dyn SceneAnalyzer>,
        max_image_dimension: u32,
    ) -> Self {
        Self {
            orchestrator: AppOrchestrator::build(
                image_capturer,
                scene_analyzer,
                max_image_dimension,
            ),
        }
    }

    /// Runs a single capture-and-analyze cycle. Views go to `output`, or the
    /// settings record as JSON when `as_json` is set. Returns whether the
    /// analysis succeeded.
    pub async fn run_single_analysis(
        &mut self,
        image_source: &str,
        as_json: bool,
        output: &mut impl Write,
        status_output: &mut impl Write,
    ) -> Result<bool> {
        write!(status_output, "{}", presentation::render_loading_view())?;
        status_output.flush()?;

        let state = self
            .orchestrator
            .dispatch(OrchestratorMessage::CaptureRequested(image_source.to_string()))
            .await;

        match state {
            AppState::Success(settings) if as_json => {
                writeln!(output, "{}", serde_json::to_string_pretty(settings)?)?;
            }
            AppState::Success(_) => {
                write!(output, "{}", presentation::render_state(state))?;
            }
            _ => {
                let message = state.error_message().unwrap_or(USER_MESSAGE_ANALYSIS_FAILED);
                log::warn!("{} Analysis of '{}' failed", LOG_TAG_APP, image_source);
                write!(status_output, "{}", presentation::render_error_view(message))?;
            }
        }

        Ok(state.settings().is_some())
    }

    /// Interactive loop: idle prompt, analysis, result, then back to idle
    /// once the user presses Enter. `q` or end of input quits.
    pub async fn run_session<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(output, "\n{}", presentation::render_state(self.orchestrator.state()))?;
            write!(output, "{}", SESSION_PROMPT_IMAGE_PATH)?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let image_source = line.trim();
            if image_source == SESSION_QUIT_COMMAND {
                break;
            }
            if image_source.is_empty() {
                continue;
            }

            write!(output, "{}", presentation::render_loading_view())?;
            output.flush()?;

            let state = self
                .orchestrator
                .dispatch(OrchestratorMessage::CaptureRequested(image_source.to_string()))
                .await;
            write!(output, "\n{}", presentation::render_state(state))?;

            write!(output, "{}", SESSION_PROMPT_CONTINUE)?;
            output.flush()?;

            let answer = lines.next_line().await?;
            self.orchestrator.update(OrchestratorMessage::Reset);

            match answer {
                Some(answer) if answer.trim() != SESSION_QUIT_COMMAND => continue,
                _ => break,
            }
        }

        log::info!("{} Session finished", LOG_TAG_APP);
        Ok(())
    }
}
