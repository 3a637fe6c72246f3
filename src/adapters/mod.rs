mod analysis_error;
mod gemini_scene_analyzer;

pub use analysis_error::AnalysisError;
pub use gemini_scene_analyzer::GeminiSceneAnalyzer;
