mod scene_analyzer;

pub use scene_analyzer::SceneAnalyzer;
