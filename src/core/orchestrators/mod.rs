pub mod app_orchestrator;

pub use app_orchestrator::{AppOrchestrator, Command, OrchestratorMessage};
