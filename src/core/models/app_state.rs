use std::fmt;

use crate::core::models::CameraSettings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Idle,
    Analyzing,
    Success(CameraSettings),
    Error(String),
}

impl AppState {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, AppState::Analyzing)
    }

    pub fn settings(&self) -> Option<&CameraSettings> {
        match self {
            AppState::Success(settings) => Some(settings),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AppState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppState::Idle => write!(f, "IDLE"),
            AppState::Analyzing => write!(f, "ANALYZING"),
            AppState::Success(_) => write!(f, "SUCCESS"),
            AppState::Error(_) => write!(f, "ERROR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default_is_idle() {
        assert_eq!(AppState::default(), AppState::Idle);
    }

    #[test]
    fn test_app_state_display_names() {
        assert_eq!(AppState::Idle.to_string(), "IDLE");
        assert_eq!(AppState::Analyzing.to_string(), "ANALYZING");
        assert_eq!(AppState::Error("x".to_string()).to_string(), "ERROR");
    }

    #[test]
    fn test_error_message_only_present_in_error_state() {
        assert_eq!(
            AppState::Error("boom".to_string()).error_message(),
            Some("boom")
        );
        assert_eq!(AppState::Idle.error_message(), None);
        assert!(AppState::Analyzing.settings().is_none());
    }
}
