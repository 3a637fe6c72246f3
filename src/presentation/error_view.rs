use crate::global_constants::{
    USER_MESSAGE_ANALYSIS_FAILED, USER_MESSAGE_ERROR_TITLE, USER_MESSAGE_RETRY,
};

pub fn render_error_view(message: &str) -> String {
    let message = if message.trim().is_empty() {
        USER_MESSAGE_ANALYSIS_FAILED
    } else {
        message
    };

    format!(
        "⚠ {}\n{}\n[{}]\n",
        USER_MESSAGE_ERROR_TITLE, message, USER_MESSAGE_RETRY
    )
}
