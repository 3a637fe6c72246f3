use crate::global_constants::{
    APPLICATION_NAME, APPLICATION_VERSION_LABEL, USER_MESSAGE_IDLE_HINT,
};

pub fn render_idle_view() -> String {
    format!(
        "📷 {} ({})\n{}\n",
        APPLICATION_NAME, APPLICATION_VERSION_LABEL, USER_MESSAGE_IDLE_HINT
    )
}
