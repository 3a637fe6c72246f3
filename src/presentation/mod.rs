mod error_view;
mod idle_view;
mod loading_view;
mod settings_card_view;

pub use error_view::render_error_view;
pub use idle_view::render_idle_view;
pub use loading_view::render_loading_view;
pub use settings_card_view::render_settings_card;

use crate::core::models::AppState;

pub fn render_state(state: &AppState) -> String {
    match state {
        AppState::Idle => render_idle_view(),
        AppState::Analyzing => render_loading_view(),
        AppState::Success(settings) => render_settings_card(settings),
        AppState::Error(message) => render_error_view(message),
    }
}
