use crate::core::models::CameraSettings;
use crate::global_constants::{
    USER_MESSAGE_EXPLANATION_TITLE, USER_MESSAGE_MISSING_VALUE, USER_MESSAGE_SETTINGS_TITLE,
    USER_MESSAGE_TAKE_ANOTHER, USER_MESSAGE_TIPS_TITLE,
};

const LABEL_WIDTH: usize = 14;

fn display_value(value: &str) -> &str {
    if value.trim().is_empty() {
        USER_MESSAGE_MISSING_VALUE
    } else {
        value
    }
}

fn render_settings_item(label: &str, value: &str) -> String {
    format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH)
}

/// Text rendering of the recommendation card: the five camera settings,
/// the explanation and every tip in order.
pub fn render_settings_card(settings: &CameraSettings) -> String {
    let mut rendered = format!("━━ {} ━━ AI PRO MODE\n", USER_MESSAGE_SETTINGS_TITLE);

    rendered.push_str(&render_settings_item(
        "Shutter",
        display_value(&settings.shutter_speed),
    ));
    rendered.push_str(&render_settings_item(
        "Aperture",
        display_value(&settings.aperture),
    ));
    rendered.push_str(&render_settings_item("ISO", &settings.iso.to_string()));
    rendered.push_str(&render_settings_item(
        "WB",
        display_value(&settings.white_balance),
    ));
    let focal_length = if settings.has_focal_length() {
        settings.focal_length.as_str()
    } else {
        USER_MESSAGE_MISSING_VALUE
    };
    rendered.push_str(&render_settings_item("Focal Length", focal_length));

    rendered.push('\n');
    rendered.push_str(USER_MESSAGE_EXPLANATION_TITLE);
    rendered.push('\n');
    rendered.push_str(&format!("  {}\n", display_value(&settings.explanation)));

    rendered.push('\n');
    rendered.push_str(USER_MESSAGE_TIPS_TITLE);
    rendered.push('\n');
    for tip in &settings.tips {
        rendered.push_str(&format!("  • {}\n", tip));
    }

    rendered.push_str(&format!("\n[{}]\n", USER_MESSAGE_TAKE_ANOTHER));
    rendered
}
