mod app_state;
mod camera_settings;
mod captured_image;
mod encoded_image;
mod image_format;
mod user_settings;

pub use app_state::AppState;
pub use camera_settings::CameraSettings;
pub use captured_image::CapturedImage;
pub use encoded_image::EncodedImage;
pub use image_format::ImageFormat;
pub use user_settings::UserSettings;
