mod image_capturer;

pub use image_capturer::ImageCapturer;
