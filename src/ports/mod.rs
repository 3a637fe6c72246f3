mod file_image_capturer;

pub use file_image_capturer::FileImageCapturer;
