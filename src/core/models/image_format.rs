use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    PNG,
    JPEG,
    WEBP,
    GIF,
    BMP,
    TIFF,
}

impl ImageFormat {
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Png => Some(ImageFormat::PNG),
            image::ImageFormat::Jpeg => Some(ImageFormat::JPEG),
            image::ImageFormat::WebP => Some(ImageFormat::WEBP),
            image::ImageFormat::Gif => Some(ImageFormat::GIF),
            image::ImageFormat::Bmp => Some(ImageFormat::BMP),
            image::ImageFormat::Tiff => Some(ImageFormat::TIFF),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::PNG => "image/png",
            ImageFormat::JPEG => "image/jpeg",
            ImageFormat::WEBP => "image/webp",
            ImageFormat::GIF => "image/gif",
            ImageFormat::BMP => "image/bmp",
            ImageFormat::TIFF => "image/tiff",
        }
    }
}
