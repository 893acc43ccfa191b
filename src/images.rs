use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenerationRequestBody {
    pub model: String,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub n: u8,
    pub response_format: String,
}

/// Decoded image handed to the display step.
#[derive(Debug)]
pub struct GeneratedIllustration {
    pub image_bytes: Vec<u8>,
    pub format: ImageFormat,
    pub model: String,
}

impl GeneratedIllustration {
    pub fn new(image_bytes: Vec<u8>, model: &str) -> Self {
        let format = ImageFormat::from_magic_bytes(&image_bytes).unwrap_or_default();
        GeneratedIllustration {
            image_bytes,
            format,
            model: model.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::WebP => "webp",
        }
    }

    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(ImageFormat::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        // WebP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }
        None
    }
}
