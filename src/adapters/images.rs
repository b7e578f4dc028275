use crate::domain::ports::{BinderItem, ImageResolver};

pub const IMAGE_QUALITIES: [&str; 2] = ["high", "low"];
pub const IMAGE_FORMATS: [&str; 3] = ["png", "jpg", "webp"];

/// Resolves artwork through each card's own asset URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImageResolver {
    quality: String,
    format: String,
}

impl CardImageResolver {
    pub fn new(quality: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            quality: quality.into().to_lowercase(),
            format: format.into().to_lowercase(),
        }
    }
}

impl Default for CardImageResolver {
    fn default() -> Self {
        Self::new("low", "webp")
    }
}

impl ImageResolver for CardImageResolver {
    fn resolve(&self, item: &dyn BinderItem) -> Option<String> {
        item.image_url(&self.quality, &self.format)
    }
}
