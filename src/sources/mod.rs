//! Image sources.
//!
//! Anything that can list pictures implements `ImageSource`. The built-in
//! glyph catalog answers synchronously; a gallery source would resolve its
//! permission prompt and picker outside this crate and then hand over the
//! same list shape.

pub mod glyphs;

pub use glyphs::GlyphCatalog;

use crate::cards::ImageItem;
use crate::core::{MemoError, Result};

/// A provider of image items.
pub trait ImageSource {
    /// Short name for logs and errors ("emoji", "gallery").
    fn name(&self) -> &str;

    /// Every image the source can offer, in display order.
    fn images(&self) -> Result<Vec<ImageItem>>;

    /// Images, failing with `InvalidConfiguration` if there are fewer than
    /// `required`. An empty source is treated the same way.
    fn images_for(&self, required: usize) -> Result<Vec<ImageItem>> {
        let images = self.images()?;
        if images.is_empty() || images.len() < required {
            tracing::warn!(source = self.name(), required, available = images.len(), "not enough images");
            return Err(MemoError::invalid(format!(
                "source {} has {} images, need {required}",
                self.name(),
                images.len()
            )));
        }
        Ok(images)
    }
}

/// A fixed list of already-loaded items (e.g. a finished gallery pick).
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    name: String,
    items: Vec<ImageItem>,
}

impl StaticSource {
    /// Wrap a list of items.
    pub fn new(name: impl Into<String>, items: Vec<ImageItem>) -> Self {
        Self { name: name.into(), items }
    }
}

impl ImageSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn images(&self) -> Result<Vec<ImageItem>> {
        Ok(self.items.clone())
    }
}
