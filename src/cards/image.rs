//! Image items - what a card shows.
//!
//! The engine only reads `id` and `kind`. `content` and `category` are
//! carried through untouched for the renderer.

use serde::{Deserialize, Serialize};

use crate::core::ImageId;

/// Where the picture behind an `ImageItem` comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageKind {
    /// A character glyph (emoji). `content` is the glyph itself.
    Glyph,
    /// A resource loaded at runtime (gallery photo). `content` is a locator.
    Resource,
    /// An asset shipped with the app. `content` is the asset name.
    Bundled,
}

/// Immutable reference to visual content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageItem {
    /// Stable unique identifier.
    pub id: ImageId,

    /// Source discriminator.
    pub kind: ImageKind,

    /// Glyph, locator or asset name depending on `kind`.
    pub content: String,

    /// Display category (e.g. "animals").
    pub category: String,
}

impl ImageItem {
    /// Create an image item.
    pub fn new(
        id: ImageId,
        kind: ImageKind,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            category: category.into(),
        }
    }

    /// Create a glyph item.
    pub fn glyph(id: u32, glyph: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(ImageId::new(id), ImageKind::Glyph, glyph, category)
    }

    /// Create a runtime-loaded resource item.
    pub fn resource(id: u32, locator: impl Into<String>) -> Self {
        Self::new(ImageId::new(id), ImageKind::Resource, locator, "gallery")
    }

    /// Whether this item renders as text rather than a bitmap.
    #[must_use]
    pub fn is_glyph(&self) -> bool {
        self.kind == ImageKind::Glyph
    }
}
