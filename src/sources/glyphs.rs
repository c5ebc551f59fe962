//! Built-in emoji catalog.

use super::ImageSource;
use crate::cards::ImageItem;
use crate::core::Result;

const CATALOG: &[(&str, &[&str])] = &[
    ("animals", &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔"]),
    ("food", &["🍎", "🍌", "🍇", "🍓", "🍒", "🍑", "🍍", "🥝", "🥕", "🌽", "🍕", "🍩"]),
    ("nature", &["🌸", "🌻", "🌈", "⭐", "🌙", "☀️", "🍀", "🌵", "🍄", "❄️"]),
    ("vehicles", &["🚗", "🚕", "🚌", "🚓", "🚒", "🚜", "🚲", "🚀", "🚁", "⛵"]),
];

/// Emoji glyphs grouped by category.
///
/// Ids are assigned in catalog order starting at 0, so the carousel shows
/// categories together.
#[derive(Clone, Debug)]
pub struct GlyphCatalog {
    categories: Vec<String>,
}

impl GlyphCatalog {
    /// Every category.
    #[must_use]
    pub fn all() -> Self {
        Self {
            categories: CATALOG.iter().map(|(name, _)| (*name).to_string()).collect(),
        }
    }

    /// Only the named categories. Unknown names are skipped.
    pub fn only<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Category names known to the catalog.
    pub fn category_names() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|(name, _)| *name)
    }
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self::all()
    }
}

impl ImageSource for GlyphCatalog {
    fn name(&self) -> &str {
        "emoji"
    }

    fn images(&self) -> Result<Vec<ImageItem>> {
        let mut next_id = 0u32;
        let mut items = Vec::new();
        for (category, glyphs) in CATALOG {
            let wanted = self.categories.iter().any(|c| c == category);
            for glyph in *glyphs {
                if wanted {
                    items.push(ImageItem::glyph(next_id, *glyph, *category));
                }
                next_id += 1;
            }
        }
        Ok(items)
    }
}
