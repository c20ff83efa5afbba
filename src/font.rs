//! Font descriptors and the font registry.
//!
//! Fonts are owned by the canvas in an append-only registry and referred to
//! by [`FontId`] handles. This makes the non-ownership contract of the
//! original "current font" pointer explicit: callers hold a cheap copyable
//! id, the registry keeps the descriptor alive for the life of the canvas.

use pango::FontDescription;

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, style, and
/// size in points. Resolved to an installed system font through Pango at
/// draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,

    /// Font size in points
    pub size: f64,
}

impl Font {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, weight: impl Into<String>, style: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
            size,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 32" or "Monospace Italic 24"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }

    /// Builds the Pango description used by the text renderer.
    pub(crate) fn to_description(&self) -> FontDescription {
        FontDescription::from_string(&self.to_pango_string())
    }
}

impl Default for Font {
    /// The font registered at canvas construction: plain "Sans 16".
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
            size: 16.0,
        }
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Handle to a font stored in a canvas's registry.
///
/// Ids are append-only indexes; a `FontId` obtained from one canvas is only
/// meaningful for that canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub(crate) usize);

/// Append-only store of loaded fonts.
#[derive(Debug, Default)]
pub(crate) struct FontRegistry {
    fonts: Vec<Font>,
}

impl FontRegistry {
    /// Registers a font and returns its handle.
    pub(crate) fn add(&mut self, font: Font) -> FontId {
        self.fonts.push(font);
        FontId(self.fonts.len() - 1)
    }

    /// Looks a font up by handle. Returns `None` for ids minted elsewhere.
    pub(crate) fn get(&self, id: FontId) -> Option<&Font> {
        self.fonts.get(id.0)
    }
}
