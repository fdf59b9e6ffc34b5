use serde::{Deserialize, Serialize};

/// An RGBA color value
///
/// Only storage and comparison are needed, so this is a plain tuple of
/// channels rather than a type from a drawing library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Rgba {
    /// Create a color from all four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }
}

/// A colored text label used to group and sort tasks
///
/// Two tags are equal when both `name` and `color` are equal. The name acts
/// as the key of a tag inside its container; uniqueness and the length limit
/// are checked by [`crate::validation::validate_tags`], not on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextTag {
    /// Display name of the tag (required, at most 24 characters)
    pub name: String,
    /// Color of the tag
    pub color: Rgba,
}

impl TextTag {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}
