//! Backdrop filling the gap between sheet height and content height.

use crate::color::Color;

/// How the host should paint the backdrop revealed under the content.
#[derive(Clone, Debug, PartialEq)]
pub enum BackdropFill {
    Color(Color),
    /// Utility-CSS class name (for example `bg-slate-100`); the host applies
    /// it instead of an inline color.
    Class(String),
    /// Any other CSS color value, passed through untouched.
    Css(String),
}

impl BackdropFill {
    /// Interprets a background color string the way web hosts receive it.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.contains("bg-") {
            BackdropFill::Class(value.to_owned())
        } else if let Some(color) = Color::from_hex(value) {
            BackdropFill::Color(color)
        } else {
            match value.to_ascii_lowercase().as_str() {
                "white" => BackdropFill::Color(Color::WHITE),
                "black" => BackdropFill::Color(Color::BLACK),
                "transparent" => BackdropFill::Color(Color::TRANSPARENT),
                _ => BackdropFill::Css(value.to_owned()),
            }
        }
    }
}

impl Default for BackdropFill {
    fn default() -> Self {
        BackdropFill::Color(Color::WHITE)
    }
}

impl From<Color> for BackdropFill {
    fn from(color: Color) -> Self {
        BackdropFill::Color(color)
    }
}

/// Height of the backdrop strip for a sheet of `sheet_height` holding
/// content of `content_height`.
///
/// The extra pixel hides the seam between content and backdrop.
pub fn backdrop_height(sheet_height: f32, content_height: f32) -> f32 {
    (sheet_height - content_height + 1.0).max(0.0)
}
