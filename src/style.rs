//! Styles: the rules of a theme.
//!
//! A style pairs an optional selector with the raw settings found in a theme file. Turning the
//! settings into rendering attributes is left to the host through [`FontProvider`]; this module
//! only decides which keys are set.

use std::collections::BTreeMap;

use crate::ast::Selector;
use crate::color::{Color, ColorParseError};

/// The settings key holding the foreground color.
pub const FOREGROUND: &str = "foreground";

/// The settings key holding the background color.
pub const BACKGROUND: &str = "background";

/// The settings key holding space-separated font style flags (`bold`, `italic`, `underline`).
pub const FONT_STYLE: &str = "fontStyle";

/// Chooses a host font for a combination of style flags.
pub trait FontProvider {
    /// The host's font type.
    type Font;

    /// Returns the font to use for text with the given traits.
    fn provide_font(&self, bold: bool, italic: bool) -> Self::Font;
}

/// How text is underlined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Underline {
    /// A single solid line.
    Single,
}

/// Rendering attributes produced from style settings.
///
/// Fields left as `None` were not set by any style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes<F> {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub underline: Option<Underline>,
    pub font: Option<F>,
}

impl<F> Default for Attributes<F> {
    fn default() -> Self {
        Self {
            foreground: None,
            background: None,
            underline: None,
            font: None,
        }
    }
}

impl<F> Attributes<F> {
    /// Overlays `other` on top of `self`: every attribute set in `other` wins.
    pub fn merge(self, other: Self) -> Self {
        Self {
            foreground: other.foreground.or(self.foreground),
            background: other.background.or(self.background),
            underline: other.underline.or(self.underline),
            font: other.font.or(self.font),
        }
    }
}

/// A single theme rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// A human-readable name, if the theme gives one.
    pub name: Option<String>,

    /// The selector deciding where the style applies. `None` applies everywhere.
    pub scope: Option<Selector>,

    /// The raw settings, keyed by their name in the theme file.
    pub settings: BTreeMap<String, String>,
}

impl Style {
    /// Translates the settings into attributes.
    ///
    /// Unknown keys are ignored. A `fontStyle` setting always selects a font, so an empty one
    /// resets a bold or italic font chosen by an earlier style.
    pub fn attributes<P: FontProvider>(
        &self,
        font_provider: &P,
    ) -> Result<Attributes<P::Font>, ColorParseError> {
        let mut attributes = Attributes::default();

        for (key, value) in &self.settings {
            match key.as_str() {
                FOREGROUND => attributes.foreground = Some(Color::from_hex(value)?),
                BACKGROUND => attributes.background = Some(Color::from_hex(value)?),

                FONT_STYLE => {
                    let has_flag = |flag: &str| value.split_whitespace().any(|word| word == flag);

                    if has_flag("underline") {
                        attributes.underline = Some(Underline::Single);
                    }

                    attributes.font =
                        Some(font_provider.provide_font(has_flag("bold"), has_flag("italic")));
                }

                _ => {}
            }
        }

        Ok(attributes)
    }
}
