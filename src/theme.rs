//! Themes: ordered lists of styles resolved against scope contexts.

use std::collections::BTreeMap;

use derive_more::Display;

use crate::ast::Selector;
use crate::color::ColorParseError;
use crate::parse::ParseError;
use crate::scope::{Context, Scope};
use crate::style::{Attributes, FontProvider, Style};

/// The descriptive keys of a theme.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataKey {
    #[display("uuid")]
    Uuid,

    #[display("semanticClass")]
    SemanticClass,

    #[display("name")]
    Name,

    #[display("author")]
    Author,

    #[display("comment")]
    Comment,
}

/// A style as found in a theme file, before its selector is parsed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawStyle {
    pub name: Option<String>,
    pub scope: Option<String>,
    pub settings: BTreeMap<String, String>,
}

/// A style that was left out of a theme because its selector does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedStyle {
    /// The index of the style among the raw styles.
    pub index: usize,

    /// The style's name, if it had one.
    pub name: Option<String>,

    /// Why the selector was rejected.
    pub error: ParseError,
}

/// The result of [`Theme::load`].
#[derive(Debug, Clone)]
pub struct ThemeLoad {
    /// The theme built from every well-formed style.
    pub theme: Theme,

    /// The styles that were left out.
    pub rejected: Vec<RejectedStyle>,
}

/// An ordered list of styles. Later styles take precedence over earlier ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Theme {
    pub metadata: BTreeMap<MetadataKey, String>,
    pub styles: Vec<Style>,
}

impl Theme {
    pub fn new(metadata: BTreeMap<MetadataKey, String>, styles: Vec<Style>) -> Self {
        Self { metadata, styles }
    }

    /// Builds a theme from decoded styles, parsing each selector once.
    ///
    /// A malformed selector only costs its own style: it is logged, reported in
    /// [`ThemeLoad::rejected`] and the remaining styles are kept in order.
    pub fn load(
        metadata: BTreeMap<MetadataKey, String>,
        raw_styles: impl IntoIterator<Item = RawStyle>,
    ) -> ThemeLoad {
        let mut styles = vec![];
        let mut rejected = vec![];

        for (index, raw) in raw_styles.into_iter().enumerate() {
            let scope = match raw.scope.as_deref().map(Selector::parse).transpose() {
                Ok(scope) => scope,

                Err(error) => {
                    log::warn!(
                        "skipping style #{index} ({}): {error}",
                        raw.name.as_deref().unwrap_or("unnamed"),
                    );
                    rejected.push(RejectedStyle {
                        index,
                        name: raw.name,
                        error,
                    });

                    continue;
                }
            };

            styles.push(Style {
                name: raw.name,
                scope,
                settings: raw.settings,
            });
        }

        log::debug!(
            "loaded {} style(s), rejected {}; metadata: {}",
            styles.len(),
            rejected.len(),
            metadata
                .iter()
                .map(|(key, value)| format!("{key}={value:?}"))
                .collect::<Vec<_>>()
                .join(", "),
        );

        ThemeLoad {
            theme: Self::new(metadata, styles),
            rejected,
        }
    }

    /// The theme's name, if its metadata has one.
    pub fn name(&self) -> Option<&str> {
        self.metadata.get(&MetadataKey::Name).map(String::as_str)
    }

    /// Returns the styles that apply to `context`, in precedence order.
    pub fn matching_styles<'a>(
        &'a self,
        context: &'a Context,
    ) -> impl Iterator<Item = &'a Style> + 'a {
        self.styles.iter().filter(move |style| {
            style
                .scope
                .as_ref()
                .is_none_or(|selector| selector.matches(context))
        })
    }

    /// Merges the attributes of every style that applies to `context`.
    pub fn attributes<P: FontProvider>(
        &self,
        context: &Context,
        font_provider: &P,
    ) -> Result<Attributes<P::Font>, ColorParseError> {
        self.matching_styles(context)
            .try_fold(Attributes::default(), |acc, style| {
                Ok(acc.merge(style.attributes(font_provider)?))
            })
    }

    /// Like [`attributes`](Self::attributes) for a context with nothing to the left.
    pub fn attributes_for_scope<P: FontProvider>(
        &self,
        scope: Scope,
        font_provider: &P,
    ) -> Result<Attributes<P::Font>, ColorParseError> {
        self.attributes(&Context::new(scope), font_provider)
    }
}
