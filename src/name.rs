//! Dotted scope names.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::parse::{ParseError, Parser};

/// The component that matches any single component at the same position.
pub const WILDCARD: &str = "*";

/// A dotted scope name, such as `string.quoted.double`.
///
/// Components are compared positionally. A selector name is satisfied by every scope name it is a
/// prefix of, so `string` is satisfied by `string.quoted.double`, and the [wildcard](WILDCARD)
/// component `*` stands in for any single component.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ScopeName {
    components: Vec<String>,
}

impl ScopeName {
    /// Creates a scope name from already validated components.
    ///
    /// No validation is done here: use [`ScopeName::parse`] for untrusted text.
    pub fn new(components: Vec<String>) -> Self {
        Self { components }
    }

    /// Parses a single dotted scope name.
    ///
    /// The empty string parses to the empty name. Anything else must be exactly one name with no
    /// surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let mut parser = Parser::new(text);
        let name = parser.scope_name()?;
        parser.expect_end_of_name()?;

        Ok(name)
    }

    /// The components of the name, outermost first.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// The number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` for the empty name.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` if every component of `self` matches the component of `name` at the same
    /// position, either literally or by being a wildcard.
    ///
    /// `name` may be longer than `self`.
    pub fn is_prefix(&self, name: &ScopeName) -> bool {
        self.len() <= name.len()
            && self
                .components
                .iter()
                .zip(&name.components)
                .all(|(this, other)| this == other || this == WILDCARD)
    }

    /// Returns `true` if `self` is at least as specific as `name`.
    pub fn is_refinement(&self, name: &ScopeName) -> bool {
        name.is_prefix(self)
    }

    /// Strips `name` from the front of `self` if `self` is a refinement of it.
    ///
    /// Returns whether anything was removed.
    pub fn remove_prefix(&mut self, name: &ScopeName) -> bool {
        if !self.is_refinement(name) {
            return false;
        }

        self.components.drain(..name.len());

        true
    }
}

impl Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

impl FromStr for ScopeName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<String>> for ScopeName {
    fn from(components: Vec<String>) -> Self {
        Self::new(components)
    }
}

impl<S: Into<String>> FromIterator<S> for ScopeName {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
