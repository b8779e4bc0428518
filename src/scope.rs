//! Scope stacks and the contexts selectors are matched against.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::name::ScopeName;
use crate::parse::{ParseError, Parser};

/// A scope stack, outermost name first.
///
/// This is what a syntax highlighter reports for a position in a document, e.g.
/// `source.js meta.function string.quoted.double`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    elements: Vec<ScopeName>,
}

impl Scope {
    /// Creates a scope from its names, outermost first.
    pub fn new(elements: Vec<ScopeName>) -> Self {
        Self { elements }
    }

    /// Parses whitespace-separated scope names.
    ///
    /// Empty or whitespace-only text is the empty scope.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut parser = Parser::new(text);
        let mut elements = vec![];

        while !parser.skip_whitespace_to_end() {
            elements.push(parser.scope_name()?);
        }

        Ok(Self { elements })
    }

    /// The names in the stack, outermost first.
    pub fn elements(&self) -> &[ScopeName] {
        &self.elements
    }

    /// Returns `true` if the stack has no names.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a cursor positioned at the outermost name.
    pub fn cursor(&self) -> ScopeCursor<'_> {
        ScopeCursor {
            rest: &self.elements,
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, name) in self.elements.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{name}")?;
        }

        Ok(())
    }
}

impl FromStr for Scope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<ScopeName>> for Scope {
    fn from(elements: Vec<ScopeName>) -> Self {
        Self::new(elements)
    }
}

impl FromIterator<ScopeName> for Scope {
    fn from_iter<I: IntoIterator<Item = ScopeName>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A consuming view over the names of a [`Scope`] that have not been matched yet.
///
/// Matching a path walks the scope from the outside in. The cursor only moves forward and never
/// touches the scope it borrows, so a failed match leaves nothing to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeCursor<'a> {
    rest: &'a [ScopeName],
}

impl<'a> ScopeCursor<'a> {
    /// The names not consumed yet.
    pub fn rest(&self) -> &'a [ScopeName] {
        self.rest
    }

    /// Returns `true` once every name has been consumed.
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Consumes the next name if it is a refinement of `name`.
    ///
    /// On failure the cursor stays where it was. The empty name matches without consuming.
    pub fn match_and_remove_first(&mut self, name: &ScopeName) -> bool {
        if name.is_empty() {
            return true;
        }

        match self.rest.split_first() {
            Some((first, rest)) if first.is_refinement(name) => {
                self.rest = rest;

                true
            }

            _ => false,
        }
    }

    /// Skips forward to the first name that is a refinement of `name` and consumes it too.
    ///
    /// On failure the cursor stays where it was. The empty name matches without consuming.
    pub fn match_and_remove_leading(&mut self, name: &ScopeName) -> bool {
        if name.is_empty() {
            return true;
        }

        match self.rest.iter().position(|elem| elem.is_refinement(name)) {
            Some(idx) => {
                self.rest = &self.rest[idx + 1..];

                true
            }

            None => false,
        }
    }
}

/// The scopes on both sides of a position being styled.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Context {
    /// The scope to the left of the position, if there is anything there.
    pub left: Option<Scope>,

    /// The scope at the position itself.
    pub main: Scope,
}

impl Context {
    /// Creates a context with nothing to the left.
    pub fn new(main: Scope) -> Self {
        Self { left: None, main }
    }

    /// Creates a context with a scope on the left.
    pub fn with_left(left: Scope, main: Scope) -> Self {
        Self {
            left: Some(left),
            main,
        }
    }
}

impl From<Scope> for Context {
    fn from(main: Scope) -> Self {
        Self::new(main)
    }
}
