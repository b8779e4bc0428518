//! A recursive-descent parser for scope selectors.

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::ast;
use crate::loc::Position;
use crate::name::ScopeName;

type Result<T, E = ParseError> = std::result::Result<T, E>;

/// How deeply groups and filters may nest inside each other.
pub const MAX_NESTING: usize = 128;

/// What the parser was looking for when it failed.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The start of a scope name component.
    #[display("a scope name component")]
    Component,

    /// A path, a group or a filter.
    #[display("a scope name, `(` or a filter")]
    Term,

    /// The closing parenthesis of a group.
    #[display("`)`")]
    CloseParen,

    /// The end of a standalone scope name.
    #[display("`.` or the end of the scope name")]
    EndOfName,

    /// Anything that may follow a complete composite at the top level.
    #[display("`,`, an operator or the end of the selector")]
    EndOfSelector,
}

/// An error that occurred while parsing a selector, a scope or a scope name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parser found a character it could not accept.
    #[error("encountered a syntax error at {position}: expected {expected}, found {found:?}")]
    UnexpectedChar {
        /// Where the character is.
        position: Position,

        /// The offending character.
        found: char,

        /// What would have been accepted.
        expected: Expected,
    },

    /// The input ended too early.
    #[error("encountered a syntax error at {position}: expected {expected}, found the end of input")]
    UnexpectedEnd {
        /// The end of the input.
        position: Position,

        /// What would have been accepted.
        expected: Expected,
    },

    /// Groups and filters are nested more than [`MAX_NESTING`] levels deep.
    #[error(
        "encountered a syntax error at {position}: nesting exceeds {limit} levels",
        limit = MAX_NESTING
    )]
    TooDeep {
        /// The start of the first group or filter past the limit.
        position: Position,
    },
}

impl ParseError {
    /// Where the error occurred.
    pub fn position(&self) -> Position {
        match *self {
            Self::UnexpectedChar { position, .. }
            | Self::UnexpectedEnd { position, .. }
            | Self::TooDeep { position } => position,
        }
    }

    /// What the parser was looking for, if the error is about a missing token.
    pub fn expected(&self) -> Option<Expected> {
        match *self {
            Self::UnexpectedChar { expected, .. } | Self::UnexpectedEnd { expected, .. } => {
                Some(expected)
            }

            Self::TooDeep { .. } => None,
        }
    }
}

fn is_component_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '*'
}

fn is_component_char(c: char) -> bool {
    is_component_start(c) || c == '-'
}

/// Parses `text` as a selector.
///
/// The whole text must be consumed. Whitespace-only text is the universal selector.
pub fn parse_selector(text: &str) -> Result<ast::Selector> {
    let mut parser = Parser::new(text);

    let result = parser.selector().and_then(|selector| {
        if parser.skip_whitespace_to_end() {
            Ok(selector)
        } else {
            Err(parser.error(Expected::EndOfSelector))
        }
    });

    match &result {
        Ok(selector) => log::trace!(
            "parsed selector {text:?} into {} composite(s)",
            selector.composites.len()
        ),
        Err(e) => log::debug!("rejected selector {text:?}: {e}"),
    }

    result
}

impl ast::Selector {
    /// Parses `text` as a selector. See [`parse_selector`].
    pub fn parse(text: &str) -> Result<Self> {
        parse_selector(text)
    }
}

impl FromStr for ast::Selector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_selector(s)
    }
}

pub(crate) struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();

        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();

        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();

            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Skips whitespace and returns whether the input is exhausted.
    pub(crate) fn skip_whitespace_to_end(&mut self) -> bool {
        self.skip_whitespace();

        self.pos == self.src.len()
    }

    fn error(&self, expected: Expected) -> ParseError {
        let position = Position::locate(self.src, self.pos);

        match self.peek() {
            Some(found) => ParseError::UnexpectedChar {
                position,
                found,
                expected,
            },

            None => ParseError::UnexpectedEnd { position, expected },
        }
    }

    pub(crate) fn expect_end_of_name(&self) -> Result<()> {
        if self.pos == self.src.len() {
            Ok(())
        } else {
            Err(self.error(Expected::EndOfName))
        }
    }

    /// Runs `f` one nesting level deeper, failing once the level exceeds [`MAX_NESTING`].
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth == MAX_NESTING {
            return Err(ParseError::TooDeep {
                position: Position::locate(self.src, self.pos),
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }

    fn selector(&mut self) -> Result<ast::Selector> {
        self.skip_whitespace();

        if matches!(self.peek(), None | Some(')')) {
            return Ok(ast::Selector::default());
        }

        let mut composites = vec![self.composite()?];

        while self.eat(',') {
            composites.push(self.composite()?);
        }

        Ok(ast::Selector::new(composites))
    }

    fn composite(&mut self) -> Result<ast::Composite> {
        let mut composite = ast::Composite::new(self.expression()?);

        while let Some(operator) = self.operator() {
            composite = composite.with(operator, self.expression()?);
        }

        Ok(composite)
    }

    fn operator(&mut self) -> Option<ast::Operator> {
        self.skip_whitespace();

        let operator = match self.peek()? {
            '|' => ast::Operator::Union,
            '&' => ast::Operator::Intersection,
            '-' => ast::Operator::Difference,
            _ => return None,
        };
        self.bump();

        Some(operator)
    }

    fn expression(&mut self) -> Result<ast::Expression> {
        let complement = self.eat('-');
        let term = self.term()?;

        Ok(ast::Expression { complement, term })
    }

    fn term(&mut self) -> Result<ast::Term> {
        self.skip_whitespace();

        match self.peek() {
            Some('(') => self.nested(Self::group).map(Into::into),
            Some(_) if self.side().is_some() => self.nested(Self::filter).map(Into::into),
            Some(c) if c == '^' || is_component_start(c) => self.path().map(Into::into),
            _ => Err(self.error(Expected::Term)),
        }
    }

    /// Looks ahead for a filter side: a side letter followed by a colon.
    fn side(&self) -> Option<ast::Side> {
        let mut chars = self.src[self.pos..].chars();

        let side = match chars.next()? {
            'L' => ast::Side::Left,
            'R' => ast::Side::Right,
            'B' => ast::Side::Both,
            _ => return None,
        };

        chars
            .as_str()
            .trim_start()
            .starts_with(':')
            .then_some(side)
    }

    fn filter(&mut self) -> Result<ast::Filter> {
        let Some(side) = self.side() else {
            return Err(self.error(Expected::Term));
        };
        self.bump();
        self.eat(':');

        Ok(ast::Filter::new(side, self.term()?))
    }

    fn group(&mut self) -> Result<ast::Group> {
        self.eat('(');
        let selector = self.selector()?;

        if !self.eat(')') {
            return Err(self.error(Expected::CloseParen));
        }

        Ok(ast::Group::new(selector))
    }

    fn path(&mut self) -> Result<ast::Path> {
        let begin_anchor = self.eat('^');
        self.skip_whitespace();
        let mut path = ast::Path::new(self.scope_name()?);
        path.begin_anchor = begin_anchor;

        loop {
            self.skip_whitespace();

            match self.peek() {
                Some('>') => {
                    self.bump();
                    self.skip_whitespace();
                    path = path.with(ast::Relation::Direct, self.scope_name()?);
                }

                Some(c) if is_component_start(c) => {
                    path = path.with(ast::Relation::Transitive, self.scope_name()?);
                }

                _ => break,
            }
        }

        path.end_anchor = self.eat('$');

        Ok(path)
    }

    /// Parses a dotted scope name starting exactly at the current position.
    pub(crate) fn scope_name(&mut self) -> Result<ScopeName> {
        let mut components = vec![self.component()?];

        while self.peek() == Some('.') {
            self.bump();
            components.push(self.component()?);
        }

        Ok(ScopeName::new(components))
    }

    fn component(&mut self) -> Result<String> {
        let start = self.pos;

        match self.peek() {
            Some(c) if is_component_start(c) => {
                self.bump();
            }

            _ => return Err(self.error(Expected::Component)),
        }

        while self.peek().is_some_and(is_component_char) {
            self.bump();
        }

        Ok(self.src[start..self.pos].to_owned())
    }
}
