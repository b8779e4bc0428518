//! TextMate scope selectors.
//!
//! A selector such as `source.js string - comment, L:meta.tag` describes which scope stacks a theme
//! rule applies to. This crate parses selectors into an [AST](ast), matches them against the
//! [`Context`] of a position in a document and prints them back as source text.
//!
//! ```
//! use scope_selector::{Context, Scope, parse_selector};
//!
//! let selector = parse_selector("string.quoted - comment").unwrap();
//! let scope: Scope = "source.js string.quoted.double".parse().unwrap();
//!
//! assert!(selector.matches(&Context::new(scope)));
//! ```
//!
//! Parse a selector once and reuse it: matching is cheap and the AST is `Send + Sync`.

pub mod ast;
pub mod color;
mod dump;
pub mod loc;
mod matching;
pub mod name;
mod parse;
pub mod scope;
#[cfg(feature = "serde")]
mod serialize;
pub mod style;
pub mod theme;

pub use ast::Selector;
pub use loc::Position;
pub use name::{ScopeName, WILDCARD};
pub use parse::{Expected, MAX_NESTING, ParseError, parse_selector};
pub use scope::{Context, Scope, ScopeCursor};
