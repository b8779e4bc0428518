//! Implements dumping the AST nodes back as selector source text.
//!
//! The output is normalized: tokens are separated by single spaces and the composites of a
//! selector by `", "`. Parsing the dump of a parsed selector always yields an equal AST. The module
//! performs no checks of its own, though, so a hand-built AST with an empty or malformed scope name
//! is dumped as-is and may not parse back.

use std::fmt::{self, Display};

use crate::ast;

/// Writes `items` separated by `sep`.
fn display_separated<T: Display>(
    f: &mut fmt::Formatter<'_>,
    sep: &str,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            write!(f, "{sep}")?;
        }

        write!(f, "{item}")?;
    }

    Ok(())
}

impl Display for ast::Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_separated(f, ", ", &self.composites)
    }
}

impl Display for ast::Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;

        for composition in &self.compositions {
            write!(f, " {composition}")?;
        }

        Ok(())
    }
}

impl Display for ast::Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}

impl Display for ast::Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.complement {
            write!(f, "- ")?;
        }

        write!(f, "{}", self.term)
    }
}

impl Display for ast::Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(filter) => write!(f, "{filter}"),
            Self::Group(group) => write!(f, "{group}"),
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

impl Display for ast::Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.side, self.term)
    }
}

impl Display for ast::Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.selector)
    }
}

impl Display for ast::Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.begin_anchor {
            write!(f, "^")?;
        }

        write!(f, "{}", self.root)?;

        for descendant in &self.descendants {
            write!(f, " {descendant}")?;
        }

        if self.end_anchor {
            write!(f, "$")?;
        }

        Ok(())
    }
}

impl Display for ast::Descendant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relation {
            ast::Relation::Direct => write!(f, "{} {}", self.relation, self.name),
            ast::Relation::Transitive => write!(f, "{}", self.name),
        }
    }
}
