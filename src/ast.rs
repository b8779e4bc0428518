//! AST node definitions.
//!
//! The top-level node is [`Selector`]; all other nodes are its descendants. Every node can be
//! matched against a [`Context`](crate::Context) with its `matches` method and printed back as
//! selector text with [`Display`](std::fmt::Display).

use derive_more::{Display, From};

use crate::name::ScopeName;

/// A comma-separated list of composites.
///
/// A selector matches if any of its composites does. The selector without composites is the
/// universal selector that matches everything.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// The comma-separated alternatives.
    pub composites: Vec<Composite>,
}

impl Selector {
    /// Creates a selector from its alternatives.
    pub fn new(composites: Vec<Composite>) -> Self {
        Self { composites }
    }

    /// Returns `true` for the universal selector.
    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }
}

/// A chain of expressions joined by set operators.
///
/// There is no precedence between the operators: the chain is folded from left to right starting
/// with [`base`](Self::base).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Composite {
    /// The first expression of the chain.
    pub base: Expression,

    /// The remaining operator-operand pairs, in source order.
    pub compositions: Vec<Composition>,
}

impl Composite {
    /// Creates a composite consisting of a single expression.
    pub fn new(base: Expression) -> Self {
        Self {
            base,
            compositions: vec![],
        }
    }

    /// Appends an operator and its operand to the chain.
    pub fn with(mut self, operator: Operator, operand: Expression) -> Self {
        self.compositions.push(Composition { operator, operand });

        self
    }
}

/// An operator and the expression on its right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Composition {
    /// How the operand is combined with the result so far.
    pub operator: Operator,

    /// The right-hand side.
    pub operand: Expression,
}

/// A set operator.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `|`: either side matches.
    #[display("|")]
    Union,

    /// `&`: both sides match.
    #[display("&")]
    Intersection,

    /// `-`: the left side matches and the right one doesn't.
    #[display("-")]
    Difference,
}

/// A possibly complemented term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    /// Whether the term was prefixed with `-`, negating its result.
    pub complement: bool,

    /// The term.
    pub term: Term,
}

impl Expression {
    /// Creates an expression that is not complemented.
    pub fn new(term: impl Into<Term>) -> Self {
        Self {
            complement: false,
            term: term.into(),
        }
    }

    /// Creates a complemented expression.
    pub fn complement(term: impl Into<Term>) -> Self {
        Self {
            complement: true,
            term: term.into(),
        }
    }
}

/// An enumeration of all term kinds.
#[derive(From, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A term restricted to one side of the context.
    Filter(Filter),

    /// A parenthesized selector.
    Group(Group),

    /// A sequence of scope names.
    Path(Path),
}

/// A term evaluated against one or both sides of the context, e.g. `L: comment`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    /// The side the term is evaluated against.
    pub side: Side,

    /// The filtered term.
    pub term: Box<Term>,
}

impl Filter {
    /// Creates a filter.
    pub fn new(side: Side, term: impl Into<Term>) -> Self {
        Self {
            side,
            term: Box::new(term.into()),
        }
    }
}

/// The side of the context a [`Filter`] applies to.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The scope to the left of the position (`L`).
    #[display("L")]
    Left,

    /// The scope at the position (`R`).
    #[display("R")]
    Right,

    /// Both of them (`B`).
    #[display("B")]
    Both,
}

/// A parenthesized selector.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    /// The selector between the parentheses.
    pub selector: Selector,
}

impl Group {
    /// Creates a group.
    pub fn new(selector: Selector) -> Self {
        Self { selector }
    }
}

/// A sequence of scope names matched against the scope from the outside in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Whether the path starts with `^`: the root must match the outermost scope name.
    pub begin_anchor: bool,

    /// Whether the path ends with `$`: the match must consume the whole scope.
    pub end_anchor: bool,

    /// The first scope name.
    pub root: ScopeName,

    /// The scope names following the root.
    pub descendants: Vec<Descendant>,
}

impl Path {
    /// Creates an unanchored path consisting of the root alone.
    pub fn new(root: ScopeName) -> Self {
        Self {
            begin_anchor: false,
            end_anchor: false,
            root,
            descendants: vec![],
        }
    }

    /// Appends a descendant.
    pub fn with(mut self, relation: Relation, name: ScopeName) -> Self {
        self.descendants.push(Descendant { relation, name });

        self
    }

    /// Returns the path with the begin anchor set.
    pub fn begin_anchored(self) -> Self {
        Self {
            begin_anchor: true,
            ..self
        }
    }

    /// Returns the path with the end anchor set.
    pub fn end_anchored(self) -> Self {
        Self {
            end_anchor: true,
            ..self
        }
    }

    /// Iterates over every step of the path, the root included.
    ///
    /// The root is a direct step when the path is begin-anchored and a transitive one otherwise.
    pub fn steps(&self) -> impl Iterator<Item = (Relation, &ScopeName)> {
        let root_relation = if self.begin_anchor {
            Relation::Direct
        } else {
            Relation::Transitive
        };

        std::iter::once((root_relation, &self.root)).chain(
            self.descendants
                .iter()
                .map(|descendant| (descendant.relation, &descendant.name)),
        )
    }
}

/// A scope name following the root of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descendant {
    /// How the name relates to the previous one.
    pub relation: Relation,

    /// The scope name.
    pub name: ScopeName,
}

/// How a path step relates to the previous one.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `>`: the name must immediately follow the previous match.
    #[display(">")]
    Direct,

    /// The name may appear anywhere after the previous match.
    #[display("")]
    Transitive,
}
