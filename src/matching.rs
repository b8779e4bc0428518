//! Evaluates selectors against scope contexts.
//!
//! Matching is total and side-effect free: every node only reads the [`Context`] it is given.

use crate::ast::{
    Composite, Expression, Filter, Group, Operator, Path, Relation, Selector, Side, Term,
};
use crate::scope::{Context, Scope};

/// A borrowed [`Context`], so that filters can narrow it down without cloning scopes.
#[derive(Clone, Copy)]
struct View<'a> {
    left: Option<&'a Scope>,
    main: &'a Scope,
}

impl<'a> From<&'a Context> for View<'a> {
    fn from(context: &'a Context) -> Self {
        Self {
            left: context.left.as_ref(),
            main: &context.main,
        }
    }
}

macro_rules! impl_matches {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                #[doc = concat!("Returns `true` if the [", stringify!($node), "] matches `context`.")]
                pub fn matches(&self, context: &Context) -> bool {
                    self.eval(View::from(context))
                }
            }
        )+
    };
}

impl_matches!(Selector, Composite, Expression, Term, Filter, Group, Path);

impl Selector {
    // the universal selector matches every context.
    fn eval(&self, view: View<'_>) -> bool {
        self.composites.is_empty()
            || self
                .composites
                .iter()
                .any(|composite| composite.eval(view))
    }
}

impl Composite {
    fn eval(&self, view: View<'_>) -> bool {
        self.compositions
            .iter()
            .fold(self.base.eval(view), |acc, composition| {
                match composition.operator {
                    Operator::Union => acc || composition.operand.eval(view),
                    Operator::Intersection => acc && composition.operand.eval(view),
                    Operator::Difference => acc && !composition.operand.eval(view),
                }
            })
    }
}

impl Expression {
    fn eval(&self, view: View<'_>) -> bool {
        self.term.eval(view) != self.complement
    }
}

impl Term {
    fn eval(&self, view: View<'_>) -> bool {
        match self {
            Self::Filter(filter) => filter.eval(view),
            Self::Group(group) => group.eval(view),
            Self::Path(path) => path.eval(view),
        }
    }
}

impl Filter {
    // without a left scope, the left side falls back to the main one.
    fn eval(&self, view: View<'_>) -> bool {
        let left = View {
            left: None,
            main: view.left.unwrap_or(view.main),
        };
        let right = View {
            left: None,
            main: view.main,
        };

        match self.side {
            Side::Left => self.term.eval(left),
            Side::Right => self.term.eval(right),
            Side::Both => self.term.eval(left) && self.term.eval(right),
        }
    }
}

impl Group {
    fn eval(&self, view: View<'_>) -> bool {
        self.selector.eval(view)
    }
}

impl Path {
    fn eval(&self, view: View<'_>) -> bool {
        let mut cursor = view.main.cursor();

        let all_steps_match = self.steps().all(|(relation, name)| match relation {
            Relation::Transitive => cursor.match_and_remove_leading(name),
            Relation::Direct => cursor.match_and_remove_first(name),
        });

        all_steps_match && (!self.end_anchor || cursor.is_empty())
    }
}
