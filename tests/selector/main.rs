mod parse;
mod round_trip;
mod serialization;

use scope_selector::{Context, Scope, Selector};

pub fn selector(text: &str) -> Selector {
    text.parse()
        .map_err(|e| format!("could not parse `{text}`: {e}"))
        .unwrap()
}

pub fn scope(text: &str) -> Scope {
    text.parse()
        .map_err(|e| format!("could not parse the scope `{text}`: {e}"))
        .unwrap()
}

pub fn main_context(main: &str) -> Context {
    Context::new(scope(main))
}

pub fn split_context(left: &str, main: &str) -> Context {
    Context::with_left(scope(left), scope(main))
}
