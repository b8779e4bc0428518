use insta::assert_snapshot;
use rstest::rstest;
use scope_selector::ast::{
    Composite, Expression, Filter, Group, Operator, Path, Relation, Selector, Side,
};
use scope_selector::{Expected, MAX_NESTING, ParseError, ScopeName, parse_selector};

use crate::selector;

fn name(text: &str) -> ScopeName {
    text.parse().unwrap()
}

fn path(root: &str) -> Path {
    Path::new(name(root))
}

fn single(expression: Expression) -> Selector {
    Selector::new(vec![Composite::new(expression)])
}

fn single_path(path: Path) -> Selector {
    single(Expression::new(path))
}

#[rstest]
#[case("a", single_path(path("a")))]
#[case(" ab ", single_path(path("ab")))]
#[case(
    "a b cd",
    single_path(
        path("a")
            .with(Relation::Transitive, name("b"))
            .with(Relation::Transitive, name("cd")),
    )
)]
#[case(
    " a > b cd>e ",
    single_path(
        path("a")
            .with(Relation::Direct, name("b"))
            .with(Relation::Transitive, name("cd"))
            .with(Relation::Direct, name("e")),
    )
)]
#[case("^a", single_path(path("a").begin_anchored()))]
#[case("^ a b $", single_path(path("a").with(Relation::Transitive, name("b")).begin_anchored().end_anchored()))]
#[case("a$", single_path(path("a").end_anchored()))]
fn parses_paths(#[case] text: &str, #[case] expected: Selector) {
    assert_eq!(selector(text), expected);
}

#[test]
fn parses_groups() {
    assert_eq!(
        selector("(first second)"),
        single(Expression::new(Group::new(single_path(
            path("first").with(Relation::Transitive, name("second"))
        )))),
    );
    assert_eq!(selector("()"), single(Expression::new(Group::default())));
}

#[rstest]
#[case("L: a", Side::Left)]
#[case("R: a", Side::Right)]
#[case("B: a", Side::Both)]
#[case("B:a", Side::Both)]
fn parses_filters(#[case] text: &str, #[case] side: Side) {
    assert_eq!(
        selector(text),
        single(Expression::new(Filter::new(side, path("a"))))
    );
}

#[test]
fn parses_filtered_groups_and_nested_filters() {
    assert_eq!(
        selector("L: (a)"),
        single(Expression::new(Filter::new(
            Side::Left,
            Group::new(single_path(path("a")))
        ))),
    );
    assert_eq!(
        selector("L: R: a"),
        single(Expression::new(Filter::new(
            Side::Left,
            Filter::new(Side::Right, path("a"))
        ))),
    );
}

#[test]
fn parses_complements() {
    assert_eq!(
        selector("- a b"),
        single(Expression::complement(
            path("a").with(Relation::Transitive, name("b"))
        )),
    );
}

#[rstest]
#[case("a | b", Operator::Union)]
#[case("a & b", Operator::Intersection)]
#[case("a - b", Operator::Difference)]
#[case("a-b.c -b", Operator::Difference)]
fn parses_operators(#[case] text: &str, #[case] operator: Operator) {
    let composite = &selector(text).composites[0];

    assert_eq!(composite.compositions.len(), 1);
    assert_eq!(composite.compositions[0].operator, operator);
    assert_eq!(composite.compositions[0].operand, Expression::new(path("b")));
}

#[test]
fn parses_a_complemented_chain() {
    assert_eq!(
        selector("- a b - c"),
        Selector::new(vec![
            Composite::new(Expression::complement(
                path("a").with(Relation::Transitive, name("b"))
            ))
            .with(Operator::Difference, Expression::new(path("c")))
        ]),
    );
}

#[test]
fn parses_alternatives() {
    assert_eq!(
        selector("a, b"),
        Selector::new(vec![
            Composite::new(Expression::new(path("a"))),
            Composite::new(Expression::new(path("b"))),
        ]),
    );
}

// newlines appear in some scope selectors and hyphens in some scope names, e.g. in the Brilliance
// TextMate themes.
#[test]
fn parses_newlines_and_punctuation() {
    assert_eq!(
        selector(
            "meta.property.vendor.microsoft.trident.5,\nmeta.property.vendor.microsoft.trident.5 support.type.property-name"
        ),
        Selector::new(vec![
            Composite::new(Expression::new(path("meta.property.vendor.microsoft.trident.5"))),
            Composite::new(Expression::new(
                path("meta.property.vendor.microsoft.trident.5")
                    .with(Relation::Transitive, name("support.type.property-name"))
            )),
        ]),
    );
    assert_eq!(
        selector("under_score.underscore_"),
        single_path(path("under_score.underscore_"))
    );
    assert_eq!(
        selector("star.* *.star"),
        single_path(path("star.*").with(Relation::Transitive, name("*.star")))
    );
}

#[rstest]
#[case("", true)]
#[case(" \n\t", true)]
#[case("a", false)]
fn recognizes_the_universal_selector(#[case] text: &str, #[case] empty: bool) {
    assert_eq!(selector(text).is_empty(), empty);
}

#[rstest]
#[case("a.", 2, Expected::Component)]
#[case("a..b", 2, Expected::Component)]
#[case("a.-b", 2, Expected::Component)]
#[case("(a", 2, Expected::CloseParen)]
#[case("(a b, (c)", 9, Expected::CloseParen)]
#[case("a )", 2, Expected::EndOfSelector)]
#[case("a $ b", 4, Expected::EndOfSelector)]
#[case("a,", 2, Expected::Term)]
#[case("a |", 3, Expected::Term)]
#[case("-", 1, Expected::Term)]
#[case("- - a", 2, Expected::Term)]
#[case("L:", 2, Expected::Term)]
#[case("^", 1, Expected::Component)]
#[case("a >", 3, Expected::Component)]
#[case("a > > b", 4, Expected::Component)]
#[case("x | *.", 6, Expected::Component)]
#[case(")", 0, Expected::EndOfSelector)]
#[case("a é", 2, Expected::EndOfSelector)]
fn rejects_malformed_selectors(
    #[case] text: &str,
    #[case] offset: usize,
    #[case] expected: Expected,
) {
    let Err(err) = parse_selector(text) else {
        panic!("`{text}` should not parse");
    };

    assert_eq!(err.position().offset, offset, "{err}");
    assert_eq!(err.expected(), Some(expected), "{err}");
}

#[rstest]
#[case("(")]
#[case("L:")]
#[case("R :")]
#[case("- (")]
fn rejects_runaway_nesting(#[case] opener: &str) {
    let text = format!("{}a", opener.repeat(10_000));

    let Err(err) = parse_selector(&text) else {
        panic!("`{opener}` nested 10000 times should not parse");
    };

    assert!(matches!(err, ParseError::TooDeep { .. }), "{err}");
}

#[test]
fn accepts_nesting_up_to_the_limit() {
    let levels = MAX_NESTING / 2;
    let text = format!("{}a{}", "L: (".repeat(levels), ")".repeat(levels));

    assert!(parse_selector(&text).is_ok());
}

#[test]
fn error_messages() {
    assert_snapshot!(
        parse_selector("source.js,\n  string..quoted").unwrap_err(),
        @r#"encountered a syntax error at L2:10: expected a scope name component, found '.'"#
    );
    assert_snapshot!(
        parse_selector("(comment").unwrap_err(),
        @"encountered a syntax error at L1:9: expected `)`, found the end of input"
    );
}

#[test]
fn errors_carry_the_offending_character() {
    assert!(matches!(
        parse_selector("a ! b"),
        Err(ParseError::UnexpectedChar { found: '!', .. })
    ));
}
