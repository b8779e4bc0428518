use insta::assert_ron_snapshot;
use scope_selector::color::Color;
use scope_selector::{Scope, ScopeName, Selector};

use crate::{scope, selector};

#[test]
fn serializes_as_source_text() {
    assert_ron_snapshot!(selector(" a >b, L:(c|d) "), @r#""a > b, L: (c | d)""#);
    assert_ron_snapshot!(scope("source.js  string"), @r#""source.js string""#);
    assert_ron_snapshot!(ScopeName::default(), @r#""""#);
}

#[test]
fn deserializes_by_parsing() {
    let parsed: Selector = serde_json::from_str(r#""string - comment""#).unwrap();
    assert_eq!(parsed, selector("string - comment"));

    let parsed: Vec<Scope> = serde_json::from_str(r#"["a b", ""]"#).unwrap();
    assert_eq!(parsed, [scope("a b"), Scope::default()]);
}

#[test]
fn rejects_malformed_text() {
    let err = serde_json::from_str::<Selector>(r#""(comment""#).unwrap_err();
    assert!(err.to_string().contains("expected `)`"), "{err}");

    assert!(serde_json::from_str::<ScopeName>(r#""a b""#).is_err());
    assert!(serde_json::from_str::<Selector>("42").is_err());
}

#[test]
fn colors_derive_their_representation() {
    let color: Color = serde_json::from_str(r#"{"red":1,"green":2,"blue":3,"alpha":255}"#).unwrap();
    assert_eq!(color, Color::rgb(1, 2, 3));
}
