use std::fs;

use insta::assert_snapshot;
use scope_selector::{Selector, parse_selector};

use crate::selector;

fn assert_round_trips(text: &str) {
    let parsed = parse_selector(text)
        .map_err(|e| format!("could not parse {text:?}: {e}"))
        .unwrap();
    let first_dump = parsed.to_string();
    let reparsed = parse_selector(&first_dump)
        .map_err(|e| format!("could not parse the dump {first_dump:?}: {e}"))
        .unwrap();

    assert_eq!(reparsed, parsed, "the dump {first_dump:?} of {text:?} parses differently");
    assert_eq!(reparsed.to_string(), first_dump, "dumping is not idempotent");
}

#[test]
fn test_data_round_trips() {
    insta::glob!("test-data/**/*.selector", |path| {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("could not read `{}` to string: {e}", path.display()))
            .unwrap();

        assert_round_trips(&contents);
    });
}

#[test]
fn edge_cases_round_trip() {
    for text in [
        "",
        "()",
        "(())",
        "a - - b",
        "-a",
        "L:R:B:a",
        "^a$",
        "a>b>c",
        "L.a B.c",
        "x-y.*-z",
        "a|b&c-d",
    ] {
        assert_round_trips(text);
    }
}

#[test]
fn dumps_are_normalized() {
    assert_snapshot!(selector(" a > b cd>e "), @"a > b cd > e");
    assert_snapshot!(selector("-a b|c"), @"- a b | c");
    assert_snapshot!(selector("L:(a,b)&R : ^c$"), @"L: (a, b) & R: ^c$");
    assert_snapshot!(
        selector("meta.property.vendor.microsoft.trident.5,\nsupport.type.property-name"),
        @"meta.property.vendor.microsoft.trident.5, support.type.property-name"
    );
}

#[test]
fn dump_of_the_universal_selector_is_empty() {
    assert_eq!(Selector::default().to_string(), "");
    assert!(selector(&Selector::default().to_string()).is_empty());
}
