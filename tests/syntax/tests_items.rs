//! Item scanner tests.

use ferrule::syntax::{ItemKind, scan_items};

#[test]
fn test_scanner_finds_nested_traits() {
    let source = r#"
mod ops {
    pub mod arith {
        #[lang = "add"]
        pub trait Add<Rhs = Self> { type Output; }
    }
}
"#;
    let items = scan_items(source);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, ItemKind::Trait);
    assert_eq!(items[0].name.as_ref(), "Add");
    assert!(source[items[0].range].starts_with("#[lang = \"add\"]"));
    assert!(source[items[0].range].ends_with("{ type Output; }"));
}

#[test]
fn test_scanner_ignores_nameless_trait_keyword() {
    let items = scan_items("fn f(x: &dyn trait) {}\ntrait {}\ntrait Real;");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_ref(), "Real");
}

#[test]
fn test_scanner_covers_qualifiers() {
    let source = "#[lang = \"send\"]\npub(crate) unsafe auto trait Send {}";
    let items = scan_items(source);
    assert_eq!(items.len(), 1);
    assert_eq!(&source[items[0].range], source);
    assert_eq!(&source[items[0].name_range], "Send");
    assert_eq!(items[0].lang.as_ref().map(|a| a.value.as_ref()), Some("send"));
}

#[test]
fn test_scanner_keeps_strings_and_comments_opaque() {
    let source = "// trait Hidden {}\nconst S: &str = \"trait Fake {}\";\n/* trait Gone; */ trait Seen;";
    let names: Vec<_> = scan_items(source)
        .into_iter()
        .map(|item| item.name.to_string())
        .collect();
    assert_eq!(names, vec!["Seen"]);
}
