//! Lang attribute recognition.

use ferrule::syntax::scan_items;
use rstest::rstest;

fn marker_of(source: &str) -> Option<String> {
    let items = scan_items(source);
    assert_eq!(items.len(), 1, "expected one item in {:?}", source);
    items[0].lang.as_ref().map(|attr| attr.value.to_string())
}

#[rstest]
#[case::plain("#[lang = \"add\"] trait Add {}", "add")]
#[case::no_spaces("#[lang=\"add\"] trait Add {}", "add")]
#[case::trivia("# [ lang /* op */ = \"add\" ]\n// doc\ntrait Add {}", "add")]
#[case::path_marker("#[lang = \"core::fmt::Display\"] trait Display {}", "core::fmt::Display")]
#[case::after_other_attr("#[must_use]\n#[lang = \"add\"]\npub trait Add {}", "add")]
#[case::first_wins("#[lang = \"add\"] #[lang = \"plus\"] trait Add {}", "add")]
fn test_lang_attribute_accepted(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(marker_of(source).as_deref(), Some(expected));
}

#[rstest]
#[case::bare("#[lang] trait Add {}")]
#[case::unquoted("#[lang = add] trait Add {}")]
#[case::empty("#[lang = \"\"] trait Add {}")]
#[case::call_form("#[lang(\"add\")] trait Add {}")]
#[case::other_attr("#[derive(Debug)] trait Add {}")]
#[case::inner_attr("#![lang = \"add\"] trait Add {}")]
#[case::other_name("#[language = \"add\"] trait Add {}")]
fn test_lang_attribute_rejected(#[case] source: &str) {
    assert_eq!(marker_of(source), None);
}

#[test]
fn test_attribute_on_other_item_does_not_leak() {
    let items = scan_items("#[lang = \"add\"] struct S;\ntrait Add {}");
    assert_eq!(items.len(), 1);
    assert!(items[0].lang.is_none());
}
