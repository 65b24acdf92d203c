//! Text-substitution fix tests.

use crate::helpers::hir_helpers::range;
use ferrule::base::{FileId, TextRange, TextSize};
use ferrule::ide::{ElementPtr, FixError, SubstituteTextFix, TextBuffer};
use rstest::rstest;

// =============================================================================
// HELPERS
// =============================================================================

const SOURCE: &str = "let value = compute(a, b);";

/// `compute(a, b)`, starting at absolute offset 12.
fn call() -> ElementPtr {
    ElementPtr::new(FileId::new(0), range(12, 25))
}

fn run(fix: &SubstituteTextFix<ElementPtr>) -> String {
    let mut text = SOURCE.to_string();
    let buffer: &mut dyn TextBuffer = &mut text;
    assert!(fix.invoke(Some(buffer), fix.anchor().range.start()));
    text
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[rstest]
#[case::whole_element(0, 13)]
#[case::empty_at_start(0, 0)]
#[case::empty_at_end(13, 13)]
#[case::inner(8, 9)]
fn test_ranges_inside_element_are_accepted(#[case] start: u32, #[case] end: u32) {
    assert!(SubstituteTextFix::delete(None, call(), range(start, end)).is_ok());
    assert!(SubstituteTextFix::replace(None, call(), range(start, end), "x").is_ok());
}

#[rstest]
#[case::one_past_end(0, 14)]
#[case::absolute_range(12, 25)]
#[case::starts_past_end(14, 14)]
fn test_ranges_outside_element_are_rejected(#[case] start: u32, #[case] end: u32) {
    let err = SubstituteTextFix::delete(None, call(), range(start, end)).unwrap_err();
    assert_eq!(
        err,
        FixError::RangeOutsideElement {
            range: range(start, end),
            element_len: TextSize::from(13),
        }
    );
}

#[test]
fn test_rejected_construction_touches_nothing() {
    let mut text = SOURCE.to_string();
    let result = SubstituteTextFix::insert(None, call(), TextSize::from(20), "oops");
    assert!(result.is_err());
    let buffer: &mut dyn TextBuffer = &mut text;
    assert_eq!(buffer.text_len(), TextSize::of(SOURCE));
    assert_eq!(text, SOURCE);
}

// =============================================================================
// INVOKE
// =============================================================================

#[test]
fn test_delete_removes_exactly_the_range() {
    // ", b" relative to the call.
    let fix = SubstituteTextFix::delete(Some("Drop argument"), call(), range(9, 12)).unwrap();
    assert_eq!(fix.text(), "Drop argument");
    assert_eq!(fix.absolute_range(TextSize::from(12)), range(21, 24));
    assert_eq!(run(&fix), "let value = compute(a);");
}

#[test]
fn test_insert_adds_text_without_deleting() {
    let fix = SubstituteTextFix::insert(None, call(), TextSize::from(7), "ctx, ").unwrap();
    assert_eq!(fix.range_in_element(), TextRange::empty(TextSize::from(7)));
    assert_eq!(run(&fix), "let value = compute(ctx, a, b);");
}

#[rstest]
#[case::shorter(0, 7, "f")]
#[case::longer(8, 9, "alpha")]
#[case::empty_replacement(7, 13, "")]
#[case::empty_range(13, 13, "?")]
fn test_replace_is_delete_then_insert(
    #[case] start: u32,
    #[case] end: u32,
    #[case] text: &str,
) {
    let replaced = run(&SubstituteTextFix::replace(None, call(), range(start, end), text).unwrap());

    let mut stepwise = SOURCE.to_string();
    let element_start = call().range.start();
    let delete = SubstituteTextFix::delete(None, call(), range(start, end)).unwrap();
    let insert = SubstituteTextFix::insert(None, call(), TextSize::from(start), text).unwrap();
    let buffer: &mut dyn TextBuffer = &mut stepwise;
    assert!(delete.invoke(Some(&mut *buffer), element_start));
    assert!(insert.invoke(Some(buffer), element_start));

    assert_eq!(replaced, stepwise);
}

#[test]
fn test_invoke_without_document_is_noop() {
    let fix = SubstituteTextFix::replace(None, call(), range(0, 7), "other").unwrap();
    assert!(!fix.invoke(None, TextSize::from(12)));
}

#[test]
fn test_default_label() {
    let fix = SubstituteTextFix::delete(None, call(), range(0, 1)).unwrap();
    assert_eq!(fix.text(), "Substitute");
    assert_eq!(fix.family_name(), "Substitute one text to another");
}
