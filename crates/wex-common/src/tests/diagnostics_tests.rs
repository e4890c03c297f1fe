use super::*;
use crate::span::Span;
use rayon::prelude::*;

#[test]
fn test_format_message_replaces_placeholders() {
    let message = format_message("'{0}' does not contain a definition for '{1}'.", &["P", "z"]);
    assert_eq!(message, "'P' does not contain a definition for 'z'.");
}

#[test]
fn test_every_code_has_a_unique_message() {
    let mut codes: Vec<u32> = DIAGNOSTIC_MESSAGES.iter().map(|m| m.code).collect();
    let total = codes.len();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), total, "duplicate diagnostic code in table");

    assert_eq!(
        get_message_template(diagnostic_codes::NO_SINGLE_CLONE_METHOD),
        Some(diagnostic_messages::NO_SINGLE_CLONE_METHOD)
    );
}

#[test]
fn test_from_code_formats_and_locates() {
    let diag = Diagnostic::from_code(
        "a.wex",
        4,
        3,
        diagnostic_codes::CONTAINING_TYPE_MUST_DERIVE_FROM_WITH_RETURN_TYPE,
        &["Point", "Shape"],
    );
    assert_eq!(diag.start, 4);
    assert_eq!(diag.length, 3);
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert_eq!(
        diag.message_text,
        "The receiver type 'Point' must be the same as or derive from the 'Clone' return type 'Shape'."
    );
}

#[test]
fn test_unknown_code_still_produces_error() {
    let diag = Diagnostic::from_code("a.wex", 0, 0, 9999, &[]);
    assert!(diag.is_error());
    assert_eq!(diag.code, 9999);
}

#[test]
fn test_bag_preserves_report_order() {
    let mut bag = DiagnosticBag::new("a.wex");
    bag.add(diagnostic_codes::MEMBER_NOT_FOUND, Span::new(10, 13), &["P", "zzz"]);
    bag.add(diagnostic_codes::INVALID_UPDATE_RECEIVER_TYPE, Span::new(0, 4), &[]);

    assert_eq!(
        bag.codes(),
        vec![
            diagnostic_codes::MEMBER_NOT_FOUND,
            diagnostic_codes::INVALID_UPDATE_RECEIVER_TYPE
        ]
    );
    assert!(bag.has_errors());
    assert_eq!(&*bag.as_slice()[0].file, "a.wex");
}

#[test]
fn test_concurrent_sink_collects_every_bag() {
    let sink = ConcurrentDiagnosticSink::new();

    (0..64u32).into_par_iter().for_each(|i| {
        let mut bag = DiagnosticBag::new(format!("file{}.wex", i % 4));
        bag.add(diagnostic_codes::NAME_DOES_NOT_EXIST, Span::new(i, i + 1), &["x"]);
        bag.add(diagnostic_codes::MEMBER_NOT_FOUND, Span::new(i + 2, i + 3), &["P", "y"]);
        sink.append(bag);
    });
    sink.append(DiagnosticBag::new("empty.wex"));

    assert_eq!(sink.len(), 128);
    let sorted = sink.into_sorted();
    assert!(sorted.windows(2).all(|w| (&w[0].file, w[0].start) <= (&w[1].file, w[1].start)));
}
