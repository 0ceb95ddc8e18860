use super::*;

#[test]
fn occurrences_are_non_overlapping() {
    assert_eq!(occurrences("\"\"\"\"\"\"", "\"\"\""), 2);
    assert_eq!(occurrences("\"\"\"\"", "\"\"\""), 1);
    assert_eq!(occurrences("/* a */", "/*"), 1);
    assert_eq!(occurrences("abc", ""), 0);
    assert_eq!(occurrences("/", "/*"), 0);
}

#[test]
fn symmetric_marker_uses_parity() {
    assert!(!is_unbalanced(Vec::<&str>::new(), "\"\"\"", "\"\"\""));
    assert!(is_unbalanced(["\"\"\"doc"], "\"\"\"", "\"\"\""));
    assert!(!is_unbalanced(["\"\"\"doc", "string\"\"\""], "\"\"\"", "\"\"\""));
    assert!(is_unbalanced(["\"\"\"a\"\"\"", "\"\"\"b"], "\"\"\"", "\"\"\""));
}

#[test]
fn asymmetric_marker_compares_counts() {
    assert!(is_unbalanced(["/*", "comment"], "/*", "*/"));
    assert!(!is_unbalanced(["/*", "comment", "*/"], "/*", "*/"));
    assert!(!is_unbalanced(["code"], "/*", "*/"));
}

#[test]
fn stray_close_does_not_open() {
    assert!(!is_unbalanced(["*/", "code"], "/*", "*/"));
}

#[test]
fn same_marker_nesting_is_not_distinguished() {
    // `/* /* */` is reported open even though a nesting-aware lexer would
    // need one more close; the heuristic only compares counts.
    assert!(is_unbalanced(["/*", "/*", "*/"], "/*", "*/"));
}

const QUOTES: &[char] = &['"', '\''];

#[test]
fn closed_quotes_leave_nothing_open() {
    assert_eq!(open_quote([("\"hi\"", false)], QUOTES, '\\', &[]), None);
    assert_eq!(open_quote([("\"a", false), ("b\"", false)], QUOTES, '\\', &[]), None);
}

#[test]
fn unmatched_quote_stays_open() {
    assert_eq!(open_quote([("\"hello", false)], QUOTES, '\\', &[]), Some('"'));
    assert_eq!(open_quote([("x", false), ("'y", false)], QUOTES, '\\', &[]), Some('\''));
}

#[test]
fn other_quote_kind_inside_string_is_literal() {
    assert_eq!(open_quote([("\"it's\"", false)], QUOTES, '\\', &[]), None);
    assert_eq!(open_quote([("'say", false), ("\"hi", false)], QUOTES, '\\', &[]), Some('\''));
}

#[test]
fn escaped_quotes_are_not_markers() {
    assert_eq!(open_quote([("\"a\\\"b", false)], QUOTES, '\\', &[]), Some('"'));
    assert_eq!(open_quote([("\\\\\"", false)], QUOTES, '\\', &[]), Some('"'));
    assert_eq!(open_quote([("\"x", false), ("\"", true)], QUOTES, '\\', &[]), Some('"'));
}

#[test]
fn skipped_sequences_are_not_quotes() {
    let triple = &["\"\"\""];
    assert_eq!(open_quote([("\"\"\"", false)], QUOTES, '\\', triple), None);
    assert_eq!(open_quote([("end\"\"\"", false), ("x", false)], QUOTES, '\\', triple), None);
    assert_eq!(open_quote([("\"\"\"\"", false)], QUOTES, '\\', triple), Some('"'));
}

#[test]
fn live_escape_detection() {
    assert!(ends_with_live_escape("\\", '\\'));
    assert!(!ends_with_live_escape("\\\\", '\\'));
    assert!(ends_with_live_escape("ab\\\\\\", '\\'));
    assert!(!ends_with_live_escape("ab", '\\'));
}

// === Code scan ===

fn c_policy() -> crate::DelimiterPolicy {
    crate::DelimiterPolicy::non_alphanumeric().excluding(&['_', '"', '\''])
}

/// Block depth after scanning all of `source`.
fn depth_after(source: &str, quotes: &QuoteSyntax) -> usize {
    let stream = crate::tokenize(source, &c_policy());
    let mut scan = CodeScan::new(&["//"], Some(quotes)).with_block("/*", "*/");
    for token in stream.iter() {
        scan.feed(token);
    }
    scan.block_depth()
}

#[test]
fn block_markers_in_code_count() {
    let quotes = QuoteSyntax::new(QUOTES, '\\');
    assert_eq!(depth_after("a /* b", &quotes), 1);
    assert_eq!(depth_after("a /* b */ c", &quotes), 0);
    assert_eq!(depth_after("/* a\nb */\nc /* d", &quotes), 1);
}

#[test]
fn block_markers_inside_strings_are_text() {
    let quotes = QuoteSyntax::new(QUOTES, '\\');
    assert_eq!(depth_after("p = \"src/*.c\";\nx", &quotes), 0);
    assert_eq!(depth_after("p = \"a\\\" /*\";\nx", &quotes), 0);
}

#[test]
fn block_markers_after_line_comment_are_text() {
    let quotes = QuoteSyntax::new(QUOTES, '\\');
    assert_eq!(depth_after("//****\nint x;", &quotes), 0);
    assert_eq!(depth_after("x; // see /* here\ny", &quotes), 0);
}

#[test]
fn line_comment_marker_inside_block_is_text() {
    let quotes = QuoteSyntax::new(QUOTES, '\\');
    assert_eq!(depth_after("/* http://x */ y", &quotes), 0);
}

#[test]
fn stray_close_is_ignored_and_nesting_still_counts() {
    let quotes = QuoteSyntax::new(QUOTES, '\\');
    assert_eq!(depth_after("*/ a /* b", &quotes), 1);
    assert_eq!(depth_after("/* /* */", &quotes), 1);
}

#[test]
fn multiline_string_hides_markers_across_lines() {
    let quotes = QuoteSyntax::new(QUOTES, '\\').skipping(&["\"\"\""]);
    let policy = crate::DelimiterPolicy::whitespace();
    let stream = crate::tokenize("s = \"\"\"a\n/* b\n\"\"\"\nc", &policy);
    let mut scan = CodeScan::new(&["//"], Some(&quotes)).with_block("/*", "*/");
    let touched: Vec<bool> = stream.iter().map(|t| scan.feed(t)).collect();
    assert!(touched.iter().all(|t| !t));
    assert_eq!(scan.block_depth(), 0);
    assert!(scan.in_code());
}

#[test]
fn open_after_respects_adjacent_escapes() {
    let quotes = QuoteSyntax::new(&['"'], '\\');
    let policy = crate::DelimiterPolicy::non_alphanumeric()
        .excluding(&['"'])
        .merging(crate::MergePolicy::Never);
    let stream = crate::tokenize("\"a\\\" b", &policy);
    assert_eq!(quotes.open_after(stream.as_slice()), Some('"'));
    assert_eq!(QuoteSyntax::new(&['"'], '\\').open_after(&stream.as_slice()[..1]), Some('"'));
}
