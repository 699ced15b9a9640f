use courier_row::{FixedWidthMeasurer, TextMeasurer, TextRole};

fn measurer() -> FixedWidthMeasurer {
    FixedWidthMeasurer::new(10.0, 20.0)
}

#[test]
fn empty_text_has_no_size() {
    let layout = measurer().measure("", TextRole::Body, 200.0, None);
    assert_eq!(layout.line_count, 0);
    assert_eq!(layout.size.height, 0.0);
    assert!(!layout.truncated);
}

#[test]
fn wraps_at_word_boundaries() {
    // 5 characters per line
    let layout = measurer().measure("aa bb cc", TextRole::Body, 50.0, None);
    assert_eq!(layout.line_count, 2);
    assert_eq!(layout.size.width, 50.0);
    assert_eq!(layout.size.height, 40.0);
}

#[test]
fn splits_words_longer_than_a_line() {
    let layout = measurer().measure("abcdefghijkl", TextRole::Body, 50.0, None);
    assert_eq!(layout.line_count, 3);
}

#[test]
fn keeps_explicit_line_breaks() {
    let layout = measurer().measure("one\ntwo\n\nthree", TextRole::Body, 500.0, None);
    assert_eq!(layout.line_count, 4);
}

#[test]
fn infinite_width_never_wraps() {
    let layout = measurer().measure("a rather long label", TextRole::Label, f64::INFINITY, Some(1));
    assert_eq!(layout.line_count, 1);
    assert_eq!(layout.size.width, 190.0);
    assert!(!layout.truncated);
}

#[test]
fn line_limit_truncates() {
    let layout = measurer().measure("aa bb cc dd", TextRole::Body, 20.0, Some(2));
    assert_eq!(layout.line_count, 2);
    assert_eq!(layout.size.height, 40.0);
    assert!(layout.truncated);
}
