use super::*;

#[test]
fn truncate_to_width_does_not_split_utf8() {
    let text = "éé";
    let end = truncate_to_width(text, 1);
    assert_eq!(end, "é".len());
    assert!(text.is_char_boundary(end));
    assert_eq!(&text[..end], "é");
}

#[test]
fn truncate_to_width_stops_before_wide_glyph() {
    let text = "a你";
    assert_eq!(truncate_to_width(text, 2), 1);
    assert_eq!(truncate_to_width(text, 3), text.len());
    assert_eq!(truncate_to_width(text, 0), 0);
}

#[test]
fn wrap_breaks_on_word_boundaries() {
    let lines = wrap("This is a sample paragraph", 10);
    assert_eq!(lines, vec!["This is a", "sample", "paragraph"]);
}

#[test]
fn wrap_hard_splits_long_words() {
    let lines = wrap("abcdefgh", 3);
    assert_eq!(lines, vec!["abc", "def", "gh"]);
}

#[test]
fn wrap_keeps_explicit_newlines() {
    let lines = wrap("one\n\ntwo", 10);
    assert_eq!(lines, vec!["one", "", "two"]);
}

#[test]
fn wrap_zero_width_is_empty() {
    assert!(wrap("anything", 0).is_empty());
}
