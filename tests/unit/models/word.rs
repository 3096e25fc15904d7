use super::*;

#[test]
fn test_separator_classes() {
    for b in [b' ', b'\t', b'\r', b'\n', b'!', b'/', b':', b'@', b'[', b'`', b'{', b'~', b'_'] {
        assert!(is_word_separator(b), "{:?} should separate", b as char);
    }
    for b in [b'a', b'Z', b'0', b'9', 0x80, 0xC3, 0xFF] {
        assert!(!is_word_separator(b), "{:#x} should be a word byte", b);
    }
}

#[test]
fn test_next_word_three_times_ends_at_line_end() {
    let mut buffer = TextBuffer::from_text("hello world");

    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 6));
    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 11));
    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 11));
}

#[test]
fn test_next_word_continues_on_next_line() {
    let mut buffer = TextBuffer::from_text("foo\n  bar");
    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_next_word_skips_punctuation() {
    let mut buffer = TextBuffer::from_text("a.b, c");
    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 2));
    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 5));
}

#[test]
fn test_prev_word_within_line() {
    let mut buffer = TextBuffer::from_text("hello world");
    buffer.move_end_of_line().unwrap();

    buffer.move_prev_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 6));
    buffer.move_prev_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 0));
    assert!(matches!(buffer.move_prev_word(), Err(EditError::AtDocumentStart)));
}

#[test]
fn test_prev_word_from_column_zero_goes_to_previous_line() {
    let mut buffer = TextBuffer::from_text("one two\nthree");
    buffer.set_cursor(1, 0).unwrap();
    buffer.move_prev_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 4));
}

#[test]
fn test_prev_word_looks_back_past_blank_line() {
    let mut buffer = TextBuffer::from_text("alpha beta\n   \nomega");
    buffer.set_cursor(2, 0).unwrap();
    buffer.move_prev_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 6));

    let mut buffer = TextBuffer::from_text("alpha\n\n\nomega");
    buffer.set_cursor(3, 0).unwrap();
    buffer.move_prev_word().unwrap();
    assert_eq!(buffer.cursor(), (1, 0));
}

#[test]
fn test_start_and_end_of_line() {
    let mut buffer = TextBuffer::from_text("abc def");
    buffer.set_cursor(0, 3).unwrap();
    buffer.move_end_of_line().unwrap();
    assert_eq!(buffer.cursor(), (0, 7));
    buffer.move_start_of_line().unwrap();
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_end_of_word() {
    let mut buffer = TextBuffer::from_text("abc  def");
    buffer.set_cursor(0, 1).unwrap();
    buffer.move_end_of_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 3));

    buffer.move_end_of_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 8));

    buffer.move_end_of_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 8));
}

#[test]
fn test_start_of_word_stays_on_line() {
    let mut buffer = TextBuffer::from_text("prev\nabc  def");
    buffer.set_cursor(1, 7).unwrap();
    buffer.move_start_of_word().unwrap();
    assert_eq!(buffer.cursor(), (1, 5));

    buffer.move_start_of_word().unwrap();
    assert_eq!(buffer.cursor(), (1, 0));

    buffer.move_start_of_word().unwrap();
    assert_eq!(buffer.cursor(), (1, 0));
}

#[test]
fn test_high_bytes_are_word_characters() {
    let mut buffer = TextBuffer::from_text("caf\u{e9} bar");
    buffer.move_next_word().unwrap();
    assert_eq!(buffer.cursor(), (0, 6));
}
