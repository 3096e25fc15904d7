use super::*;

fn texts(buffer: &TextBuffer) -> Vec<String> {
    buffer
        .lines()
        .iter()
        .map(|l| String::from_utf8_lossy(l.as_bytes()).into_owned())
        .collect()
}

#[test]
fn test_normalize_swaps_reversed_ends() {
    let mut marking = Marking::new((1, 3), (0, 2));
    assert_eq!(marking.range(), ((0, 2), (1, 3)));

    marking.normalize();
    assert_eq!(marking.start, (0, 2));
    assert_eq!(marking.stop, (1, 3));

    let mut same_row = Marking::new((2, 9), (2, 1));
    same_row.normalize();
    assert_eq!((same_row.start, same_row.stop), ((2, 1), (2, 9)));
}

#[test]
fn test_contains_is_half_open() {
    let marking = Marking::new((0, 2), (1, 3));
    assert!(marking.contains((0, 2)));
    assert!(marking.contains((0, 100)));
    assert!(marking.contains((1, 2)));
    assert!(!marking.contains((1, 3)));
    assert!(!Marking::default().contains((0, 0)));
}

#[test]
fn test_get_block_multi_line_has_no_separator() {
    let mut buffer = TextBuffer::from_text("abcdef\nghijkl");
    buffer.set_marking(Marking::new((0, 2), (1, 3)));
    assert_eq!(buffer.get_block(), Some(b"cdefghi".to_vec()));
}

#[test]
fn test_get_block_includes_full_middle_lines() {
    let mut buffer = TextBuffer::from_text("abc\nmiddle\n\nxyz");
    buffer.set_marking(Marking::new((3, 1), (0, 1)));
    assert_eq!(buffer.get_block(), Some(b"bcmiddlex".to_vec()));
    assert_eq!(buffer.marking().start, (0, 1));
}

#[test]
fn test_get_block_single_line_clamps_to_length() {
    let mut buffer = TextBuffer::from_text("hello");
    buffer.set_marking(Marking::new((0, 1), (0, 99)));
    assert_eq!(buffer.get_block(), Some(b"ello".to_vec()));
}

#[test]
fn test_get_block_disabled_or_empty_is_none() {
    let mut buffer = TextBuffer::from_text("hello");
    assert_eq!(buffer.get_block(), None);

    buffer.set_marking(Marking::new((0, 2), (0, 2)));
    assert_eq!(buffer.get_block(), None);

    buffer.set_marking(Marking::new((5, 0), (6, 0)));
    assert_eq!(buffer.get_block(), None);
}

#[test]
fn test_delete_block_multi_line() {
    let mut buffer = TextBuffer::from_text("abcdef\nghijkl");
    buffer.set_marking(Marking::new((0, 2), (1, 3)));
    buffer.delete_block().unwrap();

    assert_eq!(texts(&buffer), vec!["abjkl"]);
    assert_eq!(buffer.cursor(), (0, 2));
    assert!(!buffer.marking().enabled);
    assert!(buffer.is_modified());
}

#[test]
fn test_delete_block_removes_interior_lines() {
    let mut buffer = TextBuffer::from_text("first\none\ntwo\nlast line\nafter");
    buffer.set_cursor(4, 3).unwrap();
    buffer.set_marking(Marking::new((3, 4), (0, 3)));
    buffer.delete_block().unwrap();

    assert_eq!(texts(&buffer), vec!["fir line", "after"]);
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.cursor(), (0, 3));
}

#[test]
fn test_delete_block_single_line() {
    let mut buffer = TextBuffer::from_text("hello world");
    buffer.set_marking(Marking::new((0, 5), (0, 11)));
    buffer.delete_block().unwrap();

    assert_eq!(texts(&buffer), vec!["hello"]);
    assert_eq!(buffer.cursor(), (0, 5));
}

#[test]
fn test_delete_block_preconditions() {
    let mut buffer = TextBuffer::from_text("hello");
    assert!(matches!(buffer.delete_block(), Err(EditError::MarkingDisabled)));

    buffer.set_marking(Marking::new((0, 3), (0, 3)));
    assert!(matches!(buffer.delete_block(), Err(EditError::EmptyMarking)));
    assert_eq!(texts(&buffer), vec!["hello"]);
    assert!(!buffer.is_modified());
}

#[test]
fn test_mark_all_then_delete_leaves_empty_document() {
    let mut buffer = TextBuffer::from_text("one\ntwo\nthree");
    buffer.mark_all();
    assert_eq!(buffer.marking().start, (0, 0));
    assert_eq!(buffer.marking().stop, (2, 5));

    assert_eq!(buffer.get_block(), Some(b"onetwothree".to_vec()));
    buffer.delete_block().unwrap();
    assert_eq!(texts(&buffer), vec![""]);
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_clear_marking() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.set_marking(Marking::new((0, 0), (0, 2)));
    buffer.clear_marking();
    assert_eq!(*buffer.marking(), Marking::default());
}
