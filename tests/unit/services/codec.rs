use super::*;

fn texts(buffer: &TextBuffer) -> Vec<String> {
    buffer
        .lines()
        .iter()
        .map(|l| String::from_utf8_lossy(l.as_bytes()).into_owned())
        .collect()
}

fn encode(buffer: &TextBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    save(buffer, &mut out).unwrap();
    out
}

#[test]
fn test_decode_strips_cr_before_lf_only() {
    let lines = decode(b"one\r\ntwo\nthr\ree\r").unwrap();
    let lines: Vec<&[u8]> = lines.iter().map(|l| l.as_bytes()).collect();
    assert_eq!(lines, vec![&b"one"[..], &b"two"[..], &b"thr\ree\r"[..]]);
}

#[test]
fn test_decode_trailing_newline_does_not_add_line() {
    assert_eq!(decode(b"a\nb\n").unwrap().len(), 2);
    assert_eq!(decode(b"a\nb\n\n").unwrap().len(), 3);
    assert!(decode(b"").unwrap().is_empty());
}

#[test]
fn test_decoded_lines_get_slack() {
    let lines = decode(b"abc\n").unwrap();
    assert!(lines[0].allocated() >= 3 + crate::models::LINE_SLACK);
}

#[test]
fn test_load_replaces_buffer() {
    let mut buffer = TextBuffer::from_text("old\nstuff");
    buffer.set_cursor(1, 2).unwrap();
    buffer.insert_char(b'x').unwrap();

    let lines = load(&mut buffer, &b"new\ncontent\n"[..]).unwrap();
    assert_eq!(lines, 2);
    assert_eq!(texts(&buffer), vec!["new", "content"]);
    assert_eq!(buffer.cursor(), (0, 0));
    assert!(!buffer.is_modified());
}

#[test]
fn test_load_empty_stream_gives_one_empty_line() {
    let mut buffer = TextBuffer::from_text("something");
    load(&mut buffer, &b""[..]).unwrap();
    assert_eq!(texts(&buffer), vec![""]);
}

#[test]
fn test_save_terminates_every_line() {
    let buffer = TextBuffer::from_text("hello\nworld");
    assert_eq!(encode(&buffer), b"hello\nworld\n");
}

#[test]
fn test_save_omits_terminator_after_empty_last_line() {
    let buffer = TextBuffer::from_text("hello\n");
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(encode(&buffer), b"hello\n");

    let buffer = TextBuffer::from_text("a\n\n");
    assert_eq!(encode(&buffer), b"a\n\n");
}

#[test]
fn test_save_empty_document_writes_nothing() {
    assert!(encode(&TextBuffer::new()).is_empty());
}

#[test]
fn test_missing_file_loads_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut buffer = TextBuffer::from_text("keep?");

    let outcome = load_path(&mut buffer, &dir.path().join("absent.txt"));
    assert_eq!(outcome, LoadOutcome::Empty);
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line_len(0), 0);

    let path = dir.path().join("empty.txt");
    save_path(&mut buffer, &path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_unreadable_file_loads_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut buffer = TextBuffer::from_text("old\ncontents");
    buffer.set_cursor(1, 3).unwrap();

    // Opening a directory succeeds; reading it does not.
    let outcome = load_path(&mut buffer, dir.path());
    assert_eq!(outcome, LoadOutcome::Empty);
    assert_eq!(texts(&buffer), vec![""]);
    assert_eq!(buffer.cursor(), (0, 0));
    assert!(!buffer.is_modified());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");

    let mut buffer = TextBuffer::from_text("first\n\n  indented\r\nlast");
    buffer.insert_char(b'>').unwrap();
    assert!(buffer.is_modified());

    save_path(&mut buffer, &path).unwrap();
    assert!(!buffer.is_modified());

    let mut loaded = TextBuffer::new();
    assert_eq!(load_path(&mut loaded, &path), LoadOutcome::Loaded { lines: 4 });
    assert_eq!(texts(&loaded), vec![">first", "", "  indented", "last"]);
}

#[test]
fn test_save_failure_keeps_modified() {
    let dir = tempfile::tempdir().unwrap();
    let mut buffer = TextBuffer::from_text("data");
    buffer.insert_char(b'x').unwrap();

    let result = save_path(&mut buffer, &dir.path().join("no/such/dir/file.txt"));
    assert!(matches!(result, Err(EditError::Io(_))));
    assert!(buffer.is_modified());
}
