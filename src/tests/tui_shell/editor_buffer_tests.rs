use super::*;

const TEXT: &str = "fn main() {\n    go();\n}\n";

#[test]
fn line_col_and_offset_at_agree() {
    for offset in 0..=TEXT.chars().count() {
        let (line, col) = line_col(TEXT, offset);
        assert_eq!(offset_at(TEXT, line, col), offset, "offset {offset}");
    }
    assert_eq!(line_col(TEXT, 12), (1, 0));
    assert_eq!(offset_at(TEXT, 0, 99), 11);
    assert_eq!(offset_at(TEXT, 99, 0), TEXT.chars().count());
}

#[test]
fn vertical_moves_keep_preferred_column() {
    let mut b = EditorBuffer::default();
    b.click_at(TEXT, 0, 10);
    b.move_down(TEXT);
    // Line 1 is "    go();" (9 chars): clamped.
    assert_eq!(line_col(TEXT, b.cursor), (1, 9));
    b.move_down(TEXT);
    assert_eq!(line_col(TEXT, b.cursor), (2, 1));
    b.move_up(TEXT);
    b.move_up(TEXT);
    assert_eq!(line_col(TEXT, b.cursor), (0, 10));
}

#[test]
fn insert_and_delete_multibyte() {
    let mut b = EditorBuffer::default();
    let t = b.insert("ab", "é");
    assert_eq!(t, "éab");
    assert_eq!(b.cursor, 1);
    b.move_right(&t);
    let t = b.backspace(&t).unwrap();
    assert_eq!(t, "éb");
    assert_eq!(b.cursor, 1);
    assert_eq!(b.delete(&t).as_deref(), Some("é"));
    b.end(&t);
    assert_eq!(b.delete(&t), None);
    b.home(&t);
    assert_eq!(b.backspace(&t), None);
}

#[test]
fn open_resets_only_on_file_change() {
    let mut b = EditorBuffer::default();
    b.open(Some(crate::model::FileId::from("a")));
    b.cursor = 3;
    b.open(Some(crate::model::FileId::from("a")));
    assert_eq!(b.cursor, 3);
    b.open(Some(crate::model::FileId::from("b")));
    assert_eq!(b.cursor, 0);
}

#[test]
fn scroll_follows_cursor() {
    let text = "0\n1\n2\n3\n4\n5";
    let mut b = EditorBuffer::default();
    b.click_at(text, 5, 0);
    b.ensure_visible(text, 3);
    assert_eq!(b.scroll, 3);
    b.click_at(text, 1, 0);
    b.ensure_visible(text, 3);
    assert_eq!(b.scroll, 1);
}
