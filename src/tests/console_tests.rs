use crate::console::{collapse_lines, finish_edit, Console};
use std::io::Cursor;

#[test]
fn typed_value_wins_over_default() {
    let mut console = Console::new(Cursor::new(&b"145k miles\n"[..]));
    let value = console.read_value("mileage", "140000").unwrap();
    assert_eq!(value, "145k miles");
}

#[test]
fn blank_line_falls_back_to_default() {
    let mut console = Console::new(Cursor::new(&b"\n"[..]));
    let value = console.read_value("mileage", "140000").unwrap();
    assert_eq!(value, "140000");
}

#[test]
fn eof_counts_as_blank() {
    let mut console = Console::new(Cursor::new(&b""[..]));
    let value = console.read_value("mileage", "140000").unwrap();
    assert_eq!(value, "140000");
}

#[test]
fn blank_everything_yields_empty_string() {
    let mut console = Console::new(Cursor::new(&b"\n"[..]));
    let value = console.read_value("contact", "").unwrap();
    assert_eq!(value, "");
}

#[test]
fn collapse_joins_lines_with_comma() {
    let raw = "Mon-Fri 9-5\nSat 10-2\n";
    assert_eq!(collapse_lines(raw), "Mon-Fri 9-5, Sat 10-2");
}

#[test]
fn collapse_drops_blank_lines_and_edge_whitespace() {
    let raw = "  123 Main St  \n\n  Springfield  \n";
    assert_eq!(collapse_lines(raw), "123 Main St, Springfield");
}

#[test]
fn emptied_buffer_falls_back_to_default() {
    assert_eq!(finish_edit("\n\n", "Oakland, CA"), "Oakland, CA");
    assert_eq!(finish_edit("", ""), "");
}

#[test]
fn edited_buffer_overrides_default() {
    assert_eq!(finish_edit("14 Elm Ave\nPortland", "Oakland, CA"), "14 Elm Ave, Portland");
}
