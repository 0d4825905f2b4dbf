//! Reading the message from a byte stream.

use crate::error::Result;
use std::io::BufRead;

/// Read every line until end-of-stream.
///
/// `\n` and `\r\n` terminators are stripped. A final line without a
/// terminator is kept as is, trailing `\r` included. Bytes that are not
/// valid UTF-8 become U+FFFD instead of aborting the read.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    tracing::debug!("Read {} input lines", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines() {
        let lines = read_lines(Cursor::new("one\ntwo\r\nthree")).unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let lines = read_lines(Cursor::new("only\n")).unwrap();
        assert_eq!(lines, vec!["only"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines = read_lines(Cursor::new("\n\nx\n")).unwrap();
        assert_eq!(lines, vec!["", "", "x"]);
    }

    #[test]
    fn test_empty_stream() {
        assert!(read_lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = read_lines(Cursor::new(b"ok\n\xffbad\n".to_vec())).unwrap();
        assert_eq!(lines, vec!["ok", "\u{FFFD}bad"]);
    }

    #[test]
    fn test_unterminated_carriage_return_is_kept() {
        let lines = read_lines(Cursor::new("a\r\nb\r")).unwrap();
        assert_eq!(lines, vec!["a", "b\r"]);
    }

    #[test]
    fn test_tabs_survive_reading() {
        let lines = read_lines(Cursor::new("\tindented\n")).unwrap();
        assert_eq!(lines, vec!["\tindented"]);
    }
}
