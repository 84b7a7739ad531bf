use std::io::BufRead;

use crate::errors::Result;

/// Joins already-encoded fragments into one array: `["1", "[2]"]` becomes `[1,[2]]`.
pub fn join_array<S: AsRef<str>>(parts: &[S]) -> String {
    let mut joined = String::from("[");
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push(',');
        }
        joined.push_str(part.as_ref());
    }
    joined.push(']');
    joined
}

/// Reads one line with surrounding whitespace trimmed, `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_join_array() {
        assert_eq!(join_array(&["1", "[2,3]", "\"a\""]), "[1,[2,3],\"a\"]");
        assert_eq!(join_array::<String>(&[]), "[]");
    }

    #[test]
    fn test_read_line() {
        let mut input = Cursor::new("  [1,2]  \nint\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("int"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
