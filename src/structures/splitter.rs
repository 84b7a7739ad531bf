use log::trace;
use serde_json::Value as JsonValue;

use crate::errors::{CodecError, Result};

/// Splits a bracketed array into the canonical text of its top-level elements.
///
/// Elements are re-encoded rather than sliced, so nested arrays come back
/// fully bracketed and without interior whitespace:
/// `"[1, [2, 3], \"a\"]"` splits into `["1", "[2,3]", "\"a\""]`.
pub fn split_array(text: &str) -> Result<Vec<String>> {
    let text = text.trim();
    if text.len() < 2 || !text.starts_with('[') || !text.ends_with(']') {
        return Err(CodecError::malformed(text));
    }

    let elements: Vec<JsonValue> =
        serde_json::from_str(text).map_err(|_| CodecError::malformed(text))?;
    trace!("split {} top-level elements", elements.len());

    elements
        .iter()
        .map(|element| serde_json::to_string(element).map_err(|_| CodecError::malformed(text)))
        .collect()
}

/// Parses a flat array whose elements are all integers or `null`.
pub(crate) fn parse_int_slots(text: &str) -> Result<Vec<Option<i32>>> {
    let text = text.trim();
    serde_json::from_str(text).map_err(|_| CodecError::malformed(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_nested() {
        assert_eq!(split_array("[1,[2,3],4]").unwrap(), vec!["1", "[2,3]", "4"]);
    }

    #[test]
    fn test_split_canonicalizes() {
        let splits = split_array("  [ \"a,b\" , [ 1 , null ] , true ]  ").unwrap();
        assert_eq!(splits, vec!["\"a,b\"", "[1,null]", "true"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_array("[]").unwrap().is_empty());
        assert!(split_array("[ ]").unwrap().is_empty());
    }

    #[test]
    fn test_split_malformed() {
        for text in ["", "[", "]", "1,2", "[1,2", "[[1,2]", "[\"a]", "[1,,2]"] {
            assert!(
                matches!(split_array(text), Err(CodecError::MalformedArray(_))),
                "expected MalformedArray for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_int_slots() {
        assert_eq!(
            parse_int_slots("[1,null,2]").unwrap(),
            vec![Some(1), None, Some(2)]
        );
        assert!(parse_int_slots("[1,\"x\"]").is_err());
    }
}
