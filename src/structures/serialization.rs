use crate::constants::{FALSE_LITERAL, TRUE_LITERAL};
use crate::errors::{CodecError, Result};
use crate::structures::splitter::split_array;

pub trait TextSerialization {
    fn serialize(&self) -> String;
}

pub trait TextDeserialization {
    fn deserialize(text: &str) -> Result<Self>
    where
        Self: Sized;
}

impl TextSerialization for i32 {
    fn serialize(&self) -> String {
        self.to_string()
    }
}

impl TextDeserialization for i32 {
    fn deserialize(text: &str) -> Result<Self> {
        text.trim()
            .parse()
            .map_err(|_| CodecError::parse("int", text))
    }
}

impl TextSerialization for i64 {
    fn serialize(&self) -> String {
        self.to_string()
    }
}

impl TextDeserialization for i64 {
    fn deserialize(text: &str) -> Result<Self> {
        text.trim()
            .parse()
            .map_err(|_| CodecError::parse("int", text))
    }
}

impl TextSerialization for f64 {
    fn serialize(&self) -> String {
        self.to_string()
    }
}

impl TextDeserialization for f64 {
    fn deserialize(text: &str) -> Result<Self> {
        text.trim()
            .parse()
            .map_err(|_| CodecError::parse("float", text))
    }
}

impl TextSerialization for bool {
    fn serialize(&self) -> String {
        let literal = if *self { TRUE_LITERAL } else { FALSE_LITERAL };
        literal.to_string()
    }
}

impl TextDeserialization for bool {
    // Anything other than `true` reads as false.
    fn deserialize(text: &str) -> Result<Self> {
        Ok(text == TRUE_LITERAL)
    }
}

impl TextSerialization for String {
    // No escaping: embedded quotes are not representable.
    fn serialize(&self) -> String {
        format!("\"{}\"", self)
    }
}

impl TextDeserialization for String {
    fn deserialize(text: &str) -> Result<Self> {
        let text = text.strip_prefix('"').unwrap_or(text);
        let text = text.strip_suffix('"').unwrap_or(text);
        Ok(text.to_string())
    }
}

impl<T: TextSerialization> TextSerialization for Vec<T> {
    fn serialize(&self) -> String {
        let parts: Vec<String> = self.iter().map(TextSerialization::serialize).collect();
        format!("[{}]", parts.join(","))
    }
}

impl<T: TextDeserialization> TextDeserialization for Vec<T> {
    fn deserialize(text: &str) -> Result<Self> {
        split_array(text)?
            .iter()
            .map(|element| T::deserialize(element))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(i64::deserialize("42").unwrap(), 42);
        assert_eq!(42i64.serialize(), "42");
        assert_eq!((-7i32).serialize(), "-7");
        assert_eq!(f64::deserialize("2.5").unwrap(), 2.5);
        assert_eq!(2.5f64.serialize(), "2.5");
        assert!(bool::deserialize("true").unwrap());
        assert!(!bool::deserialize("yes").unwrap());
        assert_eq!(String::deserialize("\"abc\"").unwrap(), "abc");
        assert_eq!("abc".to_string().serialize(), "\"abc\"");
    }

    #[test]
    fn test_scalar_parse_errors() {
        assert!(matches!(
            i64::deserialize("4x"),
            Err(CodecError::ParseError { ty: "int", .. })
        ));
        assert!(matches!(
            f64::deserialize("abc"),
            Err(CodecError::ParseError { ty: "float", .. })
        ));
        assert!(i32::deserialize("3000000000").is_err());
    }

    #[test]
    fn test_nested_vec() {
        let nested: Vec<Vec<i64>> = Vec::deserialize("[[1,2],[],[3]]").unwrap();
        assert_eq!(nested, vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(nested.serialize(), "[[1,2],[],[3]]");

        let words: Vec<String> = Vec::deserialize("[\"a\", \"b,c\"]").unwrap();
        assert_eq!(words, vec!["a".to_string(), "b,c".to_string()]);
    }
}
