use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CodecError {
    /// Bracketed text that is not a well-formed array.
    MalformedArray(String),
    /// Scalar text that does not match its declared type.
    ///
    /// Inside a sequence `text` is the element as re-encoded by `split_array`,
    /// so `[99999999999999999999]` reports its float form rather than the digits given.
    ParseError { ty: &'static str, text: String },
    /// An absent value was serialized without a descriptor.
    MissingType,
    /// A value shape with no serialization rule.
    UnsupportedType(String),
    /// Descriptor text with no deserialization rule.
    UnknownType(String),
    Io(io::Error),
}

impl CodecError {
    pub fn malformed(text: &str) -> CodecError {
        CodecError::MalformedArray(text.to_string())
    }

    pub fn parse(ty: &'static str, text: &str) -> CodecError {
        CodecError::ParseError {
            ty,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecError::MalformedArray(text) => write!(f, "invalid array: {}", text),
            CodecError::ParseError { ty, text } => write!(f, "invalid {}: {}", ty, text),
            CodecError::MissingType => write!(f, "null value without type"),
            CodecError::UnsupportedType(shape) => write!(f, "unsupported value shape: {}", shape),
            CodecError::UnknownType(ty) => write!(f, "unknown type: {}", ty),
            CodecError::Io(err) => write!(f, "read failed: {}", err),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CodecError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        CodecError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
