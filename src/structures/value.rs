use serde_json::Value as JsonValue;

use crate::errors::CodecError;
use crate::structures::list::LinkedList;
use crate::structures::tree::BinaryTree;

/// Every value shape the codec can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Sequence(Vec<Value>),
    List(LinkedList),
    Tree(BinaryTree),
    Null,
}

impl Value {
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Sequence(_) => "sequence",
            Value::List(_) => "ListNode",
            Value::Tree(_) => "TreeNode",
            Value::Null => "null",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<LinkedList> for Value {
    fn from(v: LinkedList) -> Self {
        Value::List(v)
    }
}

impl From<BinaryTree> for Value {
    fn from(v: BinaryTree) -> Self {
        Value::Tree(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = CodecError;

    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        let value = match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().ok_or_else(|| {
                    CodecError::UnsupportedType(format!("number {}", n))
                })?),
            },
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::Sequence(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            JsonValue::Object(_) => return Err(CodecError::UnsupportedType("object".to_string())),
        };
        Ok(value)
    }
}
