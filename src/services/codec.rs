use log::{debug, trace};

use crate::constants::{EMPTY_ARRAY, NULL_LITERAL};
use crate::errors::{CodecError, Result};
use crate::structures::descriptor::TypeDescriptor;
use crate::structures::list::LinkedList;
use crate::structures::serialization::{TextDeserialization, TextSerialization};
use crate::structures::splitter::split_array;
use crate::structures::tree::BinaryTree;
use crate::structures::value::Value;
use crate::utils::join_array;

/// Encodes a value as wire text.
///
/// The descriptor is only consulted for `Value::Null`, where it picks between
/// `[]` (structural types) and `null`, and is forwarded to sequence elements
/// as their inner type. Every other shape is encoded from the value alone.
pub fn serialize(value: &Value, ty: Option<&str>) -> Result<String> {
    let descriptor = ty.and_then(|ty| ty.parse::<TypeDescriptor>().ok());
    match (value, ty, &descriptor) {
        // A top-level null only needs some descriptor text, known or not.
        (Value::Null, Some(_), None) => Ok(NULL_LITERAL.to_string()),
        _ => serialize_with(value, descriptor.as_ref()),
    }
}

pub fn serialize_with(value: &Value, descriptor: Option<&TypeDescriptor>) -> Result<String> {
    let text = match value {
        Value::Null => match descriptor {
            None => return Err(CodecError::MissingType),
            Some(descriptor) if descriptor.is_structural() => EMPTY_ARRAY.to_string(),
            Some(_) => NULL_LITERAL.to_string(),
        },
        Value::Bool(b) => b.serialize(),
        Value::Int(i) => i.serialize(),
        Value::Float(f) => f.serialize(),
        Value::Str(s) => s.serialize(),
        Value::Sequence(items) => {
            let inner = descriptor.and_then(TypeDescriptor::inner);
            let parts = items
                .iter()
                .map(|item| serialize_with(item, inner))
                .collect::<Result<Vec<_>>>()?;
            join_array(&parts)
        }
        Value::List(list) => list.serialize(),
        Value::Tree(tree) => tree.serialize(),
    };
    trace!("serialized {} as {}", value.shape(), text);
    Ok(text)
}

/// Decodes wire text according to a descriptor such as `List[TreeNode]`.
pub fn deserialize(ty: &str, text: &str) -> Result<Value> {
    let descriptor: TypeDescriptor = ty.parse()?;
    debug!("deserializing {} from {} bytes", descriptor, text.len());
    deserialize_with(&descriptor, text)
}

pub fn deserialize_with(descriptor: &TypeDescriptor, text: &str) -> Result<Value> {
    match descriptor {
        TypeDescriptor::Int => i64::deserialize(text).map(Value::Int),
        TypeDescriptor::Float => f64::deserialize(text).map(Value::Float),
        TypeDescriptor::Bool => bool::deserialize(text).map(Value::Bool),
        TypeDescriptor::Str => String::deserialize(text).map(Value::Str),
        TypeDescriptor::Sequence(inner) => split_array(text)?
            .iter()
            .map(|element| deserialize_with(inner, element))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        TypeDescriptor::ListNode => LinkedList::deserialize(text).map(Value::List),
        TypeDescriptor::TreeNode => BinaryTree::deserialize(text).map(Value::Tree),
    }
}

/// Statically typed counterpart of [`serialize`].
pub fn serialize_as<T: TextSerialization>(value: &T) -> String {
    value.serialize()
}

/// Statically typed counterpart of [`deserialize`], e.g. `deserialize_as::<Vec<LinkedList>>`.
pub fn deserialize_as<T: TextDeserialization>(text: &str) -> Result<T> {
    T::deserialize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_needs_type() {
        assert!(matches!(serialize(&Value::Null, None), Err(CodecError::MissingType)));
        assert_eq!(serialize(&Value::Null, Some("ListNode")).unwrap(), "[]");
        assert_eq!(serialize(&Value::Null, Some("TreeNode")).unwrap(), "[]");
        assert_eq!(serialize(&Value::Null, Some("int")).unwrap(), "null");
        assert_eq!(serialize(&Value::Null, Some("Whatever")).unwrap(), "null");
    }

    #[test]
    fn test_scalar_ignores_type() {
        assert_eq!(serialize(&Value::Int(3), Some("str")).unwrap(), "3");
        assert_eq!(serialize(&Value::Bool(false), None).unwrap(), "false");
    }

    #[test]
    fn test_sequence_forwards_inner_type() {
        let value = Value::Sequence(vec![Value::Null, Value::List(LinkedList::new())]);
        assert_eq!(serialize(&value, Some("List[ListNode]")).unwrap(), "[[],[]]");

        let value = Value::Sequence(vec![Value::Int(1), Value::Null]);
        assert_eq!(serialize(&value, Some("List[int]")).unwrap(), "[1,null]");
        assert!(matches!(serialize(&value, None), Err(CodecError::MissingType)));
        assert!(matches!(serialize(&value, Some("int")), Err(CodecError::MissingType)));
    }

    #[test]
    fn test_nested_sequences_share_one_descriptor() {
        let ty: TypeDescriptor = "List[List[TreeNode]]".parse().unwrap();
        let value = Value::Sequence(vec![
            Value::Sequence(vec![Value::Null, Value::Tree(BinaryTree::new())]),
            Value::Sequence(vec![]),
        ]);
        assert_eq!(serialize_with(&value, Some(&ty)).unwrap(), "[[[],[]],[]]");
        assert_eq!(
            serialize(&value, Some("List[List[TreeNode]]")).unwrap(),
            serialize_with(&value, Some(&ty)).unwrap()
        );
        assert!(matches!(serialize_with(&value, None), Err(CodecError::MissingType)));
    }

    #[test]
    fn test_unknown_descriptor() {
        match deserialize("Map[int]", "{}") {
            Err(CodecError::UnknownType(ty)) => assert_eq!(ty, "Map[int]"),
            other => panic!("expected UnknownType, got {:?}", other),
        }
    }
}
