use std::fmt::{self, Display};
use std::str::FromStr;

use crate::constants::{
    BOOL_TYPE, FLOAT_TYPE, INT_TYPE, LIST_NODE_TYPE, MAX_SEQUENCE_DEPTH, SEQUENCE_PREFIX,
    SEQUENCE_SUFFIX, STR_TYPE, TREE_NODE_TYPE,
};
use crate::errors::CodecError;

/// Shape of a value as named by a descriptor such as `List[List[int]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Int,
    Float,
    Bool,
    Str,
    ListNode,
    TreeNode,
    Sequence(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn sequence_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(inner))
    }

    /// `ListNode` and `TreeNode` encode their absent handle as `[]`.
    pub fn is_structural(&self) -> bool {
        matches!(self, TypeDescriptor::ListNode | TypeDescriptor::TreeNode)
    }

    pub fn inner(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Sequence(inner) => Some(inner),
            _ => None,
        }
    }

    /// Number of `List[...]` wrappers around the element type.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let TypeDescriptor::Sequence(inner) = current {
            depth += 1;
            current = inner;
        }
        depth
    }
}

impl FromStr for TypeDescriptor {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CodecError::UnknownType(s.to_string());

        let mut text = s.trim();
        let mut depth = 0;
        while let Some(inner) = text
            .strip_prefix(SEQUENCE_PREFIX)
            .and_then(|rest| rest.strip_suffix(SEQUENCE_SUFFIX))
        {
            depth += 1;
            if depth > MAX_SEQUENCE_DEPTH {
                return Err(unknown());
            }
            text = inner.trim();
        }

        let mut parsed = match text {
            INT_TYPE => TypeDescriptor::Int,
            FLOAT_TYPE => TypeDescriptor::Float,
            BOOL_TYPE => TypeDescriptor::Bool,
            STR_TYPE => TypeDescriptor::Str,
            LIST_NODE_TYPE => TypeDescriptor::ListNode,
            TREE_NODE_TYPE => TypeDescriptor::TreeNode,
            _ => return Err(unknown()),
        };
        for _ in 0..depth {
            parsed = TypeDescriptor::sequence_of(parsed);
        }
        Ok(parsed)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Int => f.write_str(INT_TYPE),
            TypeDescriptor::Float => f.write_str(FLOAT_TYPE),
            TypeDescriptor::Bool => f.write_str(BOOL_TYPE),
            TypeDescriptor::Str => f.write_str(STR_TYPE),
            TypeDescriptor::ListNode => f.write_str(LIST_NODE_TYPE),
            TypeDescriptor::TreeNode => f.write_str(TREE_NODE_TYPE),
            TypeDescriptor::Sequence(inner) => {
                write!(f, "{}{}{}", SEQUENCE_PREFIX, inner, SEQUENCE_SUFFIX)
            }
        }
    }
}
