use std::fmt;
use std::mem;

use log::debug;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CodecError, Result};
use crate::structures::serialization::{TextDeserialization, TextSerialization};

pub type ListLink = Option<Box<ListNode>>;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ListNode {
    pub val: i32,
    pub next: ListLink,
}

impl ListNode {
    pub fn new(val: i32) -> Self {
        ListNode { val, next: None }
    }
}

/// Builds a `ListLink` from its values: `list![1, 2, 3]`.
#[macro_export]
macro_rules! list {
    () => {
        None
    };
    ($e:expr) => {
        Some(Box::new($crate::structures::list::ListNode {
            val: $e,
            next: None,
        }))
    };
    ($e:expr, $($tail:tt)*) => {
        Some(Box::new($crate::structures::list::ListNode {
            val: $e,
            next: $crate::list!($($tail)*),
        }))
    };
}

/// Handle to a singly-linked list; `LinkedList(None)` is the empty list.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct LinkedList(pub ListLink);

impl LinkedList {
    pub fn new() -> Self {
        LinkedList(None)
    }

    pub fn head(&self) -> Option<&ListNode> {
        self.0.as_deref()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head() }
    }

    pub fn values(&self) -> Vec<i32> {
        self.iter().map(|node| node.val).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let values: Vec<i32> = iter.into_iter().collect();
        let mut head = None;
        for val in values.into_iter().rev() {
            head = Some(Box::new(ListNode { val, next: head }));
        }
        LinkedList(head)
    }
}

impl From<ListLink> for LinkedList {
    fn from(link: ListLink) -> Self {
        LinkedList(link)
    }
}

impl From<LinkedList> for ListLink {
    fn from(mut list: LinkedList) -> Self {
        mem::take(&mut list.0)
    }
}

// Unlink node by node so long lists do not recurse on drop.
impl Drop for LinkedList {
    fn drop(&mut self) {
        let mut current = self.0.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}

impl TextSerialization for LinkedList {
    fn serialize(&self) -> String {
        let values: Vec<String> = self.iter().map(|node| node.val.to_string()).collect();
        format!("[{}]", values.join(","))
    }
}

impl TextDeserialization for LinkedList {
    fn deserialize(text: &str) -> Result<Self> {
        let text = text.trim();
        let list: LinkedList =
            serde_json::from_str(text).map_err(|_| CodecError::malformed(text))?;
        debug!("decoded linked list of {} nodes", list.len());
        Ok(list)
    }
}

impl Serialize for LinkedList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        for node in self.iter() {
            seq.serialize_element(&node.val)?;
        }
        seq.end()
    }
}

struct LinkedListVisitor;

impl<'de> Visitor<'de> for LinkedListVisitor {
    type Value = LinkedList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(val) = seq.next_element::<i32>()? {
            values.push(val);
        }
        Ok(values.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for LinkedList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedListVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Result<LinkedList> {
        <LinkedList as TextDeserialization>::deserialize(text)
    }

    fn encode(list: &LinkedList) -> String {
        TextSerialization::serialize(list)
    }

    #[test]
    fn test_list_serialize() {
        let list = LinkedList(list!(1, 2, 3));
        assert_eq!(encode(&list), "[1,2,3]");
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
        assert_eq!(encode(&LinkedList::new()), "[]");
    }

    #[test]
    fn test_list_deserialize() {
        let list = decode("[1,2,3]").unwrap();
        assert_eq!(list, LinkedList(list![1, 2, 3]));
        assert_eq!(list.values(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);

        let list = decode(" [] ").unwrap();
        assert!(list.is_empty());
        assert!(list.head().is_none());

        assert!(matches!(decode("[true]"), Err(CodecError::MalformedArray(_))));
        assert!(matches!(decode("[1,2"), Err(CodecError::MalformedArray(_))));
    }

    #[test]
    fn test_list_conversions() {
        let link: ListLink = LinkedList::from_iter(vec![4, 5]).into();
        assert_eq!(link, list![4, 5]);
        assert_eq!(LinkedList::from(link).values(), vec![4, 5]);
    }

    #[test]
    fn test_long_list_drops() {
        let list: LinkedList = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
