pub mod node;

use std::collections::VecDeque;
use std::fmt;
use std::mem;

use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::constants::NULL_LITERAL;
use crate::errors::{CodecError, Result};
use crate::structures::serialization::{TextDeserialization, TextSerialization};
use crate::structures::splitter::parse_int_slots;

pub use node::{TreeLink, TreeNode};

/// Builds a `TreeLink` from level-order slots: `tree![1, null, 2, 3]`.
#[macro_export]
macro_rules! tree {
    (@slots [$($out:expr),*]) => {
        ::std::vec![$($out),*]
    };
    (@slots [$($out:expr),*] null $(, $($rest:tt)*)?) => {
        $crate::tree!(@slots [$($out,)* None] $($($rest)*)?)
    };
    (@slots [$($out:expr),*] $val:expr $(, $($rest:tt)*)?) => {
        $crate::tree!(@slots [$($out,)* Some($val)] $($($rest)*)?)
    };
    () => {
        None
    };
    ($($slots:tt)+) => {
        $crate::structures::tree::BinaryTree::from_slots(&$crate::tree!(@slots [] $($slots)+))
            .expect("invalid level-order tree literal")
            .into_link()
    };
}

/// Handle to a binary tree; `BinaryTree(None)` is the empty tree.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BinaryTree(pub TreeLink);

impl BinaryTree {
    pub fn new() -> Self {
        BinaryTree(None)
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn into_link(mut self) -> TreeLink {
        mem::take(&mut self.0)
    }

    /// Rebuilds a tree from level-order slots, `None` marking a missing child.
    ///
    /// Each present node, in slot order, claims the next two unclaimed slots
    /// as its left and right child. A present slot that no earlier node
    /// claims cannot be placed and makes the whole layout malformed.
    pub fn from_slots(slots: &[Option<i32>]) -> Result<BinaryTree> {
        if slots.first().copied().flatten().is_none() {
            return Ok(BinaryTree::new());
        }

        let mut children: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); slots.len()];
        let mut next = 1;
        for (i, slot) in slots.iter().enumerate() {
            if next >= slots.len() {
                break;
            }
            if slot.is_none() {
                continue;
            }
            if i > 0 && i >= next {
                return Err(CodecError::malformed(&render_slots(slots)));
            }
            children[i].0 = Some(next);
            next += 1;
            if next < slots.len() {
                children[i].1 = Some(next);
                next += 1;
            }
        }

        let mut built: Vec<TreeLink> = slots
            .iter()
            .map(|slot| slot.map(|val| Box::new(TreeNode::leaf(val))))
            .collect();

        // Children always sit after their parent, so a reverse sweep attaches
        // finished subtrees without recursion.
        for i in (0..slots.len()).rev() {
            let (left, right) = children[i];
            let left = left.and_then(|j| built[j].take());
            let right = right.and_then(|j| built[j].take());
            if let Some(node) = built[i].as_mut() {
                node.left = left;
                node.right = right;
            }
        }

        Ok(BinaryTree(built.swap_remove(0)))
    }

    /// Level-order slots with trailing `None`s trimmed.
    pub fn level_order(&self) -> Vec<Option<i32>> {
        let mut slots = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(Some(root));
        }
        while let Some(node) = queue.pop_front() {
            slots.push(node.map(|n| n.val));
            if let Some(node) = node {
                queue.push_back(node.left());
                queue.push_back(node.right());
            }
        }
        while let Some(None) = slots.last() {
            slots.pop();
        }
        slots
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TreeNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level: Vec<&TreeNode> = self.root().into_iter().collect();
        while !level.is_empty() {
            depth += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        depth
    }
}

fn render_slots(slots: &[Option<i32>]) -> String {
    let parts: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Some(val) => val.to_string(),
            None => NULL_LITERAL.to_string(),
        })
        .collect();
    format!("[{}]", parts.join(","))
}

impl From<TreeLink> for BinaryTree {
    fn from(link: TreeLink) -> Self {
        BinaryTree(link)
    }
}

impl From<BinaryTree> for TreeLink {
    fn from(tree: BinaryTree) -> Self {
        tree.into_link()
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl TextSerialization for BinaryTree {
    fn serialize(&self) -> String {
        render_slots(&self.level_order())
    }
}

impl TextDeserialization for BinaryTree {
    fn deserialize(text: &str) -> Result<Self> {
        let slots = parse_int_slots(text)?;
        let tree = BinaryTree::from_slots(&slots)?;
        debug!("decoded binary tree from {} slots", slots.len());
        Ok(tree)
    }
}

impl Serialize for BinaryTree {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let slots = self.level_order();
        let mut seq = serializer.serialize_seq(Some(slots.len()))?;
        for slot in slots {
            seq.serialize_element(&slot)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for BinaryTree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slots = <Vec<Option<i32>> as Deserialize>::deserialize(deserializer)?;
        BinaryTree::from_slots(&slots).map_err(de::Error::custom)
    }
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_slots(&self.level_order()))
    }
}
