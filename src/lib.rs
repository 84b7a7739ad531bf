//! Typed text codec for test-fixture values: scalars, nested sequences,
//! singly-linked lists and level-order binary trees.

pub mod constants;
pub mod errors;
pub mod services;
pub mod structures;
pub mod utils;

pub use errors::{CodecError, Result};
pub use services::codec::{deserialize, serialize};
pub use structures::descriptor::TypeDescriptor;
pub use structures::list::{LinkedList, ListLink, ListNode};
pub use structures::splitter::split_array;
pub use structures::tree::{BinaryTree, TreeLink, TreeNode};
pub use structures::value::Value;
pub use utils::{join_array, read_line};
