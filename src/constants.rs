pub const NULL_LITERAL: &str = "null";
pub const EMPTY_ARRAY: &str = "[]";
pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

pub const INT_TYPE: &str = "int";
pub const FLOAT_TYPE: &str = "float";
pub const BOOL_TYPE: &str = "bool";
pub const STR_TYPE: &str = "str";
pub const LIST_NODE_TYPE: &str = "ListNode";
pub const TREE_NODE_TYPE: &str = "TreeNode";
pub const SEQUENCE_PREFIX: &str = "List[";
pub const SEQUENCE_SUFFIX: &str = "]";
/// Deepest `List[...]` nesting accepted; matches the array depth `serde_json` will parse.
pub const MAX_SEQUENCE_DEPTH: usize = 128;

/// Environment variable holding the log filter for the binary.
pub const LOG_ENV: &str = "FIXTURE_CODEC_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
