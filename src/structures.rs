pub mod descriptor;
pub mod list;
pub mod serialization;
pub mod splitter;
pub mod tree;
pub mod value;
