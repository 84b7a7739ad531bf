pub mod codec;

pub use codec::{
    deserialize, deserialize_as, deserialize_with, serialize, serialize_as, serialize_with,
};
