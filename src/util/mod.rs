//! Hashes, serialization helpers and the library error type

mod hash160;
mod hash256;
pub mod hashes;
mod result;
mod serdes;
pub mod var_int;

pub use self::hash160::{hash160, Hash160};
pub use self::hash256::{sha256d, Hash256};
pub use self::hashes::{ripemd160, sha1, sha256};
pub use self::result::{Error, Result};
pub use self::serdes::Serializable;
