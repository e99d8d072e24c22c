use super::hashes::{ripemd160, sha256};
use std::fmt;

/// 160-bit hash used for public key and R value commitments
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160(pub [u8; 20]);

/// Hashes data with SHA-256 then RIPEMD-160, as `OP_HASH160` does
pub fn hash160(data: &[u8]) -> Hash160 {
    let mut hash160 = [0; 20];
    hash160.copy_from_slice(&ripemd160(&sha256(data)));
    Hash160(hash160)
}

impl From<[u8; 20]> for Hash160 {
    fn from(bytes: [u8; 20]) -> Self {
        Hash160(bytes)
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
