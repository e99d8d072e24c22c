//! Digest functions behind the script hash opcodes

use ring::digest::{digest, SHA1_FOR_LEGACY_USE_ONLY, SHA256};
use ripemd::{Digest, Ripemd160};

/// SHA-1, as computed by `OP_SHA1`
pub fn sha1(data: &[u8]) -> Vec<u8> {
    digest(&SHA1_FOR_LEGACY_USE_ONLY, data).as_ref().to_vec()
}

/// Single SHA-256, as computed by `OP_SHA256`
pub fn sha256(data: &[u8]) -> Vec<u8> {
    digest(&SHA256, data).as_ref().to_vec()
}

/// RIPEMD-160, as computed by `OP_RIPEMD160`
pub fn ripemd160(data: &[u8]) -> Vec<u8> {
    let mut ripemd160 = Ripemd160::new();
    ripemd160.update(data);
    ripemd160.finalize().to_vec()
}
