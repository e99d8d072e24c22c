//! Pay to R-puzzle hash
//!
//! The lock script takes the signature and public key from the unlock script, cuts the
//! R component out of the DER encoded signature and compares its hash to a committed
//! value before checking the signature.
//!
//! Evaluation, starting from `<sig> <pubkey>`:
//!
//! ```text
//! OP_OVER            <sig> <pubkey> <sig>
//! OP_3 OP_SPLIT      <sig> <pubkey> <3 bytes> <sig'>
//! OP_NIP             <sig> <pubkey> <sig'>
//! OP_1 OP_SPLIT      <sig> <pubkey> <r len> <sig''>
//! OP_SWAP OP_SPLIT   <sig> <pubkey> <r> <sig'''>
//! OP_DROP            <sig> <pubkey> <r>
//! [hash op]          <sig> <pubkey> <r hash>
//! <r hash>           <sig> <pubkey> <r hash> <r hash>
//! OP_EQUALVERIFY     <sig> <pubkey>
//! OP_CHECKSIG        <true>
//! ```

use crate::script::op_codes::*;
use crate::script::{Chunk, Script};

/// Opcodes that extract R from the signature, before the optional hash opcode
pub const R_EXTRACTION_PREFIX: [u8; 9] = [
    OP_OVER, OP_3, OP_SPLIT, OP_NIP, OP_1, OP_SPLIT, OP_SWAP, OP_SPLIT, OP_DROP,
];

/// Creates the lock script committing to `r_hash`
///
/// `hash_op` is the opcode applied to R before comparison, or None to compare R directly.
pub fn create_lock_script(r_hash: &[u8], hash_op: Option<u8>) -> Script {
    let mut script = Script::new();
    script.append_slice(&R_EXTRACTION_PREFIX);
    if let Some(op) = hash_op {
        script.append(op);
    }
    script.append_data(r_hash);
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script
}

/// Returns whether the lock script is exactly the R-puzzle template for `r_hash` and `hash_op`
///
/// Malformed scripts return false.
pub fn check_lock_script(lock_script: &Script, r_hash: &[u8], hash_op: Option<u8>) -> bool {
    let chunks = match lock_script.chunks() {
        Ok(chunks) => chunks,
        Err(_) => return false,
    };

    let mut expected: Vec<u8> = R_EXTRACTION_PREFIX.to_vec();
    if let Some(op) = hash_op {
        expected.push(op);
    }
    let data_index = expected.len();
    if chunks.len() != data_index + 3 {
        return false;
    }

    for (chunk, op) in chunks.iter().zip(expected.iter()) {
        if *chunk != Chunk::Op(*op) {
            return false;
        }
    }

    // An empty commitment is pushed with OP_0
    let data_matches = match &chunks[data_index] {
        Chunk::Data(_, data) => data[..] == *r_hash,
        Chunk::Op(OP_0) => r_hash.is_empty(),
        Chunk::Op(_) => false,
    };

    data_matches
        && chunks[data_index + 1] == Chunk::Op(OP_EQUALVERIFY)
        && chunks[data_index + 2] == Chunk::Op(OP_CHECKSIG)
}

/// Creates the unlock script pushing the signature with its sighash byte, then the public key
pub fn create_unlock_script(sig: &[u8], public_key: &[u8]) -> Script {
    let mut unlock_script = Script::new();
    unlock_script.append_data(sig);
    unlock_script.append_data(public_key);
    unlock_script
}
