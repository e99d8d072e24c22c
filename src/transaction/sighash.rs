//! Transaction sighash helpers

use crate::messages::{OutPoint, Tx, TxOut};
use crate::script::{next_op, op_codes, Script, SCRIPT_ENABLE_SIGHASH_FORKID};
use crate::util::{sha256d, var_int, Error, Hash256, Result, Serializable};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Signs all of the outputs
pub const SIGHASH_ALL: u8 = 0x01;
/// Sign none of the outputs so that they may be spent anywhere
pub const SIGHASH_NONE: u8 = 0x02;
/// Sign only the output paired with the the input
pub const SIGHASH_SINGLE: u8 = 0x03;
/// Sign only the input so others inputs can be added
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;
/// Bitcoin Cash / SV sighash flag for use on outputs after the fork
pub const SIGHASH_FORKID: u8 = 0x40;

/// The 24-bit fork ID for Bitcoin Cash / SV
const FORK_ID: u32 = 0;

/// Generates a transaction digest for signing
///
/// The fork id algorithm, which commits to the spent amount, is used when `sighash_type`
/// carries `SIGHASH_FORKID` and `flags` enables it. Otherwise the legacy algorithm is used.
///
/// # Arguments
///
/// * `tx` - Spending transaction
/// * `n_input` - Spending input index
/// * `script_code` - The lock_script of the output being spent. This may be a subset of the
///   lock_script if OP_CODESEPARATOR is used.
/// * `satoshis` - The satoshi amount in the output being spent
/// * `sighash_type` - Sighash flags
/// * `flags` - Script evaluation flags
/// * `cache` - Cache to store intermediate values for future sighash calls.
pub fn sighash(
    tx: &Tx,
    n_input: usize,
    script_code: &[u8],
    satoshis: u64,
    sighash_type: u8,
    flags: u32,
    cache: &mut SigHashCache,
) -> Result<Hash256> {
    if n_input >= tx.inputs.len() {
        let msg = format!("Input index {} out of range", n_input);
        return Err(Error::BadArgument(msg));
    }
    if sighash_type & SIGHASH_FORKID != 0 && flags & SCRIPT_ENABLE_SIGHASH_FORKID != 0 {
        bip143_sighash(tx, n_input, script_code, satoshis, sighash_type, cache)
    } else {
        legacy_sighash(tx, n_input, script_code, sighash_type)
    }
}

/// Cache for sighash intermediate values to avoid quadratic hashing
///
/// This is only valid for one transaction, but may be used for multiple signatures.
#[derive(Default)]
pub struct SigHashCache {
    hash_prevouts: Option<Hash256>,
    hash_sequence: Option<Hash256>,
    hash_outputs: Option<Hash256>,
}

impl SigHashCache {
    /// Creates a new cache
    pub fn new() -> SigHashCache {
        SigHashCache {
            hash_prevouts: None,
            hash_sequence: None,
            hash_outputs: None,
        }
    }
}

/// Generates a transaction digest for signing using BIP-143
fn bip143_sighash(
    tx: &Tx,
    n_input: usize,
    script_code: &[u8],
    satoshis: u64,
    sighash_type: u8,
    cache: &mut SigHashCache,
) -> Result<Hash256> {
    let mut s = Vec::with_capacity(tx.size());
    let base_type = sighash_type & 31;
    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;

    // 1. Serialize version
    s.write_u32::<LittleEndian>(tx.version)?;

    // 2. Serialize hash of prevouts
    if !anyone_can_pay {
        if cache.hash_prevouts.is_none() {
            let mut prev_outputs = Vec::with_capacity(OutPoint::SIZE * tx.inputs.len());
            for input in tx.inputs.iter() {
                input.prev_output.write(&mut prev_outputs)?;
            }
            cache.hash_prevouts = Some(sha256d(&prev_outputs));
        }
        s.write_all(&cache.hash_prevouts.unwrap_or_default().0)?;
    } else {
        s.write_all(&[0; 32])?;
    }

    // 3. Serialize hash of sequences
    if !anyone_can_pay && base_type != SIGHASH_SINGLE && base_type != SIGHASH_NONE {
        if cache.hash_sequence.is_none() {
            let mut sequences = Vec::with_capacity(4 * tx.inputs.len());
            for tx_in in tx.inputs.iter() {
                sequences.write_u32::<LittleEndian>(tx_in.sequence)?;
            }
            cache.hash_sequence = Some(sha256d(&sequences));
        }
        s.write_all(&cache.hash_sequence.unwrap_or_default().0)?;
    } else {
        s.write_all(&[0; 32])?;
    }

    // 4. Serialize prev output
    tx.inputs[n_input].prev_output.write(&mut s)?;

    // 5. Serialize input script
    var_int::write(script_code.len() as u64, &mut s)?;
    s.write_all(script_code)?;

    // 6. Serialize satoshis
    s.write_u64::<LittleEndian>(satoshis)?;

    // 7. Serialize sequence
    s.write_u32::<LittleEndian>(tx.inputs[n_input].sequence)?;

    // 8. Serialize hash of outputs
    if base_type != SIGHASH_SINGLE && base_type != SIGHASH_NONE {
        if cache.hash_outputs.is_none() {
            let size = tx.outputs.iter().map(|tx_out| tx_out.size()).sum();
            let mut outputs = Vec::with_capacity(size);
            for tx_out in tx.outputs.iter() {
                tx_out.write(&mut outputs)?;
            }
            cache.hash_outputs = Some(sha256d(&outputs));
        }
        s.write_all(&cache.hash_outputs.unwrap_or_default().0)?;
    } else if base_type == SIGHASH_SINGLE && n_input < tx.outputs.len() {
        let mut outputs = Vec::with_capacity(tx.outputs[n_input].size());
        tx.outputs[n_input].write(&mut outputs)?;
        s.write_all(&sha256d(&outputs).0)?;
    } else {
        s.write_all(&[0; 32])?;
    }

    // 9. Serialize lock_time
    s.write_u32::<LittleEndian>(tx.locktime)?;

    // 10. Serialize hash type
    s.write_u32::<LittleEndian>((FORK_ID << 8) | sighash_type as u32)?;

    Ok(sha256d(&s))
}

/// Generates the transaction digest for signing using the legacy algorithm
fn legacy_sighash(tx: &Tx, n_input: usize, script_code: &[u8], sighash_type: u8) -> Result<Hash256> {
    let base_type = sighash_type & 31;
    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;

    // Signing a missing output commits to the value one, a long standing quirk
    if base_type == SIGHASH_SINGLE && n_input >= tx.outputs.len() {
        let mut one = [0; 32];
        one[0] = 1;
        return Ok(Hash256(one));
    }

    let sub_script = remove_codeseparators(script_code);
    let mut tx = tx.clone();

    for (i, tx_in) in tx.inputs.iter_mut().enumerate() {
        if i == n_input {
            tx_in.unlock_script = Script(sub_script.clone());
        } else {
            tx_in.unlock_script = Script::new();
            if base_type == SIGHASH_NONE || base_type == SIGHASH_SINGLE {
                tx_in.sequence = 0;
            }
        }
    }

    if base_type == SIGHASH_NONE {
        tx.outputs.clear();
    } else if base_type == SIGHASH_SINGLE {
        tx.outputs.truncate(n_input + 1);
        for tx_out in tx.outputs.iter_mut().take(n_input) {
            *tx_out = TxOut {
                satoshis: u64::MAX,
                lock_script: Script::new(),
            };
        }
    }

    if anyone_can_pay {
        let input = tx.inputs.swap_remove(n_input);
        tx.inputs = vec![input];
    }

    let mut s = Vec::with_capacity(tx.size() + 4);
    tx.write(&mut s)?;
    s.write_u32::<LittleEndian>(sighash_type as u32)?;

    Ok(sha256d(&s))
}

/// Removes OP_CODESEPARATOR opcodes, leaving pushed data intact
fn remove_codeseparators(script: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(script.len());
    let mut i = 0;
    while i < script.len() {
        let next = next_op(i, script);
        if script[i] != op_codes::OP_CODESEPARATOR {
            v.extend_from_slice(&script[i..next]);
        }
        i = next;
    }
    v
}
