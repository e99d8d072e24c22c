//! Sighashes, custom-nonce signing and the R-puzzle script template
//!
//! # Examples
//!
//! Sign an R-puzzle input with a committed nonce:
//!
//! ```rust
//! use rpuzzle::messages::{OutPoint, Tx, TxIn};
//! use rpuzzle::script::STANDARD_FLAGS;
//! use rpuzzle::transaction::generate_signature_with_nonce;
//! use rpuzzle::transaction::p2rph::{create_lock_script, create_unlock_script};
//! use rpuzzle::transaction::sighash::{sighash, SigHashCache, SIGHASH_ALL, SIGHASH_FORKID};
//! use rpuzzle::util::Hash256;
//! use secp256k1::{PublicKey, Secp256k1, SecretKey};
//!
//! let mut tx = Tx::new(1, 0);
//! tx.inputs.push(TxIn {
//!     prev_output: OutPoint { hash: Hash256([1; 32]), index: 0 },
//!     ..Default::default()
//! });
//! let private_key = SecretKey::from_byte_array([1; 32]).unwrap();
//! let public_key = PublicKey::from_secret_key(&Secp256k1::new(), &private_key);
//! let k = [2; 32];
//!
//! let lock_script = create_lock_script(&[0; 20], None);
//! let mut cache = SigHashCache::new();
//! let sighash_type = SIGHASH_ALL | SIGHASH_FORKID;
//! let sighash = sighash(&tx, 0, &lock_script.0, 1000, sighash_type, STANDARD_FLAGS, &mut cache).unwrap();
//! let signature = generate_signature_with_nonce(&private_key, &sighash, sighash_type, &k).unwrap();
//! tx.inputs[0].unlock_script = create_unlock_script(&signature, &public_key.serialize());
//! ```

use crate::messages::{OutPoint, Tx};
use crate::script::{op_codes, Script, TransactionChecker};
use crate::util::{Error, Hash256, Result};
use std::fmt;

mod ecdsa;
pub mod sighash;

pub mod types {
    pub mod p2rph;
}

pub use self::ecdsa::{generate_signature_with_nonce, nonce_point_x, nonce_scalar, sign_with_nonce};
pub use self::types::p2rph;

/// An output of a previous transaction available to be spent
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct UnspentOutput {
    /// Hash of the transaction holding the output
    pub txid: Hash256,
    /// Index of the output in that transaction
    pub output_index: u32,
    /// Script locking the output
    pub lock_script: Script,
    /// Value of the output
    pub satoshis: u64,
}

impl UnspentOutput {
    /// Returns the reference an input uses to spend this output
    pub fn outpoint(&self) -> OutPoint {
        OutPoint {
            hash: self.txid,
            index: self.output_index,
        }
    }
}

impl fmt::Debug for UnspentOutput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UnspentOutput")
            .field("txid", &self.txid.encode())
            .field("output_index", &self.output_index)
            .field("lock_script", &self.lock_script)
            .field("satoshis", &self.satoshis)
            .finish()
    }
}

/// Evaluates the unlock script of one input against the output it spends
pub fn verify_input(tx: &Tx, input: usize, prevout: &UnspentOutput, flags: u32) -> Result<()> {
    let tx_in = tx
        .inputs
        .get(input)
        .ok_or_else(|| Error::BadArgument(format!("Input index {} out of range", input)))?;
    if tx_in.prev_output != prevout.outpoint() {
        return Err(Error::BadArgument("Input does not spend the output".to_string()));
    }

    let mut script = Script::new();
    script.append_slice(&tx_in.unlock_script.0);
    script.append(op_codes::OP_CODESEPARATOR);
    script.append_slice(&prevout.lock_script.0);

    let mut sig_hash_cache = sighash::SigHashCache::new();
    let mut tx_checker = TransactionChecker {
        tx,
        sig_hash_cache: &mut sig_hash_cache,
        input,
        satoshis: prevout.satoshis,
        require_sighash_forkid: false,
    };
    script.eval(&mut tx_checker, flags)
}
