//! R-puzzles: outputs spendable by any key that signs with a committed nonce
//!
//! An R-puzzle lock script commits to a hash of the R component of an ECDSA
//! signature. R is fixed by the nonce K alone, so the output can be spent by anyone who
//! knows K, using any private key.
//!
//! # Examples
//!
//! Lock an output to a random K and spend it:
//!
//! ```rust
//! use rpuzzle::messages::{Tx, TxIn, TxOut};
//! use rpuzzle::puzzle::{KValue, PuzzleType, RPuzzle};
//! use rpuzzle::script::{Script, STANDARD_FLAGS};
//! use rpuzzle::transaction::verify_input;
//!
//! let puzzle = RPuzzle::from_k_value(KValue::from_random()).unwrap();
//!
//! let mut funding = Tx::new(1, 0);
//! funding.add_output(puzzle.to_script(), 5000);
//! let utxo = puzzle.utxos(&funding).remove(0);
//!
//! let mut spending = Tx::new(1, 0);
//! spending.inputs.push(TxIn { prev_output: utxo.outpoint(), sequence: 0xffffffff, ..Default::default() });
//! spending.add_output(Script::new(), 4000);
//!
//! let signed = puzzle.sign_default(&spending, &[utxo.clone()]).unwrap();
//! verify_input(&signed, 0, &utxo, STANDARD_FLAGS).unwrap();
//! ```

mod k_value;
mod puzzle_type;
mod r_value;

pub use self::k_value::KValue;
pub use self::puzzle_type::PuzzleType;
pub use self::r_value::RValue;

use crate::messages::Tx;
use crate::script::{Script, STANDARD_FLAGS};
use crate::transaction::p2rph::{check_lock_script, create_lock_script, create_unlock_script};
use crate::transaction::sighash::{sighash, SigHashCache, SIGHASH_ALL, SIGHASH_FORKID};
use crate::transaction::{generate_signature_with_nonce, UnspentOutput};
use crate::util::{Error, Result};
use crate::wallet::{random_secret_key, DerivationPath, ExtendedPrivateKey, ExtendedPublicKey};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use std::fmt;
use std::str::FromStr;

/// Value a puzzle is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleValue {
    /// Secret nonce, enables signing
    K(KValue),
    /// Public commitment only, enables script generation and matching
    R(RValue),
}

/// Key that signs when solving a puzzle
#[derive(Debug, Clone)]
pub enum SigningKey {
    Private(SecretKey),
    /// HD key and derivation path, `m/0` if the path is invalid
    Extended(ExtendedPrivateKey, String),
}

/// An R-puzzle: the committed R, optionally its K, a signing key and a hash variant
#[derive(Clone)]
pub struct RPuzzle {
    r_value: RValue,
    k_value: Option<KValue>,
    private_key: SecretKey,
    puzzle_type: PuzzleType,
}

impl RPuzzle {
    /// Creates a puzzle
    ///
    /// A random signing key is generated if none is given. Fails if a K reduces to
    /// zero or an HD signing key cannot be derived.
    pub fn new(value: PuzzleValue, signing_key: Option<SigningKey>) -> Result<RPuzzle> {
        let private_key = match signing_key {
            Some(SigningKey::Private(private_key)) => private_key,
            Some(SigningKey::Extended(key, path)) => {
                let path = DerivationPath::from_str(&path).unwrap_or_else(|e| {
                    warn!("{}, signing with m/0", e);
                    DerivationPath::from(0)
                });
                key.derive_path(&path)?.private_key()?
            }
            None => random_secret_key(),
        };
        let (r_value, k_value) = match value {
            PuzzleValue::K(k) => (k.to_r_value()?, Some(k)),
            PuzzleValue::R(r) => (r, None),
        };
        Ok(RPuzzle {
            r_value,
            k_value,
            private_key,
            puzzle_type: PuzzleType::default(),
        })
    }

    /// Creates a solvable puzzle from K
    pub fn from_k_value(k: KValue) -> Result<RPuzzle> {
        RPuzzle::new(PuzzleValue::K(k), None)
    }

    /// Creates a puzzle that can build and match scripts for R but not sign
    pub fn from_r_value(r: RValue) -> RPuzzle {
        RPuzzle {
            r_value: r,
            k_value: None,
            private_key: random_secret_key(),
            puzzle_type: PuzzleType::default(),
        }
    }

    /// Creates a solvable puzzle whose K is a private key's scalar
    pub fn from_private_key(private_key: &SecretKey) -> Result<RPuzzle> {
        RPuzzle::from_k_value(KValue::from_private_key(private_key))
    }

    /// Creates a puzzle whose R is a public key's x-coordinate
    pub fn from_public_key(public_key: &PublicKey) -> RPuzzle {
        RPuzzle::from_r_value(RValue::from_public_key(public_key))
    }

    /// Creates a solvable puzzle whose K is an HD key's descendant
    pub fn from_hd_private_key(key: &ExtendedPrivateKey, path: &str) -> Result<RPuzzle> {
        RPuzzle::from_k_value(KValue::from_hd_private_key(key, path)?)
    }

    /// Creates a puzzle whose R is an HD public key's descendant
    pub fn from_hd_public_key(key: &ExtendedPublicKey, path: &str) -> Result<RPuzzle> {
        Ok(RPuzzle::from_r_value(RValue::from_hd_public_key(key, path)?))
    }

    /// Creates a solvable puzzle with a random K
    pub fn from_random() -> Result<RPuzzle> {
        RPuzzle::from_k_value(KValue::from_random())
    }

    /// Sets the hash variant
    pub fn set_type(&mut self, puzzle_type: PuzzleType) {
        self.puzzle_type = puzzle_type;
    }

    /// Sets the hash variant by name, using `PayToRHASH160` for unknown names
    ///
    /// Returns whether the name was recognized.
    pub fn set_type_or_default(&mut self, name: &str) -> bool {
        match PuzzleType::from_str(name) {
            Ok(puzzle_type) => {
                self.puzzle_type = puzzle_type;
                true
            }
            Err(_) => {
                warn!("Unknown puzzle type {}, using {}", name, PuzzleType::default());
                self.puzzle_type = PuzzleType::default();
                false
            }
        }
    }

    /// Replaces the signing key
    pub fn set_private_key(&mut self, private_key: SecretKey) {
        self.private_key = private_key;
    }

    /// Returns the hash variant
    pub fn puzzle_type(&self) -> PuzzleType {
        self.puzzle_type
    }

    /// Returns the committed R
    pub fn r_value(&self) -> &RValue {
        &self.r_value
    }

    /// Returns K, if known
    pub fn k_value(&self) -> Option<&KValue> {
        self.k_value.as_ref()
    }

    /// Returns the public key of the signing key
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(&Secp256k1::new(), &self.private_key)
    }

    /// Returns R hashed with the active variant
    pub fn r_hash(&self) -> Vec<u8> {
        self.puzzle_type.hash(self.r_value.as_bytes())
    }

    /// Returns the hash opcode of the active variant, None for `PayToR`
    pub fn opcode(&self) -> Option<u8> {
        self.puzzle_type.opcode()
    }

    /// Builds the lock script
    pub fn to_script(&self) -> Script {
        create_lock_script(&self.r_hash(), self.opcode())
    }

    /// Disassembles the lock script
    pub fn to_asm(&self) -> Result<String> {
        self.to_script().to_asm()
    }

    /// Returns whether `script` is this puzzle's lock script
    pub fn matches(&self, script: &Script) -> bool {
        check_lock_script(script, &self.r_hash(), self.opcode())
    }

    /// Returns the outputs of `tx` locked to this puzzle, in output order
    pub fn utxos(&self, tx: &Tx) -> Vec<UnspentOutput> {
        let txid = tx.hash();
        let utxos: Vec<UnspentOutput> = tx
            .outputs
            .iter()
            .enumerate()
            .filter(|(_, output)| self.matches(&output.lock_script))
            .map(|(i, output)| UnspentOutput {
                txid,
                output_index: i as u32,
                lock_script: output.lock_script.clone(),
                satoshis: output.satoshis,
            })
            .collect();
        trace!("Found {} puzzle outputs in {}", utxos.len(), txid.encode());
        utxos
    }

    /// Signs every input of `tx` that spends one of `prevouts` locked to this puzzle
    ///
    /// Returns the signed copy. K is used as the nonce for each signature, so every
    /// signed input reveals enough to recover the signing key from any two of them
    /// with different sighashes. Sign with a fresh private key per puzzle input.
    pub fn sign(&self, tx: &Tx, prevouts: &[UnspentOutput], sighash_type: u8) -> Result<Tx> {
        let k = self.k_value.as_ref().ok_or(Error::MissingKValue)?;
        let public_key = self.public_key().serialize();
        let mut signed = tx.clone();
        let mut cache = SigHashCache::new();

        for (i, input) in tx.inputs.iter().enumerate() {
            let prevout = prevouts
                .iter()
                .find(|p| p.outpoint() == input.prev_output && self.matches(&p.lock_script));
            let prevout = match prevout {
                Some(prevout) => prevout,
                None => continue,
            };
            let sighash = sighash(
                tx,
                i,
                &prevout.lock_script.0,
                prevout.satoshis,
                sighash_type,
                STANDARD_FLAGS,
                &mut cache,
            )?;
            let sig = generate_signature_with_nonce(&self.private_key, &sighash, sighash_type, k.as_bytes())?;
            signed.inputs[i].unlock_script = create_unlock_script(&sig, &public_key);
            debug!("Signed input {} spending {:?}", i, prevout);
        }
        Ok(signed)
    }

    /// Signs with `SIGHASH_ALL | SIGHASH_FORKID`
    pub fn sign_default(&self, tx: &Tx, prevouts: &[UnspentOutput]) -> Result<Tx> {
        self.sign(tx, prevouts, SIGHASH_ALL | SIGHASH_FORKID)
    }
}

impl fmt::Debug for RPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RPuzzle")
            .field("r_value", &self.r_value)
            .field("has_k_value", &self.k_value.is_some())
            .field("puzzle_type", &self.puzzle_type)
            .finish()
    }
}
