use super::k_value::KValue;
use crate::transaction::{nonce_point_x, nonce_scalar};
use crate::util::{Error, Result};
use crate::wallet::{DerivationPath, ExtendedPublicKey};
use secp256k1::PublicKey;
use std::fmt;
use std::str::FromStr;

/// Public value committed by an R-puzzle lock script
///
/// Holds the bytes exactly as they appear in a DER signature's R component: big-endian,
/// with a zero byte prepended when the top bit of the first byte is set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RValue(Vec<u8>);

impl RValue {
    /// Derives R from a nonce: the x-coordinate of K·G reduced modulo the curve order
    ///
    /// Leading zero bytes are stripped before the sign byte is added.
    pub fn from_k_value(k: &KValue) -> Result<RValue> {
        let r = nonce_point_x(&nonce_scalar(k.as_bytes())?).to_bytes();
        let start = r.iter().position(|b| *b != 0).unwrap_or(r.len());
        Ok(RValue::normalized(&r[start..]))
    }

    /// Uses a public key's 32-byte x-coordinate as R
    ///
    /// Unlike `from_k_value`, leading zero bytes are kept.
    pub fn from_public_key(public_key: &PublicKey) -> RValue {
        let serialized = public_key.serialize();
        RValue::normalized(&serialized[1..])
    }

    /// Uses the public key of an HD key's descendant at `path` as R
    pub fn from_hd_public_key(key: &ExtendedPublicKey, path: &str) -> Result<RValue> {
        let path = DerivationPath::from_str(path)?;
        Ok(RValue::from_public_key(&key.derive_path(&path)?.public_key()?))
    }

    /// Extracts R from a DER signature, optionally followed by a sighash byte
    pub fn from_signature(sig: &[u8]) -> Result<RValue> {
        if sig.len() < 8 || sig[0] != 0x30 || sig[2] != 0x02 {
            return Err(Error::BadData("Not a DER signature".to_string()));
        }
        let seq_len = sig[1] as usize;
        let r_len = sig[3] as usize;
        // Sequence body must fit, with at most one trailing sighash byte
        if seq_len + 2 > sig.len() || seq_len + 3 < sig.len() {
            return Err(Error::BadData("Bad DER sequence length".to_string()));
        }
        if r_len == 0 || 4 + r_len + 2 > seq_len + 2 || sig[4 + r_len] != 0x02 {
            return Err(Error::BadData("Bad DER R length".to_string()));
        }
        Ok(RValue(sig[4..4 + r_len].to_vec()))
    }

    /// Wraps R bytes as they appear in a signature
    pub fn from_bytes(bytes: &[u8]) -> RValue {
        RValue(bytes.to_vec())
    }

    /// Parses R from hex
    pub fn from_hex(s: &str) -> Result<RValue> {
        Ok(RValue(hex::decode(s)?))
    }

    /// Returns the R bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns a copy of the R bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Returns the R bytes as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    fn normalized(x: &[u8]) -> RValue {
        let mut r = Vec::with_capacity(x.len() + 1);
        if x.first().map_or(false, |b| *b > 0x7f) {
            r.push(0);
        }
        r.extend_from_slice(x);
        RValue(r)
    }
}

impl fmt::Debug for RValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RValue({})", self.to_hex())
    }
}
