use super::r_value::RValue;
use crate::util::{Error, Result};
use crate::wallet::{random_secret_key, DerivationPath, ExtendedPrivateKey};
use secp256k1::SecretKey;
use std::fmt;
use std::str::FromStr;

/// Secret scalar used as the ECDSA nonce when solving an R-puzzle
///
/// Whoever knows K can spend any output locked to its R value, with any private key.
/// Signing two different messages with the same K and private key reveals the
/// private key, so a K should solve exactly one puzzle input.
///
/// Construction does not range check. K is reduced modulo the curve order when used,
/// and a K that reduces to zero is rejected at that point.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KValue([u8; 32]);

impl KValue {
    /// Creates a K from up to 32 big-endian bytes, left padding with zeros
    pub fn from_bytes(bytes: &[u8]) -> Result<KValue> {
        if bytes.is_empty() || bytes.len() > 32 {
            let msg = format!("K must be 1 to 32 bytes, got {}", bytes.len());
            return Err(Error::BadArgument(msg));
        }
        let mut k = [0u8; 32];
        k[32 - bytes.len()..].copy_from_slice(bytes);
        Ok(KValue(k))
    }

    /// Creates a K from a hex string of up to 32 bytes
    pub fn from_hex(s: &str) -> Result<KValue> {
        KValue::from_bytes(&hex::decode(s)?)
    }

    /// Uses a private key's scalar as K
    pub fn from_private_key(private_key: &SecretKey) -> KValue {
        KValue(private_key.secret_bytes())
    }

    /// Uses the private key of an HD key's descendant at `path` as K
    pub fn from_hd_private_key(key: &ExtendedPrivateKey, path: &str) -> Result<KValue> {
        let path = DerivationPath::from_str(path)?;
        Ok(KValue::from_private_key(&key.derive_path(&path)?.private_key()?))
    }

    /// Generates a K from the OS random number generator
    pub fn from_random() -> KValue {
        KValue::from_private_key(&random_secret_key())
    }

    /// Derives the public R value committed in lock scripts
    pub fn to_r_value(&self) -> Result<RValue> {
        RValue::from_k_value(self)
    }

    /// Returns the 32 big-endian bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns a copy of the 32 big-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Returns the bytes as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for KValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("KValue(..)")
    }
}
