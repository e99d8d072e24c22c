use crate::messages::Tx;
use crate::script::{next_op, SCRIPT_ENABLE_SIGHASH_FORKID};
use crate::transaction::sighash::{sighash, SigHashCache, SIGHASH_FORKID};
use crate::util::{Error, Result};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};

/// Checks that external values like signatures are valid
pub trait Checker {
    /// Checks that a signature and public key validate within a script
    ///
    /// The script should already have all signatures removed if they existed.
    fn check_sig(&mut self, sig: &[u8], pubkey: &[u8], script: &[u8], flags: u32) -> Result<bool>;
}

/// Script checker that fails all transaction checks
pub struct TransactionlessChecker {}

impl Checker for TransactionlessChecker {
    fn check_sig(&mut self, _sig: &[u8], _pubkey: &[u8], _script: &[u8], _flags: u32) -> Result<bool> {
        Err(Error::ScriptError("Illegal transaction check".to_string()))
    }
}

/// Checks that signatures are valid for one input of a transaction
pub struct TransactionChecker<'a> {
    /// Spending transaction
    pub tx: &'a Tx,
    /// Cache for intermediate signature hash values
    pub sig_hash_cache: &'a mut SigHashCache,
    /// Spending input for the script
    pub input: usize,
    /// Amount being spent
    pub satoshis: u64,
    /// Whether the sighash type must use the fork id
    pub require_sighash_forkid: bool,
}

impl<'a> Checker for TransactionChecker<'a> {
    fn check_sig(&mut self, sig: &[u8], pubkey: &[u8], script: &[u8], flags: u32) -> Result<bool> {
        if sig.is_empty() {
            return Ok(false);
        }
        let sighash_type = sig[sig.len() - 1];
        if self.require_sighash_forkid && sighash_type & SIGHASH_FORKID == 0 {
            return Err(Error::ScriptError("SIGHASH_FORKID not present".to_string()));
        }
        if sighash_type & SIGHASH_FORKID != 0 && flags & SCRIPT_ENABLE_SIGHASH_FORKID == 0 {
            return Err(Error::ScriptError("SIGHASH_FORKID not enabled".to_string()));
        }

        // Legacy digests are taken over the script with the signature removed
        let script_code = if sighash_type & SIGHASH_FORKID != 0 {
            script.to_vec()
        } else {
            remove_sig(sig, script)
        };

        let sig_hash = sighash(
            self.tx,
            self.input,
            &script_code,
            self.satoshis,
            sighash_type,
            flags,
            self.sig_hash_cache,
        )?;

        let der_sig = &sig[0..sig.len() - 1];
        let signature = match Signature::from_der(der_sig) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        let verifying_key = match VerifyingKey::from_sec1_bytes(pubkey) {
            Ok(verifying_key) => verifying_key,
            Err(_) => return Ok(false),
        };
        Ok(verifying_key.verify_prehash(&sig_hash.0, &signature).is_ok())
    }
}

/// Removes all pushes of the signature from the script
fn remove_sig(sig: &[u8], script: &[u8]) -> Vec<u8> {
    if sig.is_empty() {
        return script.to_vec();
    }
    let mut push = Vec::with_capacity(sig.len() + 2);
    push.push(sig.len() as u8);
    push.extend_from_slice(sig);

    let mut result = Vec::with_capacity(script.len());
    let mut i = 0;
    while i < script.len() {
        let next = next_op(i, script);
        if script[i..next] != push[..] {
            result.extend_from_slice(&script[i..next]);
        }
        i = next;
    }
    result
}
