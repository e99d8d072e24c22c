//! ECDSA signing with a caller supplied nonce
//!
//! Standard signers derive the nonce internally. R-puzzles need the nonce to be the
//! committed K so that the signature's R component matches the locking script.
//!
//! Signing two different digests with the same nonce and private key reveals the
//! private key to anyone who sees both signatures. Never reuse a K across messages.

use crate::util::{Error, Hash256, Result};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, ProjectivePoint, Scalar, U256};
use secp256k1::ecdsa::Signature;
use secp256k1::SecretKey;

/// Interprets 32 big-endian bytes as a nonce, reduced modulo the curve order
///
/// Fails if the reduced nonce is zero.
pub fn nonce_scalar(k: &[u8; 32]) -> Result<Scalar> {
    let k = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*k));
    if bool::from(k.is_zero()) {
        return Err(Error::BadData("Nonce must not be zero".to_string()));
    }
    Ok(k)
}

/// Returns the x-coordinate of k·G reduced modulo the curve order, the ECDSA r
pub fn nonce_point_x(k: &Scalar) -> Scalar {
    let x = (ProjectivePoint::GENERATOR * k).to_affine().x();
    <Scalar as Reduce<U256>>::reduce_bytes(&x)
}

/// Signs a digest using `k` as the nonce
///
/// The signature is low-S normalized. Negating s leaves r unchanged, so the
/// nonce commitment still holds.
pub fn sign_with_nonce(private_key: &SecretKey, digest: &Hash256, k: &[u8; 32]) -> Result<Signature> {
    let k = nonce_scalar(k)?;
    let d = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(private_key.secret_bytes())))
        .ok_or_else(|| Error::BadArgument("Private key out of range".to_string()))?;
    let z = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(digest.0));

    let r = nonce_point_x(&k);
    if bool::from(r.is_zero()) {
        return Err(Error::BadData("Nonce produced zero r".to_string()));
    }
    let k_inv = Option::<Scalar>::from(k.invert())
        .ok_or_else(|| Error::BadData("Nonce not invertible".to_string()))?;
    let s = k_inv * (z + r * d);
    if bool::from(s.is_zero()) {
        return Err(Error::BadData("Nonce produced zero s".to_string()));
    }

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&r.to_bytes());
    compact[32..].copy_from_slice(&s.to_bytes());
    let mut signature = Signature::from_compact(&compact)?;
    signature.normalize_s();
    Ok(signature)
}

/// Generates a DER signature with the sighash type byte appended, using `k` as the nonce
pub fn generate_signature_with_nonce(
    private_key: &SecretKey,
    sighash: &Hash256,
    sighash_type: u8,
    k: &[u8; 32],
) -> Result<Vec<u8>> {
    let signature = sign_with_nonce(private_key, sighash, k)?;
    let mut v = signature.serialize_der().to_vec();
    v.push(sighash_type);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::sha256d;
    use k256::ecdsa::signature::hazmat::PrehashVerifier;
    use k256::ecdsa::VerifyingKey;
    use k256::elliptic_curve::scalar::IsHigh;
    use secp256k1::{PublicKey, Secp256k1};

    fn scalar(bytes: &[u8]) -> Scalar {
        let mut b = [0u8; 32];
        b.copy_from_slice(bytes);
        <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(b))
    }

    #[test]
    fn signature_verifies() {
        let secp = Secp256k1::new();
        let private_key = SecretKey::from_byte_array([7; 32]).unwrap();
        let public_key = PublicKey::from_secret_key(&secp, &private_key);
        let digest = sha256d(b"r-puzzle");
        let sig = sign_with_nonce(&private_key, &digest, &[3; 32]).unwrap();

        let vk = VerifyingKey::from_sec1_bytes(&public_key.serialize()).unwrap();
        let k256_sig = k256::ecdsa::Signature::from_der(&sig.serialize_der()).unwrap();
        assert!(vk.verify_prehash(&digest.0, &k256_sig).is_ok());
    }

    #[test]
    fn r_is_nonce_x() {
        let private_key = SecretKey::from_byte_array([9; 32]).unwrap();
        let k = [5; 32];
        let expected = nonce_point_x(&nonce_scalar(&k).unwrap()).to_bytes();
        for msg in [&b"one"[..], &b"two"[..], &b"three"[..]] {
            let sig = sign_with_nonce(&private_key, &sha256d(msg), &k).unwrap();
            assert_eq!(sig.serialize_compact()[..32], expected[..]);
        }
    }

    #[test]
    fn signature_is_low_s() {
        let private_key = SecretKey::from_byte_array([11; 32]).unwrap();
        for i in 1..20u8 {
            let sig = sign_with_nonce(&private_key, &sha256d(&[i]), &[i; 32]).unwrap();
            let s = scalar(&sig.serialize_compact()[32..]);
            assert!(!bool::from(s.is_high()));
        }
    }

    #[test]
    fn zero_nonce_rejected() {
        let private_key = SecretKey::from_byte_array([1; 32]).unwrap();
        let digest = sha256d(b"zero");
        assert!(sign_with_nonce(&private_key, &digest, &[0; 32]).is_err());
        // The curve order reduces to zero
        let n = hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").unwrap();
        let mut k = [0; 32];
        k.copy_from_slice(&n);
        assert!(sign_with_nonce(&private_key, &digest, &k).is_err());
    }

    #[test]
    fn der_has_sighash_byte() {
        let private_key = SecretKey::from_byte_array([2; 32]).unwrap();
        let sig = generate_signature_with_nonce(&private_key, &sha256d(b"x"), 0x41, &[4; 32]).unwrap();
        assert_eq!(sig[0], 0x30);
        assert_eq!(sig[1] as usize, sig.len() - 3);
        assert_eq!(sig[sig.len() - 1], 0x41);
    }

    // Two signatures sharing a nonce and key let anyone solve for both
    #[test]
    fn nonce_reuse_exposes_private_key() {
        let private_key = SecretKey::from_byte_array([0x42; 32]).unwrap();
        let k = [0x17; 32];
        let z1_hash = sha256d(b"first message");
        let z2_hash = sha256d(b"second message");
        let sig1 = sign_with_nonce(&private_key, &z1_hash, &k).unwrap().serialize_compact();
        let sig2 = sign_with_nonce(&private_key, &z2_hash, &k).unwrap().serialize_compact();

        // Same nonce, same r
        assert_eq!(sig1[..32], sig2[..32]);

        let r = scalar(&sig1[..32]);
        let s1 = scalar(&sig1[32..]);
        let s2 = scalar(&sig2[32..]);
        let z1 = scalar(&z1_hash.0);
        let z2 = scalar(&z2_hash.0);
        let d = scalar(&private_key.secret_bytes());

        // Low-S normalization may have negated either s, so try each sign
        let mut recovered = false;
        for s2 in [s2, -s2] {
            let denom = s1 - s2;
            if bool::from(denom.is_zero()) {
                continue;
            }
            let k_guess = (z1 - z2) * Option::<Scalar>::from(denom.invert()).unwrap();
            let r_inv = Option::<Scalar>::from(r.invert()).unwrap();
            for s1 in [s1, -s1] {
                let d_guess = (s1 * k_guess - z1) * r_inv;
                if d_guess == d {
                    recovered = true;
                }
            }
        }
        assert!(recovered);
    }
}
