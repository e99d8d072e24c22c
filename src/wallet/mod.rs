//! BIP-32 hierarchical keys and fresh secret keys
//!
//! # Examples
//!
//! Derive a child key from a seed:
//!
//! ```rust
//! use rpuzzle::network::Network;
//! use rpuzzle::wallet::ExtendedPrivateKey;
//!
//! let seed = [7u8; 32];
//! let master = ExtendedPrivateKey::from_seed(&seed, Network::Mainnet).unwrap();
//! let child = master.derive("m/0'/1").unwrap();
//! assert_eq!(child.as_extended_key().depth(), 2);
//! ```

pub mod derivation;
pub mod extended_key;

pub use self::derivation::{DerivationPath, HARDENED_KEY};
pub use self::extended_key::{ExtendedKey, ExtendedKeyType, ExtendedPrivateKey, ExtendedPublicKey};

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::SecretKey;

/// Generates a secret key from the OS random number generator
pub fn random_secret_key() -> SecretKey {
    let mut bytes = [0u8; 32];
    loop {
        OsRng.fill_bytes(&mut bytes);
        // Out of range values are astronomically rare
        if let Ok(secret_key) = SecretKey::from_byte_array(bytes) {
            return secret_key;
        }
    }
}
