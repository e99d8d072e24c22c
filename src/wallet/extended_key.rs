use crate::network::Network;
use crate::util::{hash160, sha256d, Error, Result};
use crate::wallet::derivation::{DerivationPath, HARDENED_KEY};
use base58::{FromBase58, ToBase58};
use ring::hmac as ring_hmac;
use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};
use std::fmt;
use std::str::FromStr;

/// Type of extended key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedKeyType {
    Private,
    Public,
}

/// Serialized BIP-32 extended key (private or public)
///
/// Layout: version (4), depth (1), parent fingerprint (4), child index (4),
/// chain code (32), key data (33).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExtendedKey(pub [u8; 78]);

impl ExtendedKey {
    /// Assembles an extended key from its parts
    ///
    /// `key_data` is a 33-byte compressed public key, or a zero byte followed by the private key.
    pub fn from_parts(
        version: [u8; 4],
        depth: u8,
        parent_fingerprint: [u8; 4],
        index: u32,
        chain_code: &[u8; 32],
        key_data: &[u8; 33],
    ) -> ExtendedKey {
        let mut key = ExtendedKey([0; 78]);
        key.0[0..4].copy_from_slice(&version);
        key.0[4] = depth;
        key.0[5..9].copy_from_slice(&parent_fingerprint);
        key.0[9..13].copy_from_slice(&index.to_be_bytes());
        key.0[13..45].copy_from_slice(chain_code);
        key.0[45..78].copy_from_slice(key_data);
        key
    }

    /// Creates the master private key from a seed
    pub fn from_seed(seed: &[u8], network: Network) -> Result<ExtendedKey> {
        if seed.len() < 16 || seed.len() > 64 {
            let msg = format!("Seed length {} outside 16..=64 bytes", seed.len());
            return Err(Error::Bip32Error(msg));
        }
        let key = ring_hmac::Key::new(ring_hmac::HMAC_SHA512, b"Bitcoin seed");
        let i = ring_hmac::sign(&key, seed);
        let (il, ir) = i.as_ref().split_at(32);

        let secret_key = SecretKey::from_byte_array(to_array32(il)?)
            .map_err(|e| Error::Bip32Error(format!("Invalid master key: {}", e)))?;
        let mut key_data = [0; 33];
        key_data[1..].copy_from_slice(&secret_key.secret_bytes());

        Ok(ExtendedKey::from_parts(
            network.extended_private_version(),
            0,
            [0; 4],
            0,
            &to_array32(ir)?,
            &key_data,
        ))
    }

    /// Returns the version bytes
    pub fn version(&self) -> [u8; 4] {
        let mut version = [0u8; 4];
        version.copy_from_slice(&self.0[0..4]);
        version
    }

    /// Returns the depth of the key, zero for the master key
    pub fn depth(&self) -> u8 {
        self.0[4]
    }

    /// Returns the first four bytes of the parent public key's hash160
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        let mut fingerprint = [0u8; 4];
        fingerprint.copy_from_slice(&self.0[5..9]);
        fingerprint
    }

    /// Returns the index of this key in its parent
    pub fn index(&self) -> u32 {
        let mut index = [0u8; 4];
        index.copy_from_slice(&self.0[9..13]);
        u32::from_be_bytes(index)
    }

    /// Returns the chain code
    pub fn chain_code(&self) -> [u8; 32] {
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&self.0[13..45]);
        chain_code
    }

    /// Returns the key data (private key with a zero prefix, or public key)
    pub fn key(&self) -> [u8; 33] {
        let mut key = [0u8; 33];
        key.copy_from_slice(&self.0[45..78]);
        key
    }

    /// Returns whether the key is private or public
    pub fn key_type(&self) -> Result<ExtendedKeyType> {
        let (_, is_private) = Network::from_extended_version(self.version())?;
        Ok(if is_private {
            ExtendedKeyType::Private
        } else {
            ExtendedKeyType::Public
        })
    }

    /// Returns the network the version bytes belong to
    pub fn network(&self) -> Result<Network> {
        let (network, _) = Network::from_extended_version(self.version())?;
        Ok(network)
    }

    /// Returns the private key
    ///
    /// Fails for public extended keys.
    pub fn private_key(&self) -> Result<SecretKey> {
        if self.key_type()? != ExtendedKeyType::Private {
            return Err(Error::BadArgument("Not an extended private key".to_string()));
        }
        if self.0[45] != 0 {
            return Err(Error::Bip32Error("Invalid private key prefix".to_string()));
        }
        SecretKey::from_byte_array(to_array32(&self.0[46..78])?)
            .map_err(|e| Error::Bip32Error(format!("Invalid private key: {}", e)))
    }

    /// Returns the public key, computing it for private extended keys
    pub fn public_key(&self) -> Result<PublicKey> {
        match self.key_type()? {
            ExtendedKeyType::Private => {
                let secp = Secp256k1::new();
                Ok(PublicKey::from_secret_key(&secp, &self.private_key()?))
            }
            ExtendedKeyType::Public => PublicKey::from_byte_array_compressed(self.key())
                .map_err(|e| Error::Bip32Error(format!("Invalid public key: {}", e))),
        }
    }

    /// Returns the fingerprint children of this key record as their parent
    pub fn fingerprint(&self) -> Result<[u8; 4]> {
        let mut fingerprint = [0u8; 4];
        fingerprint.copy_from_slice(&hash160(&self.public_key()?.serialize()).0[..4]);
        Ok(fingerprint)
    }

    /// Returns the public version of this key
    pub fn extended_public_key(&self) -> Result<ExtendedKey> {
        let network = self.network()?;
        Ok(ExtendedKey::from_parts(
            network.extended_public_version(),
            self.depth(),
            self.parent_fingerprint(),
            self.index(),
            &self.chain_code(),
            &self.public_key()?.serialize(),
        ))
    }

    /// Derives the child key at `index`
    ///
    /// Private keys derive private children and public keys derive public children.
    /// Indices at or above `HARDENED_KEY` need a private key.
    pub fn derive_child(&self, index: u32) -> Result<ExtendedKey> {
        let key_type = self.key_type()?;
        let hardened = index >= HARDENED_KEY;
        if hardened && key_type == ExtendedKeyType::Public {
            return Err(Error::Bip32Error("Cannot derive hardened key from public key".to_string()));
        }
        let depth = self
            .depth()
            .checked_add(1)
            .ok_or_else(|| Error::Bip32Error("Depth overflow".to_string()))?;

        let secp = Secp256k1::new();
        let public_key = self.public_key()?;

        let mut data = Vec::with_capacity(37);
        if hardened {
            data.extend_from_slice(&self.key());
        } else {
            data.extend_from_slice(&public_key.serialize());
        }
        data.extend_from_slice(&index.to_be_bytes());

        let hmac_key = ring_hmac::Key::new(ring_hmac::HMAC_SHA512, &self.chain_code());
        let i = ring_hmac::sign(&hmac_key, &data);
        let (il, ir) = i.as_ref().split_at(32);
        let tweak = Scalar::from_be_bytes(to_array32(il)?)
            .map_err(|_| Error::Bip32Error("Child tweak out of range".to_string()))?;

        let key_data = match key_type {
            ExtendedKeyType::Private => {
                let child = self
                    .private_key()?
                    .add_tweak(&tweak)
                    .map_err(|e| Error::Bip32Error(format!("Invalid child key: {}", e)))?;
                let mut key_data = [0; 33];
                key_data[1..].copy_from_slice(&child.secret_bytes());
                key_data
            }
            ExtendedKeyType::Public => public_key
                .add_exp_tweak(&secp, &tweak)
                .map_err(|e| Error::Bip32Error(format!("Invalid child key: {}", e)))?
                .serialize(),
        };

        trace!("Derived child {} at depth {}", index, depth);
        Ok(ExtendedKey::from_parts(
            self.version(),
            depth,
            self.fingerprint()?,
            index,
            &to_array32(ir)?,
            &key_data,
        ))
    }

    /// Derives the descendant at `path`
    pub fn derive_path(&self, path: &DerivationPath) -> Result<ExtendedKey> {
        let mut key = self.clone();
        for index in path.indices() {
            key = key.derive_child(*index)?;
        }
        Ok(key)
    }

    /// Encodes an extended key into a base58 string
    pub fn encode(&self) -> String {
        let checksum = sha256d(&self.0);
        let mut v = Vec::with_capacity(82);
        v.extend_from_slice(&self.0);
        v.extend_from_slice(&checksum.0[..4]);
        v.to_base58()
    }

    /// Decodes an extended key from a base58 string
    pub fn decode(s: &str) -> Result<ExtendedKey> {
        let v = s.from_base58()?;
        if v.len() != 82 {
            let msg = format!("Invalid extended key length: {}", v.len());
            return Err(Error::Bip32Error(msg));
        }
        let checksum = sha256d(&v[..78]);
        if checksum.0[..4] != v[78..] {
            return Err(Error::Bip32Error("Invalid checksum".to_string()));
        }
        let mut extended_key = ExtendedKey([0; 78]);
        extended_key.0.copy_from_slice(&v[..78]);
        // Rejects unknown versions and malformed key data
        extended_key.public_key()?;
        Ok(extended_key)
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("version", &hex::encode(self.version()))
            .field("depth", &self.depth())
            .field("index", &self.index())
            .finish()
    }
}

/// Extended key known to hold a private key
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExtendedPrivateKey(ExtendedKey);

impl ExtendedPrivateKey {
    /// Creates the master private key from a seed
    pub fn from_seed(seed: &[u8], network: Network) -> Result<ExtendedPrivateKey> {
        Ok(ExtendedPrivateKey(ExtendedKey::from_seed(seed, network)?))
    }

    /// Wraps an extended key, failing if it is public
    pub fn from_extended_key(key: ExtendedKey) -> Result<ExtendedPrivateKey> {
        match key.key_type()? {
            ExtendedKeyType::Private => Ok(ExtendedPrivateKey(key)),
            ExtendedKeyType::Public => Err(Error::BadArgument("Expected extended private key".to_string())),
        }
    }

    /// Decodes an xprv or tprv string
    pub fn decode(s: &str) -> Result<ExtendedPrivateKey> {
        ExtendedPrivateKey::from_extended_key(ExtendedKey::decode(s)?)
    }

    /// Encodes the key as an xprv or tprv string
    pub fn encode(&self) -> String {
        self.0.encode()
    }

    /// Derives the private descendant at a path such as `m/0'/1`
    pub fn derive(&self, path: &str) -> Result<ExtendedPrivateKey> {
        self.derive_path(&DerivationPath::from_str(path)?)
    }

    /// Derives the private descendant at a parsed path
    pub fn derive_path(&self, path: &DerivationPath) -> Result<ExtendedPrivateKey> {
        Ok(ExtendedPrivateKey(self.0.derive_path(path)?))
    }

    /// Returns the private key
    pub fn private_key(&self) -> Result<SecretKey> {
        self.0.private_key()
    }

    /// Returns the public key
    pub fn public_key(&self) -> Result<PublicKey> {
        self.0.public_key()
    }

    /// Returns the matching extended public key
    pub fn extended_public_key(&self) -> Result<ExtendedPublicKey> {
        Ok(ExtendedPublicKey(self.0.extended_public_key()?))
    }

    /// Returns the underlying extended key
    pub fn as_extended_key(&self) -> &ExtendedKey {
        &self.0
    }
}

impl fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Never print private key material
        write!(f, "ExtendedPrivateKey({:?})", self.0)
    }
}

/// Extended key holding only a public key
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExtendedPublicKey(ExtendedKey);

impl ExtendedPublicKey {
    /// Wraps an extended key, failing if it is private
    pub fn from_extended_key(key: ExtendedKey) -> Result<ExtendedPublicKey> {
        match key.key_type()? {
            ExtendedKeyType::Public => Ok(ExtendedPublicKey(key)),
            ExtendedKeyType::Private => Err(Error::BadArgument("Expected extended public key".to_string())),
        }
    }

    /// Decodes an xpub or tpub string
    pub fn decode(s: &str) -> Result<ExtendedPublicKey> {
        ExtendedPublicKey::from_extended_key(ExtendedKey::decode(s)?)
    }

    /// Encodes the key as an xpub or tpub string
    pub fn encode(&self) -> String {
        self.0.encode()
    }

    /// Derives the public descendant at a non-hardened path such as `m/0/1`
    pub fn derive(&self, path: &str) -> Result<ExtendedPublicKey> {
        self.derive_path(&DerivationPath::from_str(path)?)
    }

    /// Derives the public descendant at a parsed path
    pub fn derive_path(&self, path: &DerivationPath) -> Result<ExtendedPublicKey> {
        Ok(ExtendedPublicKey(self.0.derive_path(path)?))
    }

    /// Returns the public key
    pub fn public_key(&self) -> Result<PublicKey> {
        self.0.public_key()
    }

    /// Returns the underlying extended key
    pub fn as_extended_key(&self) -> &ExtendedKey {
        &self.0
    }
}

impl fmt::Debug for ExtendedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ExtendedPublicKey({})", self.0.encode())
    }
}

fn to_array32(slice: &[u8]) -> Result<[u8; 32]> {
    slice
        .try_into()
        .map_err(|_| Error::Bip32Error(format!("Expected 32 bytes, got {}", slice.len())))
}
