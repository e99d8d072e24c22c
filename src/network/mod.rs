//! Network selection for serialized keys
//!
//! # Examples
//!
//! Pick the extended key prefix for testnet:
//!
//! ```rust
//! use rpuzzle::network::Network;
//!
//! let network = Network::Testnet;
//! assert_eq!(network.extended_private_version(), [0x04, 0x35, 0x83, 0x94]);
//! ```

use crate::util::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Version bytes of a mainnet extended private key, "xprv"
pub const MAINNET_PRIVATE_EXTENDED_KEY: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];
/// Version bytes of a mainnet extended public key, "xpub"
pub const MAINNET_PUBLIC_EXTENDED_KEY: [u8; 4] = [0x04, 0x88, 0xB2, 0x1E];
/// Version bytes of a testnet extended private key, "tprv"
pub const TESTNET_PRIVATE_EXTENDED_KEY: [u8; 4] = [0x04, 0x35, 0x83, 0x94];
/// Version bytes of a testnet extended public key, "tpub"
pub const TESTNET_PUBLIC_EXTENDED_KEY: [u8; 4] = [0x04, 0x35, 0x87, 0xCF];

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet = 0,
    Testnet = 1,
    STN = 2,
}

impl Network {
    /// Converts an integer to a network type
    pub fn from_u8(x: u8) -> Result<Network> {
        match x {
            x if x == Network::Mainnet as u8 => Ok(Network::Mainnet),
            x if x == Network::Testnet as u8 => Ok(Network::Testnet),
            x if x == Network::STN as u8 => Ok(Network::STN),
            _ => {
                let msg = format!("Unknown network type: {}", x);
                Err(Error::BadArgument(msg))
            }
        }
    }

    /// Returns the version bytes of extended private keys on this network
    pub fn extended_private_version(&self) -> [u8; 4] {
        match self {
            Network::Mainnet => MAINNET_PRIVATE_EXTENDED_KEY,
            Network::Testnet | Network::STN => TESTNET_PRIVATE_EXTENDED_KEY,
        }
    }

    /// Returns the version bytes of extended public keys on this network
    pub fn extended_public_version(&self) -> [u8; 4] {
        match self {
            Network::Mainnet => MAINNET_PUBLIC_EXTENDED_KEY,
            Network::Testnet | Network::STN => TESTNET_PUBLIC_EXTENDED_KEY,
        }
    }

    /// Returns the network and whether the key is private for extended key version bytes
    ///
    /// Testnet and STN share version bytes, so STN keys decode as testnet.
    pub fn from_extended_version(version: [u8; 4]) -> Result<(Network, bool)> {
        match version {
            MAINNET_PRIVATE_EXTENDED_KEY => Ok((Network::Mainnet, true)),
            MAINNET_PUBLIC_EXTENDED_KEY => Ok((Network::Mainnet, false)),
            TESTNET_PRIVATE_EXTENDED_KEY => Ok((Network::Testnet, true)),
            TESTNET_PUBLIC_EXTENDED_KEY => Ok((Network::Testnet, false)),
            _ => Err(Error::Bip32Error(format!("Unknown version bytes {}", hex::encode(version)))),
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Network> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "stn" => Ok(Network::STN),
            _ => Err(Error::BadArgument(format!("Unknown network: {}", s))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
            Network::STN => f.write_str("stn"),
        }
    }
}
