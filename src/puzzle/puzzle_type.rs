use crate::script::op_codes::*;
use crate::util::{hash160, ripemd160, sha1, sha256, sha256d, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Hash applied to R before it is committed in the lock script
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleType {
    /// RIPEMD-160 of SHA-256
    #[default]
    PayToRHash160,
    /// RIPEMD-160
    PayToRRipemd160,
    /// SHA-256
    PayToRSha256,
    /// Double SHA-256
    PayToRHash256,
    /// SHA-1
    PayToRSha1,
    /// R committed as is
    PayToR,
}

impl PuzzleType {
    /// All variants, in table order
    pub const ALL: [PuzzleType; 6] = [
        PuzzleType::PayToRHash160,
        PuzzleType::PayToRRipemd160,
        PuzzleType::PayToRSha256,
        PuzzleType::PayToRHash256,
        PuzzleType::PayToRSha1,
        PuzzleType::PayToR,
    ];

    /// Returns the hash opcode the lock script applies, or None for `PayToR`
    pub fn opcode(&self) -> Option<u8> {
        match self {
            PuzzleType::PayToRHash160 => Some(OP_HASH160),
            PuzzleType::PayToRRipemd160 => Some(OP_RIPEMD160),
            PuzzleType::PayToRSha256 => Some(OP_SHA256),
            PuzzleType::PayToRHash256 => Some(OP_HASH256),
            PuzzleType::PayToRSha1 => Some(OP_SHA1),
            PuzzleType::PayToR => None,
        }
    }

    /// Hashes `data` the way this variant's opcode does on-chain
    pub fn hash(&self, data: &[u8]) -> Vec<u8> {
        match self {
            PuzzleType::PayToRHash160 => hash160(data).0.to_vec(),
            PuzzleType::PayToRRipemd160 => ripemd160(data),
            PuzzleType::PayToRSha256 => sha256(data),
            PuzzleType::PayToRHash256 => sha256d(data).0.to_vec(),
            PuzzleType::PayToRSha1 => sha1(data),
            PuzzleType::PayToR => data.to_vec(),
        }
    }

    /// Returns the canonical name
    pub fn name(&self) -> &'static str {
        match self {
            PuzzleType::PayToRHash160 => "PayToRHASH160",
            PuzzleType::PayToRRipemd160 => "PayToRRIPEMD160",
            PuzzleType::PayToRSha256 => "PayToRSHA256",
            PuzzleType::PayToRHash256 => "PayToRHASH256",
            PuzzleType::PayToRSha1 => "PayToRSHA1",
            PuzzleType::PayToR => "PayToR",
        }
    }
}

impl FromStr for PuzzleType {
    type Err = Error;

    /// Parses a canonical name such as `PayToRSHA256`
    fn from_str(s: &str) -> Result<PuzzleType> {
        PuzzleType::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| Error::BadArgument(format!("Unknown puzzle type: {}", s)))
    }
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
