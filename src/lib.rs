//! R-puzzles for Bitcoin SV.
//!
//! An R-puzzle locks an output to the R component of an ECDSA signature. Anyone who
//! knows the nonce K behind R can spend it with any private key.
//!
//! The crate carries the ledger primitives the puzzles need: transactions, a script
//! builder and interpreter, sighashes, signing with a caller supplied nonce and BIP-32
//! keys.

extern crate base58;
extern crate byteorder;
extern crate hex;
extern crate k256;
#[macro_use]
extern crate log;
extern crate rand;
extern crate regex;
extern crate ring;
extern crate ripemd;
extern crate secp256k1;

pub mod messages;
pub mod network;
pub mod puzzle;
pub mod script;
pub mod transaction;
pub mod util;
pub mod wallet;
