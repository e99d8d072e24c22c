//! Transaction structures and their consensus serialization
//!
//! # Examples
//!
//! Decode a raw transaction and compute its txid:
//!
//! ```rust
//! use rpuzzle::messages::tx_raw::{build_raw_tx, read_raw_tx};
//! use rpuzzle::messages::Tx;
//!
//! let tx = Tx::new(1, 0);
//! let raw = build_raw_tx(&tx).unwrap();
//! assert_eq!(read_raw_tx(&raw).unwrap().hash(), tx.hash());
//! ```

mod out_point;
mod tx;
mod tx_in;
mod tx_out;
pub mod tx_raw;

pub use self::out_point::OutPoint;
pub use self::tx::Tx;
pub use self::tx_in::TxIn;
pub use self::tx_out::TxOut;
