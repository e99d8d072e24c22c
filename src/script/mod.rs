//! Script opcodes and interpreter
//!
//! # Examples
//!
//! Evaluate a script that splits a byte string and compares the halves:
//!
//! ```rust
//! use rpuzzle::script::op_codes::*;
//! use rpuzzle::script::{Script, TransactionlessChecker, STANDARD_FLAGS};
//!
//! let mut script = Script::new();
//! script.append_data(&[1, 2, 1, 2]);
//! script.append(OP_2);
//! script.append(OP_SPLIT);
//! script.append(OP_EQUAL);
//!
//! script.eval(&mut TransactionlessChecker {}, STANDARD_FLAGS).unwrap();
//! ```

use crate::script::op_codes::*;
use crate::util::Result;
use hex;
use std::fmt;

mod checker;
mod interpreter;
#[allow(dead_code)]
pub mod op_codes;
pub mod stack;

pub use self::checker::{Checker, TransactionChecker, TransactionlessChecker};
pub(crate) use self::interpreter::next_op;
pub use self::interpreter::{
    NO_FLAGS, SCRIPT_ENABLE_MAGNETIC_OPCODES, SCRIPT_ENABLE_MONOLITH_OPCODES,
    SCRIPT_ENABLE_SIGHASH_FORKID, SCRIPT_VERIFY_MINIMALDATA, STANDARD_FLAGS,
};

/// Transaction script
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

/// A single parsed element of a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Non-push opcode, including the small integer opcodes
    Op(u8),
    /// Data push along with the opcode that pushed it
    Data(u8, Vec<u8>),
}

impl Chunk {
    /// Returns the opcode of this chunk
    pub fn opcode(&self) -> u8 {
        match self {
            Chunk::Op(op) => *op,
            Chunk::Data(op, _) => *op,
        }
    }
}

impl Script {
    /// Creates a new empty script
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Appends a single opcode or data byte
    pub fn append(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends a slice of data
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.0.extend_from_slice(slice);
    }

    /// Appends the opcodes and provided data that push it onto the stack
    pub fn append_data(&mut self, data: &[u8]) {
        let len = data.len();
        match len {
            0 => self.0.push(op_codes::OP_0),
            1..=75 => {
                self.0.push(op_codes::OP_PUSH + len as u8);
                self.0.extend_from_slice(data);
            }
            76..=255 => {
                self.0.push(op_codes::OP_PUSHDATA1);
                self.0.push(len as u8);
                self.0.extend_from_slice(data);
            }
            256..=65535 => {
                self.0.push(op_codes::OP_PUSHDATA2);
                self.0.push((len >> 0) as u8);
                self.0.push((len >> 8) as u8);
                self.0.extend_from_slice(data);
            }
            _ => {
                self.0.push(op_codes::OP_PUSHDATA4);
                self.0.push((len >> 0) as u8);
                self.0.push((len >> 8) as u8);
                self.0.push((len >> 16) as u8);
                self.0.push((len >> 24) as u8);
                self.0.extend_from_slice(data);
            }
        }
    }

    /// Appends the opcodes to push a number to the stack
    ///
    /// The number must be in the range [2^-31+1,2^31-1].
    pub fn append_num(&mut self, n: i32) -> Result<()> {
        self.append_data(&stack::encode_num(n as i64)?);
        Ok(())
    }

    /// Evaluates a script using the provided checker
    pub fn eval<T: Checker>(&self, checker: &mut T, flags: u32) -> Result<()> {
        interpreter::eval(&self.0, checker, flags)
    }

    /// Returns the underlying script bytes as a Vec<u8>
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Splits the script into opcodes and data pushes
    ///
    /// Fails if a push runs past the end of the script.
    pub fn chunks(&self) -> Result<Vec<Chunk>> {
        let script = &self.0;
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < script.len() {
            let op = script[i];
            match op {
                1..=OP_PUSHDATA4 => {
                    let data = interpreter::push_data(i, script)?;
                    chunks.push(Chunk::Data(op, data.to_vec()));
                }
                _ => chunks.push(Chunk::Op(op)),
            }
            i = next_op(i, script);
        }
        Ok(chunks)
    }

    /// Renders the script as space separated opcode names and hex data
    pub fn to_asm(&self) -> Result<String> {
        let parts: Vec<String> = self
            .chunks()?
            .iter()
            .map(|chunk| match chunk {
                Chunk::Data(_, data) => hex::encode(data),
                Chunk::Op(op) => match op_name(*op) {
                    Some(name) => name.to_string(),
                    None => format!("OP_UNKNOWN{}", op),
                },
            })
            .collect();
        Ok(parts.join(" "))
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_asm() {
            Ok(asm) => write!(f, "[{}]", asm),
            // Truncated pushes can't be split into chunks
            Err(_) => write!(f, "[{}]", hex::encode(&self.0)),
        }
    }
}
