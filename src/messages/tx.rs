use crate::messages::{OutPoint, TxIn, TxOut};
use crate::script::Script;
use crate::util::{sha256d, var_int, Error, Hash256, Result, Serializable};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// Bitcoin transaction
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct Tx {
    /// Transaction version
    pub version: u32,
    /// Transaction inputs
    pub inputs: Vec<TxIn>,
    /// Transaction outputs
    pub outputs: Vec<TxOut>,
    /// The block number or timestamp at which this transaction is unlocked
    pub locktime: u32,
}

impl Tx {
    /// Creates a new transaction with no inputs or outputs
    pub fn new(version: u32, locktime: u32) -> Self {
        Tx {
            version,
            inputs: Vec::new(),
            outputs: Vec::new(),
            locktime,
        }
    }

    /// Adds an input spending output `vout` of the transaction with display-order hex `txid`
    ///
    /// The unlock script defaults to empty and the sequence to final.
    pub fn add_input(&mut self, txid: &str, vout: u32, unlock_script: Option<Script>) -> Result<()> {
        let hash = Hash256::decode(txid)
            .map_err(|_| Error::BadArgument("Invalid txid format (expected hex)".to_string()))?;
        self.inputs.push(TxIn {
            prev_output: OutPoint { hash, index: vout },
            unlock_script: unlock_script.unwrap_or_default(),
            sequence: 0xffffffff,
        });
        Ok(())
    }

    /// Adds an output paying `satoshis` to `lock_script`
    pub fn add_output(&mut self, lock_script: Script, satoshis: u64) {
        self.outputs.push(TxOut {
            satoshis,
            lock_script,
        });
    }

    /// Calculates the hash of the transaction also known as the txid
    pub fn hash(&self) -> Hash256 {
        let mut b = Vec::with_capacity(self.size());
        // Writing into a Vec can't fail
        let _ = self.write(&mut b);
        sha256d(&b)
    }

    /// Returns the serialized size of the transaction in bytes
    pub fn size(&self) -> usize {
        let mut size = 8;
        size += var_int::size(self.inputs.len() as u64);
        for tx_in in self.inputs.iter() {
            size += tx_in.size();
        }
        size += var_int::size(self.outputs.len() as u64);
        for tx_out in self.outputs.iter() {
            size += tx_out.size();
        }
        size
    }
}

impl Serializable<Tx> for Tx {
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let version = reader.read_u32::<LittleEndian>()?;
        let n_inputs = var_int::read(reader)?;
        let mut inputs = Vec::new();
        for _i in 0..n_inputs {
            inputs.push(TxIn::read(reader)?);
        }
        let n_outputs = var_int::read(reader)?;
        let mut outputs = Vec::new();
        for _i in 0..n_outputs {
            outputs.push(TxOut::read(reader)?);
        }
        let locktime = reader.read_u32::<LittleEndian>()?;
        Ok(Tx {
            version,
            inputs,
            outputs,
            locktime,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.version)?;
        var_int::write(self.inputs.len() as u64, writer)?;
        for tx_in in self.inputs.iter() {
            tx_in.write(writer)?;
        }
        var_int::write(self.outputs.len() as u64, writer)?;
        for tx_out in self.outputs.iter() {
            tx_out.write(writer)?;
        }
        writer.write_u32::<LittleEndian>(self.locktime)?;
        Ok(())
    }
}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());

        f.debug_struct("Tx")
            .field("version", &self.version)
            .field(
                "inputs",
                if self.inputs.len() <= 3 {
                    &self.inputs
                } else {
                    &inputs_str
                },
            )
            .field(
                "outputs",
                if self.outputs.len() <= 3 {
                    &self.outputs
                } else {
                    &outputs_str
                },
            )
            .field("locktime", &self.locktime)
            .finish()
    }
}
