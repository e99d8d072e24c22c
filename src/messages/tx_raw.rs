//! Raw transaction hex import and export

use crate::messages::Tx;
use crate::util::{Result, Serializable};
use std::io::Cursor;

/// Serializes a transaction into a raw hex string
pub fn build_raw_tx(tx: &Tx) -> Result<String> {
    let mut buffer = Vec::with_capacity(tx.size());
    tx.write(&mut buffer)?;
    Ok(hex::encode(buffer))
}

/// Parses a raw hex string into a transaction
pub fn read_raw_tx(raw_tx_hex: &str) -> Result<Tx> {
    let bytes = hex::decode(raw_tx_hex.trim())?;
    let mut cursor = Cursor::new(bytes);
    Tx::read(&mut cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Hash256;

    const RAW_TX: &str = "0100000002c7b275b1820d605c8e0d3b7ae8d08726bb9a6752b2e6410c3732afd0207d2741000000006a47304402202dc10c1891ab0cd464400aef7a6e2518407be91a8b571039e6d0a89b5af6be560220472a866dfbc1d6c57d74e8a88b48fc63a9af1440527bece61ca23e3922ea6570412103b4b0af90d28c3594d78d741b920462d3647ebce23a635c47343a3632b2f54cdbffffffff4cbad2270169656046356889d7ffeac67800ded8fdb6310ac34af59bd5589966000000006a4730440220119039a562bc39fbf43c4c61b37e44a3cda85c68ff477e38534dcd769ba1e50f0220340d7e4ab67644a42ddad9ee65010b7421846f9e7c518e992ef2d00faa263eea41210346368f01e90334cb244a1027911a61ba736412331fc84fd7c11bec5ca3b91754ffffffff02f41a0000000000001976a914fe651e45ae44f6642e45ab9b181b1c80c42ff20288ac00ae2f00000000001976a91487bc1da7a2e6bc738e66af86064347099496a14e88ac00000000";

    #[test]
    fn read_and_build() {
        let tx = read_raw_tx(RAW_TX).unwrap();
        assert_eq!(tx.version, 1);
        assert_eq!(tx.inputs.len(), 2);
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.locktime, 0);
        assert_eq!(tx.outputs[0].satoshis, 6900);
        assert_eq!(tx.outputs[1].satoshis, 3124736);

        let prev = "41277d20d0af32370c41e6b252679abb2687d0e87a3b0d8e5c600d82b175b2c7";
        assert_eq!(tx.inputs[0].prev_output.hash, Hash256::decode(prev).unwrap());
        assert_eq!(tx.inputs[0].prev_output.index, 0);

        assert_eq!(build_raw_tx(&tx).unwrap(), RAW_TX);
    }

    #[test]
    fn invalid_raw_tx() {
        assert!(read_raw_tx("invalid_hex").is_err());
        let truncated = "0100000002c7b275b1820d605c8e0d3b7ae8d08726bb9a6752b2e6410c3732afd0207d2741";
        assert!(read_raw_tx(truncated).is_err());
    }
}
