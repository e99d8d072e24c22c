#[cfg(test)]
mod tests {
    use rpuzzle::messages::tx_raw::{build_raw_tx, read_raw_tx};
    use rpuzzle::messages::Tx;
    use rpuzzle::puzzle::*;
    use rpuzzle::script::op_codes::*;
    use rpuzzle::script::Script;
    use rpuzzle::util::Error;

    const PREV_TXID: &str = "41277d20d0af32370c41e6b252679abb2687d0e87a3b0d8e5c600d82b175b2c7";

    fn p2pkh_like() -> Script {
        let mut script = Script::new();
        script.append(OP_DUP);
        script.append(OP_HASH160);
        script.append_data(&[0x77; 20]);
        script.append(OP_EQUALVERIFY);
        script.append(OP_CHECKSIG);
        script
    }

    #[test]
    fn test_outputs_in_order() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(KValue::from_bytes(&[0x0c; 32])?)?;
        let mut sha_puzzle = puzzle.clone();
        sha_puzzle.set_type(PuzzleType::PayToRSha256);

        let mut tx = Tx::new(1, 0);
        tx.add_input(PREV_TXID, 0, None)?;
        tx.add_output(p2pkh_like(), 100);
        tx.add_output(puzzle.to_script(), 200);
        tx.add_output(sha_puzzle.to_script(), 300);
        tx.add_output(puzzle.to_script(), 400);
        let before = tx.clone();

        let utxos = puzzle.utxos(&tx);
        assert_eq!(tx, before);
        assert_eq!(utxos.len(), 2);
        assert_eq!(utxos[0].output_index, 1);
        assert_eq!(utxos[0].satoshis, 200);
        assert_eq!(utxos[1].output_index, 3);
        assert_eq!(utxos[1].satoshis, 400);
        for utxo in utxos.iter() {
            assert_eq!(utxo.txid, tx.hash());
            assert_eq!(utxo.lock_script, puzzle.to_script());
        }

        let sha_utxos = sha_puzzle.utxos(&tx);
        assert_eq!(sha_utxos.len(), 1);
        assert_eq!(sha_utxos[0].output_index, 2);
        Ok(())
    }

    #[test]
    fn test_no_outputs() -> Result<(), Error> {
        let puzzle = RPuzzle::from_random()?;
        assert!(puzzle.utxos(&Tx::new(1, 0)).is_empty());

        let mut tx = Tx::new(1, 0);
        tx.add_output(p2pkh_like(), 1);
        tx.add_output(Script(vec![OP_FALSE, OP_RETURN]), 0);
        assert!(puzzle.utxos(&tx).is_empty());
        Ok(())
    }

    #[test]
    fn test_outputs_from_raw_hex() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(KValue::from_hex("a5")?)?;
        let mut tx = Tx::new(2, 0);
        tx.add_input(PREV_TXID, 1, None)?;
        tx.add_output(puzzle.to_script(), 1000);
        tx.add_output(p2pkh_like(), 2000);

        let raw = build_raw_tx(&tx)?;
        let parsed = read_raw_tx(&raw)?;
        assert_eq!(parsed, tx);

        let utxos = puzzle.utxos(&parsed);
        assert_eq!(utxos.len(), 1);
        assert_eq!(utxos[0].txid, tx.hash());
        assert_eq!(utxos[0].outpoint().index, 0);
        Ok(())
    }
}
