#[cfg(test)]
mod tests {
    use rpuzzle::messages::{OutPoint, Tx, TxIn, TxOut};
    use rpuzzle::puzzle::*;
    use rpuzzle::script::op_codes::*;
    use rpuzzle::script::{Chunk, Script, STANDARD_FLAGS};
    use rpuzzle::transaction::sighash::*;
    use rpuzzle::transaction::{verify_input, UnspentOutput};
    use rpuzzle::util::{Error, Hash256};
    use secp256k1::SecretKey;

    fn k_one() -> KValue {
        KValue::from_bytes(&[1]).unwrap()
    }

    fn utxo(puzzle: &RPuzzle, seed: u8, satoshis: u64) -> UnspentOutput {
        UnspentOutput {
            txid: Hash256([seed; 32]),
            output_index: seed as u32,
            lock_script: puzzle.to_script(),
            satoshis,
        }
    }

    fn spend(outpoints: &[OutPoint]) -> Tx {
        let mut tx = Tx::new(1, 0);
        for outpoint in outpoints {
            tx.inputs.push(TxIn {
                prev_output: outpoint.clone(),
                unlock_script: Script::new(),
                sequence: 0xffffffff,
            });
        }
        tx.outputs.push(TxOut {
            satoshis: 900,
            lock_script: Script(vec![OP_TRUE]),
        });
        tx
    }

    fn pushed_data(script: &Script) -> Vec<Vec<u8>> {
        script
            .chunks()
            .unwrap()
            .into_iter()
            .filter_map(|chunk| match chunk {
                Chunk::Data(_, data) => Some(data),
                Chunk::Op(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_k_one_all_variants() -> Result<(), Error> {
        for puzzle_type in PuzzleType::ALL.iter() {
            let mut puzzle = RPuzzle::from_k_value(k_one())?;
            puzzle.set_type(*puzzle_type);
            let prevout = utxo(&puzzle, 1, 1000);
            let tx = spend(&[prevout.outpoint()]);

            let signed = puzzle.sign_default(&tx, &[prevout.clone()])?;
            verify_input(&signed, 0, &prevout, STANDARD_FLAGS)?;

            let pushes = pushed_data(&signed.inputs[0].unlock_script);
            assert_eq!(pushes.len(), 2);
            assert_eq!(*pushes[0].last().unwrap(), SIGHASH_ALL | SIGHASH_FORKID);
            assert_eq!(pushes[1], puzzle.public_key().serialize().to_vec());
            assert_eq!(RValue::from_signature(&pushes[0])?, *puzzle.r_value());
        }
        Ok(())
    }

    #[test]
    fn test_sighash_types() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(KValue::from_hex("0badc0de")?)?;
        let prevout = utxo(&puzzle, 2, 5000);
        let tx = spend(&[prevout.outpoint()]);
        let types = [
            SIGHASH_ALL,
            SIGHASH_ALL | SIGHASH_FORKID,
            SIGHASH_NONE | SIGHASH_FORKID,
            SIGHASH_SINGLE | SIGHASH_FORKID,
            SIGHASH_ALL | SIGHASH_FORKID | SIGHASH_ANYONECANPAY,
        ];
        for sighash_type in types.iter() {
            let signed = puzzle.sign(&tx, &[prevout.clone()], *sighash_type)?;
            verify_input(&signed, 0, &prevout, STANDARD_FLAGS)?;
        }
        Ok(())
    }

    #[test]
    fn test_only_puzzle_inputs_signed() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(KValue::from_random())?;
        let first = utxo(&puzzle, 3, 700);
        let second = utxo(&puzzle, 4, 800);
        let unrelated = OutPoint {
            hash: Hash256([9; 32]),
            index: 0,
        };
        let unlisted = utxo(&puzzle, 5, 900);
        let tx = spend(&[first.outpoint(), unrelated, second.outpoint(), unlisted.outpoint()]);

        let signed = puzzle.sign_default(&tx, &[second.clone(), first.clone()])?;
        verify_input(&signed, 0, &first, STANDARD_FLAGS)?;
        verify_input(&signed, 2, &second, STANDARD_FLAGS)?;
        assert!(signed.inputs[1].unlock_script.0.is_empty());
        assert!(signed.inputs[3].unlock_script.0.is_empty());

        // The same K yields the same R in every signature
        let r0 = RValue::from_signature(&pushed_data(&signed.inputs[0].unlock_script)[0])?;
        let r2 = RValue::from_signature(&pushed_data(&signed.inputs[2].unlock_script)[0])?;
        assert_eq!(r0, r2);
        assert_eq!(r0, *puzzle.r_value());
        Ok(())
    }

    #[test]
    fn test_input_not_mutated() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(k_one())?;
        let prevout = utxo(&puzzle, 6, 1000);
        let tx = spend(&[prevout.outpoint()]);
        let before = tx.clone();
        let signed = puzzle.sign_default(&tx, &[prevout])?;
        assert_eq!(tx, before);
        assert_ne!(signed, tx);
        Ok(())
    }

    #[test]
    fn test_tampering_fails_verification() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(k_one())?;
        let prevout = utxo(&puzzle, 7, 1000);
        let tx = spend(&[prevout.outpoint()]);
        let signed = puzzle.sign_default(&tx, &[prevout.clone()])?;

        let mut changed_output = signed.clone();
        changed_output.outputs[0].satoshis = 999;
        assert!(verify_input(&changed_output, 0, &prevout, STANDARD_FLAGS).is_err());

        let mut changed_amount = prevout.clone();
        changed_amount.satoshis = 1001;
        assert!(verify_input(&signed, 0, &changed_amount, STANDARD_FLAGS).is_err());
        Ok(())
    }

    #[test]
    fn test_other_k_cannot_solve() -> Result<(), Error> {
        let puzzle = RPuzzle::from_k_value(k_one())?;
        let prevout = utxo(&puzzle, 8, 1000);
        let tx = spend(&[prevout.outpoint()]);

        // A different K does not recognise the output and leaves it unsigned
        let other = RPuzzle::from_k_value(KValue::from_bytes(&[2])?)?;
        let signed = other.sign_default(&tx, &[prevout.clone()])?;
        assert!(signed.inputs[0].unlock_script.0.is_empty());

        // Forcing its signature into the input fails the R check
        let mut forced = prevout.clone();
        forced.lock_script = other.to_script();
        let forged = other.sign_default(&tx, &[forced])?;
        assert!(!forged.inputs[0].unlock_script.0.is_empty());
        assert!(verify_input(&forged, 0, &prevout, STANDARD_FLAGS).is_err());
        Ok(())
    }

    #[test]
    fn test_signing_key_is_free() -> Result<(), Error> {
        let mut puzzle = RPuzzle::from_k_value(k_one())?;
        let prevout = utxo(&puzzle, 10, 1000);
        let tx = spend(&[prevout.outpoint()]);
        for byte in [0x01u8, 0x7e, 0xd3] {
            puzzle.set_private_key(SecretKey::from_byte_array([byte; 32])?);
            let signed = puzzle.sign_default(&tx, &[prevout.clone()])?;
            verify_input(&signed, 0, &prevout, STANDARD_FLAGS)?;
        }
        Ok(())
    }

    #[test]
    fn test_missing_k_value() -> Result<(), Error> {
        let puzzle = RPuzzle::from_r_value(k_one().to_r_value()?);
        let prevout = utxo(&puzzle, 11, 1000);
        let tx = spend(&[prevout.outpoint()]);
        match puzzle.sign_default(&tx, &[prevout]) {
            Err(e) => assert_eq!(e.to_string(), "K value undefined"),
            Ok(_) => panic!("Signed without K"),
        }
        Ok(())
    }
}
