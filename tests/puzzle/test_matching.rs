#[cfg(test)]
mod tests {
    use rpuzzle::puzzle::*;
    use rpuzzle::script::op_codes::*;
    use rpuzzle::script::Script;
    use rpuzzle::util::Error;
    use secp256k1::{PublicKey, Secp256k1, SecretKey};

    const K_HEX: &str = "6b86b273ff34fce19d6b804eff5a3f5747ada4eaa22f1d49c01e52ddb7875b4b";

    fn puzzle(puzzle_type: PuzzleType) -> Result<RPuzzle, Error> {
        let mut puzzle = RPuzzle::from_k_value(KValue::from_hex(K_HEX)?)?;
        puzzle.set_type(puzzle_type);
        Ok(puzzle)
    }

    #[test]
    fn test_template_per_variant() -> Result<(), Error> {
        for puzzle_type in PuzzleType::ALL.iter() {
            let puzzle = puzzle(*puzzle_type)?;
            let script = puzzle.to_script();
            let chunks = script.chunks()?;
            let expected_len = if puzzle_type.opcode().is_some() { 13 } else { 12 };
            assert_eq!(chunks.len(), expected_len, "{}", puzzle_type);
            assert_eq!(
                script.0[..9],
                [OP_OVER, OP_3, OP_SPLIT, OP_NIP, OP_1, OP_SPLIT, OP_SWAP, OP_SPLIT, OP_DROP]
            );
            assert_eq!(script.0[script.0.len() - 2..], [OP_EQUALVERIFY, OP_CHECKSIG]);
            if let Some(op) = puzzle_type.opcode() {
                assert_eq!(script.0[9], op);
            }
            assert!(puzzle.matches(&script), "{}", puzzle_type);
        }
        Ok(())
    }

    #[test]
    fn test_single_byte_mutations_rejected() -> Result<(), Error> {
        for puzzle_type in PuzzleType::ALL.iter() {
            let puzzle = puzzle(*puzzle_type)?;
            let script = puzzle.to_script();
            for i in 0..script.0.len() {
                let mut mutated = script.clone();
                mutated.0[i] ^= 0x01;
                assert!(!puzzle.matches(&mutated), "{} byte {}", puzzle_type, i);
            }

            let mut truncated = script.clone();
            truncated.0.pop();
            assert!(!puzzle.matches(&truncated));

            let mut extended = script.clone();
            extended.append(OP_DROP);
            assert!(!puzzle.matches(&extended));
        }
        Ok(())
    }

    #[test]
    fn test_variants_do_not_cross_match() -> Result<(), Error> {
        for a in PuzzleType::ALL.iter() {
            for b in PuzzleType::ALL.iter() {
                if a != b {
                    assert!(!puzzle(*a)?.matches(&puzzle(*b)?.to_script()), "{} {}", a, b);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_r_only_puzzle_matches_k_puzzle() -> Result<(), Error> {
        let k = KValue::from_hex(K_HEX)?;
        let with_k = RPuzzle::from_k_value(k.clone())?;
        let r_only = RPuzzle::from_r_value(k.to_r_value()?);
        assert_eq!(with_k.to_script(), r_only.to_script());
        assert!(r_only.matches(&with_k.to_script()));

        let other = RPuzzle::from_k_value(KValue::from_bytes(&[2])?)?;
        assert!(!other.matches(&with_k.to_script()));
        Ok(())
    }

    #[test]
    fn test_public_key_puzzle() -> Result<(), Error> {
        let private_key = SecretKey::from_byte_array([0x5a; 32])?;
        let public_key = PublicKey::from_secret_key(&Secp256k1::new(), &private_key);
        let mut puzzle = RPuzzle::from_public_key(&public_key);
        puzzle.set_type(PuzzleType::PayToR);
        let r = RValue::from_public_key(&public_key);
        assert_eq!(puzzle.r_hash(), r.to_bytes());
        assert!(puzzle.matches(&puzzle.to_script()));
        Ok(())
    }

    #[test]
    fn test_garbage_scripts() -> Result<(), Error> {
        let puzzle = puzzle(PuzzleType::PayToRSha256)?;
        assert!(!puzzle.matches(&Script::new()));
        assert!(!puzzle.matches(&Script(vec![OP_PUSHDATA4, 0xff, 0xff])));
        assert!(!puzzle.matches(&Script(vec![0x4b; 80])));
        assert!(!puzzle.matches(&Script(vec![OP_OVER; 13])));
        Ok(())
    }

    #[test]
    fn test_asm_names_variant_opcode() -> Result<(), Error> {
        assert!(puzzle(PuzzleType::PayToRHash256)?.to_asm()?.contains(" OP_HASH256 "));
        assert!(puzzle(PuzzleType::PayToRRipemd160)?.to_asm()?.contains(" OP_RIPEMD160 "));
        let asm = puzzle(PuzzleType::PayToR)?.to_asm()?;
        assert!(asm.starts_with("OP_OVER OP_3 OP_SPLIT OP_NIP OP_1 OP_SPLIT OP_SWAP OP_SPLIT OP_DROP "));
        assert!(!asm.contains("OP_HASH"));
        Ok(())
    }
}
