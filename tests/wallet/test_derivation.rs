#[cfg(test)]
mod tests {
    use rpuzzle::network::Network;
    use rpuzzle::util::Error;
    use rpuzzle::wallet::*;
    use std::str::FromStr;

    const SEED: &str = "e5dfcbe3c62fb5e4d7dbb794119fcd9a8fbaeed04b841ad6a3d4652b2e211f370e75dc1f71a61cb6027ff360bf7826272541c0724beff9bd6c358a046497449c";
    const EXPECTED_MASTER_PRIV: &str = "xprv9s21ZrQH143K3XVnYZ9RtEiFWodPvMz3SCRt8nWzTx6zS9mJfTpLStJrNa2Bd9v8kwFdDJkWizK62FBmRGDW8MEZciMBzw3zMwZcXophEF6";
    const EXPECTED_MASTER_PUB: &str = "xpub661MyMwAqRbcG1aFeagSFNez4qTtKphtoRMUwAvc2HdyJx6TD18azgdLDqNQNxxb9So1MEfG8oRn2ryuzCB4GFt87Lhh5wWy9r5g6xEVdrD";

    // BIP-32 test vector 1
    const VECTOR_SEED: &str = "000102030405060708090a0b0c0d0e0f";
    const VECTOR: [(&str, &str, &str); 4] = [
        (
            "m",
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi",
            "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8",
        ),
        (
            "m/0H",
            "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7",
            "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw",
        ),
        (
            "m/0H/1",
            "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs",
            "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ",
        ),
        (
            "m/0H/1/2H",
            "xprv9z4pot5VBttmtdRTWfWQmoH1taj2axGVzFqSb8C9xaxKymcFzXBDptWmT7FwuEzG3ryjH4ktypQSAewRiNMjANTtpgP4mLTj34bhnZX7UiM",
            "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5",
        ),
    ];

    fn master() -> Result<ExtendedPrivateKey, Error> {
        ExtendedPrivateKey::from_seed(&hex::decode(SEED)?, Network::Mainnet)
    }

    #[test]
    fn test_master_xpriv_from_seed() -> Result<(), Error> {
        let master = master()?;
        assert_eq!(master.encode(), EXPECTED_MASTER_PRIV);
        assert_eq!(master.extended_public_key()?.encode(), EXPECTED_MASTER_PUB);

        for path in ["m", "m/", "M"] {
            assert_eq!(master.derive(path)?.encode(), EXPECTED_MASTER_PRIV);
        }
        assert_eq!(ExtendedPrivateKey::decode(EXPECTED_MASTER_PRIV)?, master);
        Ok(())
    }

    #[test]
    fn test_vector_one() -> Result<(), Error> {
        let master = ExtendedPrivateKey::from_seed(&hex::decode(VECTOR_SEED)?, Network::Mainnet)?;
        for (path, xprv, xpub) in VECTOR.iter() {
            let child = master.derive(path)?;
            assert_eq!(child.encode(), *xprv, "{}", path);
            assert_eq!(child.extended_public_key()?.encode(), *xpub, "{}", path);
        }
        Ok(())
    }

    #[test]
    fn test_step_by_step_matches_full_path() -> Result<(), Error> {
        let expected = "xprv9y4Lz3K65nZKhZ5rNTVvYkHb4EcrUu4ifdX5r2nESArhZEuBwX3C84X3L5ckDpMM4BgYFSzL3pbbmYFmaHgsgubyKVqdJHdhiinRvt8Y6iF";
        let master = master()?;
        assert_eq!(master.derive("m/44/0/0/")?.encode(), expected);

        let m_44 = master.derive("m/44")?;
        assert_eq!(
            m_44.encode(),
            "xprv9uH53HAp6HqvUgKT5Q66PEYabhREQZMC1n1TkWPU5fjNDJ9ZrZMbnbp7L3pkScGNDzU9ueMJcyHrPYDqJXHNRs2mfg75YSZ3uE6aKQpS7mk"
        );
        let m_44_0_0 = m_44.derive("0")?.derive("0")?;
        assert_eq!(m_44_0_0.encode(), expected);
        assert_eq!(m_44_0_0.as_extended_key().depth(), 3);
        Ok(())
    }

    #[test]
    fn test_public_derivation() -> Result<(), Error> {
        let master = master()?;
        let xpub = ExtendedPublicKey::decode(EXPECTED_MASTER_PUB)?;
        let from_public = xpub.derive("m/44/0/0")?;
        let from_private = master.derive("m/44/0/0")?.extended_public_key()?;
        assert_eq!(from_public, from_private);
        assert!(matches!(xpub.derive("m/44'"), Err(Error::Bip32Error(_))));
        Ok(())
    }

    #[test]
    fn test_testnet_prefixes() -> Result<(), Error> {
        let master = ExtendedPrivateKey::from_seed(&hex::decode(SEED)?, Network::Testnet)?;
        let derived = master.derive("m/44/0/0/")?;
        assert!(master.encode().starts_with("tprv"));
        assert!(derived.encode().starts_with("tprv"));
        assert!(derived.extended_public_key()?.encode().starts_with("tpub"));
        assert_eq!(derived.as_extended_key().network()?, Network::Testnet);
        Ok(())
    }

    #[test]
    fn test_invalid_paths() -> Result<(), Error> {
        let master = master()?;
        for path in ["", "m//0", "m/a", "x/1", "m/0''"] {
            assert!(
                matches!(master.derive(path), Err(Error::InvalidDerivationPath(_))),
                "{}",
                path
            );
        }
        assert!(DerivationPath::is_valid_path("m/44'/0h/1H/2"));
        assert_eq!(DerivationPath::from_str("m/44h/0")?.to_string(), "m/44'/0");
        Ok(())
    }

    #[test]
    fn test_decode_errors() {
        assert!(ExtendedKey::decode("xprv").is_err());
        assert!(ExtendedKey::decode("0OIl").is_err());
        let mut corrupted = EXPECTED_MASTER_PRIV.to_string();
        corrupted.replace_range(20..21, "z");
        assert!(ExtendedKey::decode(&corrupted).is_err());
        assert!(ExtendedPrivateKey::decode(EXPECTED_MASTER_PUB).is_err());
    }
}
