//! Integration tests for key agreement

use ffcrypt::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use ffcrypt_tests::{toy_group, FailingSource, FixedSource};

#[test]
fn test_dh_exchange() {
    let mut rng = OsRng;
    let params = DhParameters::modp_2048();

    let alice = DiffieHellman::keypair(&mut rng, &params).unwrap();
    let bob = DiffieHellman::keypair(&mut rng, &params).unwrap();

    let alice_view = DiffieHellman::shared_secret(
        &DiffieHellman::secret_key(&alice),
        &DiffieHellman::public_key(&bob),
        &params,
    )
    .unwrap();
    let bob_view = DiffieHellman::shared_secret(
        &DiffieHellman::secret_key(&bob),
        &DiffieHellman::public_key(&alice),
        &params,
    )
    .unwrap();

    assert_eq!(alice_view, bob_view);
}

#[test]
fn test_dh_exchange_with_generated_parameters() {
    let params = DhParameters::generate(&mut FixedSource, 8).unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(23);
    let alice = DiffieHellman::keypair(&mut rng, &params).unwrap();
    let bob = DiffieHellman::keypair(&mut rng, &params).unwrap();

    let alice_view = DiffieHellman::shared_secret(
        &DiffieHellman::secret_key(&alice),
        &DiffieHellman::public_key(&bob),
        &params,
    )
    .unwrap();
    let bob_view = DiffieHellman::shared_secret(
        &DiffieHellman::secret_key(&bob),
        &DiffieHellman::public_key(&alice),
        &params,
    )
    .unwrap();

    assert_eq!(alice_view, bob_view);
}

#[test]
fn test_dh_parameter_generation_failure() {
    let err = DhParameters::generate(&mut FailingSource, 256).unwrap_err();
    assert!(matches!(err, Error::ParameterGeneration { .. }));
}

#[test]
fn test_ecdh_exchange_secp256k1() {
    let mut rng = OsRng;
    let curve = ffcrypt::algorithms::ec::secp256k1();

    let alice = EcdhExchange::keypair(&mut rng, &curve).unwrap();
    let bob = EcdhExchange::keypair(&mut rng, &curve).unwrap();

    let alice_view = EcdhExchange::shared_secret(
        &EcdhExchange::secret_key(&alice),
        &EcdhExchange::public_key(&bob),
        &curve,
    )
    .unwrap();
    let bob_view = EcdhExchange::shared_secret(
        &EcdhExchange::secret_key(&bob),
        &EcdhExchange::public_key(&alice),
        &curve,
    )
    .unwrap();

    assert_eq!(alice_view, bob_view);
}

#[test]
fn test_ecdh_exchange_toy_curve() {
    let curve = toy_group();
    let mut rng = ChaCha20Rng::seed_from_u64(19);

    for _ in 0..16 {
        let alice = EcdhExchange::keypair(&mut rng, &curve).unwrap();
        let bob = EcdhExchange::keypair(&mut rng, &curve).unwrap();

        let alice_view = EcdhExchange::shared_secret(
            &EcdhExchange::secret_key(&alice),
            &EcdhExchange::public_key(&bob),
            &curve,
        )
        .unwrap();
        let bob_view = EcdhExchange::shared_secret(
            &EcdhExchange::secret_key(&bob),
            &EcdhExchange::public_key(&alice),
            &curve,
        )
        .unwrap();

        assert_eq!(alice_view, bob_view);
    }
}

#[test]
fn test_keys_do_not_agree_across_curves() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let toy = toy_group();
    let mainnet = ffcrypt::algorithms::ec::secp256k1();

    let toy_pair = EcdhExchange::keypair(&mut rng, &toy).unwrap();
    let mainnet_pair = EcdhExchange::keypair(&mut rng, &mainnet).unwrap();

    let err = EcdhExchange::shared_secret(
        &EcdhExchange::secret_key(&toy_pair),
        &EcdhExchange::public_key(&mainnet_pair),
        &toy,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));
}
