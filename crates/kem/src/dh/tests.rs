use super::*;
use ffcrypt_api::{DomainParameterSource, Error as ApiError, KeyAgreement};

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn ubig(n: u64) -> BigUint {
    BigUint::from(n)
}

fn small_params() -> DhParameters {
    // p = 23, g = 5 (5 is a primitive root mod 23)
    DhParameters::new(ubig(23), ubig(5)).unwrap()
}

#[test]
fn textbook_exchange_p23() {
    let params = small_params();

    let alice = DhKeyPair::from_secret(DhSecretKey::new(ubig(6)), &params).unwrap();
    let bob = DhKeyPair::from_secret(DhSecretKey::new(ubig(15)), &params).unwrap();

    // 5^6 mod 23 = 8, 5^15 mod 23 = 19
    assert_eq!(alice.public().as_uint(), &ubig(8));
    assert_eq!(bob.public().as_uint(), &ubig(19));

    let s_alice = shared_secret(bob.public(), alice.secret(), params.prime()).unwrap();
    let s_bob = shared_secret(alice.public(), bob.secret(), params.prime()).unwrap();
    assert_eq!(s_alice, s_bob);
    assert_eq!(s_alice.as_uint(), &ubig(2));
}

#[test]
fn random_exchanges_agree() {
    let params = small_params();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for _ in 0..32 {
        let alice = generate_keypair(&mut rng, &params).unwrap();
        let bob = generate_keypair(&mut rng, &params).unwrap();
        let s1 = shared_secret(bob.public(), alice.secret(), params.prime()).unwrap();
        let s2 = shared_secret(alice.public(), bob.secret(), params.prime()).unwrap();
        assert_eq!(s1, s2);
    }
}

#[test]
fn secret_exponent_stays_in_range() {
    let params = small_params();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..64 {
        let pair = generate_keypair(&mut rng, &params).unwrap();
        let secret = pair.secret().as_uint();
        assert!(secret >= &ubig(2));
        assert!(secret <= &ubig(21)); // p - 2
    }
}

#[test]
fn modp_2048_round_trip() {
    let params = DhParameters::modp_2048();
    assert_eq!(params.prime().bits(), 2048);
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let alice = generate_keypair(&mut rng, &params).unwrap();
    let bob = generate_keypair(&mut rng, &params).unwrap();
    let s1 = shared_secret(bob.public(), alice.secret(), params.prime()).unwrap();
    let s2 = shared_secret(alice.public(), bob.secret(), params.prime()).unwrap();
    assert_eq!(s1, s2);
}

#[test]
fn rejects_degenerate_inputs() {
    let params = small_params();
    let secret = DhSecretKey::new(ubig(6));

    // modulus too small
    let err = shared_secret(&DhPublicKey::new(ubig(4)), &secret, &ubig(1)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter { .. }));

    // public value out of range
    let err = shared_secret(&DhPublicKey::new(ubig(0)), &secret, params.prime()).unwrap_err();
    assert!(matches!(err, ApiError::InvalidKey { .. }));
    let err = shared_secret(&DhPublicKey::new(ubig(23)), &secret, params.prime()).unwrap_err();
    assert!(matches!(err, ApiError::InvalidKey { .. }));

    // zero secret
    let err = shared_secret(
        &DhPublicKey::new(ubig(4)),
        &DhSecretKey::new(ubig(0)),
        params.prime(),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidKey { .. }));
}

#[test]
fn parameter_validation() {
    assert!(DhParameters::new(ubig(4), ubig(2)).is_err());
    assert!(DhParameters::new(ubig(23), ubig(1)).is_err());
    assert!(DhParameters::new(ubig(23), ubig(23)).is_err());
    assert!(DhParameters::new(ubig(23), ubig(5)).is_ok());
}

#[test]
fn collaborator_failure_surfaces_as_parameter_generation() {
    struct FailingSource;
    impl DomainParameterSource for FailingSource {
        fn generate_prime(&mut self, _bits: u64) -> ffcrypt_api::Result<BigUint> {
            Err(ApiError::Other {
                context: "test source",
                message: "prime search timed out".to_string(),
            })
        }
        fn find_primitive_root(&mut self, _p: &BigUint) -> ffcrypt_api::Result<BigUint> {
            unreachable!("prime generation already failed")
        }
    }

    let err = DhParameters::generate(&mut FailingSource, 256).unwrap_err();
    assert!(matches!(err, ApiError::ParameterGeneration { .. }));
}

#[test]
fn fixture_collaborator_produces_usable_parameters() {
    struct FixedSource;
    impl DomainParameterSource for FixedSource {
        fn generate_prime(&mut self, _bits: u64) -> ffcrypt_api::Result<BigUint> {
            Ok(BigUint::from(23u64))
        }
        fn find_primitive_root(&mut self, _p: &BigUint) -> ffcrypt_api::Result<BigUint> {
            Ok(BigUint::from(5u64))
        }
    }

    let params = DhParameters::generate(&mut FixedSource, 8).unwrap();
    assert_eq!(params, DhParameters::new(ubig(23), ubig(5)).unwrap());
}

#[test]
fn trait_surface_matches_free_functions() {
    let params = small_params();
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    let alice = DiffieHellman::keypair(&mut rng, &params).unwrap();
    let bob = DiffieHellman::keypair(&mut rng, &params).unwrap();
    let s1 = DiffieHellman::shared_secret(
        &DiffieHellman::secret_key(&alice),
        &DiffieHellman::public_key(&bob),
        &params,
    )
    .unwrap();
    let s2 = DiffieHellman::shared_secret(
        &DiffieHellman::secret_key(&bob),
        &DiffieHellman::public_key(&alice),
        &params,
    )
    .unwrap();
    assert_eq!(s1, s2);
    assert_eq!(DiffieHellman::name(), "DH");
}
