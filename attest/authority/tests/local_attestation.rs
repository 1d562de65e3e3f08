// Copyright (c) 2024 The LocalAttest Project

//! End-to-end exercises of the local assertion protocol.
//!
//! Each test provisions a simulated platform, spawns a generator context
//! and a verifier context on it, and drives the offer/request/assert/verify
//! flow the way two cooperating enclaves would. The pairing of identities
//! (same or independently random) is a parameter throughout, because
//! interoperability must not depend on it.

use la_attest_authority::{
    Error, LocalAssertionAuthorityConfig, LocalAssertionGenerator, LocalAssertionVerifier,
    ATTESTATION_DOMAIN_SIZE,
};
use la_sgx_sim::{SimEnclave, SimPlatform};
use la_util_from_random::FromRandom;
use la_util_serial::encode;
use proptest::prelude::*;
use rand_core::SeedableRng;
use rand_hc::Hc128Rng;

const USER_DATA: &[u8] = b"User data";

fn test_config(domain_byte: u8) -> Vec<u8> {
    encode(&LocalAssertionAuthorityConfig {
        attestation_domain: vec![domain_byte; ATTESTATION_DOMAIN_SIZE],
    })
}

/// A generator and verifier sharing a platform and a configuration, plus a
/// handle on the generator's context for identity assertions.
fn authorities(
    seed: u64,
    same_identity: bool,
) -> (
    LocalAssertionGenerator<SimEnclave>,
    LocalAssertionVerifier<SimEnclave>,
    SimEnclave,
) {
    let mut csprng = Hc128Rng::seed_from_u64(seed);
    let platform = SimPlatform::from_random(&mut csprng);

    let generator_enclave = platform.spawn_random(&mut csprng);
    let verifier_enclave = if same_identity {
        platform.spawn(generator_enclave.identity().clone())
    } else {
        platform.spawn_random(&mut csprng)
    };

    let mut generator = LocalAssertionGenerator::new(generator_enclave.clone());
    generator
        .initialize(&test_config(7))
        .expect("generator initialization failed");

    let mut verifier = LocalAssertionVerifier::new(verifier_enclave);
    verifier
        .initialize(&test_config(7))
        .expect("verifier initialization failed");

    (generator, verifier, generator_enclave)
}

fn assert_round_trip(seed: u64, same_identity: bool, user_data: &[u8]) {
    let (generator, verifier, generator_enclave) = authorities(seed, same_identity);

    let request = verifier
        .create_assertion_request()
        .expect("request creation failed");
    assert_eq!(generator.can_generate(&request), Ok(true));

    let assertion = generator
        .generate(user_data, &request)
        .expect("assertion generation failed");
    let identity = verifier
        .verify(user_data, &assertion)
        .expect("assertion verification failed");

    // The extracted identity is the generator's, regardless of whose
    // context verified it.
    let expected = generator_enclave.identity();
    assert_eq!(identity.mr_enclave, expected.mr_enclave);
    assert_eq!(identity.mr_signer, expected.mr_signer);
    assert_eq!(identity.attributes.bits(), expected.attributes.flags());
    assert_eq!(identity.isv_prod_id, expected.isv_prod_id);
    assert_eq!(identity.isv_svn, expected.isv_svn);
}

#[test]
fn can_generate_request_from_same_enclave() {
    let (generator, verifier, _) = authorities(1, true);
    let request = verifier.create_assertion_request().unwrap();
    assert_eq!(generator.can_generate(&request), Ok(true));
}

#[test]
fn can_generate_request_from_different_enclave() {
    let (generator, verifier, _) = authorities(2, false);
    let request = verifier.create_assertion_request().unwrap();
    assert_eq!(generator.can_generate(&request), Ok(true));
}

#[test]
fn can_verify_offer_from_same_enclave() {
    let (generator, verifier, _) = authorities(3, true);
    let offer = generator.create_assertion_offer().unwrap();
    assert_eq!(verifier.can_verify(&offer), Ok(true));
}

#[test]
fn can_verify_offer_from_different_enclave() {
    let (generator, verifier, _) = authorities(4, false);
    let offer = generator.create_assertion_offer().unwrap();
    assert_eq!(verifier.can_verify(&offer), Ok(true));
}

#[test]
fn verify_assertion_same_enclave() {
    assert_round_trip(5, true, USER_DATA);
}

#[test]
fn verify_assertion_different_enclaves() {
    assert_round_trip(6, false, USER_DATA);
}

#[test]
fn verify_rejects_different_user_data() {
    let (generator, verifier, _) = authorities(7, false);
    let request = verifier.create_assertion_request().unwrap();
    let assertion = generator.generate(USER_DATA, &request).unwrap();

    assert_eq!(
        verifier.verify(b"Other data", &assertion).unwrap_err(),
        Error::AuthenticationFailed
    );
}

#[test]
fn verify_rejects_assertion_for_other_target() {
    let mut csprng = Hc128Rng::seed_from_u64(8);
    let platform = SimPlatform::from_random(&mut csprng);

    let mut generator = LocalAssertionGenerator::new(platform.spawn_random(&mut csprng));
    generator.initialize(&test_config(7)).unwrap();

    let mut intended = LocalAssertionVerifier::new(platform.spawn_random(&mut csprng));
    intended.initialize(&test_config(7)).unwrap();

    // Same platform, same domain, but a differently-identified context.
    let mut bystander = LocalAssertionVerifier::new(platform.spawn_random(&mut csprng));
    bystander.initialize(&test_config(7)).unwrap();

    let request = intended.create_assertion_request().unwrap();
    let assertion = generator.generate(USER_DATA, &request).unwrap();

    assert!(intended.verify(USER_DATA, &assertion).is_ok());
    assert_eq!(
        bystander.verify(USER_DATA, &assertion).unwrap_err(),
        Error::AuthenticationFailed
    );
}

#[test]
fn verify_rejects_tampered_assertion() {
    let (generator, verifier, _) = authorities(9, false);
    let request = verifier.create_assertion_request().unwrap();
    let mut assertion = generator.generate(USER_DATA, &request).unwrap();

    // flip one bit of the generator's measurement
    assertion.assertion[40] ^= 0x01;

    assert_eq!(
        verifier.verify(USER_DATA, &assertion).unwrap_err(),
        Error::AuthenticationFailed
    );
}

#[test]
fn mismatched_domains_are_incompatible_both_ways() {
    let mut csprng = Hc128Rng::seed_from_u64(10);
    let platform = SimPlatform::from_random(&mut csprng);

    let mut generator = LocalAssertionGenerator::new(platform.spawn_random(&mut csprng));
    generator.initialize(&test_config(7)).unwrap();

    let mut verifier = LocalAssertionVerifier::new(platform.spawn_random(&mut csprng));
    verifier.initialize(&test_config(8)).unwrap();

    let request = verifier.create_assertion_request().unwrap();
    let offer = generator.create_assertion_offer().unwrap();

    // the compatibility decision is symmetric
    assert_eq!(generator.can_generate(&request), Ok(false));
    assert_eq!(verifier.can_verify(&offer), Ok(false));

    assert_eq!(
        generator.generate(USER_DATA, &request).unwrap_err(),
        Error::IncompatibleRequest
    );
}

#[test]
fn foreign_authority_tag_is_incompatible_not_an_error() {
    let (generator, verifier, _) = authorities(11, false);

    let mut request = verifier.create_assertion_request().unwrap();
    request.description.authority_type = "some-other-authority".into();

    assert_eq!(generator.can_generate(&request), Ok(false));
}

proptest! {
    /// The round trip succeeds whether or not generator and verifier share
    /// an identity, for arbitrary user data.
    #[test]
    fn round_trip_holds_for_any_identity_pairing(
        seed in any::<u64>(),
        same_identity in any::<bool>(),
        user_data in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        assert_round_trip(seed, same_identity, &user_data);
    }

    /// An assertion over one user data value never verifies against
    /// another.
    #[test]
    fn user_data_is_binding(
        seed in any::<u64>(),
        same_identity in any::<bool>(),
        (user_data, other_data) in (
            prop::collection::vec(any::<u8>(), 0..32),
            prop::collection::vec(any::<u8>(), 0..32),
        ).prop_filter("user data must differ", |(a, b)| a != b),
    ) {
        let (generator, verifier, _) = authorities(seed, same_identity);
        let request = verifier.create_assertion_request().unwrap();
        let assertion = generator.generate(&user_data, &request).unwrap();

        prop_assert_eq!(
            verifier.verify(&other_data, &assertion).unwrap_err(),
            Error::AuthenticationFailed
        );
    }
}
