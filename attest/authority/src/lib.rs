// Copyright (c) 2024 The LocalAttest Project

//! The local assertion authority.
//!
//! A [`LocalAssertionGenerator`] proves the identity of the context it
//! runs in; a [`LocalAssertionVerifier`] checks such a proof and extracts
//! the peer's [`EnclaveIdentity`]. Both sides run on the same platform and
//! exchange three messages, carried by whatever transport the caller
//! prefers:
//!
//! 1. the verifier emits an [`AssertionRequest`] naming itself as target,
//! 2. the generator answers it with an [`Assertion`] over the caller's
//!    user data,
//! 3. the verifier checks the assertion against the same user data.
//!
//! The proof is authenticated under a key only the requesting verifier can
//! re-derive, so an assertion is useless to any other context, and it binds
//! the user data, so it cannot be replayed for another purpose.

#![cfg_attr(all(not(test), not(doctest)), no_std)]

extern crate alloc;

mod domain;
mod error;
mod generator;
mod identity;
mod messages;
mod shared;
mod verifier;

pub use crate::{
    domain::{AttestationDomain, ATTESTATION_DOMAIN_SIZE},
    error::{Error, Result},
    generator::LocalAssertionGenerator,
    identity::EnclaveIdentity,
    messages::{
        Assertion, AssertionDescription, AssertionOffer, AssertionRequest,
        LocalAssertionAuthorityConfig, OfferPayload, RequestPayload,
    },
    verifier::LocalAssertionVerifier,
};

/// The authority-type tag of the local attestation scheme.
///
/// Every message this crate produces carries this tag; messages carrying
/// any other tag belong to some other authority and are never interpreted
/// here.
pub const LOCAL_ATTESTATION_AUTHORITY: &str = "sgx-local";
