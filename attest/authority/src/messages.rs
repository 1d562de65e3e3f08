// Copyright (c) 2024 The LocalAttest Project

//! The wire-style messages exchanged between assertion authorities.
//!
//! Each envelope is a flat pair of an authority-type tag and an opaque,
//! authority-specific payload; the payload encodings are private to
//! generator/verifier pairs of the same authority type. These structures
//! are used in-process here, but they are what a distribution layer would
//! carry between separate processes.

use alloc::{string::String, vec::Vec};
use prost::Message;
use serde::{Deserialize, Serialize};

/// A tag identifying which attestation scheme a message belongs to.
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct AssertionDescription {
    /// The authority type which produced, or can consume, the message
    #[prost(string, tag = 1)]
    pub authority_type: String,
}

/// An advertisement that a generator can produce assertions of a given
/// type.
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct AssertionOffer {
    /// The authority type of the offered assertions
    #[prost(message, required, tag = 1)]
    pub description: AssertionDescription,

    /// The encoded [`OfferPayload`] for this authority type
    #[prost(bytes, tag = 2)]
    pub additional_info: Vec<u8>,
}

/// A request for an assertion verifiable by the requesting context.
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct AssertionRequest {
    /// The authority type of the requested assertion
    #[prost(message, required, tag = 1)]
    pub description: AssertionDescription,

    /// The encoded [`RequestPayload`] for this authority type
    #[prost(bytes, tag = 2)]
    pub additional_info: Vec<u8>,
}

/// An assertion: the generator's authenticated identity evidence.
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct Assertion {
    /// The authority type which produced this assertion
    #[prost(message, required, tag = 1)]
    pub description: AssertionDescription,

    /// The authority-specific evidence; for the local-attestation
    /// authority, the fixed-layout bytes of a report
    #[prost(bytes, tag = 2)]
    pub assertion: Vec<u8>,
}

/// The local-attestation payload of an [`AssertionOffer`].
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct OfferPayload {
    /// The attestation domain the generator was configured with
    #[prost(bytes, tag = 1)]
    pub attestation_domain: Vec<u8>,
}

/// The local-attestation payload of an [`AssertionRequest`].
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct RequestPayload {
    /// The attestation domain the verifier was configured with
    #[prost(bytes, tag = 1)]
    pub attestation_domain: Vec<u8>,

    /// The fixed-layout bytes of the verifier's own target descriptor
    #[prost(bytes, tag = 2)]
    pub target_info: Vec<u8>,
}

/// The configuration consumed by [`initialize`].
///
/// Carried as an opaque serialized blob so that deployments can distribute
/// one configuration to every authority they provision.
///
/// [`initialize`]: crate::LocalAssertionGenerator::initialize
#[derive(Clone, Deserialize, Eq, Hash, Message, PartialEq, Serialize)]
pub struct LocalAssertionAuthorityConfig {
    /// The attestation domain this authority should operate in
    #[prost(bytes, tag = 1)]
    pub attestation_domain: Vec<u8>,
}
