// Copyright (c) 2024 The LocalAttest Project

//! The generator half of the local assertion authority.

use crate::{
    domain::AttestationDomain,
    error::{Error, Result},
    messages::{
        Assertion, AssertionDescription, AssertionOffer, AssertionRequest,
        LocalAssertionAuthorityConfig, OfferPayload, RequestPayload,
    },
    shared::report_data_for,
    LOCAL_ATTESTATION_AUTHORITY,
};
use la_attest_core::{ReportingEnclave, TargetInfo};
use la_util_encodings::{FromX64, ToX64};
use prost::Message;

/// Produces assertions which prove the identity of the context it runs in.
///
/// The enclave context is injected at construction; a generator holds no
/// other state than its configuration, and every operation after
/// [`initialize`] is a pure function of its inputs.
///
/// [`initialize`]: Self::initialize
pub struct LocalAssertionGenerator<E: ReportingEnclave> {
    enclave: E,
    domain: Option<AttestationDomain>,
}

impl<E: ReportingEnclave> LocalAssertionGenerator<E> {
    /// Create an uninitialized generator for the given context.
    pub fn new(enclave: E) -> Self {
        Self {
            enclave,
            domain: None,
        }
    }

    /// Configure this generator from an encoded
    /// [`LocalAssertionAuthorityConfig`].
    ///
    /// Must be called exactly once before any other operation; a second
    /// call fails with [`Error::AlreadyInit`]. A failed call leaves the
    /// generator unconfigured.
    pub fn initialize(&mut self, config: &[u8]) -> Result<()> {
        if self.domain.is_some() {
            return Err(Error::AlreadyInit);
        }

        let config = LocalAssertionAuthorityConfig::decode(config)
            .map_err(|_| Error::InvalidConfig)?;
        let domain =
            AttestationDomain::new(LOCAL_ATTESTATION_AUTHORITY, &config.attestation_domain)
                .map_err(|_| Error::InvalidConfig)?;

        self.domain = Some(domain);
        Ok(())
    }

    fn domain(&self) -> Result<&AttestationDomain> {
        self.domain.as_ref().ok_or(Error::NotInit)
    }

    /// Create an offer advertising the assertions this generator produces.
    ///
    /// The offer carries the configured authority tag and domain and
    /// nothing else; in particular, no secret material.
    pub fn create_assertion_offer(&self) -> Result<AssertionOffer> {
        let domain = self.domain()?;

        Ok(AssertionOffer {
            description: AssertionDescription {
                authority_type: domain.authority_type().into(),
            },
            additional_info: OfferPayload {
                attestation_domain: domain.attestation_domain().into(),
            }
            .encode_to_vec(),
        })
    }

    /// Whether this generator can fulfill `request`.
    ///
    /// Mere incompatibility is not an error: a well-formed request for a
    /// foreign authority or domain yields `Ok(false)`.
    pub fn can_generate(&self, request: &AssertionRequest) -> Result<bool> {
        let domain = self.domain()?;

        let payload = RequestPayload::decode(&request.additional_info[..])
            .map_err(|_| Error::MalformedRequest)?;
        let remote = AttestationDomain::new(
            &request.description.authority_type,
            &payload.attestation_domain,
        )
        .map_err(|_| Error::MalformedRequest)?;

        Ok(domain.matches(&remote))
    }

    /// Generate an assertion over `user_data`, verifiable by the context
    /// which produced `request`.
    pub fn generate(&self, user_data: &[u8], request: &AssertionRequest) -> Result<Assertion> {
        if !self.can_generate(request)? {
            return Err(Error::IncompatibleRequest);
        }

        let payload = RequestPayload::decode(&request.additional_info[..])
            .map_err(|_| Error::MalformedRequest)?;
        let target_info =
            TargetInfo::from_x64(&payload.target_info).map_err(|_| Error::MalformedRequest)?;

        let report = self
            .enclave
            .create_report(&target_info, &report_data_for(user_data))?;

        Ok(Assertion {
            description: AssertionDescription {
                authority_type: self.domain()?.authority_type().into(),
            },
            assertion: report.to_x64_vec(),
        })
    }
}
