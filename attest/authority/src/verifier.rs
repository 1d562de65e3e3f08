// Copyright (c) 2024 The LocalAttest Project

//! The verifier half of the local assertion authority.

use crate::{
    domain::AttestationDomain,
    error::{Error, Result},
    identity::EnclaveIdentity,
    messages::{
        Assertion, AssertionDescription, AssertionOffer, AssertionRequest,
        LocalAssertionAuthorityConfig, OfferPayload, RequestPayload,
    },
    shared::report_data_for,
    LOCAL_ATTESTATION_AUTHORITY,
};
use la_attest_core::{Report, ReportingEnclave};
use la_util_encodings::{FromX64, ToX64};
use prost::Message;
use subtle::{Choice, ConstantTimeEq};

/// Requests and verifies assertions naming the context it runs in as the
/// target.
///
/// Like the generator, a verifier holds nothing but its injected context
/// and its configuration.
pub struct LocalAssertionVerifier<E: ReportingEnclave> {
    enclave: E,
    domain: Option<AttestationDomain>,
}

impl<E: ReportingEnclave> LocalAssertionVerifier<E> {
    /// Create an uninitialized verifier for the given context.
    pub fn new(enclave: E) -> Self {
        Self {
            enclave,
            domain: None,
        }
    }

    /// Configure this verifier from an encoded
    /// [`LocalAssertionAuthorityConfig`].
    ///
    /// Same contract as the generator's: exactly once, a second call fails
    /// with [`Error::AlreadyInit`], and a failed call configures nothing.
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

    /// Create a request for an assertion only this context can verify.
    ///
    /// The request embeds this context's own target descriptor; that is
    /// what scopes the generator's report key to this verifier.
    pub fn create_assertion_request(&self) -> Result<AssertionRequest> {
        let domain = self.domain()?;

        Ok(AssertionRequest {
            description: AssertionDescription {
                authority_type: domain.authority_type().into(),
            },
            additional_info: RequestPayload {
                attestation_domain: domain.attestation_domain().into(),
                target_info: self.enclave.target_info().to_x64_vec(),
            }
            .encode_to_vec(),
        })
    }

    /// Whether this verifier can consume assertions described by `offer`.
    ///
    /// Symmetric to the generator's `can_generate`: same compatibility
    /// rule, same error semantics.
    pub fn can_verify(&self, offer: &AssertionOffer) -> Result<bool> {
        let domain = self.domain()?;

        let payload = OfferPayload::decode(&offer.additional_info[..])
            .map_err(|_| Error::MalformedRequest)?;
        let remote = AttestationDomain::new(
            &offer.description.authority_type,
            &payload.attestation_domain,
        )
        .map_err(|_| Error::MalformedRequest)?;

        Ok(domain.matches(&remote))
    }

    /// Verify `assertion` against `user_data` and extract the generator's
    /// identity.
    ///
    /// Succeeds only for an assertion generated for this exact context and
    /// this exact user data; all authentication failures are collapsed
    /// into [`Error::AuthenticationFailed`]. No identity is produced on
    /// any failure.
    pub fn verify(&self, user_data: &[u8], assertion: &Assertion) -> Result<EnclaveIdentity> {
        let domain = self.domain()?;

        if assertion.description.authority_type != domain.authority_type() {
            return Err(Error::IncompatibleRequest);
        }

        // Decode failures are not distinguished from code mismatches: an
        // assertion which does not decode is a failed proof.
        let report =
            Report::from_x64(&assertion.assertion).map_err(|_| Error::AuthenticationFailed)?;

        // The key id here is attacker-supplied; a key the platform refuses
        // to derive is also a failed proof.
        let key = self
            .enclave
            .report_key(&report.key_id)
            .map_err(|_| Error::AuthenticationFailed)?;

        let mac_ok = Choice::from(u8::from(report.verify(&key).is_ok()));
        let data_ok = report_data_for(user_data).ct_eq(&report.body.report_data);
        if !bool::from(mac_ok & data_ok) {
            return Err(Error::AuthenticationFailed);
        }

        EnclaveIdentity::try_from(&report.body).map_err(Error::MalformedIdentity)
    }
}
