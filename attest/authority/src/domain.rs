// Copyright (c) 2024 The LocalAttest Project

//! Attestation domains and the compatibility rule between them.

use alloc::string::String;
use la_util_encodings::Error as EncodingError;

/// The length of an attestation domain value, in bytes
pub const ATTESTATION_DOMAIN_SIZE: usize = 16;

/// The scope within which a generator/verifier pair interoperates.
///
/// Compatibility is a property of the configured authority type and domain
/// value alone; it is deliberately independent of either side's code
/// identity, so two contexts with different measurements on the same
/// platform still interoperate.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AttestationDomain {
    authority_type: String,
    attestation_domain: [u8; ATTESTATION_DOMAIN_SIZE],
}

impl AttestationDomain {
    /// Create a domain from an authority-type tag and a domain value.
    pub fn new(authority_type: &str, attestation_domain: &[u8]) -> Result<Self, EncodingError> {
        if attestation_domain.len() != ATTESTATION_DOMAIN_SIZE {
            return Err(EncodingError::InvalidInputLength);
        }

        let mut domain = [0u8; ATTESTATION_DOMAIN_SIZE];
        domain.copy_from_slice(attestation_domain);
        Ok(Self {
            authority_type: authority_type.into(),
            attestation_domain: domain,
        })
    }

    /// The authority-type tag of this domain
    pub fn authority_type(&self) -> &str {
        &self.authority_type
    }

    /// The domain value
    pub fn attestation_domain(&self) -> &[u8] {
        &self.attestation_domain[..]
    }

    /// Whether authorities configured with `self` and `other` can
    /// interoperate.
    ///
    /// The relation is symmetric: `a.matches(&b) == b.matches(&a)`.
    pub fn matches(&self, other: &AttestationDomain) -> bool {
        self.authority_type == other.authority_type
            && self.attestation_domain == other.attestation_domain
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_matches_is_symmetric() {
        let a = AttestationDomain::new("sgx-local", &[1u8; ATTESTATION_DOMAIN_SIZE]).unwrap();
        let b = AttestationDomain::new("sgx-local", &[1u8; ATTESTATION_DOMAIN_SIZE]).unwrap();
        let c = AttestationDomain::new("sgx-local", &[2u8; ATTESTATION_DOMAIN_SIZE]).unwrap();
        let d = AttestationDomain::new("other", &[1u8; ATTESTATION_DOMAIN_SIZE]).unwrap();

        assert!(a.matches(&b) && b.matches(&a));
        assert!(!a.matches(&c) && !c.matches(&a));
        assert!(!a.matches(&d) && !d.matches(&a));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            AttestationDomain::new("sgx-local", &[1u8; 8]),
            Err(EncodingError::InvalidInputLength)
        );
    }
}
