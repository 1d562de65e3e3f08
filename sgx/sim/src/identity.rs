// Copyright (c) 2024 The LocalAttest Project

//! The attestable identity of one simulated enclave context.

use la_attest_core::{
    AttributeFlags, Attributes, ConfigId, ConfigSecurityVersion, CpuSecurityVersion, MiscSelect,
    MrEnclave, MrSigner, ProductId, SecurityVersion, TargetInfo,
};
use la_util_from_random::FromRandom;
use rand_core::{CryptoRng, RngCore};

/// The x87 and SSE state bits, which every launched context carries.
const XFRM_LEGACY: u64 = 0x0000_0000_0000_0003;

/// The measurement descriptor of a simulated enclave context.
///
/// This is the value an assertion ultimately proves: the verifier learns
/// the generator's `SimIdentity` fields, authenticated by the platform.
/// Instances are assigned explicitly or sampled with [`FromRandom`]; once a
/// context is spawned its identity never changes.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SimIdentity {
    /// The measurement of the context's code
    pub mr_enclave: MrEnclave,
    /// The measurement of the key the context was signed with
    pub mr_signer: MrSigner,
    /// The platform security version at context launch
    pub cpu_svn: CpuSecurityVersion,
    /// The attributes the context was launched with
    pub attributes: Attributes,
    /// The extended feature request mask of the context
    pub misc_select: MiscSelect,
    /// The configuration the context was launched with
    pub config_id: ConfigId,
    /// The security version of the context's configuration
    pub config_svn: ConfigSecurityVersion,
    /// The signer-assigned product ID
    pub isv_prod_id: ProductId,
    /// The signer-assigned security version
    pub isv_svn: SecurityVersion,
}

impl FromRandom for SimIdentity {
    fn from_random<R: CryptoRng + RngCore>(csprng: &mut R) -> Self {
        // Launched contexts always carry INIT and MODE_64BIT; the remaining
        // flag bits are sampled from the recognized set so the identity can
        // be extracted from a verified report.
        let flags = AttributeFlags::from_bits_truncate(csprng.next_u64())
            | AttributeFlags::INIT
            | AttributeFlags::MODE_64BIT;

        Self {
            mr_enclave: MrEnclave::from_random(csprng),
            mr_signer: MrSigner::from_random(csprng),
            cpu_svn: CpuSecurityVersion::from_random(csprng),
            attributes: Attributes::new(flags.bits(), XFRM_LEGACY),
            misc_select: csprng.next_u32(),
            config_id: ConfigId::from_random(csprng),
            config_svn: csprng.next_u32() as u16,
            isv_prod_id: csprng.next_u32() as u16,
            isv_svn: csprng.next_u32() as u16,
        }
    }
}

impl From<&SimIdentity> for TargetInfo {
    fn from(identity: &SimIdentity) -> Self {
        TargetInfo {
            mr_enclave: identity.mr_enclave,
            attributes: identity.attributes,
            config_svn: identity.config_svn,
            misc_select: identity.misc_select,
            config_id: identity.config_id,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::SeedableRng;
    use rand_hc::Hc128Rng;

    #[test]
    fn test_from_random_is_reproducible() {
        let identity = SimIdentity::from_random(&mut Hc128Rng::seed_from_u64(33));
        let identity2 = SimIdentity::from_random(&mut Hc128Rng::seed_from_u64(33));
        assert_eq!(identity, identity2);
    }

    #[test]
    fn test_from_random_identities_differ() {
        let mut csprng = Hc128Rng::seed_from_u64(33);
        let identity = SimIdentity::from_random(&mut csprng);
        let identity2 = SimIdentity::from_random(&mut csprng);
        assert_ne!(identity, identity2);
    }

    #[test]
    fn test_random_identity_flags_are_recognized() {
        let identity = SimIdentity::from_random(&mut Hc128Rng::seed_from_u64(34));
        assert!(AttributeFlags::from_bits(identity.attributes.flags()).is_some());
    }
}
