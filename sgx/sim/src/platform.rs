// Copyright (c) 2024 The LocalAttest Project

//! The simulated platform: the root of trust shared by every context
//! spawned on it.

use crate::{enclave::SimEnclave, identity::SimIdentity};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use la_attest_core::KeyId;
use la_util_from_random::FromRandom;
use rand_core::{CryptoRng, RngCore};

/// The length of the platform sealing root, in bytes
pub const SEALING_ROOT_SIZE: usize = 32;

/// One simulated attestation platform.
///
/// The sealing root is the secret every report key on the platform is
/// derived from; it never leaves this structure. Two contexts interoperate
/// exactly when they were spawned from the same platform value.
#[derive(Clone)]
pub struct SimPlatform {
    sealing_root: [u8; SEALING_ROOT_SIZE],
    report_key_id: KeyId,
}

impl SimPlatform {
    /// Spawn a context with the given identity on this platform.
    pub fn spawn(&self, identity: SimIdentity) -> SimEnclave {
        SimEnclave::new(identity, self.sealing_root, self.report_key_id)
    }

    /// Spawn a context with a randomized identity on this platform.
    pub fn spawn_random<R: CryptoRng + RngCore>(&self, csprng: &mut R) -> SimEnclave {
        self.spawn(SimIdentity::from_random(csprng))
    }
}

impl FromRandom for SimPlatform {
    fn from_random<R: CryptoRng + RngCore>(csprng: &mut R) -> Self {
        Self {
            sealing_root: FromRandom::from_random(csprng),
            report_key_id: KeyId::from_random(csprng),
        }
    }
}

impl Debug for SimPlatform {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(
            formatter,
            "SimPlatform {{ sealing_root: <secret>, report_key_id: {:?} }}",
            self.report_key_id
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::SeedableRng;
    use rand_hc::Hc128Rng;

    #[test]
    fn test_debug_does_not_print_sealing_root() {
        let platform = SimPlatform::from_random(&mut Hc128Rng::seed_from_u64(1));
        let rendered = format!("{platform:?}");
        assert!(rendered.contains("<secret>"));
    }
}
