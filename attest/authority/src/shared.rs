// Copyright (c) 2024 The LocalAttest Project

//! Helpers shared between the generator and verifier halves.

use la_attest_core::ReportData;
use sha2::{Digest, Sha256};

/// Domain separation prefix for the user-data hash
const USER_DATA_DOMAIN_TAG: &[u8] = b"la-assertion-user-data";

/// Fold caller-supplied user data into the report data both sides bind.
///
/// User data is unbounded, so it is hashed into the leading bytes of the
/// report data; the remainder stays zero. Both sides must compute this the
/// same way, which is the whole binding.
pub(crate) fn report_data_for(user_data: &[u8]) -> ReportData {
    let mut hasher = Sha256::new();
    hasher.update(USER_DATA_DOMAIN_TAG);
    hasher.update(user_data);
    ReportData::new_with_prefix(&hasher.finalize())
        .expect("a sha-256 digest fits in report data")
}
