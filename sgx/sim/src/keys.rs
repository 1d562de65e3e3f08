// Copyright (c) 2024 The LocalAttest Project

//! The platform's report-key derivation.

use crate::platform::SEALING_ROOT_SIZE;
use hmac::{Hmac, Mac};
use la_attest_core::{KeyId, ReportKey, TargetInfo, REPORT_KEY_SIZE};
use la_util_encodings::ToX64;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Domain separation prefix for report-key derivation
const REPORT_KEY_DOMAIN_TAG: &[u8] = b"la-report-key";

/// Derive the report key for `target_info` under `key_id`.
///
/// The derivation is a PRF of the platform sealing root, the target's
/// descriptor bytes, and the key id: the same inputs always produce the
/// same key, and any change to the target descriptor produces an unrelated
/// key. The access rules live in `SimEnclave`, which only ever calls this
/// with either a caller-supplied target (report creation) or the calling
/// context's own descriptor (key retrieval).
pub(crate) fn derive_report_key(
    sealing_root: &[u8; SEALING_ROOT_SIZE],
    target_info: &TargetInfo,
    key_id: &KeyId,
) -> ReportKey {
    let mut mac = HmacSha256::new_from_slice(&sealing_root[..])
        .expect("hmac can take a key of any size");
    mac.update(REPORT_KEY_DOMAIN_TAG);
    mac.update(&target_info.to_x64_vec());
    mac.update(key_id.as_ref());

    let mut retval = [0u8; REPORT_KEY_SIZE];
    retval.copy_from_slice(&mac.finalize().into_bytes()[..REPORT_KEY_SIZE]);
    retval.into()
}
