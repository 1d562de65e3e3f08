// Copyright (c) 2024 The LocalAttest Project

//! The capability interface the platform exposes to enclave code.

use crate::{
    error::HardwareError,
    key::ReportKey,
    report::Report,
    types::{key_id::KeyId, report_data::ReportData, target_info::TargetInfo},
};

/// The reporting primitives an enclave context can invoke on its platform.
///
/// The two key-bearing operations are deliberately asymmetric, and that
/// asymmetry is what makes local attestation work: `create_report` lets a
/// context authenticate a payload under *any* target's key without ever
/// holding that key, while `report_key` only ever derives the key scoped to
/// the calling context's own identity. A third context cannot obtain
/// another context's report key, even knowing its target descriptor.
///
/// Implementations are supplied by the enclave runtime; the simulator in
/// `la-sgx-sim` stands in for it in tests and non-production builds.
pub trait ReportingEnclave {
    /// Get the target descriptor which addresses this context.
    fn target_info(&self) -> TargetInfo;

    /// Create a report carrying this context's identity and `report_data`,
    /// authenticated under a key scoped to `target_info`.
    fn create_report(
        &self,
        target_info: &TargetInfo,
        report_data: &ReportData,
    ) -> Result<Report, HardwareError>;

    /// Derive this context's report key for the given key id.
    fn report_key(&self, key_id: &KeyId) -> Result<ReportKey, HardwareError>;
}
