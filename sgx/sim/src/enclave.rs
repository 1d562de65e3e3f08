// Copyright (c) 2024 The LocalAttest Project

//! One simulated enclave context.

use crate::{identity::SimIdentity, keys::derive_report_key, platform::SEALING_ROOT_SIZE};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use la_attest_core::{
    AttributeFlags, HardwareError, KeyId, Report, ReportBody, ReportData, ReportKey,
    ReportingEnclave, TargetInfo,
};
use la_util_encodings::ToX64;

/// An isolated execution context on a [`SimPlatform`].
///
/// Holds its own identity, plus private copies of the platform secrets the
/// hardware would hold on the context's behalf. The only way code outside
/// this crate touches those secrets is through the [`ReportingEnclave`]
/// operations, which enforce the same access rules the hardware would.
///
/// [`SimPlatform`]: crate::SimPlatform
#[derive(Clone)]
pub struct SimEnclave {
    identity: SimIdentity,
    sealing_root: [u8; SEALING_ROOT_SIZE],
    report_key_id: KeyId,
}

impl SimEnclave {
    pub(crate) fn new(
        identity: SimIdentity,
        sealing_root: [u8; SEALING_ROOT_SIZE],
        report_key_id: KeyId,
    ) -> Self {
        Self {
            identity,
            sealing_root,
            report_key_id,
        }
    }

    /// The identity this context was spawned with.
    pub fn identity(&self) -> &SimIdentity {
        &self.identity
    }

    fn report_body(&self, report_data: &ReportData) -> ReportBody {
        ReportBody {
            cpu_svn: self.identity.cpu_svn,
            misc_select: self.identity.misc_select,
            attributes: self.identity.attributes,
            mr_enclave: self.identity.mr_enclave,
            mr_signer: self.identity.mr_signer,
            config_id: self.identity.config_id,
            isv_prod_id: self.identity.isv_prod_id,
            isv_svn: self.identity.isv_svn,
            config_svn: self.identity.config_svn,
            report_data: *report_data,
        }
    }
}

impl ReportingEnclave for SimEnclave {
    fn target_info(&self) -> TargetInfo {
        TargetInfo::from(&self.identity)
    }

    fn create_report(
        &self,
        target_info: &TargetInfo,
        report_data: &ReportData,
    ) -> Result<Report, HardwareError> {
        if AttributeFlags::from_bits(target_info.attributes.flags()).is_none() {
            return Err(HardwareError::InvalidTargetInfo);
        }

        let key = derive_report_key(&self.sealing_root, target_info, &self.report_key_id);
        let body = self.report_body(report_data);
        let mac = key.mac(&body.to_x64_vec());

        Ok(Report {
            body,
            key_id: self.report_key_id,
            mac,
        })
    }

    fn report_key(&self, key_id: &KeyId) -> Result<ReportKey, HardwareError> {
        // The platform never issues the zero wear-out value; a report
        // naming it was not produced by any context's reporting primitive.
        if *key_id == KeyId::default() {
            return Err(HardwareError::InvalidKeyId);
        }

        Ok(derive_report_key(
            &self.sealing_root,
            &self.target_info(),
            key_id,
        ))
    }
}

impl Debug for SimEnclave {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(
            formatter,
            "SimEnclave {{ identity: {:?}, sealing_root: <secret>, report_key_id: {:?} }}",
            self.identity, self.report_key_id
        )
    }
}
