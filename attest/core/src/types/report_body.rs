// Copyright (c) 2024 The LocalAttest Project

//! This module contains the report body, the authenticated payload of a
//! report.

use crate::types::{
    attributes::{Attributes, ATTRIBUTES_SIZE},
    config_id::{ConfigId, CONFIG_ID_SIZE},
    cpu_svn::{CpuSecurityVersion, CPU_SVN_SIZE},
    measurement::{MrEnclave, MrSigner, MEASUREMENT_SIZE},
    report_data::{ReportData, REPORT_DATA_SIZE},
    ConfigSecurityVersion, MiscSelect, ProductId, SecurityVersion,
};
use la_util_encodings::{
    Error as EncodingError, FromX64, ToX64, X64Layout, X64_U16_SIZE, X64_U32_SIZE,
};
use serde::{Deserialize, Serialize};

// byte positions for each field in the fixed layout
const RB_CPUSVN_START: usize = 0;
const RB_CPUSVN_END: usize = RB_CPUSVN_START + CPU_SVN_SIZE;
const RB_SELECT_START: usize = RB_CPUSVN_END;
const RB_SELECT_END: usize = RB_SELECT_START + X64_U32_SIZE;
const RB_ATTRIBUTES_START: usize = RB_SELECT_END;
const RB_ATTRIBUTES_END: usize = RB_ATTRIBUTES_START + ATTRIBUTES_SIZE;
const RB_MRENCLAVE_START: usize = RB_ATTRIBUTES_END;
const RB_MRENCLAVE_END: usize = RB_MRENCLAVE_START + MEASUREMENT_SIZE;
const RB_MRSIGNER_START: usize = RB_MRENCLAVE_END;
const RB_MRSIGNER_END: usize = RB_MRSIGNER_START + MEASUREMENT_SIZE;
const RB_CONFIGID_START: usize = RB_MRSIGNER_END;
const RB_CONFIGID_END: usize = RB_CONFIGID_START + CONFIG_ID_SIZE;
const RB_ISVPRODID_START: usize = RB_CONFIGID_END;
const RB_ISVPRODID_END: usize = RB_ISVPRODID_START + X64_U16_SIZE;
const RB_ISVSVN_START: usize = RB_ISVPRODID_END;
const RB_ISVSVN_END: usize = RB_ISVSVN_START + X64_U16_SIZE;
const RB_CONFIGSVN_START: usize = RB_ISVSVN_END;
const RB_CONFIGSVN_END: usize = RB_CONFIGSVN_START + X64_U16_SIZE;
const RB_REPORTDATA_START: usize = RB_CONFIGSVN_END;
const RB_REPORTDATA_END: usize = RB_REPORTDATA_START + REPORT_DATA_SIZE;

/// The length of a report body, in bytes
pub const REPORT_BODY_SIZE: usize = RB_REPORTDATA_END;

/// The identity fields and caller-chosen data covered by a report's
/// authentication code.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ReportBody {
    /// The platform security version at context launch
    pub cpu_svn: CpuSecurityVersion,
    /// The extended feature request mask of the reporting context
    pub misc_select: MiscSelect,
    /// The attributes the reporting context was launched with
    pub attributes: Attributes,
    /// The measurement of the reporting context's code
    pub mr_enclave: MrEnclave,
    /// The measurement of the key that signed the reporting context
    pub mr_signer: MrSigner,
    /// The configuration the reporting context was launched with
    pub config_id: ConfigId,
    /// The signer-assigned product ID of the reporting context
    pub isv_prod_id: ProductId,
    /// The signer-assigned security version of the reporting context
    pub isv_svn: SecurityVersion,
    /// The security version of the reporting context's configuration
    pub config_svn: ConfigSecurityVersion,
    /// The caller-chosen data bound into the report
    pub report_data: ReportData,
}

impl X64Layout for ReportBody {
    const X64_SIZE: usize = REPORT_BODY_SIZE;
}

/// Serialization into the fixed layout, which is the byte string the
/// report's authentication code is computed over.
impl ToX64 for ReportBody {
    fn to_x64(&self, dest: &mut [u8]) -> Result<usize, EncodingError> {
        if dest.len() < REPORT_BODY_SIZE {
            return Err(EncodingError::InvalidOutputLength);
        }

        dest[RB_CPUSVN_START..RB_CPUSVN_END].copy_from_slice(self.cpu_svn.as_ref());
        dest[RB_SELECT_START..RB_SELECT_END].copy_from_slice(&self.misc_select.to_le_bytes());
        self.attributes
            .to_x64(&mut dest[RB_ATTRIBUTES_START..RB_ATTRIBUTES_END])?;
        dest[RB_MRENCLAVE_START..RB_MRENCLAVE_END].copy_from_slice(self.mr_enclave.as_ref());
        dest[RB_MRSIGNER_START..RB_MRSIGNER_END].copy_from_slice(self.mr_signer.as_ref());
        dest[RB_CONFIGID_START..RB_CONFIGID_END].copy_from_slice(self.config_id.as_ref());
        dest[RB_ISVPRODID_START..RB_ISVPRODID_END]
            .copy_from_slice(&self.isv_prod_id.to_le_bytes());
        dest[RB_ISVSVN_START..RB_ISVSVN_END].copy_from_slice(&self.isv_svn.to_le_bytes());
        dest[RB_CONFIGSVN_START..RB_CONFIGSVN_END].copy_from_slice(&self.config_svn.to_le_bytes());
        dest[RB_REPORTDATA_START..RB_REPORTDATA_END].copy_from_slice(self.report_data.as_ref());

        Ok(REPORT_BODY_SIZE)
    }
}

/// Deserialization from the fixed layout
impl FromX64 for ReportBody {
    fn from_x64(src: &[u8]) -> Result<Self, EncodingError> {
        if src.len() < REPORT_BODY_SIZE {
            return Err(EncodingError::InvalidInputLength);
        }

        Ok(Self {
            cpu_svn: CpuSecurityVersion::try_from(&src[RB_CPUSVN_START..RB_CPUSVN_END])?,
            misc_select: u32::from_le_bytes((&src[RB_SELECT_START..RB_SELECT_END]).try_into()?),
            attributes: Attributes::from_x64(&src[RB_ATTRIBUTES_START..RB_ATTRIBUTES_END])?,
            mr_enclave: MrEnclave::try_from(&src[RB_MRENCLAVE_START..RB_MRENCLAVE_END])?,
            mr_signer: MrSigner::try_from(&src[RB_MRSIGNER_START..RB_MRSIGNER_END])?,
            config_id: ConfigId::try_from(&src[RB_CONFIGID_START..RB_CONFIGID_END])?,
            isv_prod_id: u16::from_le_bytes(
                (&src[RB_ISVPRODID_START..RB_ISVPRODID_END]).try_into()?,
            ),
            isv_svn: u16::from_le_bytes((&src[RB_ISVSVN_START..RB_ISVSVN_END]).try_into()?),
            config_svn: u16::from_le_bytes((&src[RB_CONFIGSVN_START..RB_CONFIGSVN_END]).try_into()?),
            report_data: ReportData::try_from(&src[RB_REPORTDATA_START..RB_REPORTDATA_END])?,
        })
    }
}
