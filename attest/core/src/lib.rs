// Copyright (c) 2024 The LocalAttest Project

//! Local attestation data structures shared between assertion generators,
//! assertion verifiers, and the platform which underpins them both.

#![cfg_attr(all(not(test), not(doctest)), no_std)]

extern crate alloc;

mod error;
mod key;
mod macros;
mod report;
mod traits;
mod types;

pub use crate::{
    error::{HardwareError, ReportVerifyError},
    key::{ReportKey, REPORT_KEY_SIZE},
    report::{Report, REPORT_SIZE},
    traits::ReportingEnclave,
    types::{
        attributes::{AttributeFlags, Attributes, ATTRIBUTES_SIZE},
        config_id::{ConfigId, CONFIG_ID_SIZE},
        cpu_svn::{CpuSecurityVersion, CPU_SVN_SIZE},
        key_id::{KeyId, KEY_ID_SIZE},
        mac::{Mac, MAC_SIZE},
        measurement::{MrEnclave, MrSigner, MEASUREMENT_SIZE},
        report_body::{ReportBody, REPORT_BODY_SIZE},
        report_data::{ReportData, REPORT_DATA_SIZE},
        target_info::{TargetInfo, TARGET_INFO_SIZE},
        ConfigSecurityVersion, MiscSelect, ProductId, SecurityVersion,
    },
};
