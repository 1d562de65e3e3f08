// Copyright (c) 2024 The LocalAttest Project

//! This module contains the report data structure.

use crate::impl_newtype_for_bytearray;
use subtle::{Choice, ConstantTimeEq};

/// The length of the user-chosen data in a report, in bytes
pub const REPORT_DATA_SIZE: usize = 64;

/// A data structure used for the caller-chosen payload in a report.
///
/// The contents are covered by the report's authentication code, which is
/// how user data gets cryptographically bound to an assertion.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct ReportData([u8; REPORT_DATA_SIZE]);

impl_newtype_for_bytearray! {
    ReportData, REPORT_DATA_SIZE;
}

impl ReportData {
    /// Create report data whose leading bytes are `src`, zero-padded.
    ///
    /// Returns `None` when `src` does not fit.
    pub fn new_with_prefix(src: &[u8]) -> Option<Self> {
        if src.len() > REPORT_DATA_SIZE {
            return None;
        }
        let mut retval = Self([0u8; REPORT_DATA_SIZE]);
        retval.0[..src.len()].copy_from_slice(src);
        Some(retval)
    }
}

impl ConstantTimeEq for ReportData {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}
