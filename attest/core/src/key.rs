// Copyright (c) 2024 The LocalAttest Project

//! This module contains the report key and the authentication code it
//! computes.

use crate::types::mac::{Mac, MAC_SIZE};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use hmac::{Hmac, Mac as HmacMac};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

/// The length of a report key, in bytes
pub const REPORT_KEY_SIZE: usize = 16;

/// Domain separation prefix for report authentication codes
const REPORT_MAC_DOMAIN_TAG: &[u8] = b"la-report-mac";

/// A symmetric report-authentication key.
///
/// The platform derives one of these from its sealing root, scoped by a
/// target descriptor and a key id. The key never appears in any message;
/// it exists only long enough to compute or check an authentication code,
/// and is wiped on drop.
#[derive(Clone)]
pub struct ReportKey([u8; REPORT_KEY_SIZE]);

impl ReportKey {
    /// Compute the authentication code over `data` under this key.
    pub fn mac(&self, data: &[u8]) -> Mac {
        let mut mac = HmacSha256::new_from_slice(&self.0[..])
            .expect("hmac can take a key of any size");
        mac.update(REPORT_MAC_DOMAIN_TAG);
        mac.update(data);

        let mut retval = [0u8; MAC_SIZE];
        retval.copy_from_slice(&mac.finalize().into_bytes()[..MAC_SIZE]);
        retval.into()
    }
}

impl From<[u8; REPORT_KEY_SIZE]> for ReportKey {
    fn from(src: [u8; REPORT_KEY_SIZE]) -> Self {
        Self(src)
    }
}

impl ConstantTimeEq for ReportKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl Eq for ReportKey {}

impl PartialEq for ReportKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Debug for ReportKey {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "ReportKey(<secret>)")
    }
}

impl Drop for ReportKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
