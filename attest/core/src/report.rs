// Copyright (c) 2024 The LocalAttest Project

//! This module contains the report structure, the platform-authenticated
//! evidence a generator hands to a verifier.

use crate::{
    error::ReportVerifyError,
    key::ReportKey,
    types::{
        key_id::{KeyId, KEY_ID_SIZE},
        mac::{Mac, MAC_SIZE},
        report_body::{ReportBody, REPORT_BODY_SIZE},
    },
};
use la_util_encodings::{Error as EncodingError, FromX64, ToX64, X64Layout};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

// byte positions for each field in the fixed layout
const REPORT_BODY_START: usize = 0;
const REPORT_BODY_END: usize = REPORT_BODY_START + REPORT_BODY_SIZE;
const REPORT_KEYID_START: usize = REPORT_BODY_END;
const REPORT_KEYID_END: usize = REPORT_KEYID_START + KEY_ID_SIZE;
const REPORT_MAC_START: usize = REPORT_KEYID_END;
const REPORT_MAC_END: usize = REPORT_MAC_START + MAC_SIZE;

/// The length of a report, in bytes
pub const REPORT_SIZE: usize = REPORT_MAC_END;

/// A report: an identity payload authenticated by the platform under a key
/// only the named target context can re-derive.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Report {
    /// The authenticated identity payload
    pub body: ReportBody,
    /// The wear-out value the authentication key was derived with
    pub key_id: KeyId,
    /// The authentication code over the body
    pub mac: Mac,
}

impl Report {
    /// Check this report's authentication code against the given key.
    ///
    /// The comparison is constant-time; a mismatch reveals nothing about
    /// which bytes differed.
    pub fn verify(&self, key: &ReportKey) -> Result<(), ReportVerifyError> {
        let expected = key.mac(&self.body.to_x64_vec());
        if bool::from(expected.ct_eq(&self.mac)) {
            Ok(())
        } else {
            Err(ReportVerifyError::MacMismatch)
        }
    }
}

impl X64Layout for Report {
    const X64_SIZE: usize = REPORT_SIZE;
}

/// Serialization into the fixed layout
impl ToX64 for Report {
    fn to_x64(&self, dest: &mut [u8]) -> Result<usize, EncodingError> {
        if dest.len() < REPORT_SIZE {
            return Err(EncodingError::InvalidOutputLength);
        }

        self.body
            .to_x64(&mut dest[REPORT_BODY_START..REPORT_BODY_END])?;
        dest[REPORT_KEYID_START..REPORT_KEYID_END].copy_from_slice(self.key_id.as_ref());
        dest[REPORT_MAC_START..REPORT_MAC_END].copy_from_slice(self.mac.as_ref());

        Ok(REPORT_SIZE)
    }
}

/// Deserialization from the fixed layout
impl FromX64 for Report {
    fn from_x64(src: &[u8]) -> Result<Self, EncodingError> {
        if src.len() < REPORT_SIZE {
            return Err(EncodingError::InvalidInputLength);
        }

        Ok(Self {
            body: ReportBody::from_x64(&src[REPORT_BODY_START..REPORT_BODY_END])?,
            key_id: KeyId::try_from(&src[REPORT_KEYID_START..REPORT_KEYID_END])?,
            mac: Mac::try_from(&src[REPORT_MAC_START..REPORT_MAC_END])?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::key::REPORT_KEY_SIZE;
    use la_util_serial::{deserialize, serialize};

    fn report_sample() -> Report {
        let mut body = ReportBody::default();
        body.isv_prod_id = 2;
        body.isv_svn = 3;

        let key = ReportKey::from([1u8; REPORT_KEY_SIZE]);
        let mac = key.mac(&body.to_x64_vec());

        Report {
            body,
            key_id: [4u8; KEY_ID_SIZE].into(),
            mac,
        }
    }

    #[test]
    fn test_verify_round_trip() {
        let report = report_sample();
        let key = ReportKey::from([1u8; REPORT_KEY_SIZE]);
        assert_eq!(report.verify(&key), Ok(()));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let report = report_sample();
        let key = ReportKey::from([2u8; REPORT_KEY_SIZE]);
        assert_eq!(report.verify(&key), Err(ReportVerifyError::MacMismatch));
    }

    #[test]
    fn test_verify_rejects_tampered_body() {
        let mut report = report_sample();
        report.body.isv_svn += 1;

        let key = ReportKey::from([1u8; REPORT_KEY_SIZE]);
        assert_eq!(report.verify(&key), Err(ReportVerifyError::MacMismatch));
    }

    #[test]
    fn test_x64_round_trip() {
        let report = report_sample();
        let bytes = report.to_x64_vec();
        assert_eq!(bytes.len(), REPORT_SIZE);

        let report2 = Report::from_x64(&bytes).expect("Report decode failure");
        assert_eq!(report, report2);
    }

    #[test]
    fn test_serde() {
        let report = report_sample();
        let serialized = serialize(&report).expect("Report serialization failure");
        let report2: Report = deserialize(&serialized).expect("Report deserialization failure");
        assert_eq!(report, report2);
    }
}
