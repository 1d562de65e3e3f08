// Copyright (c) 2024 The LocalAttest Project

//! Errors surfaced by the reporting primitives and the report check.

use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// An enumeration of errors returned by the platform's reporting
/// primitives.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum HardwareError {
    /// The target info contains attribute flags unknown to this platform
    InvalidTargetInfo,
    /// The key id was rejected by the key-derivation engine
    InvalidKeyId,
}

/// An enumeration of failures while checking a report's authentication
/// code.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum ReportVerifyError {
    /// The authentication code does not match the report contents
    MacMismatch,
}
