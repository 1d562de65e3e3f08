// Copyright (c) 2024 The LocalAttest Project

//! Assertion authority errors.

use core::result::Result as StdResult;
use displaydoc::Display;
use la_attest_core::HardwareError;
use la_util_encodings::Error as EncodingError;
use serde::{Deserialize, Serialize};

/// A generic result type for authority operations
pub type Result<T> = StdResult<T, Error>;

/// An enumeration of errors which can occur while generating or verifying
/// an assertion.
#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Error {
    /// The authority has not been initialized
    NotInit,

    /// The authority is already initialized
    AlreadyInit,

    /// The authority configuration was malformed or unsupported
    InvalidConfig,

    /// The offer or request could not be parsed
    MalformedRequest,

    /// The request or offer is not compatible with this authority
    IncompatibleRequest,

    /**
     * The assertion is not authentic
     *
     * This covers tampering, the wrong user data, an assertion produced
     * for a different target, and cross-domain reuse: none of those are
     * distinguished to the caller.
     */
    AuthenticationFailed,

    /**
     * The authenticated identity payload failed to parse: {0}
     *
     * The authentication code matched, so this indicates a defective
     * generator rather than an attack, but no identity is produced either
     * way.
     */
    MalformedIdentity(EncodingError),

    /// Error from the platform reporting primitive: {0}
    Hardware(HardwareError),
}

impl From<HardwareError> for Error {
    fn from(src: HardwareError) -> Self {
        Error::Hardware(src)
    }
}
