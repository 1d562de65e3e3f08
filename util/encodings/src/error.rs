// Copyright (c) 2024 The LocalAttest Project

//! Error types converting to/from encodings.

use core::array::TryFromSliceError;
use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// An enumeration of byte-encoding errors
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Error {
    /// The input length was too short or not right
    InvalidInputLength,
    /// The output buffer was too short for the data
    InvalidOutputLength,
    /// The input data contained invalid contents
    InvalidInput,
}

impl From<TryFromSliceError> for Error {
    fn from(_src: TryFromSliceError) -> Self {
        Error::InvalidInputLength
    }
}
