// Copyright (c) 2024 The LocalAttest Project

//! x86_64-style C structure layout serialization
//!
//! The attestation data structures in this workspace use the same
//! fixed-offset byte layouts the hardware would, so that authentication
//! codes are computed over a stable representation.

use crate::Error;
use alloc::{vec, vec::Vec};

/// The size of a u16 in the layout
pub const X64_U16_SIZE: usize = 2;

/// The size of a u32 in the layout
pub const X64_U32_SIZE: usize = 4;

/// The size of a u64 in the layout
pub const X64_U64_SIZE: usize = 8;

/// A trait containing the basic supports necessary to support
/// serialization/deserialization as fixed-layout bytes.
pub trait X64Layout {
    /// The size required for the byte representation of the structure
    const X64_SIZE: usize;

    /// Retrieve the number of bytes required to represent this value
    #[inline(always)]
    fn x64_size(&self) -> usize {
        Self::X64_SIZE
    }
}

/// A trait which creates a new object from its fixed-layout bytes.
pub trait FromX64: X64Layout + Sized {
    /// Construct a new object from the given slice
    fn from_x64(src: &[u8]) -> Result<Self, Error>;
}

/// A trait which writes the contents of a structure as fixed-layout bytes.
pub trait ToX64: X64Layout + Sized {
    /// Write the byte representation of this structure into a slice
    fn to_x64(&self, dest: &mut [u8]) -> Result<usize, Error>;

    /// Write the byte representation of this structure into a newly
    /// allocated vector.
    fn to_x64_vec(&self) -> Vec<u8> {
        let mut retval = vec![0u8; self.x64_size()];
        let len = self
            .to_x64(retval.as_mut_slice())
            .expect("x64_size() returned an incorrect value");
        retval.truncate(len);
        retval
    }
}
