// Copyright (c) 2024 The LocalAttest Project

//! This module contains the measurement types.
//!
//! Different types are used for MrEnclave and MrSigner values to prevent
//! misuse.

use crate::impl_newtype_for_bytearray;

/// The length of a code measurement, in bytes
pub const MEASUREMENT_SIZE: usize = 32;

/// An opaque type for MRENCLAVE values
///
/// A MRENCLAVE value is a chained cryptographic hash of the enclave binary
/// and of the page-initialization steps which created the context's memory.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct MrEnclave([u8; MEASUREMENT_SIZE]);

/// An opaque type for MRSIGNER values.
///
/// A MRSIGNER value is a cryptographic hash of the public key the enclave
/// binary was signed with.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct MrSigner([u8; MEASUREMENT_SIZE]);

impl_newtype_for_bytearray! {
    MrEnclave, MEASUREMENT_SIZE;
    MrSigner, MEASUREMENT_SIZE;
}
