// Copyright (c) 2024 The LocalAttest Project

//! This module contains the key-derivation wear-out value carried in each
//! report.

use crate::impl_newtype_for_bytearray;

/// The length of a key ID, in bytes
pub const KEY_ID_SIZE: usize = 32;

/// A key ID
///
/// Key IDs ensure the report keys of a platform vary across boots. The
/// platform picks one at random when it starts, stamps it into every report
/// created on it, and mixes it into report-key derivation.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct KeyId([u8; KEY_ID_SIZE]);

impl_newtype_for_bytearray! {
    KeyId, KEY_ID_SIZE;
}
