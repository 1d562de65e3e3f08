// Copyright (c) 2024 The LocalAttest Project

//! This module contains the post-build configuration ID type.

use crate::impl_newtype_for_bytearray;

/// The length of a configuration ID, in bytes
pub const CONFIG_ID_SIZE: usize = 64;

/// A measurement of the configuration an enclave context was launched with,
/// distinct from the measurement of its code.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct ConfigId([u8; CONFIG_ID_SIZE]);

impl_newtype_for_bytearray! {
    ConfigId, CONFIG_ID_SIZE;
}
