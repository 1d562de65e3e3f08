// Copyright (c) 2024 The LocalAttest Project

//! Traits and support for fixed-layout byte encodings

#![cfg_attr(all(not(test), not(doctest)), no_std)]

extern crate alloc;

mod error;
mod x64;

pub use crate::{
    error::Error,
    x64::{FromX64, ToX64, X64Layout, X64_U16_SIZE, X64_U32_SIZE, X64_U64_SIZE},
};
