// Copyright (c) 2024 The LocalAttest Project

//! A deterministic, in-process stand-in for the enclave platform.
//!
//! Production deployments get their [`ReportingEnclave`] implementation
//! from the enclave runtime; everything in this crate exists so that
//! protocol code and tests can run without the hardware. A
//! [`SimPlatform`] owns the platform secrets, and each [`SimEnclave`]
//! spawned from it behaves like one isolated context on that platform:
//! contexts on the same platform can attest to each other, contexts on
//! different platforms cannot.
//!
//! [`ReportingEnclave`]: la_attest_core::ReportingEnclave

#![deny(missing_docs)]

pub mod active;

mod enclave;
mod identity;
mod keys;
mod platform;

pub use crate::{
    enclave::SimEnclave,
    identity::SimIdentity,
    platform::{SimPlatform, SEALING_ROOT_SIZE},
};
