// Copyright (c) 2024 The LocalAttest Project

//! A process-wide "current enclave" registry.
//!
//! Some test harnesses are written as a single narrative that hops between
//! contexts ("enter the verifier, build a request, enter the generator,
//! ..."). This module supports that style. Protocol components never read
//! it; they take their context as an explicit handle.

use crate::enclave::SimEnclave;
use std::sync::{Mutex, PoisonError};

static ACTIVE: Mutex<Option<SimEnclave>> = Mutex::new(None);

/// Make `enclave` the process's current context, returning the context it
/// displaced, if any.
pub fn enter(enclave: SimEnclave) -> Option<SimEnclave> {
    ACTIVE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(enclave)
}

/// Clear the current context, returning it if one was set.
pub fn exit() -> Option<SimEnclave> {
    ACTIVE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// Run `f` against the current context, or return `None` if no context is
/// active.
pub fn with_active<T>(f: impl FnOnce(&SimEnclave) -> T) -> Option<T> {
    ACTIVE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(f)
}
