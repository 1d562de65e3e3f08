// Copyright (c) 2024 The LocalAttest Project

//! A common API for types which can be initialized from the output of a
//! random number generator.
//!
//! Taking the generator as an argument keeps randomized construction
//! injectable: callers who need reproducibility hand in a seeded RNG.

#![no_std]

use rand_core::{CryptoRng, RngCore};

/// Construct an object from a cryptographically secure pseudo-random
/// number generator.
pub trait FromRandom: Sized {
    /// Securely initialize the object from the given RNG's output
    fn from_random<R: CryptoRng + RngCore>(csprng: &mut R) -> Self;
}

impl<const N: usize> FromRandom for [u8; N] {
    fn from_random<R: CryptoRng + RngCore>(csprng: &mut R) -> Self {
        let mut retval = [0u8; N];
        csprng.fill_bytes(&mut retval);
        retval
    }
}
