//! Algebraic capability layer of the ZSL proving engine.
//!
//! The proof system only talks to scalars, groups and pairings through the
//! traits in [`traits`]; [`bn254`] is the curve the engine ships with.
#![forbid(unsafe_code)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::op_ref)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

#[macro_use]
mod macros;

/// Module for the BN254 curve.
pub mod bn254;

/// Module for error handling.
pub mod errors;

/// Module for windowed fixed-base exponentiation.
pub mod fixed_base;

/// Module for the prelude.
pub mod prelude;

/// Module for test rngs.
pub mod rand_helper;

/// Module for serialization of scalars and group elements.
pub mod serialization;

/// Module for traits.
pub mod traits;

/// Module for utils.
pub mod utils;

pub use ark_std::{
    borrow, cfg_into_iter, cfg_iter, cfg_iter_mut, fmt, iter, marker, ops, rand, One,
    UniformRand, Zero,
};
