//! R1CS proving engine: evaluation domains, the R1CS-to-QAP reduction and
//! the Groth16 key generator, prover and verifiers.
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::op_ref)]
#![allow(clippy::needless_range_loop)]

#[macro_use]
extern crate serde_derive;

/// Module for evaluation domains.
pub mod domain;

/// Module for error handling.
pub mod errors;

/// Module for the Groth16 proof system.
pub mod groth16;

/// Module for rank-1 constraint systems.
pub mod r1cs;
