//! The preprocessing zkSNARK of Groth (EUROCRYPT 2016) for R1CS.
//!
//! [`generator`] turns a constraint system into a [`Keypair`], [`prover`]
//! produces a [`Proof`] from a full assignment, and the verifiers check a
//! proof against a primary input. The weak variants accept a primary input
//! shorter than the key's and pad it with zeros, the strong variants require
//! the exact length.

mod helpers;
mod keys;
mod params;
mod prover;
mod setup;
mod verifier;

pub use helpers::{AccumulationVector, KnowledgeCommitment};
pub use keys::{Keypair, ProcessedVerificationKey, Proof, ProvingKey, VerificationKey};
pub use params::{init_public_params, PublicParams};
pub use prover::prover;
pub use setup::generator;
pub use verifier::{
    affine_verifier_weak_ic, online_verifier_strong_ic, online_verifier_weak_ic,
    verifier_process_vk, verifier_strong_ic, verifier_weak_ic,
};
