use crate::errors::{Result, SnarkError};
use crate::groth16::helpers::{AccumulationVector, KnowledgeCommitment};
use crate::r1cs::R1CSConstraintSystem;
use ark_std::{add_to_trace, format};
use zsl_algebra::prelude::*;

/// The proving key.
///
/// `alpha` is folded into `a_query[0]` and `beta` into `b_query[0]`; the
/// constant variable always selects them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProvingKey<P: Pairing> {
    /// `delta * G1`.
    pub delta_g1: P::G1,
    /// `delta * G2`.
    pub delta_g2: P::G2,
    /// `A_i(tau) * G1` for `i = 0..=num_variables`.
    pub a_query: Vec<P::G1>,
    /// `B_i(tau)` in both groups for `i = 0..=num_variables`.
    pub b_query: Vec<KnowledgeCommitment<P::G2, P::G1>>,
    /// `tau^i * Z(tau) / delta * G1` for `i < m - 1`.
    pub h_query: Vec<P::G1>,
    /// `(beta * A_i + alpha * B_i + C_i)(tau) / delta * G1` for the auxiliary variables.
    pub l_query: Vec<P::G1>,
    /// The constraint system the key was generated for.
    pub constraint_system: R1CSConstraintSystem<P::ScalarField>,
}

impl<P: Pairing> ProvingKey<P> {
    /// The number of first-group elements.
    pub fn g1_size(&self) -> usize {
        1 + self.a_query.len() + self.b_query.len() + self.h_query.len() + self.l_query.len()
    }

    /// The number of second-group elements.
    pub fn g2_size(&self) -> usize {
        1 + self.b_query.len()
    }

    /// The number of first-group elements, identity entries of the B-query
    /// not counted.
    pub fn g1_sparse_size(&self) -> usize {
        1 + self.a_query.len()
            + self.nonzero_b_query_len()
            + self.h_query.len()
            + self.l_query.len()
    }

    /// The number of second-group elements, identity entries of the B-query
    /// not counted.
    pub fn g2_sparse_size(&self) -> usize {
        1 + self.nonzero_b_query_len()
    }

    // variables that never appear in B have both halves at the identity
    fn nonzero_b_query_len(&self) -> usize {
        self.b_query
            .iter()
            .filter(|kc| !(kc.g.is_identity() && kc.h.is_identity()))
            .count()
    }

    /// The size of the compressed group elements in bits.
    pub fn size_in_bits(&self) -> usize {
        8 * (self.g1_size() * P::G1::COMPRESSED_LEN + self.g2_size() * P::G2::COMPRESSED_LEN)
    }

    /// Add the element counts to the `print-trace` output.
    pub fn print_size(&self) {
        add_to_trace!(|| "Proving key size", || format!(
            "G1: {} ({} non-zero), G2: {} ({} non-zero), {} bits",
            self.g1_size(),
            self.g1_sparse_size(),
            self.g2_size(),
            self.g2_sparse_size(),
            self.size_in_bits()
        ));
    }
}

/// The verification key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerificationKey<P: Pairing> {
    /// `e(alpha * G1, beta * G2)`.
    pub alpha_g1_beta_g2: P::Gt,
    /// `gamma * G2`.
    pub gamma_g2: P::G2,
    /// `delta * G2`.
    pub delta_g2: P::G2,
    /// `(beta * A_i + alpha * B_i + C_i)(tau) / gamma * G1` for the constant
    /// (`first`) and the primary variables (`rest`).
    pub encoded_ic_query: AccumulationVector<P::G1>,
}

impl<P: Pairing> VerificationKey<P> {
    /// The number of primary inputs the key accepts.
    pub fn num_inputs(&self) -> usize {
        self.encoded_ic_query.domain_size()
    }

    /// The number of first-group elements.
    pub fn g1_size(&self) -> usize {
        self.encoded_ic_query.size()
    }

    /// The number of second-group elements.
    pub fn g2_size(&self) -> usize {
        2
    }

    /// The number of target-group elements.
    pub fn gt_size(&self) -> usize {
        1
    }

    /// The size of the compressed group elements in bits.
    pub fn size_in_bits(&self) -> usize {
        8 * (self.g1_size() * P::G1::COMPRESSED_LEN
            + self.g2_size() * P::G2::COMPRESSED_LEN
            + self.gt_size() * P::Gt::COMPRESSED_LEN)
    }

    /// Add the element counts to the `print-trace` output.
    pub fn print_size(&self) {
        add_to_trace!(|| "Verification key size", || format!(
            "G1: {}, G2: {}, GT: {}, {} bits",
            self.g1_size(),
            self.g2_size(),
            self.gt_size(),
            self.size_in_bits()
        ));
    }

    /// A random key for `input_size` primary inputs, for tests and size
    /// measurements. It verifies nothing.
    pub fn dummy<R: CryptoRng + RngCore>(input_size: usize, prng: &mut R) -> Self {
        let rest = (0..input_size).map(|_| P::G1::random(prng)).collect();
        Self {
            alpha_g1_beta_g2: P::Gt::random(prng),
            gamma_g2: P::G2::random(prng),
            delta_g2: P::G2::random(prng),
            encoded_ic_query: AccumulationVector::new(P::G1::random(prng), rest),
        }
    }
}

/// The verification key with the Miller-loop lines of its second-group
/// elements precomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProcessedVerificationKey<P: Pairing> {
    /// `e(alpha * G1, beta * G2)`.
    pub vk_alpha_g1_beta_g2: P::Gt,
    /// The prepared `-gamma * G2`.
    pub vk_gamma_g2_precomp: P::G2Prepared,
    /// The prepared `-delta * G2`.
    pub vk_delta_g2_precomp: P::G2Prepared,
    /// As in [`VerificationKey`].
    pub encoded_ic_query: AccumulationVector<P::G1>,
}

/// A proving key with its verification key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Keypair<P: Pairing> {
    /// The proving key.
    pub pk: ProvingKey<P>,
    /// The verification key.
    pub vk: VerificationKey<P>,
}

/// A proof: `g_a`, `g_c` in the first group and `g_b` in the second.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<P: Pairing> {
    /// `A`.
    pub g_a: P::G1,
    /// `B`.
    pub g_b: P::G2,
    /// `C`.
    pub g_c: P::G1,
}

impl<P: Pairing> Default for Proof<P> {
    /// Made of the group generators; never verifies.
    fn default() -> Self {
        Self {
            g_a: P::G1::get_base(),
            g_b: P::G2::get_base(),
            g_c: P::G1::get_base(),
        }
    }
}

impl<P: Pairing> Proof<P> {
    /// Check that every element is on its curve and in the prime-order subgroup.
    pub fn is_well_formed(&self) -> bool {
        self.g_a.is_well_formed() && self.g_b.is_well_formed() && self.g_c.is_well_formed()
    }

    /// The number of first-group elements.
    pub fn g1_size() -> usize {
        2
    }

    /// The number of second-group elements.
    pub fn g2_size() -> usize {
        1
    }

    /// The size of the compressed proof in bits.
    pub fn size_in_bits() -> usize {
        8 * (Self::g1_size() * P::G1::COMPRESSED_LEN + Self::g2_size() * P::G2::COMPRESSED_LEN)
    }
}

impl<P: Pairing> ZslFromToBytes for Proof<P> {
    fn zsl_to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        zsl_vec_bytes::write_one(&mut bytes, &self.g_a);
        zsl_vec_bytes::write_one(&mut bytes, &self.g_b);
        zsl_vec_bytes::write_one(&mut bytes, &self.g_c);
        bytes
    }

    fn zsl_from_bytes(bytes: &[u8]) -> core::result::Result<Self, AlgebraError> {
        let mut cursor = bytes;
        let proof = Self {
            g_a: zsl_vec_bytes::read_one(&mut cursor)?,
            g_b: zsl_vec_bytes::read_one(&mut cursor)?,
            g_c: zsl_vec_bytes::read_one(&mut cursor)?,
        };
        if !cursor.is_empty() {
            return Err(AlgebraError::DeserializationError);
        }
        Ok(proof)
    }
}

impl<P: Pairing> ZslFromToBytes for VerificationKey<P> {
    fn zsl_to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        zsl_vec_bytes::write_one(&mut bytes, &self.alpha_g1_beta_g2);
        zsl_vec_bytes::write_one(&mut bytes, &self.gamma_g2);
        zsl_vec_bytes::write_one(&mut bytes, &self.delta_g2);
        zsl_vec_bytes::write_one(&mut bytes, &self.encoded_ic_query.first);
        zsl_vec_bytes::write(&mut bytes, &self.encoded_ic_query.rest);
        bytes
    }

    fn zsl_from_bytes(bytes: &[u8]) -> core::result::Result<Self, AlgebraError> {
        let mut cursor = bytes;
        let alpha_g1_beta_g2 = zsl_vec_bytes::read_one(&mut cursor)?;
        let gamma_g2 = zsl_vec_bytes::read_one(&mut cursor)?;
        let delta_g2 = zsl_vec_bytes::read_one(&mut cursor)?;
        let first = zsl_vec_bytes::read_one(&mut cursor)?;
        let rest = zsl_vec_bytes::read(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(AlgebraError::DeserializationError);
        }
        Ok(Self {
            alpha_g1_beta_g2,
            gamma_g2,
            delta_g2,
            encoded_ic_query: AccumulationVector::new(first, rest),
        })
    }
}

/// Check the layout of a full assignment and of the key against the
/// constraint system stored in the key.
pub(crate) fn check_assignment<P: Pairing>(
    pk: &ProvingKey<P>,
    primary_input: &[P::ScalarField],
    auxiliary_input: &[P::ScalarField],
) -> Result<()> {
    let cs = &pk.constraint_system;
    let num_variables = cs.num_variables();
    if primary_input.len() != cs.num_inputs()
        || primary_input.len() + auxiliary_input.len() != num_variables
    {
        return Err(SnarkError::InvalidAssignmentLength);
    }
    if pk.a_query.len() != num_variables + 1
        || pk.b_query.len() != num_variables + 1
        || pk.l_query.len() != num_variables - cs.num_inputs()
    {
        return Err(SnarkError::Message(
            "proving key does not match its constraint system".into(),
        ));
    }
    Ok(())
}
