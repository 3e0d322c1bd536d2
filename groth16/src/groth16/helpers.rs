use crate::errors::{Result, SnarkError};
use zsl_algebra::prelude::*;

/// The same scalar committed in both groups: `g = x * G2`, `h = x * G1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KnowledgeCommitment<G: Group, H: Group> {
    /// The second-group element.
    pub g: G,
    /// The first-group element.
    pub h: H,
}

/// A group element `first` plus per-input bases `rest`, consumed by
/// folding `x_i * rest[i]` into `first`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AccumulationVector<G: Group> {
    /// The accumulated value.
    pub first: G,
    /// The bases not yet accumulated; consumed entries are the identity.
    pub rest: Vec<G>,
}

impl<G: Group> AccumulationVector<G> {
    /// Build from the accumulated value and the remaining bases.
    pub fn new(first: G, rest: Vec<G>) -> Self {
        Self { first, rest }
    }

    /// The number of bases.
    pub fn domain_size(&self) -> usize {
        self.rest.len()
    }

    /// The number of group elements, `first` included.
    pub fn size(&self) -> usize {
        1 + self.rest.len()
    }

    /// Whether nothing is left to accumulate.
    pub fn is_fully_accumulated(&self) -> bool {
        self.rest.iter().all(|g| g.is_identity())
    }

    /// Fold `values[i] * rest[offset + i]` into `first`.
    ///
    /// Bases outside the chunk are left in place, so missing values act as
    /// zeros.
    pub fn accumulate_chunk(&self, values: &[G::ScalarType], offset: usize) -> Result<Self> {
        let end = offset
            .checked_add(values.len())
            .filter(|end| *end <= self.rest.len())
            .ok_or(SnarkError::PrimaryInputTooLong {
                max: self.rest.len().saturating_sub(offset),
                actual: values.len(),
            })?;

        let mut rest = self.rest.clone();
        let bases: Vec<&G> = self.rest[offset..end].iter().collect();
        let scalars: Vec<&G::ScalarType> = values.iter().collect();
        let acc = G::multi_exp(&scalars, &bases);
        for g in rest[offset..end].iter_mut() {
            *g = G::get_identity();
        }

        Ok(Self {
            first: self.first.add(&acc),
            rest,
        })
    }
}
