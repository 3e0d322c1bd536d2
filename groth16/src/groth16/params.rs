use crate::errors::{Result, SnarkError};
use zsl_algebra::prelude::*;

/// Curve-wide constants shared by key generation and proving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicParams<P: Pairing> {
    /// The generator of the first group.
    pub g1: P::G1,
    /// The generator of the second group.
    pub g2: P::G2,
    /// The largest `s` with `2^s` dividing `r - 1`.
    pub two_adicity: u32,
}

/// Collect the public parameters of the pairing `P`.
pub fn init_public_params<P: Pairing>() -> PublicParams<P> {
    PublicParams {
        g1: P::G1::get_base(),
        g2: P::G2::get_base(),
        two_adicity: P::ScalarField::two_adicity(),
    }
}

impl<P: Pairing> PublicParams<P> {
    /// The largest QAP domain the scalar field supports, `2^(s + 1)`.
    pub fn max_domain_size(&self) -> usize {
        1usize
            .checked_shl(self.two_adicity + 1)
            .unwrap_or(usize::MAX)
    }

    /// Fail early when a QAP needs more than [`max_domain_size`](Self::max_domain_size) points.
    pub(crate) fn check_qap_size(&self, min_size: usize) -> Result<()> {
        if min_size > self.max_domain_size() {
            Err(SnarkError::DomainTooLarge(min_size))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::init_public_params;
    use crate::errors::SnarkError;
    use zsl_algebra::bn254::{BN254PairingEngine, BN254G1};
    use zsl_algebra::prelude::*;

    #[test]
    fn bn254_params() {
        let pp = init_public_params::<BN254PairingEngine>();
        assert_eq!(pp, init_public_params::<BN254PairingEngine>());
        assert_eq!(pp.two_adicity, 28);
        assert_eq!(pp.max_domain_size(), 1 << 29);
        assert_eq!(pp.g1, BN254G1::get_base());
        assert!(pp.check_qap_size(1 << 29).is_ok());
        assert_eq!(
            pp.check_qap_size((1 << 29) + 1),
            Err(SnarkError::DomainTooLarge((1 << 29) + 1))
        );
    }
}
