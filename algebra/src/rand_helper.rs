use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

/// The seed behind every deterministic test rng.
const TEST_RNG_SEED: [u8; 32] = [
    7, 0, 0, 0, 41, 0, 0, 0, 100, 3, 0, 0, 17, 19, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    ChaChaRng::from_seed(TEST_RNG_SEED)
}

/// Should be used only for tests, not for any real world usage.
///
/// Setting `DETERMINISTIC_TEST_RNG=1` makes every call return the same stream,
/// which is handy when replaying a failing proof.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    seeded_or_fresh(is_deterministic)
}

#[cfg(feature = "std")]
fn seeded_or_fresh(is_deterministic: bool) -> ChaChaRng {
    if is_deterministic {
        ChaChaRng::from_seed(TEST_RNG_SEED)
    } else {
        ChaChaRng::from_entropy()
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use ark_std::UniformRand;

    #[test]
    fn deterministic_and_fresh_streams() {
        let a = u128::rand(&mut super::seeded_or_fresh(true));
        let b = u128::rand(&mut super::seeded_or_fresh(true));
        assert_eq!(a, b);

        let a = u128::rand(&mut super::seeded_or_fresh(false));
        let b = u128::rand(&mut super::seeded_or_fresh(false));
        assert_ne!(a, b);
    }
}
