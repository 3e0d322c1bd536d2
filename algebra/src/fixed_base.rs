use crate::prelude::*;
use crate::utils::log2_floor;
use crate::{cfg_iter, cfg_iter_mut};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Windowed exponentiation of one fixed base by many scalars.
///
/// The table holds `j * 2^(w*i) * g` for every window `i` and digit `j`, so
/// each scalar costs one addition per window and no doublings.
pub struct FixedBaseMSM<G: Group> {
    window: usize,
    outerc: usize,
    table: Vec<Vec<G>>,
}

impl<G: Group> FixedBaseMSM<G> {
    /// Pick a window size for `num_scalars` multiplications.
    pub fn get_mul_window_size(num_scalars: usize) -> usize {
        if num_scalars < 32 {
            3
        } else {
            // roughly ln(num_scalars), computed without floats
            ((log2_floor(num_scalars) as usize * 69) / 100).max(3)
        }
    }

    /// Build the table for base `g`, sized for `num_scalars` multiplications.
    pub fn new(g: &G, num_scalars: usize) -> Self {
        let window = Self::get_mul_window_size(num_scalars);
        Self::with_window(g, window)
    }

    /// Build the table for base `g` with an explicit window size.
    pub fn with_window(g: &G, window: usize) -> Self {
        let scalar_size = G::ScalarType::num_bits();
        let window = window.max(1);
        let in_window = 1 << window;
        let outerc = (scalar_size + window - 1) / window;
        let last_in_window = 1 << (scalar_size - (outerc - 1) * window);

        let mut g_outers = Vec::with_capacity(outerc);
        let mut g_outer = *g;
        for _ in 0..outerc {
            g_outers.push(g_outer);
            for _ in 0..window {
                g_outer = g_outer.double();
            }
        }

        let mut table = vec![vec![G::get_identity(); in_window]; outerc];
        cfg_iter_mut!(table)
            .enumerate()
            .zip(g_outers)
            .for_each(|((outer, multiples), g_outer)| {
                let cur_in_window = if outer == outerc - 1 {
                    last_in_window
                } else {
                    in_window
                };

                let mut g_inner = G::get_identity();
                for inner in multiples.iter_mut().take(cur_in_window) {
                    *inner = g_inner;
                    g_inner.add_assign(&g_outer);
                }
            });

        Self {
            window,
            outerc,
            table,
        }
    }

    /// Multiply the base by a single scalar.
    pub fn mul(&self, scalar: &G::ScalarType) -> G {
        let limbs = scalar.get_little_endian_u64();
        let bit = |i: usize| -> bool {
            let limb = i / 64;
            limb < limbs.len() && (limbs[limb] >> (i % 64)) & 1 == 1
        };

        let scalar_size = G::ScalarType::num_bits();
        (0..self.outerc)
            .map(|outer| {
                let mut inner = 0usize;
                for i in 0..self.window {
                    let pos = outer * self.window + i;
                    if pos < scalar_size && bit(pos) {
                        inner |= 1 << i;
                    }
                }
                self.table[outer][inner]
            })
            .fold(G::get_identity(), |a, b| a.add(&b))
    }

    /// Multiply the base by every scalar of `v`.
    pub fn batch_mul(&self, v: &[G::ScalarType]) -> Vec<G> {
        cfg_iter!(v).map(|e| self.mul(e)).collect()
    }
}
