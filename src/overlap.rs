//! Overlap kernels used by category search.
//!
//! When compiled with the `simd` feature, the activation dot product uses
//! a SIMD-accelerated implementation. The scalar path sums strictly left to
//! right, which keeps exact-tie activations bit-identical; the SIMD path may
//! reorder the additions.

/// Overlap computations between weight slices and input vectors.
pub struct Overlap;

impl Overlap {
    /// Inner product of a weight row with an input vector.
    #[cfg(feature = "simd")]
    pub fn dot(weights: &[f64], x: &[f64]) -> f64 {
        use simsimd::SpatialSimilarity;
        f64::dot(weights, x).unwrap_or_else(|| Self::dot_raw(weights, x))
    }

    /// Inner product of a weight row with an input vector.
    #[cfg(not(feature = "simd"))]
    pub fn dot(weights: &[f64], x: &[f64]) -> f64 {
        Self::dot_raw(weights, x)
    }

    fn dot_raw(weights: &[f64], x: &[f64]) -> f64 {
        debug_assert_eq!(weights.len(), x.len(), "Dimension mismatch in dot product");
        weights.iter().zip(x).map(|(w, v)| w * v).sum()
    }

    /// Total mass of a vector (sum of its entries).
    pub fn mass(x: &[f64]) -> f64 {
        x.iter().sum()
    }

    /// Match ratio of an input against a learned prototype:
    /// `sum(prototype * x) / sum(x)`.
    ///
    /// `x_mass` is passed in so the search loop computes it once per input.
    pub fn match_ratio(prototype: &[f64], x: &[f64], x_mass: f64) -> f64 {
        Self::dot_raw(prototype, x) / x_mass
    }

    /// Feed-forward normalization of a prototype:
    /// `prototype / (CHOICE_BIAS + sum(prototype))`.
    pub fn normalize_into(prototype: &[f64], out: &mut [f64]) {
        let scale = CHOICE_BIAS + Self::mass(prototype);
        for (o, &p) in out.iter_mut().zip(prototype) {
            *o = p / scale;
        }
    }
}

/// Additive constant in the feed-forward normalization.
///
/// Keeps the division defined for an all-zero prototype and biases the
/// activations of small prototypes downward.
pub const CHOICE_BIAS: f64 = 0.5;
