//! ART1 network: incremental category learning with a vigilance test.
//!
//! # Algorithm: Grossberg, 1987 (ART1)
//!
//! Each input is scored against every committed category through the
//! feed-forward weights. Candidates are then visited from the highest bid
//! down; the first whose feed-back prototype covers at least `vigilance` of
//! the input's mass *resonates* and learns the input. When nothing resonates
//! a fresh category is committed, until the fixed capacity is used up.
//!
//! # Usage
//!
//! ```rust
//! use resonance::ArtNetwork;
//!
//! let mut net = ArtNetwork::with_seed(4, 3, 0.9, 42).unwrap();
//!
//! let first = net.learn(&[1.0, 1.0, 0.0, 0.0]).unwrap().unwrap();
//! assert_eq!(first.category, 0);
//! assert!(first.created);
//! assert_eq!(net.active(), 1);
//! ```

use rand::distributions::Open01;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{Initialization, NetworkConfig};
use crate::error::{ArtError, Result};
use crate::overlap::{Overlap, CHOICE_BIAS};

/// Outcome of a successful [`ArtNetwork::learn`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Resonance {
    /// Index of the category that learned the input
    pub category: usize,
    /// The category's feed-back prototype after the update
    pub prototype: Vec<f64>,
    /// `true` when the category was committed by this call
    pub created: bool,
}

/// Outcome of a read-only [`ArtNetwork::classify`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub category: usize,
    /// Match ratio that passed the vigilance test
    pub match_ratio: f64,
}

/// A fixed-capacity ART1 network.
///
/// Weight storage for all `capacity` categories is allocated up front;
/// `active` is the logical length of the arena. Slots at or beyond
/// `active` are never searched.
#[derive(Clone, Debug)]
pub struct ArtNetwork {
    input_len: usize,
    capacity: usize,
    vigilance: f64,

    /// Comparison layer (F1). Bookkeeping only; never read for decisions.
    f1: Vec<f64>,
    /// Recognition layer (F2), recomputed on every `learn`.
    f2: Vec<f64>,
    /// Row-major m × n: feedforward[i * n .. (i+1) * n] = Wf row i.
    feedforward: Vec<f64>,
    /// Category-major: feedback[i * n .. (i+1) * n] = Wb column i.
    feedback: Vec<f64>,
    active: usize,
}

impl ArtNetwork {
    /// Create a network with random initial weights drawn from OS entropy.
    ///
    /// - `input_len`: length of every input vector (n)
    /// - `capacity`: maximum number of categories (m)
    /// - `vigilance`: minimum match ratio for resonance, in [0, 1]
    pub fn new(input_len: usize, capacity: usize, vigilance: f64) -> Result<Self> {
        Self::from_config(&NetworkConfig::new(input_len, capacity, vigilance))
    }

    /// Create a network whose random initial weights come from `seed`.
    ///
    /// The same seed always yields the same weights, so learning runs are
    /// reproducible.
    pub fn with_seed(input_len: usize, capacity: usize, vigilance: f64, seed: u64) -> Result<Self> {
        Self::from_config(&NetworkConfig::new(input_len, capacity, vigilance).with_seed(seed))
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        let n = config.input_len;
        let m = config.capacity;
        if n == 0 {
            return Err(ArtError::InvalidShape("input_len must be positive".into()));
        }
        if m == 0 {
            return Err(ArtError::InvalidShape("capacity must be positive".into()));
        }
        if !(0.0..=1.0).contains(&config.vigilance) {
            return Err(ArtError::InvalidVigilance(config.vigilance));
        }

        let (feedforward, feedback) = match config.init {
            Initialization::Random => {
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                let feedforward: Vec<f64> = (0..m * n).map(|_| rng.sample(Open01)).collect();
                let feedback: Vec<f64> = (0..n * m).map(|_| rng.sample(Open01)).collect();
                (feedforward, feedback)
            }
            Initialization::Unit => (vec![1.0 / (CHOICE_BIAS + n as f64); m * n], vec![1.0; n * m]),
        };

        debug!(
            input_len = n,
            capacity = m,
            vigilance = config.vigilance,
            init = ?config.init,
            "created ART network"
        );

        Ok(Self {
            input_len: n,
            capacity: m,
            vigilance: config.vigilance,
            f1: vec![1.0; n],
            f2: vec![1.0; m],
            feedforward,
            feedback,
            active: 0,
        })
    }

    // --- Accessors ---

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vigilance(&self) -> f64 {
        self.vigilance
    }

    /// Number of committed categories.
    pub fn active(&self) -> usize {
        self.active
    }

    /// `true` once every category slot has been committed.
    pub fn is_full(&self) -> bool {
        self.active == self.capacity
    }

    /// Learned feed-back prototype of a committed category.
    pub fn prototype(&self, category: usize) -> Option<&[f64]> {
        (category < self.active).then(|| self.feedback_col(category))
    }

    /// Normalized feed-forward row of a committed category.
    pub fn feedforward(&self, category: usize) -> Option<&[f64]> {
        (category < self.active).then(|| self.feedforward_row(category))
    }

    /// Iterate over `(category, prototype)` for every committed category.
    pub fn prototypes(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.feedback
            .chunks_exact(self.input_len)
            .take(self.active)
            .enumerate()
    }

    pub fn comparison_layer(&self) -> &[f64] {
        &self.f1
    }

    /// Activations from the most recent `learn` call (all `capacity` slots).
    pub fn recognition_layer(&self) -> &[f64] {
        &self.f2
    }

    // --- Learning ---

    /// Present one input and let the network learn it.
    ///
    /// Returns the category that resonated (or was committed) together with
    /// its updated prototype. `Ok(None)` means no committed category passed
    /// the vigilance test and there is no spare capacity; in that case the
    /// weights and the active count are left untouched.
    ///
    /// An `Err` is returned, before any state is touched, when the input has
    /// the wrong length, a negative or non-finite entry, or sums to zero.
    pub fn learn(&mut self, x: &[f64]) -> Result<Option<Resonance>> {
        let x_mass = self.validate(x)?;

        for (a, row) in self
            .f2
            .iter_mut()
            .zip(self.feedforward.chunks_exact(self.input_len))
        {
            *a = Overlap::dot(row, x);
        }

        for i in rank_descending(&self.f2[..self.active]) {
            let ratio = Overlap::match_ratio(self.feedback_col(i), x, x_mass);
            trace!(category = i, activation = self.f2[i], ratio, "vigilance test");
            if ratio >= self.vigilance {
                self.update(i, x);
                debug!(category = i, ratio, "resonance");
                return Ok(Some(self.resonance(i, false)));
            }
        }

        if self.active < self.capacity {
            let i = self.active;
            self.update(i, x);
            self.active += 1;
            debug!(category = i, active = self.active, "committed new category");
            return Ok(Some(self.resonance(i, true)));
        }

        debug!(active = self.active, "no resonance and no spare capacity");
        Ok(None)
    }

    /// Find the category an input would resonate with, without learning it.
    ///
    /// Runs the same ranking and vigilance search as [`learn`](Self::learn)
    /// but mutates nothing, not even the recognition layer.
    pub fn classify(&self, x: &[f64]) -> Result<Option<Classification>> {
        let x_mass = self.validate(x)?;
        let activations = self.activations(x);

        Ok(rank_descending(&activations)
            .into_iter()
            .map(|i| Classification {
                category: i,
                match_ratio: Overlap::match_ratio(self.feedback_col(i), x, x_mass),
            })
            .find(|c| c.match_ratio >= self.vigilance))
    }

    /// Committed categories in the order the vigilance search would visit them.
    ///
    /// Highest activation first; equal activations put the higher index first.
    pub fn rank(&self, x: &[f64]) -> Result<Vec<usize>> {
        self.validate(x)?;
        Ok(rank_descending(&self.activations(x)))
    }

    /// Match ratio `sum(prototype * x) / sum(x)` of an input against a
    /// committed category.
    pub fn match_ratio(&self, category: usize, x: &[f64]) -> Result<f64> {
        let x_mass = self.validate(x)?;
        if category >= self.active {
            return Err(ArtError::CategoryOutOfRange {
                index: category,
                active: self.active,
            });
        }
        Ok(Overlap::match_ratio(self.feedback_col(category), x, x_mass))
    }

    // --- Internals ---

    /// Check the input and return its mass.
    fn validate(&self, x: &[f64]) -> Result<f64> {
        if x.len() != self.input_len {
            return Err(ArtError::DimensionMismatch {
                expected: self.input_len,
                got: x.len(),
            });
        }
        if let Some((pos, v)) = x
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ArtError::InvalidInput(format!(
                "entry {} is {}; entries must be finite and non-negative",
                pos, v
            )));
        }
        let mass = Overlap::mass(x);
        if mass == 0.0 {
            return Err(ArtError::ZeroInput);
        }
        Ok(mass)
    }

    fn activations(&self, x: &[f64]) -> Vec<f64> {
        self.feedforward
            .chunks_exact(self.input_len)
            .take(self.active)
            .map(|row| Overlap::dot(row, x))
            .collect()
    }

    /// Mask the prototype of `category` with `x` and re-derive its
    /// feed-forward row.
    fn update(&mut self, category: usize, x: &[f64]) {
        let span = category * self.input_len..(category + 1) * self.input_len;
        let proto = &mut self.feedback[span.clone()];
        for (w, &v) in proto.iter_mut().zip(x) {
            *w *= v;
        }
        Overlap::normalize_into(proto, &mut self.feedforward[span]);
    }

    fn resonance(&self, category: usize, created: bool) -> Resonance {
        Resonance {
            category,
            prototype: self.feedback_col(category).to_vec(),
            created,
        }
    }

    fn feedback_col(&self, category: usize) -> &[f64] {
        &self.feedback[category * self.input_len..(category + 1) * self.input_len]
    }

    fn feedforward_row(&self, category: usize) -> &[f64] {
        &self.feedforward[category * self.input_len..(category + 1) * self.input_len]
    }
}

/// Indices of `activations` from highest to lowest.
///
/// Stable ascending sort, then reversed: equal activations end up with the
/// higher index first.
fn rank_descending(activations: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..activations.len()).collect();
    order.sort_by(|&a, &b| activations[a].total_cmp(&activations[b]));
    order.reverse();
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_net(n: usize, m: usize, rho: f64) -> ArtNetwork {
        let cfg = NetworkConfig::new(n, m, rho).with_init(Initialization::Unit);
        ArtNetwork::from_config(&cfg).unwrap()
    }

    #[test]
    fn test_construction_rejects_bad_shape() {
        assert!(matches!(
            ArtNetwork::with_seed(0, 4, 0.5, 1),
            Err(ArtError::InvalidShape(_))
        ));
        assert!(matches!(
            ArtNetwork::with_seed(4, 0, 0.5, 1),
            Err(ArtError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_construction_rejects_bad_vigilance() {
        for rho in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ArtNetwork::with_seed(4, 4, rho, 1),
                Err(ArtError::InvalidVigilance(_))
            ));
        }
        assert!(ArtNetwork::with_seed(4, 4, 0.0, 1).is_ok());
        assert!(ArtNetwork::with_seed(4, 4, 1.0, 1).is_ok());
    }

    #[test]
    fn test_initial_state() {
        let net = ArtNetwork::with_seed(5, 10, 0.5, 3).unwrap();

        assert_eq!(net.active(), 0);
        assert!(!net.is_full());
        assert_eq!(net.comparison_layer(), &[1.0; 5]);
        assert_eq!(net.recognition_layer(), &[1.0; 10]);
        assert_eq!(net.feedforward.len(), 50);
        assert_eq!(net.feedback.len(), 50);
        assert!(net.feedforward.iter().all(|&w| w > 0.0 && w < 1.0));
        assert!(net.feedback.iter().all(|&w| w > 0.0 && w < 1.0));
        assert!(net.prototype(0).is_none());
    }

    #[test]
    fn test_seeded_weights_reproducible() {
        let a = ArtNetwork::with_seed(8, 4, 0.5, 42).unwrap();
        let b = ArtNetwork::with_seed(8, 4, 0.5, 42).unwrap();
        let c = ArtNetwork::with_seed(8, 4, 0.5, 43).unwrap();

        assert_eq!(a.feedback, b.feedback);
        assert_eq!(a.feedforward, b.feedforward);
        assert_ne!(a.feedback, c.feedback);
    }

    #[test]
    fn test_first_input_creates_category_zero() {
        let mut net = ArtNetwork::with_seed(4, 3, 0.95, 1).unwrap();
        let initial = net.feedback_col(0).to_vec();

        let r = net.learn(&[1.0, 0.0, 1.0, 0.0]).unwrap().unwrap();

        assert_eq!(r.category, 0);
        assert!(r.created);
        assert_eq!(net.active(), 1);
        assert_eq!(r.prototype, vec![initial[0], 0.0, initial[2], 0.0]);
        assert_eq!(net.prototype(0).unwrap(), r.prototype.as_slice());
    }

    #[test]
    fn test_feedforward_rederived_from_prototype() {
        let mut net = ArtNetwork::with_seed(6, 2, 0.5, 9).unwrap();
        net.learn(&[1.0, 1.0, 0.0, 1.0, 0.0, 0.0]).unwrap();

        let proto = net.prototype(0).unwrap();
        let scale = 0.5 + proto.iter().sum::<f64>();
        let row = net.feedforward(0).unwrap();
        for (w, p) in row.iter().zip(proto) {
            assert!((w - p / scale).abs() < 1e-15);
        }
    }

    #[test]
    fn test_unit_init_prototype_equals_input() {
        let mut net = unit_net(4, 2, 0.9);
        let x = [0.0, 1.0, 1.0, 0.0];

        let r = net.learn(&x).unwrap().unwrap();
        assert_eq!(r.prototype, x.to_vec());
        assert_eq!(net.feedforward(0).unwrap(), &[0.0, 0.4, 0.4, 0.0]);
    }

    #[test]
    fn test_invalid_inputs_leave_state_untouched() {
        let mut net = ArtNetwork::with_seed(4, 2, 0.5, 5).unwrap();
        net.learn(&[1.0, 0.0, 0.0, 1.0]).unwrap();
        let before = net.clone();

        assert!(matches!(
            net.learn(&[1.0, 0.0, 1.0]),
            Err(ArtError::DimensionMismatch { expected: 4, got: 3 })
        ));
        assert!(matches!(net.learn(&[0.0; 4]), Err(ArtError::ZeroInput)));
        assert!(matches!(
            net.learn(&[1.0, -1.0, 1.0, 0.0]),
            Err(ArtError::InvalidInput(_))
        ));
        assert!(matches!(
            net.learn(&[1.0, f64::NAN, 0.0, 0.0]),
            Err(ArtError::InvalidInput(_))
        ));

        assert_eq!(net.active(), before.active());
        assert_eq!(net.feedback, before.feedback);
        assert_eq!(net.feedforward, before.feedforward);
        assert_eq!(net.f2, before.f2);
    }

    #[test]
    fn test_exhaustion_is_read_only() {
        let mut net = ArtNetwork::with_seed(4, 2, 0.95, 11).unwrap();
        assert_eq!(net.learn(&[1.0, 1.0, 0.0, 0.0]).unwrap().unwrap().category, 0);
        assert_eq!(net.learn(&[0.0, 0.0, 1.0, 0.0]).unwrap().unwrap().category, 1);
        assert!(net.is_full());

        let feedback = net.feedback.clone();
        let feedforward = net.feedforward.clone();

        // Disjoint from both prototypes: every match ratio is zero.
        assert_eq!(net.learn(&[0.0, 0.0, 0.0, 1.0]).unwrap(), None);

        assert_eq!(net.active(), 2);
        assert_eq!(net.feedback, feedback);
        assert_eq!(net.feedforward, feedforward);
    }

    #[test]
    fn test_resonance_updates_existing_category() {
        let mut net = unit_net(4, 4, 0.5);
        net.learn(&[1.0, 1.0, 1.0, 0.0]).unwrap();

        // 2 of 2 features covered by category 0.
        let r = net.learn(&[1.0, 1.0, 0.0, 0.0]).unwrap().unwrap();
        assert_eq!(r.category, 0);
        assert!(!r.created);
        assert_eq!(r.prototype, vec![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(net.active(), 1);
    }

    #[test]
    fn test_prototype_shrinks_monotonically() {
        let mut net = ArtNetwork::with_seed(8, 2, 0.0, 21).unwrap();
        let initial = net.feedback_col(0).to_vec();

        let x1 = [1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        let first = net.learn(&x1).unwrap().unwrap();
        assert!(first.prototype.iter().zip(&initial).all(|(new, old)| new <= old));

        // Vigilance 0 lets the only committed category resonate.
        let x2 = [1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0];
        let second = net.learn(&x2).unwrap().unwrap();
        assert_eq!(second.category, 0);
        assert!(!second.created);
        assert!(second
            .prototype
            .iter()
            .zip(&first.prototype)
            .all(|(new, old)| new <= old));
    }

    #[test]
    fn test_rank_orders_by_activation() {
        let mut net = unit_net(4, 3, 0.9);
        net.learn(&[1.0, 0.0, 0.0, 0.0]).unwrap();
        net.learn(&[1.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(net.active(), 2);

        // 1 / 1.5 for category 0 against 3 / 3.5 for category 1.
        assert_eq!(net.rank(&[1.0, 1.0, 1.0, 0.0]).unwrap(), vec![1, 0]);
        // 1 / 1.5 against 1 / 3.5.
        assert_eq!(net.rank(&[1.0, 0.0, 0.0, 1.0]).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_tie_breaks_to_higher_index() {
        let mut net = unit_net(6, 4, 0.5);
        assert_eq!(
            net.learn(&[1.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap().unwrap().category,
            0
        );
        assert_eq!(
            net.learn(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0]).unwrap().unwrap().category,
            1
        );

        // Both categories bid 2 / 2.5 and both cover half of the input.
        let x = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0];
        assert_eq!(net.rank(&x).unwrap(), vec![1, 0]);

        let r = net.learn(&x).unwrap().unwrap();
        assert_eq!(r.category, 1);
        assert!(!r.created);
        assert_eq!(net.recognition_layer()[0], net.recognition_layer()[1]);
    }

    #[test]
    fn test_re_presenting_prototype_matches_same_category() {
        let mut net = unit_net(6, 4, 0.95);
        let patterns = [
            [1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        ];
        for (i, p) in patterns.iter().enumerate() {
            assert_eq!(net.learn(p).unwrap().unwrap().category, i);
        }

        for i in 0..patterns.len() {
            let proto = net.prototype(i).unwrap().to_vec();
            let r = net.learn(&proto).unwrap().unwrap();
            assert_eq!(r.category, i);
            assert!(!r.created);
            assert_eq!(r.prototype, proto);
        }
        assert_eq!(net.active(), 3);
    }

    #[test]
    fn test_order_sensitivity_is_expected() {
        let wide = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0];
        let narrow = [1.0, 1.0, 0.0, 0.0, 0.0, 0.0];

        // Wide first: narrow is fully covered by category 0 and refines it.
        let mut net = unit_net(6, 4, 0.6);
        assert_eq!(net.learn(&wide).unwrap().unwrap().category, 0);
        assert_eq!(net.learn(&narrow).unwrap().unwrap().category, 0);
        assert_eq!(net.active(), 1);

        // Narrow first: wide is only half covered and needs its own category.
        let mut net = unit_net(6, 4, 0.6);
        assert_eq!(net.learn(&narrow).unwrap().unwrap().category, 0);
        let r = net.learn(&wide).unwrap().unwrap();
        assert_eq!(r.category, 1);
        assert!(r.created);
        assert_eq!(net.active(), 2);
    }

    #[test]
    fn test_active_monotonic_and_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut net = ArtNetwork::with_seed(16, 5, 0.9, 7).unwrap();
        let mut last_active = 0;

        for _ in 0..200 {
            let mut x: Vec<f64> = (0..16)
                .map(|_| if rng.gen_bool(0.3) { 1.0 } else { 0.0 })
                .collect();
            x[rng.gen_range(0..16)] = 1.0;

            if let Some(r) = net.learn(&x).unwrap() {
                assert!(r.category < net.active());
            }
            assert!(net.active() >= last_active);
            assert!(net.active() <= net.capacity());
            last_active = net.active();
        }
        assert!(net.is_full());
    }

    #[test]
    fn test_classify_is_read_only() {
        let mut net = unit_net(4, 2, 0.75);
        net.learn(&[1.0, 1.0, 1.0, 0.0]).unwrap();
        let before = net.clone();

        let hit = net.classify(&[1.0, 1.0, 1.0, 1.0]).unwrap().unwrap();
        assert_eq!(hit.category, 0);
        assert_eq!(hit.match_ratio, 0.75);

        assert_eq!(net.classify(&[0.0, 0.0, 0.0, 1.0]).unwrap(), None);
        assert_eq!(net.feedback, before.feedback);
        assert_eq!(net.f2, before.f2);
        assert_eq!(net.active(), before.active());
    }

    #[test]
    fn test_match_ratio_accessor() {
        let mut net = unit_net(4, 2, 0.5);
        net.learn(&[1.0, 1.0, 0.0, 0.0]).unwrap();

        assert_eq!(net.match_ratio(0, &[1.0, 0.0, 1.0, 0.0]).unwrap(), 0.5);
        assert!(matches!(
            net.match_ratio(1, &[1.0, 0.0, 1.0, 0.0]),
            Err(ArtError::CategoryOutOfRange { index: 1, active: 1 })
        ));
    }

    #[test]
    fn test_prototypes_iterates_committed_only() {
        let mut net = unit_net(3, 5, 0.9);
        net.learn(&[1.0, 0.0, 0.0]).unwrap();
        net.learn(&[0.0, 1.0, 0.0]).unwrap();

        let all: Vec<(usize, Vec<f64>)> = net.prototypes().map(|(i, p)| (i, p.to_vec())).collect();
        assert_eq!(
            all,
            vec![(0, vec![1.0, 0.0, 0.0]), (1, vec![0.0, 1.0, 0.0])]
        );
    }
}
