//! # Resonance: Adaptive Resonance Theory networks
//!
//! Resonance implements an ART1-style network: unsupervised, incremental
//! category learning over binary feature vectors. Every input either
//! refines the best-matching prototype or commits a new category, so the
//! network grows its own vocabulary of patterns one observation at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use resonance::{letters, ArtNetwork, Glyph};
//!
//! let mut net = ArtNetwork::with_seed(64, 64, 0.95, 1)?;
//!
//! for (i, glyph) in letters::glyphs(&letters::CLEAN)?.iter().enumerate() {
//!     if let Some(r) = net.learn(&glyph.to_input())? {
//!         let proto = Glyph::from_prototype(8, 8, &r.prototype)?;
//!         println!("{} -> class {}\n{}", letters::label(i), letters::label(r.category), proto);
//!     }
//! }
//! # Ok::<(), resonance::ArtError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Prototype**: a category's learned feed-back weights; it only ever
//!   loses features, shrinking toward the intersection of its inputs
//! - **Vigilance**: the share of an input's mass a prototype must cover
//!   before it may learn that input
//! - **Resonance**: an input passing the vigilance test against a category
//! - **Capacity**: the fixed number of category slots; once all are
//!   committed, unmatched inputs are left unclassified

pub mod config;
pub mod error;
pub mod glyph;
pub mod letters;
pub mod network;
pub mod overlap;
pub mod shared;

// Re-exports for convenience
pub use config::{Initialization, NetworkConfig};
pub use error::{ArtError, Result};
pub use glyph::Glyph;
pub use network::{ArtNetwork, Classification, Resonance};
pub use overlap::Overlap;
pub use shared::SharedNetwork;
