//! Network configuration via TOML files.
//!
//! ```toml
//! [network]
//! input_len = 64
//! capacity = 64
//! vigilance = 0.95
//! seed = 1
//! init = "random"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the weight arenas are filled at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Initialization {
    /// Uniform random values in the open interval (0, 1).
    #[default]
    Random,
    /// Classic ART1 start: feed-back weights at 1, feed-forward at `1 / (0.5 + n)`.
    ///
    /// A newly committed prototype then equals its (binary) input exactly.
    Unit,
}

/// Construction parameters for an [`ArtNetwork`](crate::ArtNetwork).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Length of every input vector (F1 size)
    pub input_len: usize,
    /// Maximum number of categories (F2 size)
    pub capacity: usize,
    /// Minimum match ratio for resonance, in [0, 1]
    pub vigilance: f64,
    /// Seed for the weight initializer; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub init: Initialization,
}

#[derive(Deserialize)]
struct ConfigFile {
    network: NetworkConfig,
}

impl NetworkConfig {
    pub fn new(input_len: usize, capacity: usize, vigilance: f64) -> Self {
        Self {
            input_len,
            capacity,
            vigilance,
            seed: None,
            init: Initialization::Random,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_init(mut self, init: Initialization) -> Self {
        self.init = init;
        self
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse a configuration document containing a `[network]` table.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        Ok(file.network)
    }
}

impl Default for NetworkConfig {
    /// The 8×8 letter setup: 64 inputs, 64 categories, vigilance 0.95.
    fn default() -> Self {
        Self::new(64, 64, 0.95)
    }
}
