//! Shared access to one network from several owners.
//!
//! [`ArtNetwork::learn`] needs `&mut self`. When several threads feed the
//! same network, [`SharedNetwork`] serializes them behind a single mutex that
//! is held for exactly one call.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::network::{ArtNetwork, Classification, Resonance};

/// A cloneable handle to one network guarded by a mutex.
#[derive(Clone, Debug)]
pub struct SharedNetwork {
    inner: Arc<Mutex<ArtNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: ArtNetwork) -> Self {
        Self {
            inner: Arc::new(Mutex::new(network)),
        }
    }

    /// Learn one input while holding the lock.
    pub fn learn(&self, x: &[f64]) -> Result<Option<Resonance>> {
        self.lock().learn(x)
    }

    /// Classify one input while holding the lock.
    pub fn classify(&self, x: &[f64]) -> Result<Option<Classification>> {
        self.lock().classify(x)
    }

    pub fn active(&self) -> usize {
        self.lock().active()
    }

    /// Run `f` with exclusive access to the network.
    pub fn with<R>(&self, f: impl FnOnce(&mut ArtNetwork) -> R) -> R {
        f(&mut self.lock())
    }

    /// Unwrap the network if this is the last handle.
    pub fn into_inner(self) -> std::result::Result<ArtNetwork, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(|e| e.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }

    // `learn` validates before mutating, so a panic while the lock was held
    // cannot leave a half-applied update behind.
    fn lock(&self) -> MutexGuard<'_, ArtNetwork> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
