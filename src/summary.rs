//! Ordered per-level tables used by the energy and radius summaries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{require_positive, BohrResult};

/// Highest level tabulated when no other is requested.
pub const DEFAULT_MAX_N: u32 = 5;

/// A value for every level `n` in `[1, max_n]`, ordered by `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSummary<T> {
    pub atomic_number: u32,
    pub levels: BTreeMap<u32, T>,
}

impl<T> LevelSummary<T> {
    /// Evaluates `f` for each level from 1 to `max_n` inclusive.
    ///
    /// Fails with `InvalidArgument` if `max_n` is zero, or with whatever `f` returns first.
    pub fn build<F>(atomic_number: u32, max_n: u32, mut f: F) -> BohrResult<Self>
    where
        F: FnMut(u32) -> BohrResult<T>,
    {
        require_positive("max_n", max_n)?;
        let mut levels = BTreeMap::new();
        for n in 1..=max_n {
            levels.insert(n, f(n)?);
        }
        log::debug!(
            "built level summary for Z={} over n=1..={}",
            atomic_number,
            max_n
        );
        Ok(LevelSummary {
            atomic_number,
            levels,
        })
    }

    pub fn get(&self, n: u32) -> Option<&T> {
        self.levels.get(&n)
    }

    /// Highest level present.
    pub fn max_n(&self) -> u32 {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.levels.iter().map(|(n, value)| (*n, value))
    }
}

impl<T: Clone> LevelSummary<T> {
    /// `(n, value)` pairs in ascending `n`, the shape chart renderers consume.
    pub fn points(&self) -> Vec<(u32, T)> {
        self.levels
            .iter()
            .map(|(n, value)| (*n, value.clone()))
            .collect()
    }
}
