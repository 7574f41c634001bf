//! Time-indexed transport histories owned by a nuclide model.
//!
//! Both histories are append-only: one entry is written per time step by the
//! owning model, and lookups are by exact time step with no interpolation.
//! The two deliberately differ on a missing key: composition lookups fail,
//! concentration lookups degrade to a zero map.

use crate::composition::{Composition, IsoConcMap};
use crate::errors::{GenRepoError, GenRepoResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Discrete simulated time step, supplied by the external kernel.
pub type TimeStep = i32;

/// Isotope used to key the zero placeholder returned for an unwritten
/// concentration lookup.
pub const PLACEHOLDER_ISO: u32 = 92235;

/// Pooled (composition, total mass in kg) per time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionHistory {
    entries: BTreeMap<TimeStep, (Composition, f64)>,
}

impl Default for CompositionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionHistory {
    /// A fresh history, seeded with an empty inventory at step 0.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(0, (Composition::new(), 0.0));
        Self { entries }
    }

    pub fn record(&mut self, time: TimeStep, composition: Composition, mass_kg: f64) {
        self.entries.insert(time, (composition, mass_kg));
    }

    /// Exact-key lookup. A never-written time step is an error: the caller
    /// must have recorded the step first.
    pub fn get(&self, time: TimeStep) -> GenRepoResult<(Composition, f64)> {
        self.entries
            .get(&time)
            .cloned()
            .ok_or(GenRepoError::MissingHistory { time })
    }
}

/// Per-isotope concentration map per time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationHistory {
    entries: BTreeMap<TimeStep, IsoConcMap>,
}

impl Default for ConcentrationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcentrationHistory {
    /// A fresh history, seeded with a zero map at step 0.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(0, Self::zero_map());
        Self { entries }
    }

    fn zero_map() -> IsoConcMap {
        let mut map = IsoConcMap::new();
        map.insert(PLACEHOLDER_ISO, 0.0);
        map
    }

    pub fn record(&mut self, time: TimeStep, concentrations: IsoConcMap) {
        self.entries.insert(time, concentrations);
    }

    /// Exact-key lookup. A never-written time step returns the documented
    /// zero placeholder map rather than failing.
    pub fn get(&self, time: TimeStep) -> IsoConcMap {
        self.entries
            .get(&time)
            .cloned()
            .unwrap_or_else(Self::zero_map)
    }

    /// Concentration of a single isotope at `time`; unknown is zero.
    pub fn get_iso(&self, time: TimeStep, iso: u32) -> f64 {
        self.get(time).get(&iso).copied().unwrap_or(0.0)
    }
}
