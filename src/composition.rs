//! Isotopic compositions and waste material batches.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Isotope identifier, `ZZZAAA` form (e.g. 92235 for U-235).
pub type Iso = u32;

/// Concentration of each isotope, in kg per m^3.
pub type IsoConcMap = BTreeMap<Iso, f64>;

/// Mass fractions below this are dropped as numerical residue.
pub const MASS_FRACTION_EPS: f64 = 1e-10;

/// Mass comparisons within this absolute tolerance are treated as equal (kg).
pub const KG_EPS: f64 = 1e-9;

/// A mapping from isotope to fractional mass abundance.
///
/// Abundances are non-negative but need not sum to one until
/// [`Composition::normalize`] is applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    fractions: BTreeMap<Iso, f64>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-isotope composition, fraction 1.
    pub fn pure(iso: Iso) -> Self {
        let mut fractions = BTreeMap::new();
        fractions.insert(iso, 1.0);
        Self { fractions }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Iso, f64)>) -> Self {
        Self {
            fractions: pairs.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    pub fn fraction(&self, iso: Iso) -> f64 {
        self.fractions.get(&iso).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Iso, &f64)> {
        self.fractions.iter()
    }

    /// Sum of all abundances; 1.0 after [`Composition::normalize`].
    pub fn total(&self) -> f64 {
        self.fractions.values().sum()
    }

    /// Scale all abundances so they sum to one.
    ///
    /// An empty or all-zero composition is left unchanged.
    pub fn normalize(&mut self) {
        let total = self.total();
        if total > 0.0 {
            for v in self.fractions.values_mut() {
                *v /= total;
            }
        }
    }

    /// Blend this composition toward `other` by `ratio`.
    ///
    /// The result is `self * (1 - ratio) + other * ratio`, the incremental
    /// form of a cumulative mass-weighted average when `ratio` is the new
    /// batch's share of the running total mass. Entries that fall below
    /// [`MASS_FRACTION_EPS`] are dropped as numerical residue.
    pub fn mix(&mut self, other: &Composition, ratio: f64) {
        debug_assert!((0.0..=1.0).contains(&ratio));
        for v in self.fractions.values_mut() {
            *v *= 1.0 - ratio;
        }
        for (iso, frac) in other.iter() {
            *self.fractions.entry(*iso).or_insert(0.0) += frac * ratio;
        }
        self.fractions.retain(|_, v| *v > MASS_FRACTION_EPS);
    }

    pub(crate) fn insert(&mut self, iso: Iso, fraction: f64) {
        self.fractions.insert(iso, fraction);
    }
}

/// One batch of waste material: a composition and its total mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    composition: Composition,
    mass_kg: f64,
}

impl Material {
    pub fn new(mut composition: Composition, mass_kg: f64) -> Self {
        composition.normalize();
        Self {
            composition,
            mass_kg,
        }
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Mass of a single isotope within this batch (kg).
    pub fn iso_mass_kg(&self, iso: Iso) -> f64 {
        self.composition.fraction(iso) * self.mass_kg
    }
}
