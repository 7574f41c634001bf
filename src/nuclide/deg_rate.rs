//! Congruent-release nuclide model.
//!
//! Contaminant is made available at the barrier boundary in direct
//! proportion to how much of the barrier material has degraded: a barrier
//! degrading at 15% per year offers 15% of its contained inventory per year
//! at its boundary. Degradation accumulates monotonically and saturates at 1,
//! after which the full inventory is offered at every boundary query.
//!
//! Suitable for the waste form, waste package, buffer and near field; the far
//! field does not degrade and is better served by another variant.

use crate::composition::{Composition, IsoConcMap, Material, KG_EPS};
use crate::errors::{GenRepoError, GenRepoResult};
use crate::geometry::Geometry;
use crate::history::{CompositionHistory, ConcentrationHistory, TimeStep};
use crate::mat_table::MatDataTable;
use crate::nuclide::{NuclideModel, NuclideModelType};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegRateNuclide {
    /// Fraction of the barrier material degrading per unit time, in [0, 1].
    deg_rate: f64,
    /// Cumulative degraded fraction, monotone non-decreasing, saturates at 1.
    tot_deg: f64,
    /// The last time step degradation was advanced to. Never decreases.
    last_degraded: TimeStep,
    /// Contained waste batches, in arrival order. Batches are not merged at
    /// absorb time; pooling happens lazily during the history update.
    wastes: Vec<Material>,
    geom: Geometry,
    mat_table: Option<Arc<MatDataTable>>,
    vec_hist: CompositionHistory,
    conc_hist: ConcentrationHistory,
}

impl DegRateNuclide {
    pub fn new(deg_rate: f64) -> GenRepoResult<Self> {
        let mut model = Self {
            deg_rate: 0.0,
            tot_deg: 0.0,
            last_degraded: 0,
            wastes: Vec::new(),
            geom: Geometry::default(),
            mat_table: None,
            vec_hist: CompositionHistory::new(),
            conc_hist: ConcentrationHistory::new(),
        };
        model.set_deg_rate(deg_rate)?;
        Ok(model)
    }

    pub fn deg_rate(&self) -> f64 {
        self.deg_rate
    }

    pub fn set_deg_rate(&mut self, deg_rate: f64) -> GenRepoResult<()> {
        if !(0.0..=1.0).contains(&deg_rate) {
            return Err(GenRepoError::OutOfRange {
                what: "degradation rate",
                value: deg_rate,
                min: 0.0,
                max: 1.0,
            });
        }
        self.deg_rate = deg_rate;
        Ok(())
    }

    pub fn tot_deg(&self) -> f64 {
        self.tot_deg
    }

    pub fn last_degraded(&self) -> TimeStep {
        self.last_degraded
    }

    /// Advance cumulative degradation to `time`.
    ///
    /// The increment is linear in elapsed time, so irregular step sizes are
    /// handled correctly as long as calls are monotonic. Calling with a time
    /// earlier than the last update indicates a kernel ordering bug and is a
    /// programming error, not a recoverable condition.
    pub fn update_degradation(&mut self, time: TimeStep, deg_rate: f64) -> f64 {
        assert!(
            time >= self.last_degraded,
            "degradation updated out of order: step {} after step {}",
            time,
            self.last_degraded
        );
        assert!((0.0..=1.0).contains(&deg_rate));
        let total = self.tot_deg + deg_rate * f64::from(time - self.last_degraded);
        self.tot_deg = total.min(1.0);
        self.last_degraded = time;
        self.tot_deg
    }

    /// Pool a set of batches into a single (composition, mass) pair.
    ///
    /// Batches are processed in arrival order, blending a running composition
    /// toward each new batch by the batch's share of the running total mass.
    /// The result is a cumulative mass-weighted average, normalised to sum
    /// to one.
    pub fn sum_mats(mats: &[Material]) -> (Composition, f64) {
        let mut vec = Composition::new();
        let mut kg = 0.0;
        for mat in mats {
            let this_mass = mat.mass_kg();
            kg += this_mass;
            let ratio = if kg > 0.0 { this_mass / kg } else { 0.0 };
            vec.mix(mat.composition(), ratio);
        }
        vec.normalize();
        (vec, kg)
    }

    /// Re-pool the contained batches and write the result to the composition
    /// history at `time`.
    pub fn update_vec_hist(&mut self, time: TimeStep) {
        let (comp, kg) = Self::sum_mats(&self.wastes);
        self.vec_hist.record(time, comp, kg);
    }

    /// Convert the pooled inventory at `time` into per-isotope concentration
    /// over the barrier's geometric volume and write it to the concentration
    /// history.
    pub fn update_conc_hist(&mut self, time: TimeStep) -> GenRepoResult<IsoConcMap> {
        let (comp, mass) = self.vec_hist.get(time)?;

        let mut to_ret = IsoConcMap::new();
        if mass > KG_EPS {
            let volume = self.geom.volume();
            if volume <= 0.0 {
                return Err(GenRepoError::InvalidGeometry {
                    reason: format!(
                        "cannot compute concentrations for {} kg in a zero-volume barrier",
                        mass
                    ),
                });
            }
            let scale = mass / volume;
            for (iso, frac) in comp.iter() {
                to_ret.insert(*iso, frac * scale);
            }
        }
        self.conc_hist.record(time, to_ret.clone());
        Ok(to_ret)
    }
}

#[typetag::serde]
impl NuclideModel for DegRateNuclide {
    fn kind(&self) -> NuclideModelType {
        NuclideModelType::DegRateNuclide
    }

    fn set_geometry(&mut self, geom: Geometry) {
        self.geom = geom;
    }

    fn geometry(&self) -> &Geometry {
        &self.geom
    }

    fn set_mat_table(&mut self, table: Arc<MatDataTable>) {
        self.mat_table = Some(table);
    }

    fn absorb(&mut self, mat: Material) -> GenRepoResult<()> {
        debug!("DegRateNuclide absorbing {} kg", mat.mass_kg());
        self.wastes.push(mat);
        Ok(())
    }

    fn extract(&mut self, comp: &Composition, kg: f64) -> GenRepoResult<()> {
        debug!("DegRateNuclide extracting {} kg", kg);
        let (pooled_comp, pooled_mass) = Self::sum_mats(&self.wastes);

        if kg > pooled_mass + KG_EPS {
            return Err(GenRepoError::InsufficientMass {
                requested: kg,
                available: pooled_mass,
            });
        }

        let mut to_rem = comp.clone();
        to_rem.normalize();

        // Scale the removed composition to the pool's mass basis and check
        // the balance isotope by isotope before touching any state.
        for (iso, frac) in to_rem.iter() {
            let requested = frac * kg;
            let available = pooled_comp.fraction(*iso) * pooled_mass;
            if requested > available + KG_EPS {
                return Err(GenRepoError::MassBalance {
                    iso: *iso,
                    requested,
                    available,
                });
            }
        }

        // Vector-subtract on the pooled mass basis, dropping residue below
        // the threshold, and retain the remainder as a single batch.
        let mut remainder = Composition::new();
        for (iso, frac) in pooled_comp.iter() {
            let left = frac * pooled_mass - to_rem.fraction(*iso) * kg;
            if left > KG_EPS {
                remainder.insert(*iso, left);
            }
        }
        remainder.normalize();
        let remainder_mass = (pooled_mass - kg).max(0.0);

        self.wastes.clear();
        if remainder_mass > KG_EPS {
            self.wastes.push(Material::new(remainder, remainder_mass));
        }
        Ok(())
    }

    fn transport_nuclides(&mut self, time: TimeStep) -> GenRepoResult<()> {
        // Degradation state must be current before the histories are
        // recomputed; the boundary queries consume it.
        self.update_degradation(time, self.deg_rate);
        self.update_vec_hist(time);
        self.update_conc_hist(time)?;
        Ok(())
    }

    fn update_inner_bc(
        &mut self,
        _time: TimeStep,
        daughters: &mut [&mut dyn NuclideModel],
    ) -> GenRepoResult<()> {
        for daughter in daughters.iter_mut() {
            let (comp, kg) = daughter.source_term_bc()?;
            if kg > KG_EPS {
                daughter.extract(&comp, kg)?;
                self.absorb(Material::new(comp, kg))?;
            }
        }
        Ok(())
    }

    fn source_term_bc(&self) -> GenRepoResult<(Composition, f64)> {
        let (comp, mass) = self.vec_hist.get(self.last_degraded)?;
        Ok((comp, self.tot_deg * mass))
    }

    fn dirichlet_bc(&self) -> IsoConcMap {
        self.conc_hist
            .get(self.last_degraded)
            .into_iter()
            .map(|(iso, conc)| (iso, self.tot_deg * conc))
            .collect()
    }

    fn neumann_bc(&self) -> IsoConcMap {
        // Placeholder: returns the unscaled concentration history. See the
        // open questions in DESIGN.md.
        self.conc_hist.get(self.last_degraded)
    }

    fn cauchy_bc(&self) -> IsoConcMap {
        // Placeholder, as neumann_bc.
        self.conc_hist.get(self.last_degraded)
    }

    fn contained_mass(&self) -> f64 {
        self.vec_hist
            .get(self.last_degraded)
            .map(|(_, mass)| mass)
            .unwrap_or(0.0)
    }

    fn vec_hist(&self, time: TimeStep) -> GenRepoResult<(Composition, f64)> {
        self.vec_hist.get(time)
    }

    fn conc_hist(&self, time: TimeStep) -> IsoConcMap {
        self.conc_hist.get(time)
    }

    fn wastes(&self) -> &[Material] {
        &self.wastes
    }

    fn copy_at(&self, time: TimeStep) -> Box<dyn NuclideModel> {
        Box::new(Self {
            deg_rate: self.deg_rate,
            tot_deg: 0.0,
            // Reset to the current kernel time so degradation does not
            // back-accumulate across the copy.
            last_degraded: time,
            wastes: Vec::new(),
            geom: self.geom.clone(),
            mat_table: self.mat_table.clone(),
            vec_hist: CompositionHistory::new(),
            conc_hist: ConcentrationHistory::new(),
        })
    }
}
