//! Inert nuclide model.
//!
//! Holds whatever it is given and never releases anything. Used where a
//! barrier must exist structurally but its transport is modelled elsewhere.

use crate::composition::{Composition, IsoConcMap, Material};
use crate::errors::GenRepoResult;
use crate::geometry::Geometry;
use crate::history::{CompositionHistory, ConcentrationHistory, TimeStep};
use crate::mat_table::MatDataTable;
use crate::nuclide::{NuclideModel, NuclideModelType};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubNuclide {
    wastes: Vec<Material>,
    geom: Geometry,
    mat_table: Option<Arc<MatDataTable>>,
    conc_hist: ConcentrationHistory,
}

impl StubNuclide {
    pub fn new() -> Self {
        Self::default()
    }
}

#[typetag::serde]
impl NuclideModel for StubNuclide {
    fn kind(&self) -> NuclideModelType {
        NuclideModelType::StubNuclide
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
        debug!("StubNuclide absorbing {} kg", mat.mass_kg());
        self.wastes.push(mat);
        Ok(())
    }

    fn extract(&mut self, _comp: &Composition, _kg: f64) -> GenRepoResult<()> {
        // Nothing is ever offered at the boundary, so nothing is extracted.
        Ok(())
    }

    fn transport_nuclides(&mut self, time: TimeStep) -> GenRepoResult<()> {
        debug!("StubNuclide ignoring transport at step {}", time);
        Ok(())
    }

    fn update_inner_bc(
        &mut self,
        _time: TimeStep,
        _daughters: &mut [&mut dyn NuclideModel],
    ) -> GenRepoResult<()> {
        Ok(())
    }

    fn source_term_bc(&self) -> GenRepoResult<(Composition, f64)> {
        Ok((Composition::new(), 0.0))
    }

    fn dirichlet_bc(&self) -> IsoConcMap {
        self.conc_hist.get(0)
    }

    fn neumann_bc(&self) -> IsoConcMap {
        self.conc_hist.get(0)
    }

    fn cauchy_bc(&self) -> IsoConcMap {
        self.conc_hist.get(0)
    }

    fn contained_mass(&self) -> f64 {
        self.wastes.iter().map(Material::mass_kg).sum()
    }

    fn vec_hist(&self, time: TimeStep) -> GenRepoResult<(Composition, f64)> {
        CompositionHistory::new().get(time)
    }

    fn conc_hist(&self, time: TimeStep) -> IsoConcMap {
        self.conc_hist.get(time)
    }

    fn wastes(&self) -> &[Material] {
        &self.wastes
    }

    fn copy_at(&self, _time: TimeStep) -> Box<dyn NuclideModel> {
        Box::new(StubNuclide::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Iso;

    const ISO_X: Iso = 92235;

    #[test]
    fn stub_never_offers_anything() {
        let mut model = StubNuclide::new();
        model
            .absorb(Material::new(Composition::pure(ISO_X), 10.0))
            .unwrap();
        model.transport_nuclides(5).unwrap();

        let (comp, mass) = model.source_term_bc().unwrap();
        assert!(comp.is_empty());
        assert_eq!(mass, 0.0);
        assert_eq!(model.contained_mass(), 10.0);
    }

    #[test]
    fn stub_boundary_queries_are_zero_maps() {
        let model = StubNuclide::new();
        assert_eq!(model.dirichlet_bc().get(&ISO_X), Some(&0.0));
        assert_eq!(model.neumann_bc(), model.cauchy_bc());
    }
}
