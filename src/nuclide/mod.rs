//! Nuclide transport model family.
//!
//! Each barrier owns exactly one boxed [`NuclideModel`]. Variants differ in
//! their release mechanism; the congruent-release (degradation-rate) variant
//! is the fully implemented member. Variant selection is a closed tag
//! resolved once at configuration time; dispatch is an explicit match, never
//! name-based lookup on the hot path.

mod deg_rate;
mod stub;

pub use deg_rate::DegRateNuclide;
pub use stub::StubNuclide;

use crate::composition::{Composition, IsoConcMap, Material};
use crate::errors::{GenRepoError, GenRepoResult};
use crate::geometry::Geometry;
use crate::history::TimeStep;
use crate::mat_table::MatDataTable;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Closed set of nuclide model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NuclideModelType {
    DegRateNuclide,
    LumpedNuclide,
    MixedCellNuclide,
    OneDimPPMNuclide,
    StubNuclide,
}

impl NuclideModelType {
    const NAMES: [&'static str; 5] = [
        "DegRateNuclide",
        "LumpedNuclide",
        "MixedCellNuclide",
        "OneDimPPMNuclide",
        "StubNuclide",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NuclideModelType::DegRateNuclide => Self::NAMES[0],
            NuclideModelType::LumpedNuclide => Self::NAMES[1],
            NuclideModelType::MixedCellNuclide => Self::NAMES[2],
            NuclideModelType::OneDimPPMNuclide => Self::NAMES[3],
            NuclideModelType::StubNuclide => Self::NAMES[4],
        }
    }

    /// Resolve a configuration name to its enum slot.
    pub fn from_name(name: &str) -> GenRepoResult<Self> {
        match name {
            "DegRateNuclide" => Ok(NuclideModelType::DegRateNuclide),
            "LumpedNuclide" => Ok(NuclideModelType::LumpedNuclide),
            "MixedCellNuclide" => Ok(NuclideModelType::MixedCellNuclide),
            "OneDimPPMNuclide" => Ok(NuclideModelType::OneDimPPMNuclide),
            "StubNuclide" => Ok(NuclideModelType::StubNuclide),
            _ => Err(GenRepoError::UnknownNuclideModel {
                name: name.to_string(),
                options: Self::NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

/// Resolved parameters for one nuclide model variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NuclideModelSpec {
    /// Congruent release: `degradation` is the fraction of the barrier
    /// material degrading per unit time, in [0, 1].
    DegRate { degradation: f64 },
    Lumped,
    MixedCell,
    OneDimPPM,
    Stub,
}

/// A nuclide transport model owned by a single barrier.
///
/// Mutating operations are synchronous in-memory computations; histories are
/// owned exclusively by the model instance and never shared.
#[typetag::serde]
pub trait NuclideModel: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> NuclideModelType;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn set_geometry(&mut self, geom: Geometry);

    fn geometry(&self) -> &Geometry;

    fn set_mat_table(&mut self, table: Arc<MatDataTable>);

    /// Take custody of a waste batch.
    fn absorb(&mut self, mat: Material) -> GenRepoResult<()>;

    /// Remove exactly `kg` of material with the given (normalised)
    /// composition from the contained inventory. Fails without mutating
    /// state if the inventory cannot cover the request.
    fn extract(&mut self, comp: &Composition, kg: f64) -> GenRepoResult<()>;

    /// Per-step entry point: advance internal state and histories to `time`.
    fn transport_nuclides(&mut self, time: TimeStep) -> GenRepoResult<()>;

    /// Pull source terms from every direct daughter's model. This is the
    /// mechanism by which contaminants propagate outward through nested
    /// barriers; the parent component calls it before its own transport.
    fn update_inner_bc(
        &mut self,
        time: TimeStep,
        daughters: &mut [&mut dyn NuclideModel],
    ) -> GenRepoResult<()>;

    /// Composition and mass available for release at the outer boundary.
    fn source_term_bc(&self) -> GenRepoResult<(Composition, f64)>;

    /// Fixed-concentration boundary condition at the outer boundary.
    fn dirichlet_bc(&self) -> IsoConcMap;

    /// Fixed-flux boundary condition at the outer boundary.
    fn neumann_bc(&self) -> IsoConcMap;

    /// Mixed boundary condition at the outer boundary.
    fn cauchy_bc(&self) -> IsoConcMap;

    /// Total contained mass at the last transported step (kg).
    fn contained_mass(&self) -> f64;

    /// Pooled (composition, mass) at an exactly written time step.
    fn vec_hist(&self, time: TimeStep) -> GenRepoResult<(Composition, f64)>;

    /// Concentration map at `time`; an unwritten step is the zero map.
    fn conc_hist(&self, time: TimeStep) -> IsoConcMap;

    /// Concentration of one isotope at `time`; unknown is zero.
    fn conc_hist_iso(&self, time: TimeStep, iso: u32) -> f64 {
        self.conc_hist(time).get(&iso).copied().unwrap_or(0.0)
    }

    /// Currently contained waste batches.
    fn wastes(&self) -> &[Material];

    /// A structurally independent copy: same parameters, fresh histories and
    /// inventory, degradation clock reset to `time`.
    fn copy_at(&self, time: TimeStep) -> Box<dyn NuclideModel>;
}

/// Construct a nuclide model from its resolved spec.
///
/// Closed dispatch over the variant tag: variants without an implementation
/// in this build are a fatal configuration error, never a silent default.
pub fn nuclide_model_from_spec(spec: &NuclideModelSpec) -> GenRepoResult<Box<dyn NuclideModel>> {
    match spec {
        NuclideModelSpec::DegRate { degradation } => {
            Ok(Box::new(DegRateNuclide::new(*degradation)?))
        }
        NuclideModelSpec::Stub => Ok(Box::new(StubNuclide::new())),
        NuclideModelSpec::Lumped => Err(GenRepoError::UnsupportedModel {
            kind: "nuclide",
            name: NuclideModelType::LumpedNuclide.name().to_string(),
        }),
        NuclideModelSpec::MixedCell => Err(GenRepoError::UnsupportedModel {
            kind: "nuclide",
            name: NuclideModelType::MixedCellNuclide.name().to_string(),
        }),
        NuclideModelSpec::OneDimPPM => Err(GenRepoError::UnsupportedModel {
            kind: "nuclide",
            name: NuclideModelType::OneDimPPMNuclide.name().to_string(),
        }),
    }
}
