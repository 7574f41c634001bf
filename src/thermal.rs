//! Heat transport model family.
//!
//! Structurally parallel to the nuclide family: each barrier owns exactly one
//! boxed [`ThermalModel`], selected by a closed tag resolved once at
//! configuration time. Heat transport itself is not the focus of this crate,
//! so the variants here only maintain a per-step temperature record.

use crate::errors::{GenRepoError, GenRepoResult};
use crate::geometry::Geometry;
use crate::history::TimeStep;
use crate::mat_table::MatDataTable;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Closed set of thermal model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalModelType {
    LumpedThermal,
    StubThermal,
}

impl ThermalModelType {
    const NAMES: [&'static str; 2] = ["LumpedThermal", "StubThermal"];

    pub fn name(&self) -> &'static str {
        match self {
            ThermalModelType::LumpedThermal => Self::NAMES[0],
            ThermalModelType::StubThermal => Self::NAMES[1],
        }
    }

    /// Resolve a configuration name to its enum slot.
    pub fn from_name(name: &str) -> GenRepoResult<Self> {
        match name {
            "LumpedThermal" => Ok(ThermalModelType::LumpedThermal),
            "StubThermal" => Ok(ThermalModelType::StubThermal),
            _ => Err(GenRepoError::UnknownThermalModel {
                name: name.to_string(),
                options: Self::NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

/// Resolved parameters for one thermal model variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ThermalModelSpec {
    Lumped { initial_temperature: f64 },
    Stub,
}

/// A heat transport model owned by a single barrier.
#[typetag::serde]
pub trait ThermalModel: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> ThermalModelType;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn set_geometry(&mut self, geom: Geometry);

    fn set_mat_table(&mut self, table: Arc<MatDataTable>);

    /// Advance the model's heat transport to `time`.
    fn transport_heat(&mut self, time: TimeStep) -> GenRepoResult<()>;

    /// Current temperature at the barrier (K).
    fn temperature(&self) -> f64;

    /// A structurally independent copy: same parameters, fresh history,
    /// clocks reset to `time`.
    fn copy_at(&self, time: TimeStep) -> Box<dyn ThermalModel>;
}

/// Construct a thermal model from its resolved spec. Closed dispatch: every
/// variant is handled explicitly.
pub fn thermal_model_from_spec(spec: &ThermalModelSpec) -> GenRepoResult<Box<dyn ThermalModel>> {
    match spec {
        ThermalModelSpec::Lumped {
            initial_temperature,
        } => Ok(Box::new(LumpedThermal::new(*initial_temperature))),
        ThermalModelSpec::Stub => Ok(Box::new(StubThermal::new())),
    }
}

/// Inert thermal model for barriers whose heat transport is modelled
/// elsewhere (or not at all).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubThermal {
    geom: Geometry,
}

impl StubThermal {
    pub fn new() -> Self {
        Self::default()
    }
}

#[typetag::serde]
impl ThermalModel for StubThermal {
    fn kind(&self) -> ThermalModelType {
        ThermalModelType::StubThermal
    }

    fn set_geometry(&mut self, geom: Geometry) {
        self.geom = geom;
    }

    fn set_mat_table(&mut self, _table: Arc<MatDataTable>) {}

    fn transport_heat(&mut self, time: TimeStep) -> GenRepoResult<()> {
        debug!("StubThermal ignoring heat transport at step {}", time);
        Ok(())
    }

    fn temperature(&self) -> f64 {
        0.0
    }

    fn copy_at(&self, _time: TimeStep) -> Box<dyn ThermalModel> {
        Box::new(StubThermal::new())
    }
}

/// Lumped-parameter thermal model: the barrier is treated as a single
/// isothermal node whose temperature is recorded per time step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpedThermal {
    temperature: f64,
    temp_hist: BTreeMap<TimeStep, f64>,
    geom: Geometry,
    mat_table: Option<Arc<MatDataTable>>,
}

impl LumpedThermal {
    pub fn new(initial_temperature: f64) -> Self {
        Self {
            temperature: initial_temperature,
            temp_hist: BTreeMap::new(),
            geom: Geometry::default(),
            mat_table: None,
        }
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Recorded temperature at `time`, if that step has been transported.
    pub fn temp_at(&self, time: TimeStep) -> Option<f64> {
        self.temp_hist.get(&time).copied()
    }
}

#[typetag::serde]
impl ThermalModel for LumpedThermal {
    fn kind(&self) -> ThermalModelType {
        ThermalModelType::LumpedThermal
    }

    fn set_geometry(&mut self, geom: Geometry) {
        self.geom = geom;
    }

    fn set_mat_table(&mut self, table: Arc<MatDataTable>) {
        self.mat_table = Some(table);
    }

    fn transport_heat(&mut self, time: TimeStep) -> GenRepoResult<()> {
        debug!(
            "LumpedThermal recording {} K at step {}",
            self.temperature, time
        );
        self.temp_hist.insert(time, self.temperature);
        Ok(())
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn copy_at(&self, _time: TimeStep) -> Box<dyn ThermalModel> {
        Box::new(LumpedThermal::new(self.temperature))
    }
}
