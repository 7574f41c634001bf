//! Records produced for the external event/record sink.
//!
//! The sink owns the persistence schema; this crate only produces records
//! and treats delivery as fire-and-forget.

use crate::component::ComponentId;
use crate::composition::Iso;
use crate::history::TimeStep;
use serde::{Deserialize, Serialize};

/// One per isotope, per barrier, per time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminantRecord {
    pub component_id: ComponentId,
    pub time: TimeStep,
    pub iso: Iso,
    pub mass_kg: f64,
    pub avail_conc: f64,
}

/// One per barrier, at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component_id: ComponentId,
    pub parent_id: Option<ComponentId>,
    pub component_type: i32,
    pub name: String,
    pub material: String,
    pub nuclide_model: String,
    pub thermal_model: String,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub length: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Destination for simulation records.
pub trait EventSink {
    fn record_contaminant(&mut self, record: ContaminantRecord);
    fn record_component(&mut self, record: ComponentRecord);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record_contaminant(&mut self, _record: ContaminantRecord) {}
    fn record_component(&mut self, _record: ComponentRecord) {}
}

/// Retains every record in memory; the test double for the sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub contaminants: Vec<ContaminantRecord>,
    pub components: Vec<ComponentRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for MemorySink {
    fn record_contaminant(&mut self, record: ContaminantRecord) {
        self.contaminants.push(record);
    }

    fn record_component(&mut self, record: ComponentRecord) {
        self.components.push(record);
    }
}
