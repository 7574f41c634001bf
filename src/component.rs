//! Barrier components and the containment tree.
//!
//! A [`Component`] is one engineered containment layer (waste form, waste
//! package, buffer, far field). It owns exactly one thermal model, exactly
//! one nuclide model, a shared reference to its material's chemistry table,
//! and its daughter components. Ownership flows down the tree; the parent
//! back-reference is an id, never used for lifetime management.

use crate::errors::{GenRepoError, GenRepoResult};
use crate::events::{ComponentRecord, ContaminantRecord, EventSink};
use crate::geometry::{Geometry, Point3};
use crate::history::TimeStep;
use crate::mat_table::MatDataTable;
use crate::nuclide::NuclideModel;
use crate::thermal::ThermalModel;
use log::error;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Process-unique, monotonically assigned component identity.
pub type ComponentId = u32;

static NEXT_COMPONENT_ID: AtomicU32 = AtomicU32::new(0);

fn next_component_id() -> ComponentId {
    NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Default temperature limit for a barrier (K).
const DEFAULT_TEMP_LIM: f64 = 373.0;

/// Closed set of barrier types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    Buffer,
    FarField,
    WasteForm,
    WastePackage,
}

impl ComponentType {
    const NAMES: [&'static str; 4] = ["BUFFER", "FF", "WF", "WP"];

    pub fn name(&self) -> &'static str {
        Self::NAMES[self.code() as usize]
    }

    /// Stable integer code, used by the component record schema.
    pub fn code(&self) -> i32 {
        match self {
            ComponentType::Buffer => 0,
            ComponentType::FarField => 1,
            ComponentType::WasteForm => 2,
            ComponentType::WastePackage => 3,
        }
    }

    /// Resolve a configuration name to its enum slot.
    pub fn from_name(name: &str) -> GenRepoResult<Self> {
        match name {
            "BUFFER" => Ok(ComponentType::Buffer),
            "FF" => Ok(ComponentType::FarField),
            "WF" => Ok(ComponentType::WasteForm),
            "WP" => Ok(ComponentType::WastePackage),
            _ => Err(GenRepoError::UnknownComponentType {
                name: name.to_string(),
                options: Self::NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

/// Which face of the barrier a quantity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryType {
    Inner,
    Outer,
}

/// Transfer failures swallowed at the component facade.
///
/// A single bad absorb/extract must not abort the surrounding step, so the
/// facade logs the failure and keeps going; the entries retained here let
/// tests assert on swallowed failures without a logger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferLog {
    failures: Vec<String>,
}

impl TransferLog {
    fn record(&mut self, op: &str, err: &GenRepoError) {
        self.failures.push(format!("{}: {}", op, err));
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One engineered containment layer in the repository.
#[derive(Debug, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    name: String,
    kind: ComponentType,
    geom: Geometry,
    thermal: Option<Box<dyn ThermalModel>>,
    nuclide: Option<Box<dyn NuclideModel>>,
    mat_table: Option<Arc<MatDataTable>>,
    parent: Option<ComponentId>,
    children: Vec<Component>,
    temp: f64,
    peak_inner_temp: f64,
    peak_outer_temp: f64,
    temp_lim: f64,
    transfer_log: TransferLog,
}

impl Component {
    /// An uninitialised shell: no models, no material data. Only useful to
    /// the kernel as a placeholder before `init`.
    pub fn new() -> Self {
        Self {
            id: next_component_id(),
            name: String::new(),
            kind: ComponentType::FarField,
            geom: Geometry::default(),
            thermal: None,
            nuclide: None,
            mat_table: None,
            parent: None,
            children: Vec::new(),
            temp: 0.0,
            peak_inner_temp: 0.0,
            peak_outer_temp: 0.0,
            temp_lim: DEFAULT_TEMP_LIM,
            transfer_log: TransferLog::default(),
        }
    }

    /// Initialise a barrier with its models and geometry.
    ///
    /// Fails with a construction error if either model is absent; otherwise
    /// binds the geometry and material table into both models and assigns a
    /// fresh identity. Histories start empty (they live inside the models).
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        name: impl Into<String>,
        kind: ComponentType,
        mat_table: Arc<MatDataTable>,
        inner_radius: f64,
        outer_radius: f64,
        thermal: Option<Box<dyn ThermalModel>>,
        nuclide: Option<Box<dyn NuclideModel>>,
    ) -> GenRepoResult<Self> {
        let name = name.into();
        let (Some(mut thermal), Some(mut nuclide)) = (thermal, nuclide) else {
            return Err(GenRepoError::MissingModel {
                component: name,
                which: "thermal or nuclide",
            });
        };

        let geom = Geometry::new(inner_radius, outer_radius, 0.0, Point3::default())?;
        thermal.set_geometry(geom.clone());
        thermal.set_mat_table(mat_table.clone());
        nuclide.set_geometry(geom.clone());
        nuclide.set_mat_table(mat_table.clone());

        Ok(Self {
            id: next_component_id(),
            name,
            kind,
            geom,
            thermal: Some(thermal),
            nuclide: Some(nuclide),
            mat_table: Some(mat_table),
            parent: None,
            children: Vec::new(),
            temp: 0.0,
            peak_inner_temp: 0.0,
            peak_outer_temp: 0.0,
            temp_lim: DEFAULT_TEMP_LIM,
            transfer_log: TransferLog::default(),
        })
    }

    /// A structurally independent copy of `src` with a new identity.
    ///
    /// Geometry is deep-copied, centroid included: if the copy should not
    /// lie on top of the original, reposition it with
    /// [`Component::set_placement`]. Sub-models are copied through their own
    /// copy contracts with clocks reset to `time`; histories start fresh.
    pub fn copy(src: &Component, time: TimeStep) -> GenRepoResult<Self> {
        let Some(src_thermal) = src.thermal.as_deref() else {
            return Err(GenRepoError::MissingModel {
                component: src.name.clone(),
                which: "thermal",
            });
        };
        let Some(src_nuclide) = src.nuclide.as_deref() else {
            return Err(GenRepoError::MissingModel {
                component: src.name.clone(),
                which: "nuclide",
            });
        };

        let geom = Geometry::copy_with_centroid(&src.geom, src.geom.centroid());
        let mut thermal = src_thermal.copy_at(time);
        let mut nuclide = src_nuclide.copy_at(time);
        thermal.set_geometry(geom.clone());
        nuclide.set_geometry(geom.clone());
        if let Some(table) = &src.mat_table {
            thermal.set_mat_table(table.clone());
            nuclide.set_mat_table(table.clone());
        }

        Ok(Self {
            id: next_component_id(),
            name: src.name.clone(),
            kind: src.kind,
            geom,
            thermal: Some(thermal),
            nuclide: Some(nuclide),
            mat_table: src.mat_table.clone(),
            parent: None,
            children: Vec::new(),
            temp: src.temp,
            peak_inner_temp: 0.0,
            peak_outer_temp: 0.0,
            temp_lim: src.temp_lim,
            transfer_log: TransferLog::default(),
        })
    }

    /// Attach `child` as an owned daughter and set its parent back-reference.
    /// Returns `&mut self` so loads can be chained. No capacity check is
    /// performed here; see [`Component::is_full`].
    pub fn load(&mut self, mut child: Component) -> &mut Self {
        child.parent = Some(self.id);
        self.children.push(child);
        self
    }

    /// Whether this barrier can accept no further daughters.
    ///
    /// Buffers fill up when their daughters' lengths reach their own length;
    /// every other type reports full unconditionally (a deliberate
    /// simplification, not a physical capacity model).
    pub fn is_full(&self) -> bool {
        match self.kind {
            ComponentType::Buffer => {
                let loaded: f64 = self.children.iter().map(|c| c.geom.length()).sum();
                loaded >= self.geom.length()
            }
            _ => true,
        }
    }

    /// Advance heat transport to `time`. Logs and no-ops when no thermal
    /// model is attached.
    pub fn transport_heat(&mut self, time: TimeStep) -> GenRepoResult<()> {
        let Some(model) = self.thermal.as_deref_mut() else {
            error!(
                "no thermal model loaded before transport_heat on component '{}'",
                self.name
            );
            return Ok(());
        };
        model.transport_heat(time)?;
        self.temp = model.temperature();
        // Current thermal variants expose a single node temperature, so both
        // peaks track the same value until a variant reports per-boundary
        // temperatures.
        self.peak_inner_temp = self.peak_inner_temp.max(self.temp);
        self.peak_outer_temp = self.peak_outer_temp.max(self.temp);
        Ok(())
    }

    /// Advance nuclide transport to `time` for this barrier only.
    ///
    /// Pulls the already-updated source terms from every direct daughter's
    /// nuclide model, then transports this barrier's own model. Correct only
    /// when every daughter has already been transported for the same `time`;
    /// the kernel owns that ordering (or use
    /// [`Component::transport_nuclides_tree`]).
    pub fn transport_nuclides(&mut self, time: TimeStep) -> GenRepoResult<()> {
        let Some(model) = self.nuclide.as_deref_mut() else {
            error!(
                "no nuclide model loaded before transport_nuclides on component '{}'",
                self.name
            );
            return Ok(());
        };
        let mut daughters: Vec<&mut dyn NuclideModel> = Vec::new();
        for child in self.children.iter_mut() {
            if let Some(m) = child.nuclide.as_deref_mut() {
                daughters.push(m);
            }
        }
        model.update_inner_bc(time, &mut daughters)?;
        model.transport_nuclides(time)
    }

    /// Post-order walk: transport every daughter subtree, then this barrier.
    /// This is the innermost-first ordering the transport model requires.
    pub fn transport_nuclides_tree(&mut self, time: TimeStep) -> GenRepoResult<()> {
        for child in &mut self.children {
            child.transport_nuclides_tree(time)?;
        }
        self.transport_nuclides(time)
    }

    /// Best-effort absorb through the facade: a failure is logged and
    /// swallowed so one bad transfer cannot halt the surrounding step.
    pub fn absorb(&mut self, mat: crate::composition::Material) {
        let Some(model) = self.nuclide.as_deref_mut() else {
            error!("no nuclide model loaded before absorb on component '{}'", self.name);
            return;
        };
        if let Err(e) = model.absorb(mat) {
            error!("error absorbing material into component '{}': {}", self.name, e);
            self.transfer_log.record("absorb", &e);
        }
    }

    /// Best-effort extract through the facade; see [`Component::absorb`].
    pub fn extract(&mut self, comp: &crate::composition::Composition, kg: f64) {
        let Some(model) = self.nuclide.as_deref_mut() else {
            error!("no nuclide model loaded before extract on component '{}'", self.name);
            return;
        };
        if let Err(e) = model.extract(comp, kg) {
            error!("error extracting material from component '{}': {}", self.name, e);
            self.transfer_log.record("extract", &e);
        }
    }

    /// Reposition this barrier and re-sync the geometry held by its models.
    pub fn set_placement(&mut self, centroid: Point3, length: f64) -> GenRepoResult<()> {
        self.geom.set_centroid(centroid);
        self.geom.set_length(length)?;
        if let Some(model) = self.thermal.as_deref_mut() {
            model.set_geometry(self.geom.clone());
        }
        if let Some(model) = self.nuclide.as_deref_mut() {
            model.set_geometry(self.geom.clone());
        }
        Ok(())
    }

    /// Emit one contaminant record per isotope contained at `time`.
    pub fn record_contaminants(
        &self,
        time: TimeStep,
        sink: &mut dyn EventSink,
    ) -> GenRepoResult<()> {
        let model = self
            .nuclide
            .as_deref()
            .ok_or_else(|| GenRepoError::MissingModel {
                component: self.name.clone(),
                which: "nuclide",
            })?;
        let (comp, mass) = model.vec_hist(time)?;
        for (iso, frac) in comp.iter() {
            sink.record_contaminant(ContaminantRecord {
                component_id: self.id,
                time,
                iso: *iso,
                mass_kg: frac * mass,
                avail_conc: model.conc_hist_iso(time, *iso),
            });
        }
        Ok(())
    }

    /// Emit the one-time component record for this barrier.
    pub fn record_component(&self, sink: &mut dyn EventSink) -> GenRepoResult<()> {
        let nuclide = self
            .nuclide
            .as_deref()
            .ok_or_else(|| GenRepoError::MissingModel {
                component: self.name.clone(),
                which: "nuclide",
            })?;
        let thermal = self
            .thermal
            .as_deref()
            .ok_or_else(|| GenRepoError::MissingModel {
                component: self.name.clone(),
                which: "thermal",
            })?;
        let material = self
            .mat_table
            .as_deref()
            .map(|t| t.mat().to_string())
            .unwrap_or_default();

        sink.record_component(ComponentRecord {
            component_id: self.id,
            parent_id: self.parent,
            component_type: self.kind.code(),
            name: self.name.clone(),
            material,
            nuclide_model: nuclide.name().to_string(),
            thermal_model: thermal.name().to_string(),
            inner_radius: self.geom.inner_radius(),
            outer_radius: self.geom.outer_radius(),
            length: self.geom.length(),
            x: self.geom.x(),
            y: self.geom.y(),
            z: self.geom.z(),
        });
        Ok(())
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentType {
        self.kind
    }

    pub fn geom(&self) -> &Geometry {
        &self.geom
    }

    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Component] {
        &mut self.children
    }

    pub fn mat_table(&self) -> Option<&Arc<MatDataTable>> {
        self.mat_table.as_ref()
    }

    pub fn nuclide_model(&self) -> Option<&dyn NuclideModel> {
        self.nuclide.as_deref()
    }

    pub fn thermal_model(&self) -> Option<&dyn ThermalModel> {
        self.thermal.as_deref()
    }

    pub fn temp(&self) -> f64 {
        self.temp
    }

    pub fn temp_lim(&self) -> f64 {
        self.temp_lim
    }

    pub fn peak_temp(&self, boundary: BoundaryType) -> f64 {
        match boundary {
            BoundaryType::Inner => self.peak_inner_temp,
            BoundaryType::Outer => self.peak_outer_temp,
        }
    }

    pub fn transfer_log(&self) -> &TransferLog {
        &self.transfer_log
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::{Composition, Iso, Material};
    use crate::events::MemorySink;
    use crate::mat_table::{ElementData, MatDataTable};
    use crate::nuclide::{DegRateNuclide, NuclideModelType, StubNuclide};
    use crate::thermal::{LumpedThermal, StubThermal};
    use is_close::is_close;

    const ISO_X: Iso = 92235;

    fn test_table() -> Arc<MatDataTable> {
        Arc::new(MatDataTable::new(
            "clay",
            vec![ElementData {
                elem: 92,
                d: 4.0e-10,
                k_d: 0.6,
                s: 2.0e-3,
            }],
            2.0e-10,
            0.2,
            1.0e-3,
        ))
    }

    fn deg_component(name: &str, kind: ComponentType, deg_rate: f64) -> Component {
        let mut comp = Component::init(
            name,
            kind,
            test_table(),
            0.0,
            1.0,
            Some(Box::new(StubThermal::new())),
            Some(Box::new(DegRateNuclide::new(deg_rate).unwrap())),
        )
        .unwrap();
        comp.set_placement(Point3::default(), 1.0).unwrap();
        comp
    }

    #[test]
    fn init_requires_both_models() {
        let res = Component::init(
            "wp",
            ComponentType::WastePackage,
            test_table(),
            0.0,
            1.0,
            None,
            Some(Box::new(StubNuclide::new())),
        );
        assert!(matches!(res, Err(GenRepoError::MissingModel { .. })));

        let res = Component::init(
            "wp",
            ComponentType::WastePackage,
            test_table(),
            0.0,
            1.0,
            Some(Box::new(StubThermal::new())),
            None,
        );
        assert!(matches!(res, Err(GenRepoError::MissingModel { .. })));
    }

    #[test]
    fn init_binds_geometry_into_models() {
        let comp = deg_component("wf", ComponentType::WasteForm, 0.1);
        let model = comp.nuclide_model().unwrap();
        assert_eq!(model.geometry().outer_radius(), 1.0);
        assert_eq!(model.geometry().length(), 1.0);
    }

    #[test]
    fn identities_are_unique() {
        let a = deg_component("a", ComponentType::WasteForm, 0.0);
        let b = deg_component("b", ComponentType::WasteForm, 0.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn copy_gets_fresh_identity_and_histories() {
        let mut src = deg_component("wf", ComponentType::WasteForm, 0.1);
        src.absorb(Material::new(Composition::pure(ISO_X), 10.0));
        src.transport_nuclides(3).unwrap();

        let copy = Component::copy(&src, 3).unwrap();
        assert_ne!(copy.id(), src.id());
        assert_eq!(copy.name(), "wf");
        assert_eq!(copy.geom().outer_radius(), 1.0);
        assert_eq!(copy.geom().centroid(), src.geom().centroid());

        let model = copy.nuclide_model().unwrap();
        assert_eq!(model.kind(), NuclideModelType::DegRateNuclide);
        assert!(model.wastes().is_empty());
        assert!(model.vec_hist(3).is_err());
    }

    #[test]
    fn copy_of_uninitialised_shell_fails() {
        let shell = Component::new();
        assert!(matches!(
            Component::copy(&shell, 0),
            Err(GenRepoError::MissingModel { .. })
        ));
    }

    #[test]
    fn load_sets_parent_and_chains() {
        let mut buffer = deg_component("buffer", ComponentType::Buffer, 0.0);
        let wp1 = deg_component("wp1", ComponentType::WastePackage, 0.1);
        let wp2 = deg_component("wp2", ComponentType::WastePackage, 0.1);
        let buffer_id = buffer.id();

        buffer.load(wp1).load(wp2);

        assert_eq!(buffer.children().len(), 2);
        for child in buffer.children() {
            assert_eq!(child.parent(), Some(buffer_id));
        }
    }

    #[test]
    fn buffer_is_full_when_daughter_lengths_reach_own_length() {
        let mut buffer = deg_component("buffer", ComponentType::Buffer, 0.0);
        buffer.set_placement(Point3::default(), 2.0).unwrap();
        assert!(!buffer.is_full());

        let mut wp = deg_component("wp1", ComponentType::WastePackage, 0.1);
        wp.set_placement(Point3::default(), 1.0).unwrap();
        buffer.load(wp);
        assert!(!buffer.is_full());

        // One unit short until the second package lands.
        let mut wp = deg_component("wp2", ComponentType::WastePackage, 0.1);
        wp.set_placement(Point3::default(), 1.0).unwrap();
        buffer.load(wp);
        assert!(buffer.is_full());
    }

    #[test]
    fn non_buffer_is_always_full() {
        let wf = deg_component("wf", ComponentType::WasteForm, 0.1);
        assert!(wf.is_full());
        let ff = deg_component("ff", ComponentType::FarField, 0.0);
        assert!(ff.is_full());
    }

    #[test]
    fn transport_without_models_is_a_logged_noop() {
        let mut shell = Component::new();
        assert!(shell.transport_nuclides(1).is_ok());
        assert!(shell.transport_heat(1).is_ok());
    }

    #[test]
    fn transport_heat_tracks_peak_temperature() {
        let mut comp = Component::init(
            "wp",
            ComponentType::WastePackage,
            test_table(),
            0.0,
            1.0,
            Some(Box::new(LumpedThermal::new(350.0))),
            Some(Box::new(StubNuclide::new())),
        )
        .unwrap();
        comp.transport_heat(1).unwrap();
        assert_eq!(comp.temp(), 350.0);
        assert_eq!(comp.peak_temp(BoundaryType::Inner), 350.0);
        assert_eq!(comp.peak_temp(BoundaryType::Outer), 350.0);
        assert!(comp.temp() < comp.temp_lim());
    }

    #[test]
    fn facade_swallows_and_logs_failed_extract() {
        let mut comp = deg_component("wf", ComponentType::WasteForm, 0.1);
        comp.absorb(Material::new(Composition::pure(ISO_X), 1.0));

        // Asking for far more than is contained fails inside the model, but
        // the facade must swallow it.
        comp.extract(&Composition::pure(ISO_X), 100.0);

        assert_eq!(comp.transfer_log().failures().len(), 1);
        assert!(comp.transfer_log().failures()[0].starts_with("extract"));
        let model = comp.nuclide_model().unwrap();
        assert!(is_close!(model.wastes()[0].mass_kg(), 1.0));
    }

    #[test]
    fn component_type_resolution() {
        assert_eq!(
            ComponentType::from_name("BUFFER").unwrap(),
            ComponentType::Buffer
        );
        assert_eq!(ComponentType::from_name("WP").unwrap().name(), "WP");

        let err = ComponentType::from_name("NEARFIELD").unwrap_err();
        let msg = err.to_string();
        for name in ComponentType::NAMES {
            assert!(msg.contains(name), "{}", msg);
        }
    }

    #[test]
    fn tree_transport_propagates_outward() {
        // A degrading waste package inside a non-degrading buffer: after five
        // years at 10%/yr, half the package inventory has moved outward.
        let mut buffer = deg_component("buffer", ComponentType::Buffer, 0.0);
        let mut wp = deg_component("wp", ComponentType::WastePackage, 0.1);
        wp.absorb(Material::new(Composition::pure(ISO_X), 10.0));
        buffer.load(wp);

        buffer.transport_nuclides_tree(0).unwrap();
        buffer.transport_nuclides_tree(5).unwrap();

        let buffer_model = buffer.nuclide_model().unwrap();
        let (_, buffer_mass) = buffer_model.vec_hist(5).unwrap();
        assert!(is_close!(buffer_mass, 5.0));

        // The package still holds the un-released half.
        let wp_model = buffer.children()[0].nuclide_model().unwrap();
        let total_left: f64 = wp_model.wastes().iter().map(|m| m.mass_kg()).sum();
        assert!(is_close!(total_left, 5.0));
    }

    #[test]
    fn transport_skips_daughters_without_models() {
        // One initialised daughter next to a bare shell: the parent must
        // still pull the degraded fraction from the initialised one.
        let mut buffer = deg_component("buffer", ComponentType::Buffer, 0.0);
        let mut wp = deg_component("wp", ComponentType::WastePackage, 0.1);
        wp.absorb(Material::new(Composition::pure(ISO_X), 10.0));
        buffer.load(wp).load(Component::new());

        buffer.transport_nuclides_tree(5).unwrap();

        let (_, buffer_mass) = buffer.nuclide_model().unwrap().vec_hist(5).unwrap();
        assert!(is_close!(buffer_mass, 5.0));
    }

    #[test]
    fn contaminant_records_cover_every_isotope() {
        let mut comp = deg_component("wf", ComponentType::WasteForm, 0.1);
        comp.absorb(Material::new(
            Composition::from_pairs([(1001, 0.6), (2004, 0.4)]),
            10.0,
        ));
        comp.transport_nuclides(1).unwrap();

        let mut sink = MemorySink::new();
        comp.record_contaminants(1, &mut sink).unwrap();

        assert_eq!(sink.contaminants.len(), 2);
        let rec = sink
            .contaminants
            .iter()
            .find(|r| r.iso == 1001)
            .unwrap();
        assert_eq!(rec.component_id, comp.id());
        assert_eq!(rec.time, 1);
        assert!(is_close!(rec.mass_kg, 6.0));
        assert!(rec.avail_conc > 0.0);
    }

    #[test]
    fn component_record_describes_the_barrier() {
        let mut buffer = deg_component("buffer", ComponentType::Buffer, 0.0);
        let wp = deg_component("wp", ComponentType::WastePackage, 0.1);
        let buffer_id = buffer.id();
        buffer.load(wp);

        let mut sink = MemorySink::new();
        buffer.children()[0].record_component(&mut sink).unwrap();

        let rec = &sink.components[0];
        assert_eq!(rec.parent_id, Some(buffer_id));
        assert_eq!(rec.component_type, ComponentType::WastePackage.code());
        assert_eq!(rec.material, "clay");
        assert_eq!(rec.nuclide_model, "DegRateNuclide");
        assert_eq!(rec.thermal_model, "StubThermal");
        assert_eq!(rec.outer_radius, 1.0);
        assert_eq!(rec.length, 1.0);
    }
}
