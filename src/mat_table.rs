//! Per-material chemistry lookup tables.
//!
//! Each barrier material (clay, salt, granite, ...) carries element-specific
//! transport constants: a diffusion coefficient, a distribution coefficient
//! and a solubility limit, each scaled against the material's stored
//! reference values. Tables are immutable after construction and shared by
//! reference across every component of the same material.

use crate::errors::{GenRepoError, GenRepoResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Element identifier (atomic number Z).
pub type Elem = u32;

/// The kind of chemical datum a table can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChemDataType {
    /// Diffusion/dispersion coefficient, m^2/s
    Disp,
    /// Distribution coefficient, m^3/kg
    Kd,
    /// Solubility limit, kg/m^3
    Sol,
}

/// Transport constants for one element within one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub elem: Elem,
    /// Diffusion coefficient, m^2/s
    pub d: f64,
    /// Distribution coefficient, m^3/kg
    pub k_d: f64,
    /// Solubility limit, kg/m^3
    pub s: f64,
}

/// Chemistry table for a single barrier material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatDataTable {
    mat: String,
    elements: HashMap<Elem, ElementData>,
    ref_disp: f64,
    ref_kd: f64,
    ref_sol: f64,
}

impl MatDataTable {
    pub fn new(
        mat: impl Into<String>,
        elements: Vec<ElementData>,
        ref_disp: f64,
        ref_kd: f64,
        ref_sol: f64,
    ) -> Self {
        Self {
            mat: mat.into(),
            elements: elements.into_iter().map(|e| (e.elem, e)).collect(),
            ref_disp,
            ref_kd,
            ref_sol,
        }
    }

    pub fn mat(&self) -> &str {
        &self.mat
    }

    fn element(&self, elem: Elem) -> GenRepoResult<&ElementData> {
        self.elements
            .get(&elem)
            .ok_or_else(|| GenRepoError::UnknownElement {
                mat: self.mat.clone(),
                elem,
            })
    }

    /// Diffusion coefficient for `elem`.
    pub fn d(&self, elem: Elem) -> GenRepoResult<f64> {
        Ok(self.element(elem)?.d)
    }

    /// Distribution coefficient for `elem`.
    pub fn k_d(&self, elem: Elem) -> GenRepoResult<f64> {
        Ok(self.element(elem)?.k_d)
    }

    /// Solubility limit for `elem`.
    pub fn s(&self, elem: Elem) -> GenRepoResult<f64> {
        Ok(self.element(elem)?.s)
    }

    /// Scaling of an element's datum relative to this material's stored
    /// reference value for `kind`.
    pub fn rel(&self, elem: Elem, kind: ChemDataType) -> GenRepoResult<f64> {
        let data = self.element(elem)?;
        let ratio = match kind {
            ChemDataType::Disp => data.d / self.ref_disp,
            ChemDataType::Kd => data.k_d / self.ref_kd,
            ChemDataType::Sol => data.s / self.ref_sol,
        };
        Ok(ratio)
    }

    /// Reference-scaled datum of the requested kind.
    ///
    /// Note the Kd case scales by `rel(elem, Sol)`, matching the behaviour
    /// this table has always had; see DESIGN.md before "correcting" it.
    pub fn data(&self, elem: Elem, kind: ChemDataType) -> GenRepoResult<f64> {
        let value = match kind {
            ChemDataType::Disp => self.d(elem)? * self.rel(elem, ChemDataType::Disp)?,
            ChemDataType::Kd => self.k_d(elem)? * self.rel(elem, ChemDataType::Sol)?,
            ChemDataType::Sol => self.s(elem)? * self.rel(elem, ChemDataType::Sol)?,
        };
        Ok(value)
    }
}

/// All chemistry tables known to the simulation, keyed by material name.
///
/// Acts as the material-property collaborator consumed at component init:
/// lookup failure for an unknown material is a fatal configuration error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialLibrary {
    tables: HashMap<String, Arc<MatDataTable>>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: MatDataTable) {
        self.tables.insert(table.mat().to_string(), Arc::new(table));
    }

    pub fn table(&self, mat: &str) -> GenRepoResult<Arc<MatDataTable>> {
        self.tables
            .get(mat)
            .cloned()
            .ok_or_else(|| GenRepoError::UnknownMaterial {
                name: mat.to_string(),
            })
    }
}
