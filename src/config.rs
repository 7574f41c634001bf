//! Configuration structs for barrier components.
//!
//! The external kernel owns the configuration format; this module consumes
//! the parsed values. Field names follow the input schema the kernel uses
//! (`componenttype`, `innerradius`, ...). Name-to-enum resolution happens
//! here, once, so unknown names fail at setup time with every valid option
//! spelled out.

use crate::component::{Component, ComponentType};
use crate::errors::{GenRepoError, GenRepoResult};
use crate::mat_table::MaterialLibrary;
use crate::nuclide::{nuclide_model_from_spec, NuclideModelSpec, NuclideModelType};
use crate::thermal::{thermal_model_from_spec, ThermalModelSpec, ThermalModelType};
use serde::{Deserialize, Serialize};

/// Default initial temperature for a lumped thermal model (K).
const DEFAULT_INITIAL_TEMPERATURE: f64 = 300.0;

/// Raw configuration for one barrier component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    pub componenttype: String,
    pub material_data: String,
    pub innerradius: f64,
    pub outerradius: f64,
    pub thermalmodel: ThermalModelConfig,
    pub nuclidemodel: NuclideModelConfig,
}

/// Raw configuration for one thermal model variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalModelConfig {
    #[serde(rename = "type")]
    pub model_type: String,
    #[serde(default)]
    pub initial_temperature: Option<f64>,
}

/// Raw configuration for one nuclide model variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclideModelConfig {
    #[serde(rename = "type")]
    pub model_type: String,
    /// Degradation rate, fraction per year; required by DegRateNuclide.
    #[serde(default)]
    pub degradation: Option<f64>,
}

impl ThermalModelConfig {
    pub fn to_spec(&self) -> GenRepoResult<ThermalModelSpec> {
        match ThermalModelType::from_name(&self.model_type)? {
            ThermalModelType::LumpedThermal => Ok(ThermalModelSpec::Lumped {
                initial_temperature: self
                    .initial_temperature
                    .unwrap_or(DEFAULT_INITIAL_TEMPERATURE),
            }),
            ThermalModelType::StubThermal => Ok(ThermalModelSpec::Stub),
        }
    }
}

impl NuclideModelConfig {
    pub fn to_spec(&self) -> GenRepoResult<NuclideModelSpec> {
        match NuclideModelType::from_name(&self.model_type)? {
            NuclideModelType::DegRateNuclide => {
                let degradation =
                    self.degradation
                        .ok_or(GenRepoError::MissingParameter {
                            model: "DegRateNuclide",
                            parameter: "degradation",
                        })?;
                Ok(NuclideModelSpec::DegRate { degradation })
            }
            NuclideModelType::LumpedNuclide => Ok(NuclideModelSpec::Lumped),
            NuclideModelType::MixedCellNuclide => Ok(NuclideModelSpec::MixedCell),
            NuclideModelType::OneDimPPMNuclide => Ok(NuclideModelSpec::OneDimPPM),
            NuclideModelType::StubNuclide => Ok(NuclideModelSpec::Stub),
        }
    }
}

/// Parse a single component configuration from TOML.
pub fn parse_component_config(toml_str: &str) -> GenRepoResult<ComponentConfig> {
    Ok(toml::from_str(toml_str)?)
}

/// Build a fully initialised component from its configuration.
///
/// Any failure here (unknown type/model/material names, missing or
/// out-of-range parameters) aborts construction: no partially configured
/// component is ever returned.
pub fn build_component(
    config: &ComponentConfig,
    materials: &MaterialLibrary,
) -> GenRepoResult<Component> {
    let kind = ComponentType::from_name(&config.componenttype)?;
    let mat_table = materials.table(&config.material_data)?;
    let thermal = thermal_model_from_spec(&config.thermalmodel.to_spec()?)?;
    let nuclide = nuclide_model_from_spec(&config.nuclidemodel.to_spec()?)?;

    Component::init(
        &config.name,
        kind,
        mat_table,
        config.innerradius,
        config.outerradius,
        Some(thermal),
        Some(nuclide),
    )
}
