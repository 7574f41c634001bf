use crate::composition::Iso;
use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum GenRepoError {
    #[error("component '{component}' has no {which} model")]
    MissingModel {
        component: String,
        which: &'static str,
    },
    #[error("'{name}' does not name a valid ComponentType. Options are: {}", .options.join(", "))]
    UnknownComponentType { name: String, options: Vec<String> },
    #[error("'{name}' does not name a valid ThermalModelType. Options are: {}", .options.join(", "))]
    UnknownThermalModel { name: String, options: Vec<String> },
    #[error("'{name}' does not name a valid NuclideModelType. Options are: {}", .options.join(", "))]
    UnknownNuclideModel { name: String, options: Vec<String> },
    #[error("the {kind} model '{name}' is not available in this build")]
    UnsupportedModel { kind: &'static str, name: String },
    #[error("no material data table is loaded for material '{name}'")]
    UnknownMaterial { name: String },
    #[error("element {elem} is not present in the data table for material '{mat}'")]
    UnknownElement { mat: String, elem: u32 },
    #[error("the {model} model requires a '{parameter}' parameter")]
    MissingParameter {
        model: &'static str,
        parameter: &'static str,
    },
    #[error("expected {what} between {min} and {max} (inclusive), got {value}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
    #[error("cannot extract {requested} kg of isotope {iso}: only {available} kg contained")]
    MassBalance {
        iso: Iso,
        requested: f64,
        available: f64,
    },
    #[error("cannot extract {requested} kg: only {available} kg contained")]
    InsufficientMass { requested: f64, available: f64 },
    #[error("no composition history has been written for time step {time}")]
    MissingHistory { time: i32 },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, GenRepoError>`.
pub type GenRepoResult<T> = Result<T, GenRepoError>;
