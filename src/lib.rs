//! Barrier and nuclide-transport core for a generic geologic repository.
//!
//! A repository is modelled as a tree of nested engineered barriers
//! ([`component::Component`]): waste form inside waste package inside buffer
//! inside the far field. Each barrier owns one thermal model and one nuclide
//! transport model; nuclide models compute, at discrete time steps, how much
//! contaminant mass (and with which isotopic composition) crosses the
//! barrier's boundary.
//!
//! The surrounding simulation kernel owns global time and must invoke
//! transport innermost-first (children before their parent for the same time
//! step); [`component::Component::transport_nuclides_tree`] provides that
//! ordering for a whole subtree.

pub mod component;
pub mod composition;
pub mod config;
pub mod events;
pub mod geometry;
pub mod history;
pub mod mat_table;
pub mod nuclide;
pub mod thermal;

pub mod errors;
