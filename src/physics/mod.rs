//! Core physics types and category traits
//!
//! This module provides the vocabulary the rest of the crate is written in:
//!
//! - **Identity**: [`Pid`] (projectile/fragment) and [`Target`] (ISM nucleus)
//! - **Capability traits**: one per cross-section category
//!   ([`TotalInelastic`], [`ProtonXsecs`], [`SecondaryAntiprotons`],
//!   [`SecondaryLeptons`])
//! - **Clamping policy**: [`EnergyRange`], the per-model fit-validity range
//! - **Kinematics**: shared relativistic machinery for the inclusive
//!   production integrals
//!
//! # Architecture
//!
//! Models are **separate from dispatch**:
//! - a model implements one category trait (the physics),
//! - the [`factory`](crate::factory) selects and constructs it by name
//!   (the wiring).
//!
//! This separation allows the same caller code to run against any registered
//! parametrization, and new parametrizations to be added without touching
//! the query side.

// module declaration
pub mod kinematics;
pub mod particle;
pub mod traits;

// re-export commonly used types for convenience
pub use particle::{Pid, Target};
pub use traits::{
    EnergyRange,
    ProtonXsecs,
    SecondaryAntiprotons,
    SecondaryLeptons,
    TotalInelastic,
};
