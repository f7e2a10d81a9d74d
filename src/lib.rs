//! xsec-rs: Cosmic-Ray Interaction Cross Sections
//!
//! Nuclear and particle cross sections for cosmic-ray propagation modeling:
//! total inelastic, secondary antiproton, secondary proton and secondary
//! lepton production, each available in several published parametrizations
//! selectable by name.
//!
//! # Architecture
//!
//! The crate is built on two principles:
//!
//! 1. **Separation of physics and dispatch**
//!    - Models implement the category traits (what a cross section *is*)
//!    - The factory selects and constructs them by name (which one to use)
//!
//! 2. **Fail loud, clamp quiet**
//!    - An unknown model name is a typed error at construction time; the
//!      library never silently substitutes a default.
//!    - An out-of-range energy is not an error: each model documents its
//!      fit range and clamps queries to the nearest bound.
//!
//! # Quick Start
//!
//! ```rust
//! use xsec_rs::prelude::*;
//! use xsec_rs::units::{GEV, MBARN};
//!
//! # fn main() -> Result<(), XsecError> {
//! // 1. Configure the factory (defaults are the recommended baselines)
//! let mut factory = XsecFactory::new();
//! factory.set_secondary_antiprotons("Winkler2017");
//!
//! // 2. Construct the selected model
//! let ap = factory.create_secondary_antiprotons(Generator::default())?;
//!
//! // 3. Query it: p + H -> pbar at T_proj = 100 GeV, T_ap = 0.1 GeV
//! let sigma = ap.get(Pid::PROTON, Target::H, 100.0 * GEV, 0.1 * GEV);
//! println!("dsigma/dT = {:e} mbarn/GeV", sigma / MBARN * GEV);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: identity types, category traits, shared kinematics
//! - [`models`]: the published parametrizations
//! - [`factory`]: model selection and construction
//! - [`decay`]: decay chart for unstable nuclides
//! - [`units`]: the internal unit system

// Core modules
pub mod error;
pub mod physics;
pub mod units;

pub mod decay;
pub mod factory;
pub mod models;

pub use error::{Category, XsecError, XsecResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use xsec_rs::prelude::*;
    //! ```
    pub use crate::decay::{DecayChart, DecayMode};
    pub use crate::error::{Category, XsecError, XsecResult};
    pub use crate::factory::{
        AntiprotonModel,
        LeptonModel,
        ProtonModel,
        TotalInelasticModel,
        XsecFactory,
    };
    pub use crate::models::Generator;
    pub use crate::physics::{
        EnergyRange,
        Pid,
        ProtonXsecs,
        SecondaryAntiprotons,
        SecondaryLeptons,
        Target,
        TotalInelastic,
    };
}
