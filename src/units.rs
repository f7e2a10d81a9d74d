//! Physical constants and units
//!
//! All quantities inside the crate are expressed in a single consistent
//! system (SI): energies in joules, areas in m², time in seconds. Published
//! parametrizations are written in GeV and mbarn, so model code converts on
//! the way in (`t_n / GEV`) and on the way out (`sigma_mb * MBARN`).
//!
//! Callers do the same to recover conventional units:
//!
//! ```rust
//! use xsec_rs::units::{GEV, MBARN};
//!
//! let t_n = 10.0 * GEV;           // query energy
//! # let sigma = 30.0 * MBARN;     // value returned by a model
//! let sigma_mb = sigma / MBARN;   // back to millibarn
//! assert!(sigma_mb > 0.0);
//! # let _ = t_n;
//! ```
//!
//! These are frozen compile-time constants. Nothing in the crate mutates
//! them and nothing reads unit configuration at runtime.

// =================================================================================================
// Energy
// =================================================================================================

/// Electronvolt \[J\]
pub const ELECTRONVOLT: f64 = 1.602_176_634e-19;

/// Kiloelectronvolt \[J\]
pub const KEV: f64 = 1e3 * ELECTRONVOLT;

/// Megaelectronvolt \[J\]
pub const MEV: f64 = 1e6 * ELECTRONVOLT;

/// Gigaelectronvolt \[J\]
pub const GEV: f64 = 1e9 * ELECTRONVOLT;

/// Teraelectronvolt \[J\]
pub const TEV: f64 = 1e12 * ELECTRONVOLT;

// =================================================================================================
// Area (cross sections)
// =================================================================================================

/// Barn \[m²\]
pub const BARN: f64 = 1e-28;

/// Millibarn \[m²\]
pub const MBARN: f64 = 1e-3 * BARN;

// =================================================================================================
// Time
// =================================================================================================

/// Second \[s\]
pub const SECOND: f64 = 1.0;

/// Julian year \[s\]
pub const YEAR: f64 = 3.155_76e7 * SECOND;

/// Megayear \[s\]
pub const MEGAYEAR: f64 = 1e6 * YEAR;

// =================================================================================================
// Particle rest energies
// =================================================================================================

/// Proton rest energy m_p c² \[J\]
pub const PROTON_MASS_C2: f64 = 938.272_081_3 * MEV;

/// Neutron rest energy m_n c² \[J\]
pub const NEUTRON_MASS_C2: f64 = 939.565_413 * MEV;

/// Electron rest energy m_e c² \[J\]
pub const ELECTRON_MASS_C2: f64 = 0.510_998_95 * MEV;

/// Charged-pion rest energy m_π c² \[J\]
pub const PION_MASS_C2: f64 = 139.570_39 * MEV;

/// Muon rest energy m_μ c² \[J\]
pub const MUON_MASS_C2: f64 = 105.658_375 * MEV;

// =================================================================================================
// Tests
// =================================================================================================
