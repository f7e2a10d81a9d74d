//! Published cross-section parametrizations
//!
//! Every file here implements one published model behind the matching
//! category trait from [`crate::physics`]. The factory constructs them by
//! name; nothing in this module touches dispatch.
//!
//! # Total inelastic
//!
//! - [`Letaw1983`] — closed-form proton-nucleus fit
//! - [`Tripathi99`] — universal reaction cross section with Coulomb barrier
//! - [`Crosec`] — Barashenkov & Polanski tables, loaded at construction
//!
//! # Secondary antiprotons
//!
//! - [`TanNg83`], [`DiMauro2015`], [`Winkler2017`] — invariant-cross-section
//!   fits of increasing vintage
//! - [`Feng2016`] — generator-tuned fits, tune chosen via [`Generator`]
//!
//! # Secondary protons and leptons
//!
//! - [`Dragon2Protons`] — flat-spectrum baseline ("DRAGON2")
//! - [`Kamae2006`] — e∓ spectra via charged-pion decay

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod crosec;
pub mod di_mauro2015;
pub mod dragon2_protons;
pub mod feng2016;
pub mod kamae2006;
pub mod letaw1983;
pub mod tan_ng83;
pub mod tripathi99;
pub mod winkler2017;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use crosec::Crosec;
pub use di_mauro2015::DiMauro2015;
pub use dragon2_protons::Dragon2Protons;
pub use feng2016::{Feng2016, Generator};
pub use kamae2006::Kamae2006;
pub use letaw1983::Letaw1983;
pub use tan_ng83::TanNg83;
pub use tripathi99::Tripathi99;
pub use winkler2017::Winkler2017;
