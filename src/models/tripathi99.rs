//! Tripathi, Cucinotta & Wilson (1999) universal reaction cross section
//!
//! Geometric nucleus-nucleus reaction cross section with an
//! energy-dependent transparency term and a Coulomb barrier:
//!
//! σ_R = π r₀² (A_p^⅓ + A_t^⅓ + δ_E)² (1 − R_c B / E_cm)
//!
//! δ_E collects the surface/transparency physics, B is the Coulomb barrier
//! and R_c a system-dependent Coulomb multiplier with special values for the
//! lightest systems. This is the reduced form used in propagation codes:
//! the density-dependent transparency coefficient is taken constant.

use crate::physics::particle::{Pid, Target};
use crate::physics::traits::{EnergyRange, TotalInelastic};
use crate::units::{GEV, MBARN, MEV};

/// Radius parameter r₀ \[fm\]
const R0: f64 = 1.1;

/// fm² to mbarn
const FM2: f64 = 10.0;

/// Constant transparency coefficient (density-averaged).
const D: f64 = 2.05;

/// Tripathi et al. (1999) parametrization of the total inelastic cross
/// section, clamped to its fit range \[0.5 MeV/n, 10 GeV/n\]; the cross
/// section is flat above a few GeV per nucleon, so the upper clamp is the
/// high-energy plateau.
#[derive(Debug, Clone)]
pub struct Tripathi99 {
    range: EnergyRange,
}

impl Tripathi99 {
    pub fn new() -> Self {
        Self {
            range: EnergyRange::new(0.5 * MEV, 10.0 * GEV),
        }
    }

    /// Coulomb multiplier R_c; unity except for the lightest systems where
    /// the barrier is anomalously effective.
    fn coulomb_multiplier(a_p: i32, z_p: i32, a_t: i32, z_t: i32) -> f64 {
        // Order the pair so p + d and d + p share an entry.
        let mut sys = [(a_p, z_p), (a_t, z_t)];
        sys.sort_unstable();
        match sys {
            [(1, 1), (2, 1)] => 13.5,  // p + d
            [(1, 1), (3, 2)] => 21.0,  // p + ³He
            [(1, 1), (4, 2)] => 27.0,  // p + ⁴He
            [(1, 1), (6, 3)] => 2.2,   // p + Li
            [(2, 1), (2, 1)] => 13.5,  // d + d
            [(2, 1), (4, 2)] => 13.5,  // d + ⁴He
            _ => 1.0,
        }
    }

    /// Energy-dependent term of the transparency correction, `e` in MeV.
    #[inline]
    fn c_e(e: f64) -> f64 {
        D * (1.0 - (-e / 40.0).exp()) - 0.292 * (-e / 792.0).exp() * (0.229 * e.powf(0.453)).cos()
    }
}

impl Default for Tripathi99 {
    fn default() -> Self {
        Self::new()
    }
}

impl TotalInelastic for Tripathi99 {
    fn get(&self, projectile: Pid, target: Target, t_n: f64) -> f64 {
        let a_p = projectile.mass_number().max(1);
        let z_p = projectile.atomic_number().max(1);
        let a_t = target.mass_number();
        let z_t = target.charge();

        let e = self.range.clamp(t_n) / MEV;

        let ap = a_p as f64;
        let at = a_t as f64;
        let ap13 = ap.powf(1.0 / 3.0);
        let at13 = at.powf(1.0 / 3.0);

        // Non-relativistic CM kinetic energy of the system [MeV].
        let e_cm = e * ap * at / (ap + at);

        // Coulomb barrier [MeV], touching-spheres separation with an
        // energy-dependent skin term [fm].
        let r = 1.2 * (ap13 + at13) + 1.2 * (ap13 + at13) / e_cm.cbrt();
        let b = 1.44 * (z_p as f64) * (z_t as f64) / r;

        // Surface and transparency terms.
        let s = ap13 * at13 / (ap13 + at13);
        let delta_e = 1.85 * s + 0.16 * s / e_cm.cbrt() - Self::c_e(e)
            + 0.91 * (at - 2.0 * z_t as f64) * (z_p as f64) / (ap * at);

        let r_c = Self::coulomb_multiplier(a_p, z_p, a_t, z_t);
        let geometry = ap13 + at13 + delta_e;
        let transparency = 1.0 - r_c * b / e_cm;

        let sigma_mb = std::f64::consts::PI * R0 * R0 * FM2 * geometry * geometry * transparency;
        sigma_mb.max(0.0) * MBARN
    }

    fn clone_model(&self) -> Box<dyn TotalInelastic> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "Tripathi99"
    }

    fn description(&self) -> Option<&str> {
        Some("Tripathi, Cucinotta & Wilson (1999) universal reaction cross sections")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
