//! Tan & Ng (1983) antiproton production and inelastic cross sections
//!
//! Two things live here:
//!
//! 1. [`TanNg83`], the classic parametrization of the Lorentz-invariant
//!    inclusive cross section E d³σ/dp³ for p + p → p̄ + X, turned into
//!    dσ/dT by the shared angular quadrature.
//! 2. The antiproton *inelastic* family ([`pbar_total_inelastic`],
//!    [`pbar_annihilating_inelastic`]) used by every production model's
//!    non-annihilating tertiary term — the inelastic channel is common
//!    to all of them, only the production fit differs.

use crate::physics::kinematics;
use crate::physics::particle::{Pid, Target};
use crate::physics::traits::SecondaryAntiprotons;
use crate::units::{GEV, MBARN, MEV};

/// Invariant cross-section fit coefficients, Tan & Ng (1983).
/// f = C0 (1 - x_R)^C1 exp(-C2 x_R) [C3 exp(-C4 p_T) + C5 exp(-C6 p_T²)]
/// in mbarn GeV⁻².
const FIT: [f64; 7] = [3.15, 7.90, 2.76, 0.306, 5.13, 0.372, 3.05];

/// Prompt antiprotons are accompanied by decayed antineutrons in roughly
/// equal number, with a small isospin excess.
const ANTINEUTRON_FACTOR: f64 = 2.3;

/// Tan & Ng (1983) inclusive antiproton production.
#[derive(Debug, Clone)]
pub struct TanNg83;

impl TanNg83 {
    pub fn new() -> Self {
        Self
    }

    /// Invariant cross section for the elementary p-p channel
    /// \[mbarn GeV⁻²\].
    #[inline]
    fn invariant(_sqrt_s: f64, x_r: f64, p_t: f64) -> f64 {
        let shape = FIT[0] * (1.0 - x_r).powf(FIT[1]) * (-FIT[2] * x_r).exp();
        let transverse = FIT[3] * (-FIT[4] * p_t).exp() + FIT[5] * (-FIT[6] * p_t * p_t).exp();
        shape * transverse
    }
}

impl Default for TanNg83 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecondaryAntiprotons for TanNg83 {
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_ap: f64) -> f64 {
        let pp = kinematics::integrate_invariant(t_proj, t_ap, Self::invariant);
        pp * ANTINEUTRON_FACTOR * kinematics::nuclear_enhancement(projectile, target)
    }

    fn clone_model(&self) -> Box<dyn SecondaryAntiprotons> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "TanNg83"
    }

    fn description(&self) -> Option<&str> {
        Some("Tan & Ng (1983) invariant cross-section fit, antineutrons included")
    }
}

// =================================================================================================
// Antiproton inelastic family (shared by all production models)
// =================================================================================================

/// Lowest kinetic energy the inelastic fits are evaluated at; queries below
/// are clamped (the fits are written in powers of T and blow up at zero).
const PBAR_T_MIN: f64 = 10.0 * MEV;

/// Geometric target scaling for the antiproton inelastic channels.
#[inline]
fn target_scaling(target: Target) -> f64 {
    (target.mass_number() as f64).powf(2.0 / 3.0)
}

/// Total inelastic cross section of an antiproton on an ISM target
/// (internal units). Tan & Ng (1983):
/// σ_in = 24.7 (1 + 0.584 T^-0.115 + 0.856 T^-0.566) mbarn, T in GeV.
pub fn pbar_total_inelastic(target: Target, t_ap: f64) -> f64 {
    let t = t_ap.max(PBAR_T_MIN) / GEV;
    let sigma = 24.7 * (1.0 + 0.584 * t.powf(-0.115) + 0.856 * t.powf(-0.566));
    sigma * target_scaling(target) * MBARN
}

/// Annihilating part of the antiproton inelastic cross section (internal
/// units). Tan & Ng (1983), piecewise in kinetic energy:
/// below 15.5 GeV σ_ann = 661 (1 + 0.0115 T^-0.774 - 0.948 T^0.0151) mbarn,
/// above it the measured √T falloff σ_ann = 36 T^-0.5 mbarn.
pub fn pbar_annihilating_inelastic(target: Target, t_ap: f64) -> f64 {
    let t = t_ap.max(PBAR_T_MIN) / GEV;
    let sigma = if t < 15.5 {
        661.0 * (1.0 + 0.0115 * t.powf(-0.774) - 0.948 * t.powf(0.0151))
    } else {
        36.0 * t.powf(-0.5)
    };
    sigma.max(0.0) * target_scaling(target) * MBARN
}

// =================================================================================================
// Tests
// =================================================================================================
