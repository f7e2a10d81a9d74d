//! Relativistic kinematics shared by the inclusive production models
//!
//! Every antiproton parametrization in this crate is published as a
//! Lorentz-invariant cross section f(√s, x_R, p_T) = E d³σ/dp³ for the
//! elementary p-p collision. What propagation codes consume is the
//! energy-differential dσ/dT in the lab (ISM rest) frame. The bridge is the
//! same for all models and lives here:
//!
//! dσ/dT = 2π p ∫ f(√s, x_R, p_T) d(cos θ)
//!
//! with the integrand evaluated by boosting the secondary into the
//! center-of-momentum frame. Nucleus-nucleus channels are obtained from the
//! p-p value through an empirical mass-number enhancement factor.
//!
//! All public functions take and return internal units; the intermediate
//! arithmetic runs in GeV where the published fits are written.

use crate::physics::particle::{Pid, Target};
use crate::units::{GEV, PROTON_MASS_C2};

/// Proton rest energy in GeV, the natural scale of the fitted formulas.
pub(crate) const M_P: f64 = PROTON_MASS_C2 / GEV;

/// Number of Simpson intervals for the angular quadrature. The invariant
/// cross sections are smooth in cos θ; 128 intervals keeps the quadrature
/// error far below the fit uncertainty.
const ANGULAR_INTERVALS: usize = 128;

// =================================================================================================
// Invariants
// =================================================================================================

/// Mandelstam s of a nucleon-nucleon collision at projectile kinetic energy
/// per nucleon `t_proj` (internal units), in GeV².
pub fn mandelstam_s(t_proj: f64) -> f64 {
    let t = t_proj / GEV;
    4.0 * M_P * M_P + 2.0 * M_P * t
}

/// Kinetic-energy threshold for p + p → p̄ + X (internal units).
///
/// Antiproton production conserves baryon number, so the final state carries
/// three nucleons besides the antiproton: √s ≥ 4 m_p, i.e. T ≥ 6 m_p.
pub fn pbar_production_threshold() -> f64 {
    6.0 * M_P * GEV
}

/// Maximal CM energy of the produced antiproton, in GeV.
///
/// The lightest accompanying final state is three nucleons:
/// E*_max = (s − 8 m_p²) / (2 √s).
pub(crate) fn pbar_max_cm_energy(s: f64) -> f64 {
    (s - 8.0 * M_P * M_P) / (2.0 * s.sqrt())
}

// =================================================================================================
// Angular quadrature
// =================================================================================================

/// Integrate an invariant cross section over the production angle.
///
/// `invariant(sqrt_s, x_r, p_t)` must return E d³σ/dp³ in mbarn GeV⁻² for
/// the elementary p-p channel, with `x_r = E*/E*_max` the radial scaling
/// variable and `p_t` the transverse momentum in GeV. The result is dσ/dT
/// in internal units (area per energy).
///
/// Below the production threshold, or where the requested antiproton energy
/// is kinematically unreachable, the result is exactly zero.
pub(crate) fn integrate_invariant<F>(t_proj: f64, t_ap: f64, invariant: F) -> f64
where
    F: Fn(f64, f64, f64) -> f64,
{
    let t_p = t_proj / GEV;
    let t_a = t_ap / GEV;
    if t_a <= 0.0 {
        return 0.0;
    }

    let s = 4.0 * M_P * M_P + 2.0 * M_P * t_p;
    if s.sqrt() < 4.0 * M_P {
        return 0.0;
    }
    let e_star_max = pbar_max_cm_energy(s);

    // Boost parameters of the CM frame seen from the lab.
    let e_proj = t_p + M_P;
    let p_proj = (e_proj * e_proj - M_P * M_P).sqrt();
    let gamma = (e_proj + M_P) / s.sqrt();
    let betagamma = p_proj / s.sqrt();

    let e_ap = t_a + M_P;
    let p_ap = (e_ap * e_ap - M_P * M_P).sqrt();

    // Simpson over cos θ in [-1, 1].
    let n = ANGULAR_INTERVALS;
    let h = 2.0 / n as f64;
    let mut sum = 0.0;
    for i in 0..=n {
        let cos_theta = -1.0 + h * i as f64;
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

        let e_star = gamma * e_ap - betagamma * p_ap * cos_theta;
        let x_r = e_star / e_star_max;
        if x_r > 1.0 {
            continue;
        }
        let p_t = p_ap * sin_theta;

        let weight = if i == 0 || i == n {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        sum += weight * invariant(s.sqrt(), x_r, p_t);
    }
    let integral = sum * h / 3.0;

    // 2π p ∫ f dcosθ, then mbarn/GeV back to internal units.
    let dsigma_dt = 2.0 * std::f64::consts::PI * p_ap * integral;
    dsigma_dt.max(0.0) * crate::units::MBARN / GEV
}

// =================================================================================================
// Nuclear enhancement
// =================================================================================================

/// Empirical enhancement of the p-p production cross section for
/// nucleus-nucleus channels, (A_proj · A_target)^0.9.
///
/// Reproduces the measured p-He/p-p and He-p/p-p production ratios to the
/// accuracy cosmic-ray propagation requires; equals one for p + H.
pub fn nuclear_enhancement(projectile: Pid, target: Target) -> f64 {
    let a_p = projectile.mass_number().max(1) as f64;
    let a_t = target.mass_number() as f64;
    (a_p * a_t).powf(0.9)
}

// =================================================================================================
// Tests
// =================================================================================================
