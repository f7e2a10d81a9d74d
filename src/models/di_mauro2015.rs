//! di Mauro, Donato, Goudelis & Serpico (2014) antiproton production
//!
//! Fit of the Lorentz-invariant p + p → p̄ + X cross section to the full
//! set of accelerator data available in 2014, including the explicit
//! √s dependence that the older Tan & Ng scaling form lacks:
//!
//! f = σ_in(s) (1 - x_R)^{c1} exp(-c2 x_R)
//!     × \[c3 (√s)^{c4} exp(-c5 p_T) + c6 (√s)^{c7} exp(-c8 p_T²)\]

use crate::physics::kinematics;
use crate::physics::particle::{Pid, Target};
use crate::physics::traits::SecondaryAntiprotons;

/// Fit coefficients c1..c8 (eq. 13 of the reference).
const FIT: [f64; 8] = [4.448, 3.735, 0.00502, 0.708, 3.527, 0.236, -0.729, 2.517];

/// Antineutron and hyperon-decay contribution on top of prompt p̄.
const ANTINEUTRON_FACTOR: f64 = 2.3;

/// di Mauro et al. (2014) inclusive antiproton production.
#[derive(Debug, Clone)]
pub struct DiMauro2015;

impl DiMauro2015 {
    pub fn new() -> Self {
        Self
    }

    /// Total inelastic p-p cross section entering the fit normalization
    /// \[mbarn\], as a function of √s \[GeV\].
    #[inline]
    fn sigma_in_pp(sqrt_s: f64) -> f64 {
        let l = (sqrt_s / 16.0).ln();
        34.3 + 1.88 * l + 0.25 * l * l
    }

    /// Invariant cross section for the elementary p-p channel
    /// \[mbarn GeV⁻²\].
    #[inline]
    fn invariant(sqrt_s: f64, x_r: f64, p_t: f64) -> f64 {
        let shape = (1.0 - x_r).powf(FIT[0]) * (-FIT[1] * x_r).exp();
        let transverse = FIT[2] * sqrt_s.powf(FIT[3]) * (-FIT[4] * p_t).exp()
            + FIT[5] * sqrt_s.powf(FIT[6]) * (-FIT[7] * p_t * p_t).exp();
        Self::sigma_in_pp(sqrt_s) * shape * transverse
    }
}

impl Default for DiMauro2015 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecondaryAntiprotons for DiMauro2015 {
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_ap: f64) -> f64 {
        let pp = kinematics::integrate_invariant(t_proj, t_ap, Self::invariant);
        pp * ANTINEUTRON_FACTOR * kinematics::nuclear_enhancement(projectile, target)
    }

    fn clone_model(&self) -> Box<dyn SecondaryAntiprotons> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "DiMauro2015"
    }

    fn description(&self) -> Option<&str> {
        Some("di Mauro et al. (2014) invariant cross-section fit with explicit sqrt(s) dependence")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::kinematics::pbar_production_threshold;
    use crate::units::GEV;

    #[test]
    fn test_positive_finite_mid_range() {
        let model = DiMauro2015::new();
        let sigma = model.get(Pid::PROTON, Target::H, 100.0 * GEV, 2.0 * GEV);
        assert!(sigma.is_finite() && sigma > 0.0);
    }

    #[test]
    fn test_zero_below_threshold() {
        let model = DiMauro2015::new();
        let t_proj = 0.5 * pbar_production_threshold();
        assert_eq!(model.get(Pid::PROTON, Target::H, t_proj, 0.5 * GEV), 0.0);
    }

    #[test]
    fn test_sigma_in_pp_reasonable() {
        // 30-80 mbarn over the collider range.
        for sqrt_s in [5.0, 16.0, 100.0, 1000.0] {
            let sigma = DiMauro2015::sigma_in_pp(sqrt_s);
            assert!(sigma > 25.0 && sigma < 100.0, "sqrt(s) = {}", sqrt_s);
        }
    }

    #[test]
    fn test_soft_spectrum_falls_with_secondary_energy() {
        let model = DiMauro2015::new();
        let soft = model.get(Pid::PROTON, Target::H, 100.0 * GEV, 5.0 * GEV);
        let hard = model.get(Pid::PROTON, Target::H, 100.0 * GEV, 50.0 * GEV);
        assert!(soft > hard, "spectrum should be steeply falling in T_ap");
    }

    #[test]
    fn test_clone_matches_original() {
        let model = DiMauro2015::new();
        let copy = model.clone_model();
        assert_eq!(
            model.get(Pid::HELIUM4, Target::H, 80.0 * GEV, 3.0 * GEV),
            copy.get(Pid::HELIUM4, Target::H, 80.0 * GEV, 3.0 * GEV)
        );
    }
}
