//! Letaw, Silberberg & Tsao (1983) total inelastic cross section
//!
//! Closed-form fit for proton-nucleus reaction cross sections: a
//! high-energy asymptotic value scaling as A^0.7 with a shell-structure
//! ripple, multiplied by an oscillating low-energy correction below
//! ~2 GeV. Helium targets are obtained from the hydrogen value through the
//! Ferrando et al. (1988) scaling ratio.

use crate::physics::particle::{Pid, Target};
use crate::physics::traits::{EnergyRange, TotalInelastic};
use crate::units::{GEV, MBARN, MEV, TEV};

/// High-energy normalization \[mbarn\]
const SIGMA_0: f64 = 45.0;

/// Letaw et al. (1983) parametrization of the total inelastic cross section.
///
/// Valid from tens of MeV per nucleon upward; below the documented range the
/// query is clamped to the boundary (see [`EnergyRange`]).
#[derive(Debug, Clone)]
pub struct Letaw1983 {
    range: EnergyRange,
}

impl Letaw1983 {
    pub fn new() -> Self {
        Self {
            // The low-energy correction term is a fit to data above ~10 MeV;
            // the high end is open, capped only to keep the clamp total.
            range: EnergyRange::new(10.0 * MEV, 100.0 * TEV),
        }
    }

    /// Asymptotic high-energy cross section for mass number `a` \[mbarn\].
    #[inline]
    fn sigma_high_energy(a: f64) -> f64 {
        SIGMA_0 * a.powf(0.7) * (1.0 + 0.016 * (5.3 - 2.63 * a.ln()).sin())
    }

    /// Low-energy suppression factor, `e` in MeV.
    #[inline]
    fn low_energy_factor(e: f64) -> f64 {
        1.0 - 0.62 * (-e / 200.0).exp() * (10.9 * e.powf(-0.28)).sin()
    }

    /// Helium-to-hydrogen target ratio, Ferrando et al. (1988).
    #[inline]
    fn helium_target_ratio(a: f64) -> f64 {
        2.10 * a.powf(-0.055)
    }
}

impl Default for Letaw1983 {
    fn default() -> Self {
        Self::new()
    }
}

impl TotalInelastic for Letaw1983 {
    fn get(&self, projectile: Pid, target: Target, t_n: f64) -> f64 {
        let a = projectile.mass_number().max(1) as f64;
        let e_mev = self.range.clamp(t_n) / MEV;

        let mut sigma = Self::sigma_high_energy(a) * Self::low_energy_factor(e_mev);
        if target == Target::He {
            sigma *= Self::helium_target_ratio(a);
        }
        sigma.max(0.0) * MBARN
    }

    fn clone_model(&self) -> Box<dyn TotalInelastic> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "Letaw1983"
    }

    fn description(&self) -> Option<&str> {
        Some("Letaw, Silberberg & Tsao (1983) proton-nucleus reaction cross sections")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positive_and_finite_mid_range() {
        let model = Letaw1983::new();
        let nuclei = [
            Pid::PROTON,
            Pid::HELIUM4,
            Pid::new(6, 12),
            Pid::new(8, 16),
            Pid::new(26, 56),
        ];
        for pid in nuclei {
            let sigma = model.get(pid, Target::H, 10.0 * GEV);
            assert!(sigma.is_finite() && sigma > 0.0, "pid = {}", pid);
        }
    }

    #[test]
    fn test_grows_with_mass_number() {
        let model = Letaw1983::new();
        let carbon = model.get(Pid::new(6, 12), Target::H, 10.0 * GEV);
        let iron = model.get(Pid::new(26, 56), Target::H, 10.0 * GEV);
        assert!(iron > carbon);
    }

    #[test]
    fn test_high_energy_plateau() {
        let model = Letaw1983::new();
        let one_tev = model.get(Pid::new(6, 12), Target::H, 1.0 * TEV);
        let ten_tev = model.get(Pid::new(6, 12), Target::H, 10.0 * TEV);
        assert_relative_eq!(one_tev, ten_tev, max_relative = 0.05);
    }

    #[test]
    fn test_clamp_below_validity() {
        let model = Letaw1983::new();
        let at_bound = model.get(Pid::new(6, 12), Target::H, 10.0 * MEV);
        let below = model.get(Pid::new(6, 12), Target::H, 1.0 * MEV);
        assert_eq!(below, at_bound);
    }

    #[test]
    fn test_helium_target_larger_than_hydrogen() {
        let model = Letaw1983::new();
        let on_h = model.get(Pid::new(6, 12), Target::H, 10.0 * GEV);
        let on_he = model.get(Pid::new(6, 12), Target::He, 10.0 * GEV);
        assert!(on_he > on_h);
    }

    #[test]
    fn test_clone_matches_original() {
        let model = Letaw1983::new();
        let copy = model.clone_model();
        let t = 3.7 * GEV;
        assert_eq!(
            model.get(Pid::new(8, 16), Target::H, t),
            copy.get(Pid::new(8, 16), Target::H, t)
        );
    }
}
