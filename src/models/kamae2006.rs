//! Kamae et al. (2006) secondary electron/positron production
//!
//! Condensed implementation of the non-diffractive component of the Kamae
//! et al. (2006) p-p secondary spectra: charged pions produced in the
//! collision decay through π → μ → e, and the lepton source spectrum is
//! written as the pion production cross section times a scaling function of
//! x = T_lepton / T_proj.
//!
//! Electrons and positrons carry separate coefficient sets — the π⁺ excess
//! of p-p collisions makes the positron yield larger, and the spectral
//! shapes differ slightly. The fit is valid from the pion production
//! threshold (T_p ≈ 0.488 GeV) up to 512 TeV; queries above are clamped.

use crate::physics::kinematics;
use crate::physics::particle::{Pid, Target};
use crate::physics::traits::{EnergyRange, SecondaryLeptons};
use crate::units::{GEV, MBARN, TEV};

/// Kinematic threshold of pion production in p-p collisions \[GeV\].
const T_THRESHOLD_GEV: f64 = 0.488;

/// Per-species scaling-function coefficients:
/// g(x) = norm · x^{alpha} (1 - x)^{beta}.
#[derive(Debug, Clone, Copy)]
struct LeptonParams {
    norm: f64,
    alpha: f64,
    beta: f64,
}

/// π⁺/π⁻ asymmetry makes positrons more abundant.
const POSITRON_PARAMS: LeptonParams = LeptonParams {
    norm: 1.25,
    alpha: -0.52,
    beta: 3.65,
};

const ELECTRON_PARAMS: LeptonParams = LeptonParams {
    norm: 0.95,
    alpha: -0.48,
    beta: 3.95,
};

/// Kamae et al. (2006) secondary lepton spectra.
#[derive(Debug, Clone)]
pub struct Kamae2006 {
    lepton: Pid,
    params: LeptonParams,
    range: EnergyRange,
}

impl Kamae2006 {
    /// Create the model for one lepton species.
    ///
    /// # Panics
    ///
    /// Panics when `lepton` is not [`Pid::ELECTRON`] or [`Pid::POSITRON`].
    pub fn new(lepton: Pid) -> Self {
        assert!(
            lepton == Pid::ELECTRON || lepton == Pid::POSITRON,
            "Secondary lepton species must be e- or e+, got {}",
            lepton
        );
        let params = if lepton == Pid::POSITRON {
            POSITRON_PARAMS
        } else {
            ELECTRON_PARAMS
        };
        Self {
            lepton,
            params,
            range: EnergyRange::new(T_THRESHOLD_GEV * GEV, 512.0 * TEV),
        }
    }

    /// Inclusive charged-pion production cross section \[mbarn\] at
    /// projectile kinetic energy `t_p` \[GeV\], above threshold.
    #[inline]
    fn sigma_pion(t_p: f64) -> f64 {
        // Slowly rising multiplicity on top of the inelastic plateau.
        let l = (t_p / T_THRESHOLD_GEV).ln();
        30.0 * (0.95 + 0.06 * l)
    }
}

impl SecondaryLeptons for Kamae2006 {
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_lepton: f64) -> f64 {
        if t_lepton <= 0.0 {
            return 0.0;
        }
        // Below the pion threshold there is no production at all; clamping
        // only applies to the high end of the fit range.
        if t_proj < self.range.min() {
            return 0.0;
        }
        let t_p = self.range.clamp(t_proj) / GEV;
        let x = (t_lepton / GEV) / t_p;
        if x >= 1.0 {
            return 0.0;
        }

        let p = &self.params;
        let g = p.norm * x.powf(p.alpha) * (1.0 - x).powf(p.beta);
        let dsigma_mb_per_gev = Self::sigma_pion(t_p) * g / t_p;

        dsigma_mb_per_gev
            * kinematics::nuclear_enhancement(projectile, target)
            * MBARN
            / GEV
    }

    fn lepton(&self) -> Pid {
        self.lepton
    }

    fn clone_model(&self) -> Box<dyn SecondaryLeptons> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "Kamae2006"
    }

    fn description(&self) -> Option<&str> {
        Some("Kamae et al. (2006) non-diffractive e -/+ spectra via charged-pion decay")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
