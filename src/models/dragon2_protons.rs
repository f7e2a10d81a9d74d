//! Baseline inclusive secondary-proton production ("DRAGON2")
//!
//! Secondary protons from inelastic nucleus-ISM collisions, in the
//! flat-spectrum approximation used by propagation codes: the struck
//! nucleons emerge with a kinetic energy distributed uniformly below the
//! projectile energy per nucleon, normalized to the total inelastic cross
//! section times the mean proton multiplicity:
//!
//! dσ/dT = ν σ_in(T_proj) / T_proj   for 0 < T < T_proj, else 0.
//!
//! The total inelastic backbone is the Letaw et al. (1983) parametrization
//! (no data file required).

use crate::models::letaw1983::Letaw1983;
use crate::physics::particle::{Pid, Target};
use crate::physics::traits::{ProtonXsecs, TotalInelastic};

/// Mean inclusive proton multiplicity per inelastic collision.
const PROTON_MULTIPLICITY: f64 = 1.6;

/// Baseline secondary-proton model, string name "DRAGON2".
#[derive(Debug, Clone)]
pub struct Dragon2Protons {
    inelastic: Letaw1983,
}

impl Dragon2Protons {
    pub fn new() -> Self {
        Self {
            inelastic: Letaw1983::new(),
        }
    }
}

impl Default for Dragon2Protons {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtonXsecs for Dragon2Protons {
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_sec: f64) -> f64 {
        if t_proj <= 0.0 || t_sec <= 0.0 || t_sec >= t_proj {
            return 0.0;
        }
        let sigma_in = self.inelastic.get(projectile, target, t_proj);
        PROTON_MULTIPLICITY * sigma_in / t_proj
    }

    fn clone_model(&self) -> Box<dyn ProtonXsecs> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "DRAGON2"
    }

    fn description(&self) -> Option<&str> {
        Some("flat secondary-proton spectrum normalized to the Letaw1983 inelastic cross section")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
