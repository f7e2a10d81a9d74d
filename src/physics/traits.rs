//! Cross-section category traits
//!
//! This module defines the core API of the crate: one capability trait per
//! cross-section category.
//!
//! - [`TotalInelastic`]: total inelastic cross section σ(A + target)
//! - [`ProtonXsecs`]: inclusive secondary-proton production dσ/dT
//! - [`SecondaryAntiprotons`]: inclusive antiproton production dσ/dT plus
//!   the antiproton inelastic/annihilation family
//! - [`SecondaryLeptons`]: inclusive e∓ production dσ/dT
//!
//! # Contract
//!
//! Every `get` takes energies in internal units (see [`crate::units`]) and
//! returns a non-negative cross section in internal units. The full
//! non-negative energy domain is accepted: a model whose underlying fit has
//! a limited validity range clamps the query to the nearest bound (see
//! [`EnergyRange`]) instead of failing. Clamping is a documented modeling
//! decision, not an error.
//!
//! # Cloning
//!
//! `clone_model` produces a logically independent deep copy, tabulated data
//! included. Two clones queried with the same arguments return identical
//! values and share no state.
//!
//! # Stability
//!
//! These traits are the stable seam of the crate. New published
//! parametrizations implement an existing trait; they do not change it.

use crate::physics::particle::{Pid, Target};

// =================================================================================================
// Energy validity range (clamping policy)
// =================================================================================================

/// Validity range of a fitted parametrization, with clamp-to-boundary
/// semantics.
///
/// Queries outside the fit range are answered with the boundary value, which
/// keeps evaluation numerically stable where the published formula is not
/// constrained by data.
///
/// # Example
///
/// ```rust
/// use xsec_rs::physics::EnergyRange;
/// use xsec_rs::units::{MEV, TEV};
///
/// let range = EnergyRange::new(20.0 * MEV, 1.0 * TEV);
/// assert_eq!(range.clamp(1.0 * MEV), 20.0 * MEV);
/// assert_eq!(range.clamp(5.0 * TEV), 1.0 * TEV);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRange {
    min: f64,
    max: f64,
}

impl EnergyRange {
    /// Create a range from its bounds (internal units).
    ///
    /// # Panics
    ///
    /// Panics when `min` is not positive or `max <= min`.
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min > 0.0, "Range minimum must be positive, got {}", min);
        assert!(
            max > min,
            "Range maximum must exceed minimum, got [{}, {}]",
            min,
            max
        );
        Self { min, max }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// True when `energy` lies within the fit range.
    pub fn contains(&self, energy: f64) -> bool {
        energy >= self.min && energy <= self.max
    }

    /// Clamp `energy` to the nearest bound.
    pub fn clamp(&self, energy: f64) -> f64 {
        energy.clamp(self.min, self.max)
    }
}

// =================================================================================================
// Total inelastic
// =================================================================================================

/// Total inelastic cross section of a nucleus on an ISM target.
pub trait TotalInelastic: Send + Sync {
    /// Cross section for `projectile` on `target` at kinetic energy per
    /// nucleon `t_n` (internal units in and out).
    fn get(&self, projectile: Pid, target: Target, t_n: f64) -> f64;

    /// Independent deep copy behind a fresh owning handle.
    fn clone_model(&self) -> Box<dyn TotalInelastic>;

    /// Model name, identical to the string the factory dispatches on.
    fn name(&self) -> &str;

    /// Optional human-readable summary of the parametrization.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Print the model identification (diagnostic only).
    fn print(&self) {
        match self.description() {
            Some(text) => println!("{}: {}", self.name(), text),
            None => println!("{}", self.name()),
        }
    }
}

// =================================================================================================
// Secondary protons
// =================================================================================================

/// Inclusive secondary-proton production.
pub trait ProtonXsecs: Send + Sync {
    /// Differential cross section dσ/dT for producing a proton with kinetic
    /// energy `t_sec` from `projectile` (kinetic energy per nucleon
    /// `t_proj`) on `target`.
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_sec: f64) -> f64;

    /// Independent deep copy behind a fresh owning handle.
    fn clone_model(&self) -> Box<dyn ProtonXsecs>;

    /// Model name, identical to the string the factory dispatches on.
    fn name(&self) -> &str;

    /// Optional human-readable summary of the parametrization.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Print the model identification (diagnostic only).
    fn print(&self) {
        match self.description() {
            Some(text) => println!("{}: {}", self.name(), text),
            None => println!("{}", self.name()),
        }
    }
}

// =================================================================================================
// Secondary antiprotons
// =================================================================================================

/// Inclusive antiproton production, plus the antiproton inelastic family
/// needed by tertiary (non-annihilating) source terms.
pub trait SecondaryAntiprotons: Send + Sync {
    /// Differential cross section dσ/dT for producing an antiproton with
    /// kinetic energy `t_ap` from `projectile` (kinetic energy per nucleon
    /// `t_proj`) on `target`. Antineutron decay is included.
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_ap: f64) -> f64;

    /// Total inelastic cross section of an antiproton on `target` at kinetic
    /// energy `t_ap`.
    ///
    /// All production models share the Tan & Ng (1983) parametrization here;
    /// the inelastic channel is not what distinguishes them.
    fn total_inelastic(&self, target: Target, t_ap: f64) -> f64 {
        crate::models::tan_ng83::pbar_total_inelastic(target, t_ap)
    }

    /// Annihilating part of the antiproton inelastic cross section.
    fn annihilating_inelastic(&self, target: Target, t_ap: f64) -> f64 {
        crate::models::tan_ng83::pbar_annihilating_inelastic(target, t_ap)
    }

    /// Non-annihilating inelastic cross section, σ_in − σ_ann, clamped to
    /// zero where annihilation saturates the inelastic channel.
    fn non_annihilating_inelastic(&self, target: Target, t_ap: f64) -> f64 {
        let sigma = self.total_inelastic(target, t_ap) - self.annihilating_inelastic(target, t_ap);
        sigma.max(0.0)
    }

    /// Independent deep copy behind a fresh owning handle.
    fn clone_model(&self) -> Box<dyn SecondaryAntiprotons>;

    /// Model name, identical to the string the factory dispatches on.
    fn name(&self) -> &str;

    /// Optional human-readable summary of the parametrization.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Print the model identification (diagnostic only).
    fn print(&self) {
        match self.description() {
            Some(text) => println!("{}: {}", self.name(), text),
            None => println!("{}", self.name()),
        }
    }
}

// =================================================================================================
// Secondary leptons
// =================================================================================================

/// Inclusive secondary electron/positron production.
pub trait SecondaryLeptons: Send + Sync {
    /// Differential cross section dσ/dT for producing the configured lepton
    /// with kinetic energy `t_lepton` from `projectile` (kinetic energy per
    /// nucleon `t_proj`) on `target`.
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_lepton: f64) -> f64;

    /// Which lepton this instance produces (electron or positron).
    fn lepton(&self) -> Pid;

    /// Independent deep copy behind a fresh owning handle.
    fn clone_model(&self) -> Box<dyn SecondaryLeptons>;

    /// Model name, identical to the string the factory dispatches on.
    fn name(&self) -> &str;

    /// Optional human-readable summary of the parametrization.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Print the model identification (diagnostic only).
    fn print(&self) {
        match self.description() {
            Some(text) => println!("{} ({})", self.name(), self.lepton()),
            None => println!("{}", self.name()),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{GEV, MEV, TEV};

    #[test]
    fn test_energy_range_contains() {
        let range = EnergyRange::new(20.0 * MEV, 1.0 * TEV);
        assert!(range.contains(1.0 * GEV));
        assert!(range.contains(20.0 * MEV));
        assert!(!range.contains(19.0 * MEV));
        assert!(!range.contains(2.0 * TEV));
    }

    #[test]
    fn test_energy_range_clamps_both_ends() {
        let range = EnergyRange::new(20.0 * MEV, 1.0 * TEV);
        assert_eq!(range.clamp(0.0), 20.0 * MEV);
        assert_eq!(range.clamp(10.0 * TEV), 1.0 * TEV);
        assert_eq!(range.clamp(5.0 * GEV), 5.0 * GEV);
    }

    #[test]
    #[should_panic(expected = "Range maximum must exceed minimum")]
    fn test_inverted_range_panics() {
        EnergyRange::new(1.0 * TEV, 20.0 * MEV);
    }

    #[test]
    #[should_panic(expected = "Range minimum must be positive")]
    fn test_zero_minimum_panics() {
        EnergyRange::new(0.0, 1.0 * TEV);
    }
}
