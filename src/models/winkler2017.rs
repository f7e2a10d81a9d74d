//! Winkler (2017) antiproton production
//!
//! Fit of the invariant p + p → p̄ + X cross section built on the LHCf/NA49
//! generation of data. Two features distinguish it from the older fits:
//! a transverse-mass shape whose hardness grows logarithmically with √s,
//! and explicit, energy-dependent enhancement factors for antineutron
//! production (isospin excess) and antihyperon decay feed-down.

use crate::physics::kinematics::{self, M_P};
use crate::physics::particle::{Pid, Target};
use crate::physics::traits::SecondaryAntiprotons;

/// Normalization c1 \[GeV⁻²\] and radial exponent c2.
const C1: f64 = 0.047;
const C2: f64 = 7.76;

/// Coefficient of the ln²(√s / 4 m_p) transverse-hardness term.
const C3: f64 = 0.011;

/// Asymptotic isospin excess of antineutrons over antiprotons.
const ISOSPIN_ASYMPTOTIC: f64 = 0.30;

/// √s scale of the isospin-excess onset \[GeV\].
const ISOSPIN_SCALE: f64 = 30.0;

/// Asymptotic antihyperon feed-down fraction.
const HYPERON_ASYMPTOTIC: f64 = 0.081;

/// Winkler (2017) inclusive antiproton production.
#[derive(Debug, Clone)]
pub struct Winkler2017;

impl Winkler2017 {
    pub fn new() -> Self {
        Self
    }

    /// Total inelastic p-p cross section \[mbarn\] at √s \[GeV\].
    #[inline]
    fn sigma_in_pp(sqrt_s: f64) -> f64 {
        let l = (sqrt_s / 16.0).ln();
        34.3 + 1.88 * l + 0.25 * l * l
    }

    /// Antineutron isospin excess, rising to its asymptotic value with √s.
    #[inline]
    fn isospin_excess(sqrt_s: f64) -> f64 {
        ISOSPIN_ASYMPTOTIC / (1.0 + (ISOSPIN_SCALE / sqrt_s).powi(2))
    }

    /// Antihyperon feed-down fraction, saturating at high √s.
    #[inline]
    fn hyperon_fraction(sqrt_s: f64) -> f64 {
        HYPERON_ASYMPTOTIC * (sqrt_s / (sqrt_s + 4.0 * M_P))
    }

    /// Prompt p̄ plus decayed n̄ and antihyperons, relative to prompt p̄.
    #[inline]
    fn production_factor(sqrt_s: f64) -> f64 {
        let hyperon = Self::hyperon_fraction(sqrt_s);
        // Prompt p̄ and n̄ in equal number, n̄ carrying the isospin excess,
        // both species fed by hyperon decay.
        (2.0 + Self::isospin_excess(sqrt_s)) * (1.0 + hyperon)
    }

    /// Invariant cross section for the elementary p-p channel
    /// \[mbarn GeV⁻²\], prompt antiprotons only.
    #[inline]
    fn invariant(sqrt_s: f64, x_r: f64, p_t: f64) -> f64 {
        let m_t = (p_t * p_t + M_P * M_P).sqrt();
        let x = C3 * (sqrt_s / (4.0 * M_P)).ln().powi(2);
        let transverse = (1.0 + x * (m_t - M_P)).powf(-4.0 / x.max(1e-6));
        Self::sigma_in_pp(sqrt_s) * C1 * (1.0 - x_r).powf(C2) * transverse
    }
}

impl Default for Winkler2017 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecondaryAntiprotons for Winkler2017 {
    fn get(&self, projectile: Pid, target: Target, t_proj: f64, t_ap: f64) -> f64 {
        let sqrt_s = kinematics::mandelstam_s(t_proj).sqrt();
        let pp = kinematics::integrate_invariant(t_proj, t_ap, Self::invariant);
        pp * Self::production_factor(sqrt_s) * kinematics::nuclear_enhancement(projectile, target)
    }

    fn clone_model(&self) -> Box<dyn SecondaryAntiprotons> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "Winkler2017"
    }

    fn description(&self) -> Option<&str> {
        Some("Winkler (2017) fit with energy-dependent isospin and hyperon factors")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
