//! Particle and target identity types
//!
//! - [`Pid`]: projectile/fragment identity as (charge number Z, mass number A)
//! - [`Target`]: interstellar-medium target nucleus
//!
//! Both are small immutable value types compared by value and usable as map
//! keys (decay chart, tabulated cross-section grids).

use std::fmt;

// =================================================================================================
// Pid
// =================================================================================================

/// Particle / nuclide identifier.
///
/// Nuclei carry their charge number `z` and mass number `a`. Leptons are
/// encoded with `a == 0` and `z = ±1` (electron `z = -1`, positron `z = +1`),
/// the antiproton with `z = -1, a = 1`.
///
/// # Example
///
/// ```rust
/// use xsec_rs::physics::Pid;
///
/// let proton = Pid::new(1, 1);
/// assert_eq!(proton, Pid::PROTON);
/// assert!(proton.is_nucleus());
/// assert!(Pid::ELECTRON.is_lepton());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid {
    z: i32,
    a: i32,
}

impl Pid {
    /// Proton (Z = 1, A = 1)
    pub const PROTON: Pid = Pid { z: 1, a: 1 };

    /// Antiproton (Z = -1, A = 1)
    pub const ANTIPROTON: Pid = Pid { z: -1, a: 1 };

    /// Helium-4 (Z = 2, A = 4)
    pub const HELIUM4: Pid = Pid { z: 2, a: 4 };

    /// Electron (Z = -1, A = 0)
    pub const ELECTRON: Pid = Pid { z: -1, a: 0 };

    /// Positron (Z = 1, A = 0)
    pub const POSITRON: Pid = Pid { z: 1, a: 0 };

    /// Create an identifier from charge number and mass number.
    ///
    /// # Panics
    ///
    /// Panics when `a < 0`, or when `a == 0` and `z` is not ±1 (the only
    /// mass-zero entries this crate handles are e∓).
    pub fn new(z: i32, a: i32) -> Self {
        assert!(a >= 0, "Mass number must be non-negative, got {}", a);
        assert!(
            a > 0 || z == 1 || z == -1,
            "A = 0 is reserved for leptons (Z = ±1), got Z = {}",
            z
        );
        Self { z, a }
    }

    /// Charge number Z
    pub fn atomic_number(&self) -> i32 {
        self.z
    }

    /// Mass number A
    pub fn mass_number(&self) -> i32 {
        self.a
    }

    /// True for electron/positron entries (A = 0).
    pub fn is_lepton(&self) -> bool {
        self.a == 0
    }

    /// True for nuclei, i.e. anything carrying nucleons with Z > 0.
    pub fn is_nucleus(&self) -> bool {
        self.a > 0 && self.z > 0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Pid::ELECTRON => write!(f, "e-"),
            Pid::POSITRON => write!(f, "e+"),
            Pid::ANTIPROTON => write!(f, "pbar"),
            Pid { z, a } => write!(f, "({},{})", z, a),
        }
    }
}

// =================================================================================================
// Target
// =================================================================================================

/// Interstellar-medium target nucleus.
///
/// The ISM targets cross sections are computed against form a closed set, so
/// the type is an enum rather than a loose integer code: an unsupported
/// target is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Hydrogen (Z = 1, A = 1)
    H,
    /// Helium (Z = 2, A = 4)
    He,
}

impl Target {
    /// Charge number of the target nucleus.
    pub fn charge(&self) -> i32 {
        match self {
            Target::H => 1,
            Target::He => 2,
        }
    }

    /// Mass number of the target nucleus.
    pub fn mass_number(&self) -> i32 {
        match self {
            Target::H => 1,
            Target::He => 4,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::H => f.write_str("H"),
            Target::He => f.write_str("He"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_value_semantics() {
        let a = Pid::new(6, 12);
        let b = Pid::new(6, 12);
        assert_eq!(a, b);
        assert_ne!(a, Pid::new(6, 13));
    }

    #[test]
    fn test_pid_consts() {
        assert_eq!(Pid::PROTON.atomic_number(), 1);
        assert_eq!(Pid::HELIUM4.mass_number(), 4);
        assert!(Pid::ELECTRON.is_lepton());
        assert!(!Pid::ELECTRON.is_nucleus());
        assert!(!Pid::ANTIPROTON.is_nucleus());
    }

    #[test]
    #[should_panic(expected = "Mass number must be non-negative")]
    fn test_negative_mass_number_panics() {
        Pid::new(1, -1);
    }

    #[test]
    #[should_panic(expected = "reserved for leptons")]
    fn test_mass_zero_non_lepton_panics() {
        Pid::new(3, 0);
    }

    #[test]
    fn test_target_numbers() {
        assert_eq!(Target::H.mass_number(), 1);
        assert_eq!(Target::He.charge(), 2);
        assert_eq!(Target::He.mass_number(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pid::ELECTRON.to_string(), "e-");
        assert_eq!(Pid::new(2, 4).to_string(), "(2,4)");
        assert_eq!(Target::He.to_string(), "He");
    }
}
