//! Radioactive decay chart for cosmic-ray clock nuclei
//!
//! A small immutable table mapping unstable nuclides to their decay
//! properties. Propagation codes use it for the "clock" species whose
//! decay during transport is measurable (Be-10, Al-26, Cl-36, Mn-54, ...)
//! and for electron-capture nuclides whose fate depends on being stripped.
//!
//! There is only one chart; unlike the cross-section categories it is not
//! dispatched by model name.

use std::collections::HashMap;
use std::fmt;

use crate::physics::particle::Pid;
use crate::units::{MEGAYEAR, SECOND, YEAR};

/// Decay mode of an unstable nuclide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayMode {
    /// β⁻ decay (Z → Z + 1)
    BetaMinus,
    /// β⁺ decay (Z → Z - 1)
    BetaPlus,
    /// Electron capture (Z → Z - 1, requires an attached electron)
    ElectronCapture,
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecayMode::BetaMinus => "beta-",
            DecayMode::BetaPlus => "beta+",
            DecayMode::ElectronCapture => "EC",
        };
        f.write_str(label)
    }
}

/// Decay properties of one nuclide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEntry {
    /// Half-life \[internal units\]
    pub half_life: f64,
    /// Decay mode
    pub mode: DecayMode,
    /// Daughter nuclide
    pub daughter: Pid,
}

/// Immutable decay chart, built once at construction.
///
/// ```rust
/// use xsec_rs::decay::DecayChart;
/// use xsec_rs::physics::Pid;
/// use xsec_rs::units::MEGAYEAR;
///
/// let chart = DecayChart::new();
/// let be10 = Pid::new(4, 10);
/// assert!(chart.is_unstable(be10));
/// let tau = chart.half_life(be10).unwrap();
/// assert!((tau / MEGAYEAR - 1.39).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct DecayChart {
    entries: HashMap<Pid, DecayEntry>,
}

impl DecayChart {
    /// Build the chart with the built-in nuclide table.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        let mut insert = |z: i32, a: i32, half_life: f64, mode: DecayMode, dz: i32| {
            entries.insert(
                Pid::new(z, a),
                DecayEntry {
                    half_life,
                    mode,
                    daughter: Pid::new(z + dz, a),
                },
            );
        };

        // The beta-decay clocks.
        insert(4, 10, 1.39 * MEGAYEAR, DecayMode::BetaMinus, 1); // Be-10 -> B-10
        insert(6, 14, 5.73e3 * YEAR, DecayMode::BetaMinus, 1); // C-14  -> N-14
        insert(13, 26, 0.717 * MEGAYEAR, DecayMode::BetaPlus, -1); // Al-26 -> Mg-26
        insert(17, 36, 0.301 * MEGAYEAR, DecayMode::BetaMinus, 1); // Cl-36 -> Ar-36
        insert(25, 54, 0.63 * MEGAYEAR, DecayMode::BetaMinus, 1); // Mn-54 -> Fe-54
        insert(26, 60, 2.62 * MEGAYEAR, DecayMode::BetaMinus, 1); // Fe-60 -> Co-60

        // Electron-capture species.
        insert(4, 7, 53.2 * 86_400.0 * SECOND, DecayMode::ElectronCapture, -1); // Be-7 -> Li-7
        insert(28, 59, 7.6e4 * YEAR, DecayMode::ElectronCapture, -1); // Ni-59 -> Co-59

        Self { entries }
    }

    /// Decay entry for `pid`, `None` for stable nuclides.
    pub fn get(&self, pid: Pid) -> Option<&DecayEntry> {
        self.entries.get(&pid)
    }

    /// Half-life of `pid` \[internal units\], `None` for stable nuclides.
    pub fn half_life(&self, pid: Pid) -> Option<f64> {
        self.get(pid).map(|entry| entry.half_life)
    }

    /// Decay mode of `pid`, `None` for stable nuclides.
    pub fn mode(&self, pid: Pid) -> Option<DecayMode> {
        self.get(pid).map(|entry| entry.mode)
    }

    /// Daughter of `pid`, `None` for stable nuclides.
    pub fn daughter(&self, pid: Pid) -> Option<Pid> {
        self.get(pid).map(|entry| entry.daughter)
    }

    /// True when the chart lists `pid` as unstable.
    pub fn is_unstable(&self, pid: Pid) -> bool {
        self.entries.contains_key(&pid)
    }

    /// Number of listed nuclides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the chart is empty (never, for the built-in table).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DecayChart {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be10_clock() {
        let chart = DecayChart::new();
        let be10 = Pid::new(4, 10);
        assert!(chart.is_unstable(be10));
        assert_eq!(chart.mode(be10), Some(DecayMode::BetaMinus));
        assert_eq!(chart.daughter(be10), Some(Pid::new(5, 10)));
        let tau = chart.half_life(be10).unwrap();
        assert!((tau / MEGAYEAR - 1.39).abs() < 1e-9);
    }

    #[test]
    fn test_stable_nuclides_absent() {
        let chart = DecayChart::new();
        assert!(!chart.is_unstable(Pid::PROTON));
        assert!(!chart.is_unstable(Pid::new(6, 12)));
        assert_eq!(chart.half_life(Pid::new(8, 16)), None);
    }

    #[test]
    fn test_electron_capture_daughter_loses_charge() {
        let chart = DecayChart::new();
        let be7 = Pid::new(4, 7);
        assert_eq!(chart.mode(be7), Some(DecayMode::ElectronCapture));
        assert_eq!(chart.daughter(be7), Some(Pid::new(3, 7)));
    }

    #[test]
    fn test_chart_not_empty() {
        let chart = DecayChart::new();
        assert!(!chart.is_empty());
        assert!(chart.len() >= 8);
    }

    #[test]
    fn test_clones_are_independent_snapshots() {
        let chart = DecayChart::new();
        let copy = chart.clone();
        assert_eq!(chart.half_life(Pid::new(13, 26)), copy.half_life(Pid::new(13, 26)));
    }
}
