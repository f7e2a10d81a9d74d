//! CROSEC tabulated total inelastic cross sections
//!
//! Barashenkov & Polanski's CROSEC code is the reference for nucleon-nucleus
//! non-elastic cross sections. This variant consumes its tabulated output
//! (`data/barpol.txt`): per nuclide, cross sections on a log-spaced grid of
//! kinetic energy per nucleon between 20 MeV and 1 TeV.
//!
//! # File format
//!
//! ```text
//! # comment lines (any number, '#' first)
//! n_nuclides n_energies t_min_gev t_max_gev
//! Z A sigma_1 ... sigma_n        (one line per nuclide, mbarn)
//! ```
//!
//! The energy grid is log-spaced from `t_min_gev` to `t_max_gev` inclusive.
//! A missing or malformed file is fatal at construction — there is no
//! partial recovery or default substitution.
//!
//! # Clamping
//!
//! Queries outside \[20 MeV, 1 TeV\] are clamped to the grid boundary; the
//! value below 20 MeV equals the value at exactly 20 MeV. Clamping keeps
//! the evaluation defined over the full energy domain and is part of the
//! model contract.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::DVector;

use crate::error::{XsecError, XsecResult};
use crate::physics::particle::{Pid, Target};
use crate::physics::traits::{EnergyRange, TotalInelastic};
use crate::units::{GEV, MBARN};

/// CROSEC tabulated total inelastic cross sections.
///
/// Owns an immutable lookup table loaded once at construction; queries are
/// interpolations, never file reads. `clone_model` deep-copies the table.
///
/// ```rust,no_run
/// use xsec_rs::models::Crosec;
/// use xsec_rs::physics::{Pid, Target, TotalInelastic};
/// use xsec_rs::units::{GEV, MBARN};
///
/// let model = Crosec::from_file(Crosec::DEFAULT_DATA_PATH)?;
/// let sigma = model.get(Pid::new(6, 12), Target::H, 10.0 * GEV);
/// println!("sigma(C12 + H) = {} mbarn", sigma / MBARN);
/// # Ok::<(), xsec_rs::XsecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crosec {
    range: EnergyRange,
    n_energies: usize,
    table: HashMap<Pid, DVector<f64>>,
}

impl Crosec {
    /// Conventional location of the CROSEC table.
    pub const DEFAULT_DATA_PATH: &'static str = "data/barpol.txt";

    /// Load the tabulated cross sections from `path`.
    ///
    /// Fatal on a missing file ([`XsecError::DataFile`]) or on any layout
    /// violation ([`XsecError::MalformedData`] with the offending line).
    pub fn from_file<P: AsRef<Path>>(path: P) -> XsecResult<Self> {
        let path_str = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|source| XsecError::DataFile {
            path: path_str.clone(),
            source,
        })?;

        let malformed = |line: usize, message: String| XsecError::MalformedData {
            path: path_str.clone(),
            line,
            message,
        };

        let mut lines = BufReader::new(file)
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l));

        // Header: skip comments, then one line of grid metadata.
        let (header_no, header) = loop {
            match lines.next() {
                Some((no, Ok(text))) => {
                    let trimmed = text.trim().to_string();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    break (no, trimmed);
                }
                Some((_, Err(source))) => {
                    return Err(XsecError::DataFile {
                        path: path_str.clone(),
                        source,
                    });
                }
                None => {
                    return Err(malformed(0, "missing grid header line".to_string()));
                }
            }
        };

        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(malformed(
                header_no,
                format!("expected 'n_nuclides n_energies t_min t_max', found {} fields", fields.len()),
            ));
        }
        let n_nuclides: usize = fields[0]
            .parse()
            .map_err(|_| malformed(header_no, format!("invalid nuclide count '{}'", fields[0])))?;
        let n_energies: usize = fields[1]
            .parse()
            .map_err(|_| malformed(header_no, format!("invalid energy count '{}'", fields[1])))?;
        let t_min: f64 = fields[2]
            .parse()
            .map_err(|_| malformed(header_no, format!("invalid grid minimum '{}'", fields[2])))?;
        let t_max: f64 = fields[3]
            .parse()
            .map_err(|_| malformed(header_no, format!("invalid grid maximum '{}'", fields[3])))?;
        if n_energies < 2 {
            return Err(malformed(header_no, "energy grid needs at least 2 points".to_string()));
        }
        if !(t_min > 0.0 && t_max > t_min) {
            return Err(malformed(
                header_no,
                format!("invalid grid bounds [{}, {}] GeV", t_min, t_max),
            ));
        }

        // Nuclide rows.
        let mut table = HashMap::with_capacity(n_nuclides);
        let mut rows_read = 0;
        for (no, line) in lines {
            let text = line.map_err(|source| XsecError::DataFile {
                path: path_str.clone(),
                source,
            })?;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() != 2 + n_energies {
                return Err(malformed(
                    no,
                    format!(
                        "expected Z A plus {} cross-section values, found {} fields",
                        n_energies,
                        fields.len()
                    ),
                ));
            }
            let z: i32 = fields[0]
                .parse()
                .map_err(|_| malformed(no, format!("invalid charge number '{}'", fields[0])))?;
            let a: i32 = fields[1]
                .parse()
                .map_err(|_| malformed(no, format!("invalid mass number '{}'", fields[1])))?;
            if a < 1 || z < 1 || z > a {
                return Err(malformed(
                    no,
                    format!("nuclide (Z = {}, A = {}) is not a nucleus", z, a),
                ));
            }
            let mut values = DVector::zeros(n_energies);
            for (k, field) in fields[2..].iter().enumerate() {
                let sigma: f64 = field
                    .parse()
                    .map_err(|_| malformed(no, format!("invalid cross section '{}'", field)))?;
                if !sigma.is_finite() || sigma < 0.0 {
                    return Err(malformed(
                        no,
                        format!("cross section must be finite and non-negative, got {}", sigma),
                    ));
                }
                values[k] = sigma;
            }
            if table.insert(Pid::new(z, a), values).is_some() {
                return Err(malformed(
                    no,
                    format!("duplicate row for nuclide (Z = {}, A = {})", z, a),
                ));
            }
            rows_read += 1;
        }
        if rows_read != n_nuclides {
            return Err(malformed(
                0,
                format!("header announces {} nuclides, file holds {}", n_nuclides, rows_read),
            ));
        }

        Ok(Self {
            range: EnergyRange::new(t_min * GEV, t_max * GEV),
            n_energies,
            table,
        })
    }

    /// Interpolate a tabulated row at `t_n` (internal units, already inside
    /// the grid range). The grid is log-spaced, so interpolation is linear
    /// in log energy.
    fn interpolate(&self, row: &DVector<f64>, t_n: f64) -> f64 {
        let log_min = self.range.min().ln();
        let log_max = self.range.max().ln();
        let x = (t_n.ln() - log_min) / (log_max - log_min) * (self.n_energies - 1) as f64;

        let lower = (x.floor() as usize).min(self.n_energies - 2);
        let frac = x - lower as f64;
        row[lower] * (1.0 - frac) + row[lower + 1] * frac
    }
}

impl TotalInelastic for Crosec {
    fn get(&self, projectile: Pid, target: Target, t_n: f64) -> f64 {
        let Some(row) = self.table.get(&projectile) else {
            // Nuclide absent from the table: no tabulated channel.
            return 0.0;
        };
        let t = self.range.clamp(t_n);
        let mut sigma = self.interpolate(row, t);
        if target == Target::He {
            // The table is hydrogen-target; He follows the same scaling
            // ratio as the closed-form models (Ferrando et al. 1988).
            sigma *= 2.10 * (projectile.mass_number().max(1) as f64).powf(-0.055);
        }
        sigma.max(0.0) * MBARN
    }

    fn clone_model(&self) -> Box<dyn TotalInelastic> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "CROSEC"
    }

    fn description(&self) -> Option<&str> {
        Some("Barashenkov & Polanski CROSEC tables, 20 MeV/n - 1 TeV/n, log-interpolated")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{MEV, TEV};
    use std::io::Write;
    use std::path::PathBuf;

    /// Write a small valid table to a unique temp file and return its path.
    fn write_table(stem: &str, content: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("xsec_rs_crosec_{}_{}.txt", stem, std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const SMALL_TABLE: &str = "\
# test table
2 3 0.02 1000.0
1 1 200.0 180.0 160.0
6 12 400.0 380.0 360.0
";

    #[test]
    fn test_load_and_query() {
        let path = write_table("load", SMALL_TABLE);
        let model = Crosec::from_file(&path).unwrap();
        let sigma = model.get(Pid::new(6, 12), Target::H, 1.0 * GEV);
        assert!(sigma.is_finite() && sigma > 0.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_grid_endpoints_exact() {
        let path = write_table("endpoints", SMALL_TABLE);
        let model = Crosec::from_file(&path).unwrap();
        let lo = model.get(Pid::PROTON, Target::H, 20.0 * MEV);
        let hi = model.get(Pid::PROTON, Target::H, 1.0 * TEV);
        assert!((lo / MBARN - 200.0).abs() < 1e-9);
        assert!((hi / MBARN - 160.0).abs() < 1e-9);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_clamp_below_grid_matches_boundary() {
        let path = write_table("clamp", SMALL_TABLE);
        let model = Crosec::from_file(&path).unwrap();
        let below = model.get(Pid::PROTON, Target::H, 1.0 * MEV);
        let at_bound = model.get(Pid::PROTON, Target::H, 20.0 * MEV);
        assert_eq!(below, at_bound);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_unknown_nuclide_is_zero() {
        let path = write_table("unknown", SMALL_TABLE);
        let model = Crosec::from_file(&path).unwrap();
        assert_eq!(model.get(Pid::new(26, 56), Target::H, 1.0 * GEV), 0.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = Crosec::from_file("data/does_not_exist.txt").unwrap_err();
        assert!(matches!(err, XsecError::DataFile { .. }));
    }

    #[test]
    fn test_short_row_is_fatal() {
        let path = write_table(
            "short",
            "2 3 0.02 1000.0\n1 1 200.0 180.0\n6 12 400.0 380.0 360.0\n",
        );
        let err = Crosec::from_file(&path).unwrap_err();
        match err {
            XsecError::MalformedData { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedData, got {:?}", other),
        }
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_row_count_mismatch_is_fatal() {
        let path = write_table("count", "3 3 0.02 1000.0\n1 1 200.0 180.0 160.0\n");
        let err = Crosec::from_file(&path).unwrap_err();
        assert!(matches!(err, XsecError::MalformedData { .. }));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_duplicate_nuclide_row_is_fatal() {
        // Two rows for the same nuclide must not silently shadow each other,
        // even when the header count matches.
        let path = write_table(
            "duplicate",
            "2 3 0.02 1000.0\n1 1 200.0 180.0 160.0\n1 1 210.0 190.0 170.0\n",
        );
        let err = Crosec::from_file(&path).unwrap_err();
        match err {
            XsecError::MalformedData { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("duplicate"), "message: {}", message);
            }
            other => panic!("expected MalformedData, got {:?}", other),
        }
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_negative_cross_section_is_fatal() {
        let path = write_table("negative", "1 3 0.02 1000.0\n1 1 200.0 -1.0 160.0\n");
        let err = Crosec::from_file(&path).unwrap_err();
        assert!(matches!(err, XsecError::MalformedData { .. }));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_clone_is_deep_and_identical() {
        let path = write_table("clone", SMALL_TABLE);
        let model = Crosec::from_file(&path).unwrap();
        let copy = model.clone_model();
        // Deleting the source file must not affect either instance.
        std::fs::remove_file(&path).ok();
        let t = 3.0 * GEV;
        assert_eq!(
            model.get(Pid::new(6, 12), Target::H, t),
            copy.get(Pid::new(6, 12), Target::H, t)
        );
    }

    #[test]
    fn test_shipped_table_loads() {
        let model = Crosec::from_file(Crosec::DEFAULT_DATA_PATH).unwrap();
        let sigma = model.get(Pid::new(6, 12), Target::H, 10.0 * GEV);
        assert!(sigma.is_finite() && sigma > 0.0);
    }
}
