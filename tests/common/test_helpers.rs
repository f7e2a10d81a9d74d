//! Helper functions for integration tests

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use xsec_rs::prelude::*;

/// Relative error between a computed and a reference value.
///
/// Falls back to absolute error when the reference is zero.
pub fn relative_error(computed: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        computed.abs()
    } else {
        ((computed - reference) / reference).abs()
    }
}

/// A factory with one model name overridden, for one-line test setups.
pub fn configured_factory(category: Category, model_name: &str) -> XsecFactory {
    let mut factory = XsecFactory::new();
    match category {
        Category::TotalInelastic => factory.set_total_inelastic(model_name),
        Category::ProtonXsecs => factory.set_proton_xsecs(model_name),
        Category::SecondaryAntiprotons => factory.set_secondary_antiprotons(model_name),
        Category::SecondaryLeptons => factory.set_secondary_leptons(model_name),
    }
    factory
}

/// Write a small, valid CROSEC table to a unique temp file.
///
/// Callers are responsible for removing the file.
pub fn write_crosec_table(stem: &str) -> PathBuf {
    let content = "\
# integration-test table
3 5 0.02 1000.0
1 1 210.0 190.0 170.0 165.0 164.0
2 4 520.0 480.0 440.0 430.0 428.0
6 12 1000.0 950.0 900.0 890.0 888.0
";
    let mut path = std::env::temp_dir();
    path.push(format!(
        "xsec_rs_it_{}_{}.txt",
        stem,
        std::process::id()
    ));
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}
