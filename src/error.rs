//! Crate error type
//!
//! All fallible operations return [`XsecResult`]. Failures are deterministic
//! functions of the inputs: a model name either matches a registered model or
//! it does not, a data file either parses or it does not. There are no
//! retries and no silent defaults — selecting an unsupported model name must
//! fail loudly at `create_*` time, never degrade to a baseline model.

use std::fmt;

use thiserror::Error;

/// Cross-section category, used to qualify dispatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TotalInelastic,
    ProtonXsecs,
    SecondaryAntiprotons,
    SecondaryLeptons,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::TotalInelastic => "total inelastic",
            Category::ProtonXsecs => "proton xsecs",
            Category::SecondaryAntiprotons => "secondary antiprotons",
            Category::SecondaryLeptons => "secondary leptons",
        };
        f.write_str(label)
    }
}

/// Errors produced by model dispatch and tabulated-data loading.
#[derive(Error, Debug)]
pub enum XsecError {
    /// The stored model name matches no registered model for the category.
    #[error("category '{category}' has no model named '{name}'")]
    UnknownModel { category: Category, name: String },

    /// A tabulated variant could not read its data file.
    #[error("cannot read data file '{path}': {source}")]
    DataFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A data file was read but its content does not match the expected layout.
    #[error("malformed data file '{path}' at line {line}: {message}")]
    MalformedData {
        path: String,
        line: usize,
        message: String,
    },
}

/// Convenience alias used throughout the crate.
pub type XsecResult<T> = Result<T, XsecError>;

// =================================================================================================
// Tests
// =================================================================================================
