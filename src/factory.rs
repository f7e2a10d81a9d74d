//! Model selection and construction
//!
//! The public entry point of the crate. Two layers:
//!
//! 1. **Model identifiers**: one enum per category, each with a `parse`
//!    that matches model-name strings exactly (case-sensitive) against the
//!    registered set and fails with a typed [`XsecError::UnknownModel`].
//!    The supported-model set is closed and checkable at compile time.
//! 2. **[`XsecFactory`]**: holds one model-name string per category
//!    (pre-populated with the recommended baselines) and builds a fresh,
//!    independently owned instance on each `create_*` call.
//!
//! # Deferred validation
//!
//! `set_*` stores the name without validating it; the name is resolved at
//! `create_*` time. Configuration and construction are adjacent calls in
//! normal use, so an invalid name still fails before any query — and it
//! fails loudly, never by substituting a default.
//!
//! # Example
//!
//! ```rust
//! use xsec_rs::prelude::*;
//! use xsec_rs::units::{GEV, MBARN};
//!
//! let mut factory = XsecFactory::new();
//! factory.set_secondary_antiprotons("Winkler2017");
//!
//! let ap = factory.create_secondary_antiprotons(Generator::default())?;
//! let sigma = ap.get(Pid::PROTON, Target::H, 100.0 * GEV, 0.1 * GEV);
//! println!("dsigma/dT = {} mbarn/GeV", sigma / MBARN * GEV);
//! # Ok::<(), xsec_rs::XsecError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::decay::DecayChart;
use crate::error::{Category, XsecError, XsecResult};
use crate::models::{
    Crosec, DiMauro2015, Dragon2Protons, Feng2016, Generator, Kamae2006, Letaw1983, TanNg83,
    Tripathi99, Winkler2017,
};
use crate::physics::particle::Pid;
use crate::physics::traits::{
    ProtonXsecs, SecondaryAntiprotons, SecondaryLeptons, TotalInelastic,
};

// =================================================================================================
// Model identifiers (one closed enum per category)
// =================================================================================================

/// Registered total inelastic models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalInelasticModel {
    Letaw1983,
    Tripathi99,
    Crosec,
}

impl TotalInelasticModel {
    /// All registered identifiers, in dispatch order.
    pub const ALL: [TotalInelasticModel; 3] = [
        TotalInelasticModel::Letaw1983,
        TotalInelasticModel::Tripathi99,
        TotalInelasticModel::Crosec,
    ];

    /// The name the factory dispatches on.
    pub fn name(&self) -> &'static str {
        match self {
            TotalInelasticModel::Letaw1983 => "Letaw1983",
            TotalInelasticModel::Tripathi99 => "Tripathi99",
            TotalInelasticModel::Crosec => "CROSEC",
        }
    }

    /// Exact, case-sensitive lookup of a model name.
    pub fn parse(name: &str) -> XsecResult<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| XsecError::UnknownModel {
                category: Category::TotalInelastic,
                name: name.to_string(),
            })
    }
}

/// Registered secondary-antiproton models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntiprotonModel {
    TanNg83,
    DiMauro2015,
    Winkler2017,
    Feng2016,
}

impl AntiprotonModel {
    /// All registered identifiers, in dispatch order.
    pub const ALL: [AntiprotonModel; 4] = [
        AntiprotonModel::TanNg83,
        AntiprotonModel::DiMauro2015,
        AntiprotonModel::Winkler2017,
        AntiprotonModel::Feng2016,
    ];

    /// The name the factory dispatches on.
    pub fn name(&self) -> &'static str {
        match self {
            AntiprotonModel::TanNg83 => "TanNg83",
            AntiprotonModel::DiMauro2015 => "DiMauro2015",
            AntiprotonModel::Winkler2017 => "Winkler2017",
            AntiprotonModel::Feng2016 => "Feng2016",
        }
    }

    /// Exact, case-sensitive lookup of a model name.
    pub fn parse(name: &str) -> XsecResult<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| XsecError::UnknownModel {
                category: Category::SecondaryAntiprotons,
                name: name.to_string(),
            })
    }
}

/// Registered secondary-proton models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtonModel {
    Dragon2,
}

impl ProtonModel {
    /// All registered identifiers, in dispatch order.
    pub const ALL: [ProtonModel; 1] = [ProtonModel::Dragon2];

    /// The name the factory dispatches on.
    pub fn name(&self) -> &'static str {
        match self {
            ProtonModel::Dragon2 => "DRAGON2",
        }
    }

    /// Exact, case-sensitive lookup of a model name.
    pub fn parse(name: &str) -> XsecResult<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| XsecError::UnknownModel {
                category: Category::ProtonXsecs,
                name: name.to_string(),
            })
    }
}

/// Registered secondary-lepton models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeptonModel {
    Kamae2006,
}

impl LeptonModel {
    /// All registered identifiers, in dispatch order.
    pub const ALL: [LeptonModel; 1] = [LeptonModel::Kamae2006];

    /// The name the factory dispatches on.
    pub fn name(&self) -> &'static str {
        match self {
            LeptonModel::Kamae2006 => "Kamae2006",
        }
    }

    /// Exact, case-sensitive lookup of a model name.
    pub fn parse(name: &str) -> XsecResult<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| XsecError::UnknownModel {
                category: Category::SecondaryLeptons,
                name: name.to_string(),
            })
    }
}

// =================================================================================================
// Facade
// =================================================================================================

/// Per-category model configuration and construction.
///
/// Stores one model-name string per category, pre-populated with the
/// recommended baselines:
///
/// | Category | Default |
/// |---|---|
/// | total inelastic | `Tripathi99` |
/// | proton xsecs | `DRAGON2` |
/// | secondary antiprotons | `DiMauro2015` |
/// | secondary leptons | `Kamae2006` |
///
/// Every `create_*` call re-resolves the stored name and returns a freshly
/// constructed, independently owned instance; nothing is cached and no
/// state is shared between the instances handed out.
#[derive(Debug, Clone)]
pub struct XsecFactory {
    total_inelastic_model: String,
    proton_xsecs_model: String,
    secondary_antiprotons_model: String,
    secondary_leptons_model: String,
    crosec_data_path: PathBuf,
}

impl XsecFactory {
    /// Create a factory with the baseline model per category.
    pub fn new() -> Self {
        Self {
            total_inelastic_model: TotalInelasticModel::Tripathi99.name().to_string(),
            proton_xsecs_model: ProtonModel::Dragon2.name().to_string(),
            secondary_antiprotons_model: AntiprotonModel::DiMauro2015.name().to_string(),
            secondary_leptons_model: LeptonModel::Kamae2006.name().to_string(),
            crosec_data_path: PathBuf::from(Crosec::DEFAULT_DATA_PATH),
        }
    }

    // ==================== Configuration ====================

    /// Select the total inelastic model by name (validated at create time).
    pub fn set_total_inelastic(&mut self, model_name: &str) {
        self.total_inelastic_model = model_name.to_string();
    }

    /// Select the secondary-proton model by name (validated at create time).
    pub fn set_proton_xsecs(&mut self, model_name: &str) {
        self.proton_xsecs_model = model_name.to_string();
    }

    /// Select the antiproton production model by name (validated at create
    /// time).
    pub fn set_secondary_antiprotons(&mut self, model_name: &str) {
        self.secondary_antiprotons_model = model_name.to_string();
    }

    /// Select the secondary-lepton model by name (validated at create time).
    pub fn set_secondary_leptons(&mut self, model_name: &str) {
        self.secondary_leptons_model = model_name.to_string();
    }

    /// Override where the CROSEC tables are read from.
    pub fn set_crosec_data_path<P: AsRef<Path>>(&mut self, path: P) {
        self.crosec_data_path = path.as_ref().to_path_buf();
    }

    // ==================== Construction ====================

    /// Build the configured total inelastic model.
    ///
    /// The tabulated CROSEC variant loads its data file here; a missing or
    /// malformed file is fatal at this point, not at query time.
    pub fn create_total_inelastic(&self) -> XsecResult<Box<dyn TotalInelastic>> {
        let model = match TotalInelasticModel::parse(&self.total_inelastic_model)? {
            TotalInelasticModel::Letaw1983 => {
                Box::new(Letaw1983::new()) as Box<dyn TotalInelastic>
            }
            TotalInelasticModel::Tripathi99 => Box::new(Tripathi99::new()),
            TotalInelasticModel::Crosec => Box::new(Crosec::from_file(&self.crosec_data_path)?),
        };
        Ok(model)
    }

    /// Build the configured secondary-proton model.
    pub fn create_proton_xsecs(&self) -> XsecResult<Box<dyn ProtonXsecs>> {
        let model = match ProtonModel::parse(&self.proton_xsecs_model)? {
            ProtonModel::Dragon2 => Box::new(Dragon2Protons::new()) as Box<dyn ProtonXsecs>,
        };
        Ok(model)
    }

    /// Build the configured antiproton production model.
    ///
    /// `generator` is consumed only by the generator-tuned models
    /// (`Feng2016`); the data-driven fits ignore it.
    pub fn create_secondary_antiprotons(
        &self,
        generator: Generator,
    ) -> XsecResult<Box<dyn SecondaryAntiprotons>> {
        let model = match AntiprotonModel::parse(&self.secondary_antiprotons_model)? {
            AntiprotonModel::TanNg83 => Box::new(TanNg83::new()) as Box<dyn SecondaryAntiprotons>,
            AntiprotonModel::DiMauro2015 => Box::new(DiMauro2015::new()),
            AntiprotonModel::Winkler2017 => Box::new(Winkler2017::new()),
            AntiprotonModel::Feng2016 => Box::new(Feng2016::new(generator)),
        };
        Ok(model)
    }

    /// Build the configured secondary-lepton model for one lepton species.
    ///
    /// # Panics
    ///
    /// Panics when `lepton` is not e∓ (programmer error, same contract as
    /// the model constructors).
    pub fn create_secondary_leptons(&self, lepton: Pid) -> XsecResult<Box<dyn SecondaryLeptons>> {
        let model = match LeptonModel::parse(&self.secondary_leptons_model)? {
            LeptonModel::Kamae2006 => {
                Box::new(Kamae2006::new(lepton)) as Box<dyn SecondaryLeptons>
            }
        };
        Ok(model)
    }

    /// Build the decay chart (single built-in table, no dispatch).
    pub fn create_decay_chart(&self) -> DecayChart {
        DecayChart::new()
    }
}

impl Default for XsecFactory {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
