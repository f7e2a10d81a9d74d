//! Integration tests: factory dispatch + category traits
//!
//! These tests verify the selection layer end to end: every registered
//! model name constructs a usable instance, unknown names fail with the
//! typed error, validation is deferred to create time, and handed-out
//! instances are independent.

use xsec_rs::prelude::*;
use xsec_rs::units::GEV;

mod common;
use common::{configured_factory, write_crosec_table};

// =================================================================================================
// Registered-name grid
// =================================================================================================

#[test]
fn test_every_total_inelastic_model_constructs_and_answers() {
    for model_id in TotalInelasticModel::ALL {
        let mut factory = configured_factory(Category::TotalInelastic, model_id.name());
        let table = write_crosec_table("grid");
        factory.set_crosec_data_path(&table);

        let model = factory.create_total_inelastic().unwrap();
        assert_eq!(model.name(), model_id.name());

        let sigma = model.get(Pid::HELIUM4, Target::H, 10.0 * GEV);
        assert!(
            sigma.is_finite() && sigma >= 0.0,
            "{} returned {}",
            model_id.name(),
            sigma
        );
        std::fs::remove_file(table).ok();
    }
}

#[test]
fn test_every_antiproton_model_constructs_and_answers() {
    for model_id in AntiprotonModel::ALL {
        let factory = configured_factory(Category::SecondaryAntiprotons, model_id.name());
        let model = factory
            .create_secondary_antiprotons(Generator::default())
            .unwrap();
        assert_eq!(model.name(), model_id.name());

        let sigma = model.get(Pid::PROTON, Target::H, 100.0 * GEV, 2.0 * GEV);
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "{} returned {}",
            model_id.name(),
            sigma
        );
    }
}

#[test]
fn test_every_lepton_model_constructs_for_both_species() {
    for model_id in LeptonModel::ALL {
        let factory = configured_factory(Category::SecondaryLeptons, model_id.name());
        for lepton in [Pid::ELECTRON, Pid::POSITRON] {
            let model = factory.create_secondary_leptons(lepton).unwrap();
            assert_eq!(model.lepton(), lepton);
            let sigma = model.get(Pid::PROTON, Target::H, 50.0 * GEV, 1.0 * GEV);
            assert!(sigma.is_finite() && sigma > 0.0);
        }
    }
}

#[test]
fn test_proton_xsecs_default_constructs_and_answers() {
    let factory = XsecFactory::new();
    let model = factory.create_proton_xsecs().unwrap();
    let sigma = model.get(Pid::HELIUM4, Target::H, 10.0 * GEV, 1.0 * GEV);
    assert!(sigma.is_finite() && sigma > 0.0);
}

// =================================================================================================
// Unknown names and deferred validation
// =================================================================================================

#[test]
fn test_unknown_names_fail_per_category() {
    let cases = [
        Category::TotalInelastic,
        Category::ProtonXsecs,
        Category::SecondaryAntiprotons,
        Category::SecondaryLeptons,
    ];
    for category in cases {
        // set_* accepts the bogus name without complaint...
        let factory = configured_factory(category, "Bogus1999");

        // ...create_* rejects it with the category-qualified typed error.
        let err = match category {
            Category::TotalInelastic => factory.create_total_inelastic().map(|_| ()).unwrap_err(),
            Category::ProtonXsecs => factory.create_proton_xsecs().map(|_| ()).unwrap_err(),
            Category::SecondaryAntiprotons => factory
                .create_secondary_antiprotons(Generator::default())
                .map(|_| ())
                .unwrap_err(),
            Category::SecondaryLeptons => factory
                .create_secondary_leptons(Pid::ELECTRON)
                .map(|_| ())
                .unwrap_err(),
        };

        match err {
            XsecError::UnknownModel { category: c, name } => {
                assert_eq!(c, category);
                assert_eq!(name, "Bogus1999");
            }
            other => panic!("expected UnknownModel for {:?}, got {:?}", category, other),
        }
    }
}

#[test]
fn test_model_names_are_case_sensitive() {
    let factory = configured_factory(Category::SecondaryAntiprotons, "winkler2017");
    assert!(factory
        .create_secondary_antiprotons(Generator::default())
        .is_err());
}

// =================================================================================================
// Instance independence
// =================================================================================================

#[test]
fn test_clone_returns_identical_values() {
    let factory = XsecFactory::new();
    let original = factory
        .create_secondary_antiprotons(Generator::default())
        .unwrap();
    let copy = original.clone_model();

    for t_ap_gev in [0.5, 1.0, 5.0, 20.0] {
        let args = (Pid::PROTON, Target::H, 100.0 * GEV, t_ap_gev * GEV);
        assert_eq!(
            original.get(args.0, args.1, args.2, args.3),
            copy.get(args.0, args.1, args.2, args.3),
            "clone diverged at T_ap = {} GeV",
            t_ap_gev
        );
    }
}

#[test]
fn test_tabulated_clone_survives_source_file_removal() {
    let table = write_crosec_table("deepcopy");
    let mut factory = configured_factory(Category::TotalInelastic, "CROSEC");
    factory.set_crosec_data_path(&table);

    let original = factory.create_total_inelastic().unwrap();
    let copy = original.clone_model();
    std::fs::remove_file(&table).ok();

    // Both instances keep answering from their own in-memory tables.
    let t = 1.0 * GEV;
    let a = original.get(Pid::new(6, 12), Target::H, t);
    let b = copy.get(Pid::new(6, 12), Target::H, t);
    assert_eq!(a, b);
    assert!(a > 0.0);
}

#[test]
fn test_reconfiguration_does_not_affect_existing_instances() {
    let mut factory = XsecFactory::new();
    factory.set_secondary_antiprotons("TanNg83");
    let tan_ng = factory
        .create_secondary_antiprotons(Generator::default())
        .unwrap();

    factory.set_secondary_antiprotons("Winkler2017");
    let winkler = factory
        .create_secondary_antiprotons(Generator::default())
        .unwrap();

    assert_eq!(tan_ng.name(), "TanNg83");
    assert_eq!(winkler.name(), "Winkler2017");
}

#[test]
fn test_feng_generator_passes_through() {
    let factory = configured_factory(Category::SecondaryAntiprotons, "Feng2016");
    let epos = factory
        .create_secondary_antiprotons(Generator::EposLhc)
        .unwrap();
    let qgsjet = factory
        .create_secondary_antiprotons(Generator::QgsjetII04)
        .unwrap();

    let sigma_e = epos.get(Pid::PROTON, Target::H, 100.0 * GEV, 2.0 * GEV);
    let sigma_q = qgsjet.get(Pid::PROTON, Target::H, 100.0 * GEV, 2.0 * GEV);
    assert_ne!(sigma_e, sigma_q);
}
