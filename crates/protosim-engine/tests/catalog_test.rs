use protosim_core::config::SimConfig;
use protosim_core::errors::{CatalogError, SimulationError};
use protosim_core::models::{ProtocolStep, UnknownTemplatePolicy};
use protosim_engine::ProtocolCatalog;

const BUILTIN: &str = "template-crispr-plasmid-prep-v1";

fn step(name: &str) -> ProtocolStep {
    ProtocolStep::new(name, 10.0, 1.0, 0.9, 2.0).with_reagent("water", 1.0)
}

#[test]
fn builtin_template_has_six_ordered_steps() {
    let catalog = ProtocolCatalog::with_builtins();
    let steps = catalog.lookup(BUILTIN).unwrap();
    let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "DNA Extraction",
            "Plasmid Amplification",
            "Restriction Digest",
            "Ligation",
            "Transformation",
            "Colony Selection & Verification",
        ]
    );
    assert!(steps.iter().all(|s| s.check().is_ok()));
}

#[test]
fn lookup_is_idempotent() {
    let catalog = ProtocolCatalog::with_builtins();
    let first = catalog.lookup(BUILTIN).unwrap().to_vec();
    let second = catalog.lookup(BUILTIN).unwrap().to_vec();
    assert_eq!(first, second);
}

#[test]
fn unknown_template_is_reported_not_substituted() {
    let catalog = ProtocolCatalog::with_builtins();
    let err = catalog.lookup("template-crispr-plasmid-prep-v2").unwrap_err();
    assert_eq!(
        err,
        SimulationError::UnknownTemplate {
            template_id: "template-crispr-plasmid-prep-v2".into()
        }
    );

    let err = catalog
        .resolve("typo", &UnknownTemplatePolicy::Strict)
        .unwrap_err();
    assert!(matches!(err, SimulationError::UnknownTemplate { .. }));
}

#[test]
fn fallback_policy_substitutes_named_template() {
    let catalog = ProtocolCatalog::with_builtins();
    let policy = UnknownTemplatePolicy::FallbackTo(BUILTIN.to_string());

    let resolved = catalog.resolve("typo", &policy).unwrap();
    assert_eq!(resolved.template_id, BUILTIN);
    assert!(resolved.substituted);
    assert_eq!(resolved.steps.len(), 6);

    let resolved = catalog.resolve(BUILTIN, &policy).unwrap();
    assert!(!resolved.substituted);
}

#[test]
fn fallback_to_missing_template_reports_requested_id() {
    let catalog = ProtocolCatalog::with_builtins();
    let policy = UnknownTemplatePolicy::FallbackTo("also-missing".to_string());
    let err = catalog.resolve("typo", &policy).unwrap_err();
    assert_eq!(
        err,
        SimulationError::UnknownTemplate {
            template_id: "typo".into()
        }
    );
}

#[test]
fn register_adds_template_and_lists_sorted_ids() {
    let mut catalog = ProtocolCatalog::with_builtins();
    catalog
        .register("a-miniprep", vec![step("Lysis"), step("Elution")])
        .unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("a-miniprep"));
    assert_eq!(catalog.template_ids(), vec!["a-miniprep", BUILTIN]);
    assert_eq!(catalog.lookup("a-miniprep").unwrap()[1].name, "Elution");
}

#[test]
fn register_rejects_duplicates_empties_and_bad_steps() {
    let mut catalog = ProtocolCatalog::with_builtins();

    let err = catalog.register(BUILTIN, vec![step("Lysis")]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateTemplate { .. }));

    let err = catalog.register("empty", vec![]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyTemplate { .. }));

    let mut bad = step("Overconfident");
    bad.success_rate = 1.5;
    let err = catalog.register("bad", vec![step("Lysis"), bad]).unwrap_err();
    match err {
        CatalogError::InvalidStep { template_id, step, .. } => {
            assert_eq!(template_id, "bad");
            assert_eq!(step, "Overconfident");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!catalog.contains("bad"));
}

#[test]
fn from_config_registers_configured_templates() {
    let config = SimConfig::from_toml(
        r#"
[[templates]]
id = "miniprep"

[[templates.steps]]
name = "Lysis"
base_duration_minutes = 20.0
duration_std_dev = 2.0
success_rate = 0.99
cost_per_sample = 1.5
reagent_usage = { lysis_buffer = 5.0 }
"#,
    )
    .unwrap();
    let catalog = ProtocolCatalog::from_config(&config.templates).unwrap();
    assert!(catalog.contains(BUILTIN));
    let steps = catalog.lookup("miniprep").unwrap();
    assert_eq!(steps[0].reagent_usage["lysis_buffer"], 5.0);
}

#[test]
fn empty_catalog_knows_nothing() {
    let catalog = ProtocolCatalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.lookup(BUILTIN).is_err());
}
