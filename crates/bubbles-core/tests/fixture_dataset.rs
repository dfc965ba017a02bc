use bubbles_core::{ChartConfig, Mode, ModeCatalog, build_nodes, load_records};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .join("fixtures")
        .join(name)
}

#[test]
fn published_dataset_places_in_every_mode() {
    let records = load_records(fixture("soutiens.csv")).expect("records");
    assert_eq!(records.len(), 12);
    let seven = records.iter().find(|r| r.id == "7").expect("row 7");
    assert_eq!(seven.name, "Jeanne Martin");
    assert_eq!(seven.image, "martin.jpg");

    let config = ChartConfig::default();
    let nodes = build_nodes(&records, &config, &mut StdRng::seed_from_u64(5)).expect("nodes");
    let catalog = ModeCatalog::from_config(&config);
    catalog.validate(&nodes).expect("every mode places every node");

    for mode in Mode::ALL {
        let targets = catalog.targets(mode, &nodes).expect("targets");
        assert_eq!(targets.len(), nodes.len());
        assert!(targets.iter().all(|t| t.y == config.height / 2.0));
    }
}

#[test]
fn quoted_descriptions_keep_their_commas() {
    let records = load_records(fixture("soutiens.csv")).expect("records");
    assert_eq!(
        records[0].description,
        "Ancienne ministre, conseillère départementale"
    );
}

#[test]
fn malformed_amount_fixture_is_rejected() {
    let records = load_records(fixture("bad_amount.csv")).expect("records");
    let err = build_nodes(
        &records,
        &ChartConfig::default(),
        &mut StdRng::seed_from_u64(1),
    )
    .expect_err("invalid amount");
    assert!(matches!(
        err,
        bubbles_core::Error::InvalidMagnitude { row: 1, ref value, .. } if value == "beaucoup"
    ));
}

#[test]
fn yaml_fixture_overrides_only_what_it_lists() {
    let config = ChartConfig::from_path(fixture("config.yaml")).expect("config");
    assert_eq!((config.width, config.height), (1200.0, 800.0));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.physics.alpha_decay, 0.02);
    assert_eq!(config.physics.friction, 0.9);
    assert_eq!(config.force_options().ticks_to_converge(), 263);
}
