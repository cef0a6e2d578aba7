//! Tests for loading config.yaml from disk.

mod common;

use chromakit::color_core::extract::ClusterOrder;
use chromakit::color_core::Mood;
use chromakit::models::AppConfig;
use chromakit::CliError;
use pretty_assertions::assert_eq;

#[test]
fn test_load_full_config() {
    let (_dir, path) = common::write_config(
        r#"
palette:
  count: 7
  mood: sunset
contrast:
  target_ratio: 3.0
extract:
  clusters: 3
  max_dimension: 64
  sample_step: 2
  alpha_threshold: 200
  max_iterations: 8
  by_population: true
seed: 1234
"#,
    );

    let config = AppConfig::load(Some(&path));

    assert_eq!(config.palette.count, 7);
    assert_eq!(config.palette.mood(), Some(Mood::Sunset));
    assert_eq!(config.contrast.target_ratio, 3.0);
    assert_eq!(config.seed, Some(1234));

    let options = config.extract.options();
    assert_eq!(options.max_dimension, 64);
    assert_eq!(options.sample_step, 2);
    assert_eq!(options.alpha_threshold, 200);
    assert_eq!(options.max_iterations, 8);
    assert_eq!(options.order, ClusterOrder::Population);
}

#[test]
fn test_shipped_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config.yaml");
    let config = AppConfig::from_file(&path).expect("config.yaml should parse");
    assert_eq!(config.palette.count, 5);
    assert_eq!(config.contrast.target_ratio, 4.5);
}

#[test]
fn test_broken_yaml_falls_back_to_defaults() {
    let (_dir, path) = common::write_config("palette: [unterminated\n");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, CliError::ConfigParse { .. }), "got {err:?}");

    assert_eq!(AppConfig::load(Some(&path)), AppConfig::default());
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = common::write_config("{}\n");
    assert_eq!(AppConfig::load(Some(&path)), AppConfig::default());
}
