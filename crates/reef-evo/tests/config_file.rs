use std::io::Write;

use reef_evo::{ConfigError, EvolutionConfig};

#[test]
fn loads_config_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "population_size: 40\nmax_generations: 25\ndebug: true").expect("write");

    let config = EvolutionConfig::load(file.path()).expect("load");
    assert_eq!(config.population_size, 40);
    assert_eq!(config.max_generations, 25);
    assert!(config.debug);
    assert_eq!(config.seed, None);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.yaml");

    let err = EvolutionConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}
