use rfarmlog::config::Config;
use rfarmlog::config::migrate::{migrate_config, missing_fields};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rfarmlog.conf", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn missing_config_file_gives_defaults() {
    let path = temp_conf("config_missing");
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.placeholder, "--");
    assert_eq!(cfg.default_sort, "date");
    assert!(cfg.default_sort_desc);
}

#[test]
fn save_then_load_keeps_values() {
    let path = temp_conf("config_roundtrip");
    let mut cfg = Config::default();
    cfg.currency = "€".into();
    cfg.placeholder = "n/a".into();
    cfg.save(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.currency, "€");
    assert_eq!(loaded.placeholder, "n/a");
}

#[test]
fn migrate_adds_missing_keys_only() {
    let path = temp_conf("config_migrate");
    fs::write(&path, "database: /tmp/farm.sqlite\nplaceholder: \"-\"\n").unwrap();

    let missing = missing_fields(&path).unwrap();
    assert!(missing.contains(&"currency".to_string()));
    assert!(!missing.contains(&"placeholder".to_string()));

    let added = migrate_config(&path).unwrap();
    assert_eq!(added, missing);
    assert!(missing_fields(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.placeholder, "-");
    assert_eq!(cfg.database, "/tmp/farm.sqlite");
}

#[test]
fn malformed_config_is_an_error() {
    let path = temp_conf("config_malformed");
    fs::write(&path, "database: [unclosed").unwrap();
    assert!(Config::load_from(&path).is_err());
}
