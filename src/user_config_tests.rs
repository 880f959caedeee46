use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults_when_no_path() {
    let cfg = load_user_config(None).expect("no path should give defaults");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg = parse_user_config("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_full_config() {
    let toml_str = r#"
phrases = ["depends on", "blocks"]

[[link_types]]
name = "Dependency"
inward = "is depended on by"
outward = "depends on"
"#;
    let cfg = parse_user_config(toml_str).expect("Should parse config");
    assert_eq!(
        cfg.phrases,
        Some(vec!["depends on".to_string(), "blocks".to_string()])
    );
    assert_eq!(
        cfg.link_types,
        vec![LinkType::new("Dependency", "is depended on by", "depends on")]
    );
}

#[test]
fn test_unknown_key_is_rejected() {
    let result = parse_user_config("colour = \"blue\"\n");
    assert!(matches!(result, Err(UserConfigError::Toml(_))));
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "phrases = [\"split to\"]\n").unwrap();

    let cfg = load_user_config(Some(&path)).expect("Should load config file");
    assert_eq!(cfg.phrases, Some(vec!["split to".to_string()]));
    assert!(cfg.link_types.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_user_config(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(UserConfigError::Io(_))));
}

#[test]
fn test_resolve_phrases_precedence() {
    let defaults = ["blocks", "clones"];
    let from_file = UserConfig {
        phrases: Some(vec!["causes".to_string()]),
        link_types: Vec::new(),
    };
    let overrides = vec!["split to".to_string()];

    assert_eq!(
        UserConfig::default().resolve_phrases(&[], &defaults),
        vec!["blocks".to_string(), "clones".to_string()]
    );
    assert_eq!(from_file.resolve_phrases(&[], &defaults), vec!["causes".to_string()]);
    assert_eq!(
        from_file.resolve_phrases(&overrides, &defaults),
        vec!["split to".to_string()]
    );
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig {
        phrases: None,
        link_types: vec![LinkType::new("Dependency", "is depended on by", "depends on")],
    };
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let back = parse_user_config(&serialized).expect("Should deserialize");
    assert_eq!(cfg, back);
}
