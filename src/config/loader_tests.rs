use std::path::PathBuf;

use super::*;
use crate::filesystem::mock_fs::MockFileSystem;

#[test]
fn load_returns_defaults_without_config_files() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn load_prefers_local_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.css-guard.toml", "[rules]\ncss_root = \"local\"\n")
        .with_file(
            "/home/user/.config/css-guard/config.toml",
            "[rules]\ncss_root = \"user\"\n",
        );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.rules.css_root, PathBuf::from("local"));
    assert_eq!(
        result.source,
        Some(PathBuf::from("/project/.css-guard.toml"))
    );
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/css-guard/config.toml",
        "[visual]\nworkers = 3\n",
    );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.visual.workers, 3);
}

#[test]
fn load_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(result.source.is_none());
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(&PathBuf::from("/project/missing.toml"))
        .unwrap_err();
    assert!(matches!(err, CssGuardError::Config(_)));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.css-guard.toml", "[rules\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, CssGuardError::TomlParse(_)));
}

#[test]
fn unsupported_version_is_rejected() {
    let fs = MockFileSystem::new().with_file("/project/.css-guard.toml", "version = \"9\"\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(err.to_string().contains("Unsupported config version"));
}
