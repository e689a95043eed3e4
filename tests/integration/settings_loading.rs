//! Integration tests for layered settings loading

use std::fs;
use store_devtools::options::{ImportFeature, MaxAge, OptionsLoader};
use store_devtools::DEFAULT_NAME;
use tempfile::TempDir;

fn write_workspace_file(root: &std::path::Path, name: &str, content: &str) {
    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join(name), content).unwrap();
}

#[test]
fn test_empty_workspace_loads_empty_options() {
    let temp_dir = TempDir::new().unwrap();

    let settings = OptionsLoader::load_with_global(temp_dir.path(), None).unwrap();
    assert_eq!(settings.options.max_age, None);
    assert_eq!(settings.options.features, None);

    let config = settings.to_config();
    assert_eq!(config.name, DEFAULT_NAME);
    assert_eq!(config.max_age, MaxAge::Unlimited);
}

#[test]
fn test_workspace_overrides_global() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let global_file = temp_dir.path().join("global.toml");
    fs::write(
        &global_file,
        r#"
[options]
name = "Global"
trace = true
trace_limit = 10
"#,
    )
    .unwrap();

    write_workspace_file(
        &workspace,
        "devtools.toml",
        r#"
[options]
name = "Workspace"
"#,
    );

    let settings = OptionsLoader::load_with_global(&workspace, Some(&global_file)).unwrap();
    let config = settings.to_config();
    assert_eq!(config.name, "Workspace");
    assert!(config.trace);
    assert_eq!(config.trace_limit, 10);
}

#[test]
fn test_environment_file_overrides_base_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path();

    write_workspace_file(
        workspace,
        "devtools.toml",
        r#"
[options]
max_age = 50
log_only = false
"#,
    );
    write_workspace_file(
        workspace,
        "development.toml",
        r#"
[options]
max_age = 100
"#,
    );

    let settings = OptionsLoader::load_with_global(workspace, None).unwrap();
    assert_eq!(settings.options.max_age, Some(MaxAge::Entries(100)));
    assert_eq!(settings.options.log_only, Some(false));
}

#[test]
fn test_missing_global_file_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("nowhere").join("devtools.toml");

    let settings = OptionsLoader::load_with_global(temp_dir.path(), Some(&absent)).unwrap();
    assert_eq!(settings.options.name, None);
}

#[test]
fn test_log_only_in_file_discards_file_features() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("devtools.toml");
    fs::write(
        &settings_file,
        r#"
[options]
log_only = true

[options.features]
lock = true
import = "custom"
"#,
    )
    .unwrap();

    let config = OptionsLoader::load_from_file(&settings_file)
        .unwrap()
        .to_config();
    assert!(config.log_only);
    assert_eq!(config.features.enabled(), vec!["pause", "export", "test"]);
    assert_eq!(config.features.import, None);
}

#[test]
fn test_file_import_values() {
    let temp_dir = TempDir::new().unwrap();
    let settings_file = temp_dir.path().join("devtools.toml");
    fs::write(&settings_file, "[options.features]\nimport = false\n").unwrap();

    let config = OptionsLoader::load_from_file(&settings_file)
        .unwrap()
        .to_config();
    assert_eq!(config.features.import, Some(ImportFeature::Disabled));
    assert_eq!(config.features.pause, Some(true));
}
