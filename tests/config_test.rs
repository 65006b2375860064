use mapler::config::Settings;
use mapler::navigation::Destination;
use std::fs;
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_load_settings_from_root() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let mapler_toml = r#"
[shell]
initial_route = "form"

[logging]
level = "debug"
"#;
    fs::write(root.join("mapler.toml"), mapler_toml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;
    assert_eq!(settings.shell.initial_route, Destination::Form);
    assert_eq!(settings.logging.max_level(), Level::DEBUG);

    Ok(())
}

#[test]
fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_root(temp_dir.path().to_str().unwrap())?;
    assert_eq!(settings.shell.initial_route, Destination::Home);
    assert_eq!(settings.logging.level, "info");

    Ok(())
}

#[test]
fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("mapler.toml"), "[shell]\ninitial_route = \"settings\"\n")?;

    let settings = Settings::from_root(root.to_str().unwrap())?;
    assert_eq!(settings.shell.initial_route, Destination::Settings);
    assert_eq!(settings.logging.level, "info");

    Ok(())
}

#[test]
fn test_json_config_is_picked_up() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(
        root.join("mapler.json"),
        r#"{ "shell": { "initial_route": "profile" } }"#,
    )?;

    let settings = Settings::from_root(root.to_str().unwrap())?;
    assert_eq!(settings.shell.initial_route, Destination::Profile);

    Ok(())
}

#[test]
fn test_invalid_level_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("mapler.toml"), "[logging]\nlevel = \"chatty\"\n")?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("logging.level"));

    Ok(())
}

#[test]
fn test_unknown_route_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("mapler.toml"), "[shell]\ninitial_route = \"inbox\"\n")?;

    assert!(Settings::from_root(root.to_str().unwrap()).is_err());

    Ok(())
}
