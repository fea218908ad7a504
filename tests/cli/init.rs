use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .sproutrc.json"));

    let content = test.read_file(".sproutrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in ["internalMarkers", "ignores", "reportFile", "deadCodeReportFile"] {
        assert!(parsed.get(field).is_some(), "Config should have '{}' field", field);
    }
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".sproutrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: .sproutrc.json already exists"));
    assert_eq!(test.read_file(".sproutrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::spring_project()?;

    test.command().arg("init").output()?;
    let output = test.inventory_command().output()?;

    assert!(
        output.status.success(),
        "Inventory should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("inventory_report.txt").exists());
    Ok(())
}
