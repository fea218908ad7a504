use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_dead_code_report() -> Result<()> {
    let test = CliTest::spring_project()?;

    let output = test.dead_code_command("release-1").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = test.read_file("dead_code_report.md")?;
    let expected = "\
# Code Analysis Report
## Project: demo
## Tag: release-1

## Classes with unused imports
  - UserService

## Classes with unused methods
  - UserService
    -- findAll
    -- legacyLookup

";
    assert_eq!(report, expected);
    assert!(stdout(&output).contains("report written to ./dead_code_report.md"));
    Ok(())
}

#[test]
fn test_controller_methods_are_never_reported() -> Result<()> {
    let test = CliTest::with_file(
        "src/main/java/com/acme/web/UserController.java",
        crate::USER_CONTROLLER,
    )?;

    test.dead_code_command("t").output()?;

    let report = test.read_file("dead_code_report.md")?;
    assert!(!report.contains("unusedHelper"));
    assert!(report.contains("## Classes with unused methods\n  None found.\n"));
    Ok(())
}

#[test]
fn test_dead_code_ignores_missing_pom() -> Result<()> {
    let test = CliTest::with_file(
        "src/main/java/com/acme/UserService.java",
        crate::USER_SERVICE,
    )?;

    let output = test.dead_code_command("t").output()?;

    assert!(output.status.success());
    assert!(!stderr(&output).contains("build descriptor"));
    Ok(())
}

#[test]
fn test_dead_code_requires_tag() -> Result<()> {
    let test = CliTest::spring_project()?;

    let output = test.command().arg("dead-code").output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));
    assert!(!test.root().join("dead_code_report.md").exists());
    Ok(())
}

#[test]
fn test_dead_code_custom_report_file() -> Result<()> {
    let test = CliTest::spring_project()?;
    test.write_file(
        ".sproutrc.json",
        r#"{ "deadCodeReportFile": "reports/unused.md" }"#,
    )?;

    let output = test.dead_code_command("nightly").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.read_file("reports/unused.md")?.contains("## Tag: nightly\n"));
    Ok(())
}
