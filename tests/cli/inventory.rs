use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_inventory_of_spring_project() -> Result<()> {
    let test = CliTest::spring_project()?;

    let output = test.inventory_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = test.read_file("inventory_report.txt")?;
    let expected = "\
Module inventory: demo

- Dependencies:
  - com.acme:acme-commons:2.1.0
  - org.springframework.boot:spring-boot-starter-web:unknown

- Internal dependencies:
  - com.acme:acme-commons:2.1.0

- Components:
  Controllers:
    - UserController
  Services:
    - UserService

- Deprecated:
  No deprecated items found.

### Endpoints:
- RequestMapping /api/users
  - Gets
    GetMapping /list

  - Posts

  - Deletes

  - Puts


### Tables and columns:
  No tables found.

Report generated at: ./inventory_report.txt
";
    assert_eq!(report, expected);
    assert!(
        stdout(&output).contains("Scanned 2 source files - report written to ./inventory_report.txt")
    );

    Ok(())
}

#[test]
fn test_empty_project_renders_fallbacks() -> Result<()> {
    let test = CliTest::with_file("pom.xml", "<project></project>")?;

    let output = test.inventory_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = test.read_file("inventory_report.txt")?;
    for fallback in [
        "  No dependencies found.",
        "  No internal dependencies found.",
        "  No components found.",
        "  No deprecated items found.",
        "  No endpoints found.",
        "  No tables found.",
    ] {
        assert!(report.contains(fallback), "missing {:?} in:\n{}", fallback, report);
    }
    Ok(())
}

#[test]
fn test_entity_tables_and_deprecated_classes() -> Result<()> {
    let test = CliTest::with_file(
        "src/main/java/com/acme/Order.java",
        r#"@Deprecated
@Entity
@Table(name = "orders")
public class Order {
    @Id
    @Column(name = "id")
    private Long id;

    @Column(name = "total") private BigDecimal total;

    @ManyToOne
    @JoinColumn(name = "user_id")
    private User user;
}
"#,
    )?;
    test.write_file("pom.xml", "<project/>")?;

    let output = test.inventory_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = test.read_file("inventory_report.txt")?;
    assert!(report.contains("- Deprecated:\n  - Order\n"));
    assert!(report.contains(
        "Table: orders\n  Column: id (Long)\n  Column: total (BigDecimal)\n  Column: id (PRIMARY KEY)\n  Column: user_id (FOREIGN KEY)\n"
    ));
    Ok(())
}

#[test]
fn test_missing_pom_warns_but_succeeds() -> Result<()> {
    let test = CliTest::with_file(
        "src/main/java/com/acme/UserService.java",
        crate::USER_SERVICE,
    )?;

    let output = test.inventory_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: build descriptor not found"));
    let report = test.read_file("inventory_report.txt")?;
    assert!(report.contains("  No dependencies found."));
    assert!(report.contains("  Services:\n    - UserService\n"));
    Ok(())
}

#[test]
fn test_malformed_pom_warns_but_succeeds() -> Result<()> {
    let test = CliTest::with_file("pom.xml", "<project><dependencies></project>")?;

    let output = test.inventory_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: could not parse build descriptor"));
    assert!(test.read_file("inventory_report.txt")?.contains("  No dependencies found."));
    Ok(())
}

#[test]
fn test_reports_are_identical_across_runs() -> Result<()> {
    let test = CliTest::spring_project()?;
    for i in 0..5 {
        test.write_file(
            &format!("src/main/java/com/acme/api/Api{}Controller.java", i),
            &format!(
                "@RestController\n@RequestMapping(\"/api/v{}\")\npublic class Api{}Controller {{\n    @PostMapping(\"/items\")\n    public void create() {{}}\n}}\n",
                i, i
            ),
        )?;
    }

    test.inventory_command().output()?;
    let first = test.read_file("inventory_report.txt")?;
    test.inventory_command().output()?;
    let second = test.read_file("inventory_report.txt")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_output_flag_and_config_markers() -> Result<()> {
    let test = CliTest::spring_project()?;
    test.write_file(".sproutrc.json", r#"{ "internalMarkers": ["starter"] }"#)?;

    let output = test
        .inventory_command()
        .args(["-o", "reports/inv.txt"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!test.root().join("inventory_report.txt").exists());
    let report = test.read_file("reports/inv.txt")?;
    assert!(report.contains(
        "- Internal dependencies:\n  - org.springframework.boot:spring-boot-starter-web:unknown\n"
    ));
    assert!(report.ends_with("Report generated at: reports/inv.txt\n"));
    Ok(())
}

#[test]
fn test_ignored_directories_are_not_scanned() -> Result<()> {
    let test = CliTest::spring_project()?;
    test.write_file(
        "target/generated/GhostService.java",
        "@Service\npublic class GhostService {}\n",
    )?;

    test.inventory_command().output()?;

    let report = test.read_file("inventory_report.txt")?;
    assert!(!report.contains("GhostService"));
    Ok(())
}

#[test]
fn test_unwritable_report_is_an_error() -> Result<()> {
    let test = CliTest::spring_project()?;
    test.write_file("blocker", "")?;

    let output = test
        .inventory_command()
        .args(["-o", "blocker/inv.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    Ok(())
}

#[test]
fn test_missing_project_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .inventory_command()
        .args(["--path", "does-not-exist"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Project directory not found"));
    Ok(())
}
