use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod dead_code;
mod init;
mod inventory;

const BIN_NAME: &str = "sprout";

pub const USER_CONTROLLER: &str = r#"package com.acme.web;

import com.acme.service.UserService;
import java.util.List;

@RestController
@RequestMapping("/api/users")
public class UserController {
    private UserService userService;

    @GetMapping("/list")
    public List<String> list() {
        return userService.findAll();
    }

    public String unusedHelper() {
        return "x";
    }
}
"#;

pub const USER_SERVICE: &str = r#"package com.acme.service;

import java.util.List;
import java.util.Optional;

@Service
public class UserService {
    public List findAll() {
        return null;
    }

    private String legacyLookup(String id) {
        return id;
    }
}
"#;

pub const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <artifactId>demo</artifactId>
  <dependencies>
    <dependency>
      <groupId>com.acme</groupId>
      <artifactId>acme-commons</artifactId>
      <version>2.1.0</version>
    </dependency>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter-web</artifactId>
    </dependency>
  </dependencies>
</project>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?.join("demo");
        fs::create_dir(&project_dir)?;
        // Keeps config discovery from walking above the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with a controller, a service and a pom.
    pub fn spring_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("pom.xml", POM)?;
        test.write_file("src/main/java/com/acme/web/UserController.java", USER_CONTROLLER)?;
        test.write_file("src/main/java/com/acme/service/UserService.java", USER_SERVICE)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn inventory_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("inventory");
        cmd
    }

    pub fn dead_code_command(&self, tag: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("dead-code").arg(tag);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
