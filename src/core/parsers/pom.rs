use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::{Reader, events::Event};

use crate::core::findings::Dependency;

/// Dependencies read from a build descriptor.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedDescriptor {
    pub dependencies: Vec<Dependency>,
    /// `<dependency>` elements skipped for lacking a groupId or artifactId.
    pub incomplete_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    GroupId,
    ArtifactId,
    Version,
}

impl Field {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "groupId" => Some(Field::GroupId),
            "artifactId" => Some(Field::ArtifactId),
            "version" => Some(Field::Version),
            _ => None,
        }
    }
}

#[derive(Default)]
struct PartialDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl PartialDependency {
    fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::GroupId => &mut self.group_id,
            Field::ArtifactId => &mut self.artifact_id,
            Field::Version => &mut self.version,
        };
        slot.get_or_insert_with(String::new).push_str(value);
    }

    fn into_dependency(self) -> Option<Dependency> {
        Some(Dependency::new(
            self.group_id.as_deref()?,
            self.artifact_id.as_deref()?,
            self.version.as_deref(),
        ))
    }
}

pub fn parse_pom_file(path: &Path) -> Result<ParsedDescriptor> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read build descriptor: {:?}", path))?;
    parse_pom(&content).with_context(|| format!("Failed to parse build descriptor: {:?}", path))
}

/// Parse every `<dependency>` element of a Maven-style descriptor.
///
/// Dependencies are collected wherever they appear (managed and plugin
/// dependencies included). Only the direct `groupId`, `artifactId` and
/// `version` children are read, so exclusions never leak into the result.
/// Namespace prefixes are ignored.
pub fn parse_pom(content: &str) -> Result<ParsedDescriptor> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut parsed = ParsedDescriptor::default();
    let mut buf = Vec::new();
    let mut open_elements: Vec<String> = Vec::new();
    let mut current: Option<PartialDependency> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if name == "dependency" {
                    current = Some(PartialDependency::default());
                } else if current.is_some()
                    && open_elements.last().is_some_and(|parent| parent == "dependency")
                {
                    field = Field::from_element(&name);
                }
                open_elements.push(name);
            }
            Ok(Event::End(e)) => {
                open_elements.pop();
                field = None;
                if e.local_name().as_ref() == b"dependency"
                    && let Some(partial) = current.take()
                {
                    match partial.into_dependency() {
                        Some(dependency) => parsed.dependencies.push(dependency),
                        None => parsed.incomplete_count += 1,
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(field), Some(dependency)) = (field, current.as_mut()) {
                    let text = e.unescape().context("Invalid XML text content")?;
                    dependency.set(field, text.trim());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("XML error at position {}: {}", reader.buffer_position(), e),
            _ => {}
        }
        buf.clear();
    }

    Ok(parsed)
}
