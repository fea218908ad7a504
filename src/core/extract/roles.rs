//! Class name, component role and deprecation recognition.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::findings::{Role, RoleFinding};

static CLASS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\w+)").unwrap());

/// Role markers in priority order. The first marker present in the file wins.
pub const ROLE_MARKERS: &[(&str, Role)] = &[
    ("@RestController", Role::Controller),
    ("@Controller", Role::Controller),
    ("@Service", Role::Service),
    ("@Mapper", Role::Mapper),
];

pub const DEPRECATION_MARKER: &str = "@Deprecated";

/// The first declared class name, if the file declares a class at all.
pub fn class_name(text: &str) -> Option<&str> {
    if !text.contains("class ") {
        return None;
    }
    CLASS_NAME_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify the file by the highest-priority marker it contains.
pub fn classify(text: &str) -> Option<Role> {
    ROLE_MARKERS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, role)| *role)
}

pub fn extract_role(text: &str, class_name: &str) -> Option<RoleFinding> {
    classify(text).map(|role| RoleFinding {
        class_name: class_name.to_string(),
        role,
    })
}

pub fn extract_deprecation(text: &str, class_name: &str) -> Option<String> {
    text.contains(DEPRECATION_MARKER)
        .then(|| class_name.to_string())
}
