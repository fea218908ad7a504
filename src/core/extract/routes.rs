//! HTTP route recognition.
//!
//! Base paths come from class-level `@RequestMapping("...")`; routes come from
//! `@GetMapping`, `@PostMapping`, `@PutMapping` and `@DeleteMapping` with a
//! literal path. Every route in a file is attributed to the first base path
//! found in that file, even when the file declares several.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::findings::{RouteEntry, RouteFinding, Verb};

static BASE_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@RequestMapping\s*\(\s*"([^"]+)"\s*\)"#).unwrap());

static VERB_ROUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(GetMapping|PostMapping|PutMapping|DeleteMapping)\s*\(\s*"([^"]+)"\s*\)"#)
        .unwrap()
});

pub fn extract_base_paths(text: &str) -> Vec<String> {
    BASE_PATH_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn extract_route_entries(text: &str) -> Vec<RouteEntry> {
    VERB_ROUTE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let verb = Verb::from_annotation(caps.get(1)?.as_str())?;
            Some(RouteEntry::new(verb, caps.get(2)?.as_str()))
        })
        .collect()
}

/// Routes of the file, attached to its first base path.
///
/// Returns `None` when the file has no base path (its routes are dropped)
/// or no verb routes.
pub fn extract_routes(text: &str, base_paths: &[String]) -> Option<RouteFinding> {
    let base_path = base_paths.first()?;
    let entries = extract_route_entries(text);
    if entries.is_empty() {
        return None;
    }
    Some(RouteFinding {
        base_path: base_path.clone(),
        entries,
    })
}
