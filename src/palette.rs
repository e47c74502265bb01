//! Palette reader for matugen's generated colors.
//!
//! matugen has produced two colors.json shapes over time: a nested document
//! with the role mapping under `colors.dark`, and a flat document with the
//! roles directly on the root object. This module normalizes both into one
//! fully-populated [`ColorPalette`].

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::constants::LOG_TAG;

/// Fixed role table: `(theme.conf key, source JSON key, default hex)`,
/// in the order the keys are written to theme.conf.
const ROLES: [(&str, &str, &str); 8] = [
    ("primaryColor", "primary", "#cba6f7"),
    ("onPrimaryColor", "on_primary", "#1e1e2e"),
    ("surfaceColor", "surface", "#1e1e2e"),
    ("surfaceContainerColor", "surface_container", "#181825"),
    ("onSurfaceColor", "on_surface", "#cdd6f4"),
    ("onSurfaceVariantColor", "on_surface_variant", "#9399b2"),
    ("backgroundColor", "background", "#1e1e2e"),
    ("errorColor", "error", "#f38ba8"),
];

/// Dark-mode color values for every role the theme renders.
///
/// Always fully populated: roles absent from the source fall back to their
/// documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    values: [String; 8],
}

impl ColorPalette {
    /// Returns the `(theme.conf key, hex value)` pairs in write order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ROLES
            .iter()
            .zip(self.values.iter())
            .map(|(&(key, _, _), value)| (key, value.as_str()))
    }

    /// The primary accent color (reported in the success log line).
    pub fn primary(&self) -> &str {
        &self.values[0]
    }

    fn from_source(source: &Map<String, Value>) -> Self {
        let values = ROLES.map(|(_, json_key, default)| {
            source
                .get(json_key)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        });
        Self { values }
    }
}

/// Reads the palette file, returning `Ok(None)` when no usable data exists.
///
/// A missing file and a missing dark section are normal conditions: they are
/// logged and the color sync is skipped. A malformed JSON document is not
/// expected under normal operation and propagates as an error.
pub fn read(path: &Path) -> Result<Option<ColorPalette>> {
    if !path.is_file() {
        println!("{LOG_TAG} colors.json not found: {}", path.display());
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette file: {}", path.display()))?;
    let data: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse palette file: {}", path.display()))?;

    let Some(source) = dark_colors(&data) else {
        println!("{LOG_TAG} No dark colors in colors.json");
        return Ok(None);
    };

    Ok(Some(ColorPalette::from_source(source)))
}

/// Locates the role mapping inside a parsed colors.json.
///
/// Prefers a non-empty nested `colors.dark` object; falls back to the root
/// object when it carries one of the flat-format canary keys. The canary
/// check is deliberately narrow to match the known matugen output shapes.
fn dark_colors(data: &Value) -> Option<&Map<String, Value>> {
    if let Some(dark) = data
        .get("colors")
        .and_then(|colors| colors.get("dark"))
        .and_then(Value::as_object)
        .filter(|mapping| !mapping.is_empty())
    {
        return Some(dark);
    }

    data.as_object()
        .filter(|mapping| mapping.contains_key("primary") || mapping.contains_key("on_surface"))
}
