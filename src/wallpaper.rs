//! Wallpaper reference reader.
//!
//! Extracts the current wallpaper path from the shell's config.json. This
//! reader is deliberately defensive: every failure mode collapses to "no
//! wallpaper" so a missing or reshaped config never aborts the sync run.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Shell configuration document, reduced to the single field this tool
/// consumes. Every field is defaulted so schema drift reads as "no
/// wallpaper" rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
struct ShellConfig {
    #[serde(default)]
    background: BackgroundSection,
}

#[derive(Debug, Default, Deserialize)]
struct BackgroundSection {
    #[serde(rename = "wallpaperPath", default)]
    wallpaper_path: String,
}

/// Reads the current wallpaper path from the shell's config.json.
///
/// Strips a leading `file://` scheme prefix and returns the path only if it
/// refers to an existing regular file. Missing file, malformed JSON, an
/// absent key, and a dangling path all yield `None`; this reader never
/// raises past its boundary.
pub fn read(path: &Path) -> Option<PathBuf> {
    let raw = fs::read_to_string(path).ok()?;
    let config: ShellConfig = serde_json::from_str(&raw).ok()?;

    let reference = config.background.wallpaper_path;
    let stripped = reference.strip_prefix("file://").unwrap_or(&reference);
    if stripped.is_empty() {
        return None;
    }

    let wallpaper = PathBuf::from(stripped);
    wallpaper.is_file().then_some(wallpaper)
}
