//! Run orchestration.
//!
//! Sequences the two independent sync steps (colors, background). A failed
//! step is logged and never aborts the rest of the run; the only whole-run
//! fatal condition is a missing theme installation.

use anyhow::Result;

use crate::background;
use crate::constants::{LOG_TAG, THEME_NAME};
use crate::palette;
use crate::paths::Paths;
use crate::privileged::PrivilegedFs;
use crate::theme_conf;
use crate::video::FrameExtractor;
use crate::wallpaper;

/// Runs one full synchronization pass.
///
/// When the theme root is missing nothing else is read or written. The
/// palette step still propagates a malformed colors.json, which signals an
/// upstream format change rather than a normal operating condition; every
/// other failure is reported as a log line and the run continues.
pub fn run(paths: &Paths, ops: &dyn PrivilegedFs, extractor: &dyn FrameExtractor) -> Result<()> {
    if !paths.theme_dir.is_dir() {
        println!(
            "{LOG_TAG} Theme not installed at {}. Install the {THEME_NAME} theme first.",
            paths.theme_dir.display()
        );
        return Ok(());
    }

    match palette::read(&paths.colors_json())? {
        Some(colors) => {
            if theme_conf::apply(&colors, &paths.theme_conf(), ops) {
                println!("{LOG_TAG} Colors synced (primary: {})", colors.primary());
            } else {
                println!("{LOG_TAG} Color sync failed");
            }
        }
        None => println!("{LOG_TAG} No colors available, skipping color sync"),
    }

    match wallpaper::read(&paths.shell_config_json()) {
        Some(wallpaper_path) => {
            background::update(&wallpaper_path, paths, ops, extractor);
        }
        None => println!("{LOG_TAG} No wallpaper path found, keeping existing background"),
    }

    Ok(())
}
