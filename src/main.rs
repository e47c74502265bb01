//! sddm-pixel-sync - one-shot SDDM theme synchronizer
//!
//! Syncs the ii-pixel SDDM theme with the current Material You palette
//! (matugen's colors.json) and the active wallpaper. Writes to the
//! system-owned theme directory go through sudo, so this is typically run
//! right after the palette or wallpaper changes, from a context that can
//! authenticate.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use sddm_pixel_sync::paths::Paths;
use sddm_pixel_sync::privileged::SudoFs;
use sddm_pixel_sync::sync;
use sddm_pixel_sync::video::FfmpegExtractor;

/// Sync the ii-pixel SDDM theme with the current palette and wallpaper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the installed theme directory (useful for theme checkouts)
    #[arg(long, value_name = "DIR")]
    theme_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = Paths::from_env()?;
    if let Some(theme_dir) = cli.theme_dir {
        paths.theme_dir = theme_dir;
    }

    sync::run(&paths, &SudoFs, &FfmpegExtractor)
}
