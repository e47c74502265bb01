//! Background asset updates.
//!
//! Copies the current wallpaper into the theme's asset directory. Video and
//! animated wallpapers go through frame extraction first; the extracted
//! scratch frame is removed after the copy attempt either way.

use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::Path;

use crate::constants::{FRAME_SCRATCH_NAME, LOG_TAG};
use crate::paths::Paths;
use crate::privileged::PrivilegedFs;
use crate::video::{is_video, FrameExtractor};

/// Copies the wallpaper (or the first frame of a video wallpaper) onto the
/// theme's `assets/background.png`.
///
/// Returns false without touching the existing asset when the asset
/// directory cannot be created or frame extraction fails. The copy itself is
/// all-or-nothing at the file level, so a failed copy leaves the previous
/// background intact as well.
pub fn update(
    wallpaper: &Path,
    paths: &Paths,
    ops: &dyn PrivilegedFs,
    extractor: &dyn FrameExtractor,
) -> bool {
    let assets_dir = paths.assets_dir();
    if !assets_dir.is_dir() {
        if let Err(e) = ops.create_dir_all(&assets_dir) {
            println!("{LOG_TAG} Failed to create asset directory: {e:#}");
            return false;
        }
    }

    let dest = paths.background_png();
    let video = is_video(wallpaper);
    let frame = env::temp_dir().join(FRAME_SCRATCH_NAME);

    let src = if video {
        if let Err(e) = extractor.extract_first_frame(wallpaper, &frame) {
            println!(
                "{LOG_TAG} Frame extraction failed for {}: {e:#}",
                display_name(wallpaper)
            );
            println!("{LOG_TAG} Keeping existing background");
            return false;
        }
        frame.as_path()
    } else {
        wallpaper
    };

    let copied = ops.copy_file(src, &dest);

    // Best-effort scratch cleanup, independent of the copy outcome.
    if video && frame.is_file() {
        let _ = fs::remove_file(&frame);
    }

    match copied {
        Ok(()) => {
            println!("{LOG_TAG} Background updated: {}", display_name(wallpaper));
            true
        }
        Err(e) => {
            println!("{LOG_TAG} Failed to copy background: {e:#}");
            false
        }
    }
}

fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
}
