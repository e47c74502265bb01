//! Wallpaper classification and video frame extraction.
//!
//! Video and animated wallpapers cannot be used as an SDDM background
//! directly; the first frame is extracted to a still PNG with ffmpeg and
//! that frame is copied instead.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::constants::{FFMPEG_TIMEOUT, VIDEO_EXTENSIONS};
use crate::privileged::run_checked;

/// Returns true when the path's extension marks a video/animated wallpaper.
pub fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Produces a still image from the first frame of a video wallpaper.
pub trait FrameExtractor {
    /// Writes the first frame of `video` to `dest` as a PNG.
    fn extract_first_frame(&self, video: &Path, dest: &Path) -> Result<()>;
}

/// Production extractor backed by the system ffmpeg.
#[derive(Debug, Default)]
pub struct FfmpegExtractor;

impl FrameExtractor for FfmpegExtractor {
    fn extract_first_frame(&self, video: &Path, dest: &Path) -> Result<()> {
        which::which("ffmpeg").context("ffmpeg not found in PATH")?;

        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-y")
            .arg("-i")
            .arg(video)
            .args(["-vframes", "1", "-update", "1", "-f", "image2"])
            .arg(dest);
        run_checked(cmd, None, FFMPEG_TIMEOUT)?;

        if !dest.is_file() {
            bail!("ffmpeg reported success but produced no frame");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_video_known_extensions() {
        for ext in ["mp4", "mkv", "webm", "avi", "mov", "gif", "webp"] {
            let path = PathBuf::from(format!("/walls/clip.{ext}"));
            assert!(is_video(&path), "{ext} should classify as video");
        }
    }

    #[test]
    fn test_is_video_case_insensitive() {
        assert!(is_video(Path::new("/walls/CLIP.MP4")));
        assert!(is_video(Path::new("/walls/clip.WebM")));
    }

    #[test]
    fn test_is_video_still_images() {
        assert!(!is_video(Path::new("/walls/wall.png")));
        assert!(!is_video(Path::new("/walls/wall.jpg")));
        assert!(!is_video(Path::new("/walls/wall.jpeg")));
    }

    #[test]
    fn test_is_video_no_extension() {
        assert!(!is_video(Path::new("/walls/wall")));
        assert!(!is_video(Path::new("/walls/.hidden")));
    }

    #[test]
    fn test_is_video_only_last_extension_counts() {
        assert!(is_video(Path::new("/walls/wall.png.mp4")));
        assert!(!is_video(Path::new("/walls/wall.mp4.png")));
    }
}
