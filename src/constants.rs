//! Application-wide constants.
//!
//! This module defines constants used throughout the application, including
//! the theme location, fixed file names, and subprocess timeouts.

use std::time::Duration;

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "sddm-pixel-sync";

/// Prefix for every diagnostic line this tool prints.
pub const LOG_TAG: &str = "[sddm-pixel]";

/// Name of the SDDM theme this tool keeps in sync.
pub const THEME_NAME: &str = "ii-pixel";

/// Default system location of the installed theme. Writes under this
/// directory require elevated privileges.
pub const DEFAULT_THEME_DIR: &str = "/usr/share/sddm/themes/ii-pixel";

/// File extensions treated as video/animated wallpapers (lowercase).
pub const VIDEO_EXTENSIONS: [&str; 7] = ["mp4", "mkv", "webm", "avi", "mov", "gif", "webp"];

/// File name of the scratch frame extracted from a video wallpaper,
/// placed in the system temp directory.
pub const FRAME_SCRATCH_NAME: &str = "sddm-pixel-frame.tmp.png";

/// Timeout for the privileged theme.conf write.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the privileged background copy.
pub const COPY_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for privileged directory creation.
pub const MKDIR_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for ffmpeg frame extraction.
pub const FFMPEG_TIMEOUT: Duration = Duration::from_secs(15);
