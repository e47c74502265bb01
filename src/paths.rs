//! Filesystem locations for a sync run.
//!
//! This module resolves the real user's home directory (even when the tool
//! runs under `sudo`) and derives the state, config, and theme directory
//! paths once at startup. Components receive the resolved [`Paths`] struct
//! instead of doing ambient environment lookups.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::constants::DEFAULT_THEME_DIR;

/// Resolved directory roots used by every sync step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Quickshell state root (holds the generated palette).
    pub state_dir: PathBuf,
    /// User config root (holds the shell's config.json).
    pub config_dir: PathBuf,
    /// Installed theme root (system-owned, needs privileged writes).
    pub theme_dir: PathBuf,
}

impl Paths {
    /// Resolves all directories from the process environment.
    ///
    /// When invoked via `sudo`, `SUDO_USER` names the original user; their
    /// home directory is looked up in the system user database so per-user
    /// state is found instead of root's. `XDG_STATE_HOME` and
    /// `XDG_CONFIG_HOME` override the home-relative defaults.
    ///
    /// Failing to resolve a home directory is a startup error.
    pub fn from_env() -> Result<Self> {
        let home = match env::var("SUDO_USER") {
            Ok(user) if !user.is_empty() => home_for_user(&user)?,
            _ => dirs::home_dir().context("Failed to determine home directory")?,
        };

        let state_root = env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| home.join(".local").join("state"));

        let config_root = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| home.join(".config"));

        Ok(Self {
            state_dir: state_root.join("quickshell"),
            config_dir: config_root,
            theme_dir: PathBuf::from(DEFAULT_THEME_DIR),
        })
    }

    /// Path to matugen's generated palette file.
    pub fn colors_json(&self) -> PathBuf {
        self.state_dir
            .join("user")
            .join("generated")
            .join("colors.json")
    }

    /// Path to the shell configuration holding the wallpaper reference.
    pub fn shell_config_json(&self) -> PathBuf {
        self.config_dir.join("illogical-impulse").join("config.json")
    }

    /// Path to the theme's key=value settings file.
    pub fn theme_conf(&self) -> PathBuf {
        self.theme_dir.join("theme.conf")
    }

    /// Path to the theme's asset directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.theme_dir.join("assets")
    }

    /// Destination path for the synced background image.
    pub fn background_png(&self) -> PathBuf {
        self.assets_dir().join("background.png")
    }
}

/// Looks up a user's home directory in the system user database.
fn home_for_user(user: &str) -> Result<PathBuf> {
    let passwd = fs::read_to_string("/etc/passwd").context("Failed to read /etc/passwd")?;
    passwd_home(&passwd, user).with_context(|| format!("No passwd entry for user: {user}"))
}

/// Finds `user`'s home directory (sixth field) in a passwd-format buffer.
fn passwd_home(passwd: &str, user: &str) -> Option<PathBuf> {
    passwd.lines().find_map(|line| {
        let mut fields = line.split(':');
        if fields.next() != Some(user) {
            return None;
        }
        fields.nth(4).map(PathBuf::from)
    })
}
