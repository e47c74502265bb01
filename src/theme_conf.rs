//! Theme-config patching.
//!
//! theme.conf is a plain key=value file owned by the theme package. Only the
//! eight color keys are rewritten; every other line keeps its content and
//! position.

use std::fs;
use std::path::Path;

use crate::constants::LOG_TAG;
use crate::palette::ColorPalette;
use crate::privileged::PrivilegedFs;

/// Rewrites recognized `key=value` lines in `content`.
///
/// For each entry, the first line whose trimmed content starts with `key=`
/// is replaced in place; entries with no matching line are appended at the
/// end. The document is treated as a `\n`-split line list, so a trailing
/// newline survives as an empty element ahead of any appended keys.
pub fn patch_document(content: &str, entries: &[(&str, &str)]) -> String {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    for (key, value) in entries {
        let prefix = format!("{key}=");
        match lines
            .iter()
            .position(|line| line.trim().starts_with(&prefix))
        {
            Some(index) => lines[index] = format!("{key}={value}"),
            None => lines.push(format!("{key}={value}")),
        }
    }

    lines.join("\n")
}

/// Patches the theme config with the palette and writes it back in place.
///
/// Returns false (after logging) when the theme is not installed, the file
/// cannot be read, or the privileged write fails. The theme skeleton is
/// never created here; theme.conf must already exist. The write-back is a
/// single all-or-nothing operation.
pub fn apply(palette: &ColorPalette, conf_path: &Path, ops: &dyn PrivilegedFs) -> bool {
    if !conf_path.is_file() {
        println!("{LOG_TAG} theme.conf not found: {}", conf_path.display());
        return false;
    }

    let content = match fs::read_to_string(conf_path) {
        Ok(content) => content,
        Err(e) => {
            println!("{LOG_TAG} Failed to read theme.conf: {e}");
            return false;
        }
    };

    let entries: Vec<(&str, &str)> = palette.entries().collect();
    let patched = patch_document(&content, &entries);

    match ops.write_file(conf_path, &patched) {
        Ok(()) => true,
        Err(e) => {
            println!("{LOG_TAG} Failed to write theme.conf: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use anyhow::{bail, Result};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingFs {
        fail_write: bool,
        written: RefCell<Vec<(PathBuf, String)>>,
    }

    impl PrivilegedFs for RecordingFs {
        fn write_file(&self, dest: &Path, content: &str) -> Result<()> {
            if self.fail_write {
                bail!("tee: permission denied");
            }
            self.written
                .borrow_mut()
                .push((dest.to_path_buf(), content.to_string()));
            Ok(())
        }

        fn copy_file(&self, _src: &Path, _dest: &Path) -> Result<()> {
            Ok(())
        }

        fn create_dir_all(&self, _dest: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn test_palette(dir: &TempDir) -> ColorPalette {
        let path = dir.path().join("colors.json");
        fs::write(&path, r##"{"primary":"#abcdef"}"##).unwrap();
        palette::read(&path).unwrap().unwrap()
    }

    #[test]
    fn test_patch_replaces_in_place() {
        let content = "[General]\nprimaryColor=#old\nbackground=assets/background.png\n";
        let patched = patch_document(content, &[("primaryColor", "#new")]);

        let lines: Vec<_> = patched.split('\n').collect();
        assert_eq!(lines[0], "[General]");
        assert_eq!(lines[1], "primaryColor=#new");
        assert_eq!(lines[2], "background=assets/background.png");
        assert_eq!(patched.matches("primaryColor=").count(), 1);
    }

    #[test]
    fn test_patch_appends_missing_key() {
        let content = "[General]\nprimaryColor=#old";
        let patched = patch_document(content, &[("backgroundColor", "#000000")]);

        assert_eq!(
            patched,
            "[General]\nprimaryColor=#old\nbackgroundColor=#000000"
        );
    }

    #[test]
    fn test_patch_appends_after_trailing_newline() {
        // The trailing newline splits into an empty final element, so the
        // appended key lands after a blank line.
        let patched = patch_document("a=1\n", &[("backgroundColor", "#000000")]);
        assert_eq!(patched, "a=1\n\nbackgroundColor=#000000");
    }

    #[test]
    fn test_patch_matches_indented_key() {
        let patched = patch_document("  primaryColor=#old", &[("primaryColor", "#new")]);
        assert_eq!(patched, "primaryColor=#new");
    }

    #[test]
    fn test_patch_replaces_only_first_match() {
        let content = "primaryColor=#one\nprimaryColor=#two";
        let patched = patch_document(content, &[("primaryColor", "#new")]);
        assert_eq!(patched, "primaryColor=#new\nprimaryColor=#two");
    }

    #[test]
    fn test_patch_does_not_match_longer_keys() {
        // "surfaceColor=" must not match "onSurfaceColor=" lines, and a key
        // appearing in a value must not match either.
        let content = "onSurfaceColorExtra=#keep\ncomment=primaryColor=#not-a-key";
        let patched = patch_document(
            content,
            &[("onSurfaceColor", "#new"), ("primaryColor", "#new")],
        );

        let lines: Vec<_> = patched.split('\n').collect();
        assert_eq!(lines[0], "onSurfaceColorExtra=#keep");
        assert_eq!(lines[1], "comment=primaryColor=#not-a-key");
        assert_eq!(lines[2], "onSurfaceColor=#new");
        assert_eq!(lines[3], "primaryColor=#new");
    }

    #[test]
    fn test_patch_appends_in_entry_order() {
        let entries = [("primaryColor", "#1"), ("onPrimaryColor", "#2")];
        let patched = patch_document("[General]", &entries);
        assert_eq!(patched, "[General]\nprimaryColor=#1\nonPrimaryColor=#2");
    }

    #[test]
    fn test_apply_missing_conf_fails() {
        let dir = TempDir::new().unwrap();
        let ops = RecordingFs::default();
        let colors = test_palette(&dir);

        assert!(!apply(&colors, &dir.path().join("theme.conf"), &ops));
        assert!(ops.written.borrow().is_empty());
    }

    #[test]
    fn test_apply_writes_patched_document() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("theme.conf");
        fs::write(&conf, "[General]\nprimaryColor=#old\n").unwrap();

        let ops = RecordingFs::default();
        let colors = test_palette(&dir);

        assert!(apply(&colors, &conf, &ops));

        let written = ops.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, conf);
        assert!(written[0].1.contains("primaryColor=#abcdef"));
        // Original file is untouched until the privileged helper writes it
        assert_eq!(
            fs::read_to_string(&conf).unwrap(),
            "[General]\nprimaryColor=#old\n"
        );
    }

    #[test]
    fn test_apply_write_failure_returns_false() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("theme.conf");
        fs::write(&conf, "[General]\n").unwrap();

        let ops = RecordingFs {
            fail_write: true,
            ..RecordingFs::default()
        };
        let colors = test_palette(&dir);

        assert!(!apply(&colors, &conf, &ops));
    }
}
