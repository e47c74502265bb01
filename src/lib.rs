//! Core library for sddm-pixel-sync.
//!
//! This library provides the building blocks for synchronizing the ii-pixel
//! SDDM theme with externally generated state: reading the Material You
//! palette, reading the current wallpaper reference, patching the theme's
//! key=value config, and updating its background asset through privileged
//! helpers.

// Module declarations
pub mod background;
pub mod constants;
pub mod palette;
pub mod paths;
pub mod privileged;
pub mod sync;
pub mod theme_conf;
pub mod video;
pub mod wallpaper;
