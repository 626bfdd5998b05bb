pub mod clipboard;
pub mod config;
pub mod format;
pub mod icons;
pub mod location;
