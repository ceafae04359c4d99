//! beatgen CLI library.
//!
//! This crate provides the core functionality for the beatgen CLI: catalog
//! loading, WAV analysis, and the `generate`, `presets`, and `analyze`
//! commands.

pub mod analysis;
pub mod commands;
pub mod input;
