// src/config/mod.rs

//! Configuration loading and validation.
//!
//! - `model.rs` is the TOML-backed data model.
//! - `loader.rs` reads a config file from disk (or falls back to defaults).
//! - `validate.rs` turns a `RawConfigFile` into a checked `ConfigFile`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, TasksSection};
