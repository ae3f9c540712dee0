// src/config/mod.rs
//! Configuration system for asym-helper
//!
//! Central, lazy-loaded global config with TOML + env override of the file path.

pub use app::{load, CipherSection, Config, KeygenSection};

mod app;
mod defaults;
