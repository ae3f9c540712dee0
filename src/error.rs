// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;

use thiserror::Error;

use crate::enums::{KeyKind, Operation};

/// Diagnostics drained from the crypto engine after a failed call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .diagnostics.join("\n"))]
pub struct EngineError {
    pub diagnostics: Vec<String>,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            diagnostics: vec![message.into()],
        }
    }

    /// Queue another diagnostic behind the existing ones
    pub fn push(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }
}

impl From<Vec<String>> for EngineError {
    fn from(diagnostics: Vec<String>) -> Self {
        Self { diagnostics }
    }
}

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("{0} key is not set")]
    KeyMissing(KeyKind),

    #[error("failed to parse {kind} key: {message}")]
    KeyParse { kind: KeyKind, message: String },

    #[error("{operation} failed: {message}")]
    Transform {
        operation: Operation,
        message: String,
    },

    #[error("key pair generation failed: {0}")]
    Generation(String),

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("Minimum ({min}) is not less than maximum ({max}).")]
    InvalidRange { min: String, max: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
