// src/lib.rs
//! asym-helper: small utility primitives
//!
//! Features:
//! - RSA encrypt/decrypt in all four directions over PEM keys
//! - PEM public key line-ending detection and normalization
//! - Key pair generation to PEM files
//! - Dot-path access over nested JSON objects
//! - Numeric range and clamp helpers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod dot;
pub mod enums;
pub mod numeric;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::PemText;
pub use config::load as load_config;
pub use crate::core::{
    detect_line_ending, generate, generate_in_memory, normalize, normalize_detected,
    AsymmetricCipher, CryptoEngine, KeyGenOptions, KeyMaterial, KeyPairPem, RsaEngine,
    Result as CipherResult,
};
pub use dot::{dot_map, DotKeys, DotMap};
pub use enums::{Framing, KeyKind, KeyType, LineEnding, Operation};
pub use error::{CipherError, ConfigError, EngineError, NumericError};
pub use numeric::{clamp, is_between};
