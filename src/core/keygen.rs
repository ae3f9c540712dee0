// src/core/keygen.rs
//! Key pair generation and PEM artifact persistence

use std::path::Path;

use secure_gate::RevealSecret;
use tracing::{info, warn};

use crate::config::KeygenSection;
use crate::consts::{DEFAULT_KEY_BITS, LEGACY_INSECURE_KEY_BITS, MIN_KEY_BITS};
use crate::core::engine::{CryptoEngine, KeyPairPem, RsaEngine};
use crate::core::Result;
use crate::enums::{KeyType, LineEnding};
use crate::error::CipherError;

/// Parameters for a new key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenOptions {
    pub bits: usize,
    pub key_type: KeyType,
    /// Terminator used in both written PEM files
    pub line_ending: LineEnding,
}

impl Default for KeyGenOptions {
    fn default() -> Self {
        Self {
            bits: DEFAULT_KEY_BITS,
            key_type: KeyType::Rsa,
            line_ending: LineEnding::Unix,
        }
    }
}

impl KeyGenOptions {
    pub fn with_bits(bits: usize) -> Self {
        Self {
            bits,
            ..Self::default()
        }
    }

    /// 1024-bit RSA. Not safe for new keys; kept for interop with peers
    /// that still expect the old size.
    pub fn legacy_insecure() -> Self {
        Self::with_bits(LEGACY_INSECURE_KEY_BITS)
    }

    pub fn from_config(section: &KeygenSection) -> Self {
        Self {
            bits: section.bits,
            key_type: section.key_type,
            line_ending: section.line_ending,
        }
    }
}

/// Generate a key pair without touching the filesystem
pub fn generate_in_memory(options: KeyGenOptions) -> Result<KeyPairPem> {
    generate_in_memory_with_engine(&RsaEngine, options)
}

pub fn generate_in_memory_with_engine<E: CryptoEngine>(
    engine: &E,
    options: KeyGenOptions,
) -> Result<KeyPairPem> {
    if options.bits < MIN_KEY_BITS {
        return Err(CipherError::Generation(format!(
            "{} bits is below the minimum of {MIN_KEY_BITS}",
            options.bits
        )));
    }
    if options.bits <= LEGACY_INSECURE_KEY_BITS {
        warn!(bits = options.bits, "generating a key pair below 2048 bits");
    }

    engine
        .generate_key_pair(options.bits, options.key_type, options.line_ending)
        .map_err(|err| CipherError::Generation(err.to_string()))
}

/// Generate a key pair and write the private key (PKCS#8) and public key
/// (SubjectPublicKeyInfo) as PEM files, overwriting existing ones.
///
/// A write failure after the private key was written leaves that file behind.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    private_key_path: P,
    public_key_path: Q,
    options: KeyGenOptions,
) -> Result<()> {
    generate_with_engine(&RsaEngine, private_key_path, public_key_path, options)
}

pub fn generate_with_engine<E: CryptoEngine, P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &E,
    private_key_path: P,
    public_key_path: Q,
    options: KeyGenOptions,
) -> Result<()> {
    let pair = generate_in_memory_with_engine(engine, options)?;

    write_artifact(private_key_path.as_ref(), pair.private_pem.expose_secret())?;
    write_artifact(public_key_path.as_ref(), &pair.public_pem)?;

    info!(
        bits = options.bits,
        private = %private_key_path.as_ref().display(),
        public = %public_key_path.as_ref().display(),
        "wrote key pair"
    );
    Ok(())
}

fn write_artifact(path: &Path, pem: &str) -> Result<()> {
    std::fs::write(path, pem).map_err(|source| CipherError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
