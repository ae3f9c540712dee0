// src/core/cipher/mod.rs
//! RSA encrypt/decrypt over caller-supplied PEM keys
//!
//! An [`AsymmetricCipher`] holds an optional private key and an optional
//! public key, fixed at construction. Each operation parses the key it
//! needs, runs one transform, and drops the parsed handle before
//! returning; nothing is cached between calls.

mod decrypt;
mod encrypt;

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secure_gate::RevealSecret;

use crate::aliases::PemText;
use crate::core::engine::{CryptoEngine, RsaEngine};
use crate::core::Result;
use crate::enums::{Framing, KeyKind, Operation};
use crate::error::{CipherError, EngineError};

/// PEM text of a private or public key, zeroized on drop
pub struct KeyMaterial(PemText);

impl KeyMaterial {
    pub fn new(pem: impl Into<String>) -> Self {
        Self(PemText::new(pem.into()))
    }

    pub fn expose_pem(&self) -> &str {
        self.0.expose_secret().as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.expose_pem().is_empty()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

impl From<String> for KeyMaterial {
    fn from(pem: String) -> Self {
        Self::new(pem)
    }
}

impl From<&str> for KeyMaterial {
    fn from(pem: &str) -> Self {
        Self::new(pem)
    }
}

impl From<PemText> for KeyMaterial {
    fn from(pem: PemText) -> Self {
        Self(pem)
    }
}

#[derive(Debug)]
pub struct AsymmetricCipher<E: CryptoEngine = RsaEngine> {
    engine: E,
    private_key: Option<KeyMaterial>,
    public_key: Option<KeyMaterial>,
}

impl AsymmetricCipher {
    pub fn new(private_key: Option<KeyMaterial>, public_key: Option<KeyMaterial>) -> Self {
        Self::with_engine(RsaEngine, private_key, public_key)
    }

    pub fn private_only(private_key: impl Into<KeyMaterial>) -> Self {
        Self::new(Some(private_key.into()), None)
    }

    pub fn public_only(public_key: impl Into<KeyMaterial>) -> Self {
        Self::new(None, Some(public_key.into()))
    }

    pub fn from_pair(
        private_key: impl Into<KeyMaterial>,
        public_key: impl Into<KeyMaterial>,
    ) -> Self {
        Self::new(Some(private_key.into()), Some(public_key.into()))
    }
}

impl<E: CryptoEngine> AsymmetricCipher<E> {
    pub fn with_engine(
        engine: E,
        private_key: Option<KeyMaterial>,
        public_key: Option<KeyMaterial>,
    ) -> Self {
        Self {
            engine,
            private_key,
            public_key,
        }
    }

    pub fn has_private_key(&self) -> bool {
        self.key_pem(KeyKind::Private).is_ok()
    }

    pub fn has_public_key(&self) -> bool {
        self.key_pem(KeyKind::Public).is_ok()
    }

    /// Whether the configured keys allow `operation` at all
    pub fn supports(&self, operation: Operation) -> bool {
        self.key_pem(operation.required_key()).is_ok()
    }

    /// The operations this instance can perform, fixed at construction
    pub fn capabilities(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|&op| self.supports(op))
            .collect()
    }

    /// Empty PEM text counts as no key
    fn key_pem(&self, kind: KeyKind) -> Result<&str> {
        let slot = match kind {
            KeyKind::Private => &self.private_key,
            KeyKind::Public => &self.public_key,
        };
        slot.as_ref()
            .filter(|key| !key.is_empty())
            .map(KeyMaterial::expose_pem)
            .ok_or(CipherError::KeyMissing(kind))
    }

    fn parse_private(&self) -> Result<E::PrivateHandle> {
        let pem = self.key_pem(KeyKind::Private)?;
        self.engine
            .parse_private_key(pem)
            .map_err(|err| key_parse_err(KeyKind::Private, err))
    }

    fn parse_public(&self) -> Result<E::PublicHandle> {
        let pem = self.key_pem(KeyKind::Public)?;
        self.engine
            .parse_public_key(pem)
            .map_err(|err| key_parse_err(KeyKind::Public, err))
    }
}

fn key_parse_err(kind: KeyKind, err: EngineError) -> CipherError {
    CipherError::KeyParse {
        kind,
        message: err.to_string(),
    }
}

fn transform_err(operation: Operation) -> impl FnOnce(EngineError) -> CipherError {
    move |err| CipherError::Transform {
        operation,
        message: err.to_string(),
    }
}

fn frame_output(raw: Vec<u8>, framing: Framing) -> Vec<u8> {
    match framing {
        Framing::Base64 => STANDARD.encode(raw).into_bytes(),
        Framing::Raw => raw,
    }
}

fn unframe_input(input: &[u8], framing: Framing, operation: Operation) -> Result<Vec<u8>> {
    match framing {
        Framing::Base64 => STANDARD
            .decode(input.trim_ascii())
            .map_err(|err| CipherError::Transform {
                operation,
                message: format!("ciphertext is not valid base64: {err}"),
            }),
        Framing::Raw => Ok(input.to_vec()),
    }
}
