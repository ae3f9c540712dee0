// src/core/engine.rs
//! Crypto engine boundary
//!
//! Everything that touches RSA math goes through [`CryptoEngine`]. Handles are
//! plain owned values: dropping one releases it. The default engine is
//! [`RsaEngine`], backed by the RustCrypto `rsa` crate.

use rand::rngs::OsRng;
use rsa::hazmat::rsa_encrypt;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};

use crate::aliases::PemText;
use crate::consts::PKCS1_V15_OVERHEAD;
use crate::enums::{KeyType, LineEnding};
use crate::error::EngineError;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// A freshly generated key pair, both halves PEM encoded
pub struct KeyPairPem {
    /// Unencrypted PKCS#8 (`BEGIN PRIVATE KEY`)
    pub private_pem: PemText,
    /// SubjectPublicKeyInfo (`BEGIN PUBLIC KEY`)
    pub public_pem: String,
}

impl std::fmt::Debug for KeyPairPem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPairPem")
            .field("private_pem", &"[REDACTED]")
            .field("public_pem", &self.public_pem)
            .finish()
    }
}

/// Capability set the cipher and key generator are written against.
///
/// Every failure carries the full diagnostic queue of the engine at the
/// time of failure, not just the first message.
pub trait CryptoEngine {
    type PrivateHandle;
    type PublicHandle;

    fn generate_key_pair(
        &self,
        bits: usize,
        key_type: KeyType,
        line_ending: LineEnding,
    ) -> EngineResult<KeyPairPem>;

    fn parse_private_key(&self, pem: &str) -> EngineResult<Self::PrivateHandle>;
    fn parse_public_key(&self, pem: &str) -> EngineResult<Self::PublicHandle>;

    fn private_encrypt(&self, plaintext: &[u8], key: &Self::PrivateHandle)
        -> EngineResult<Vec<u8>>;
    fn public_encrypt(&self, plaintext: &[u8], key: &Self::PublicHandle)
        -> EngineResult<Vec<u8>>;
    fn public_decrypt(&self, ciphertext: &[u8], key: &Self::PublicHandle)
        -> EngineResult<Vec<u8>>;
    fn private_decrypt(&self, ciphertext: &[u8], key: &Self::PrivateHandle)
        -> EngineResult<Vec<u8>>;
}

/// PKCS#1 v1.5 RSA engine
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaEngine;

impl CryptoEngine for RsaEngine {
    type PrivateHandle = RsaPrivateKey;
    type PublicHandle = RsaPublicKey;

    fn generate_key_pair(
        &self,
        bits: usize,
        key_type: KeyType,
        line_ending: LineEnding,
    ) -> EngineResult<KeyPairPem> {
        match key_type {
            KeyType::Rsa => generate_rsa(bits, line_ending),
        }
    }

    /// Accepts PKCS#8 (`PRIVATE KEY`) and PKCS#1 (`RSA PRIVATE KEY`)
    fn parse_private_key(&self, pem: &str) -> EngineResult<RsaPrivateKey> {
        let pkcs8_err = match RsaPrivateKey::from_pkcs8_pem(pem) {
            Ok(key) => return Ok(key),
            Err(err) => err,
        };
        match RsaPrivateKey::from_pkcs1_pem(pem) {
            Ok(key) => Ok(key),
            Err(pkcs1_err) => Err(EngineError::from(vec![
                format!("PKCS#8: {pkcs8_err}"),
                format!("PKCS#1: {pkcs1_err}"),
            ])),
        }
    }

    /// Accepts SubjectPublicKeyInfo (`PUBLIC KEY`) and PKCS#1 (`RSA PUBLIC KEY`)
    fn parse_public_key(&self, pem: &str) -> EngineResult<RsaPublicKey> {
        let spki_err = match RsaPublicKey::from_public_key_pem(pem) {
            Ok(key) => return Ok(key),
            Err(err) => err,
        };
        match RsaPublicKey::from_pkcs1_pem(pem) {
            Ok(key) => Ok(key),
            Err(pkcs1_err) => Err(EngineError::from(vec![
                format!("SubjectPublicKeyInfo: {spki_err}"),
                format!("PKCS#1: {pkcs1_err}"),
            ])),
        }
    }

    /// Block type 1 padding over the raw input, no DigestInfo prefix.
    /// The private exponentiation is blinded.
    fn private_encrypt(&self, plaintext: &[u8], key: &RsaPrivateKey) -> EngineResult<Vec<u8>> {
        key.sign_with_rng(&mut OsRng, Pkcs1v15Sign::new_unprefixed(), plaintext)
            .map_err(engine_err)
    }

    fn public_encrypt(&self, plaintext: &[u8], key: &RsaPublicKey) -> EngineResult<Vec<u8>> {
        key.encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
            .map_err(engine_err)
    }

    /// Raw public operation, then block type 1 padding removal
    fn public_decrypt(&self, ciphertext: &[u8], key: &RsaPublicKey) -> EngineResult<Vec<u8>> {
        let k = key.size();
        if ciphertext.len() != k {
            return Err(EngineError::new(format!(
                "ciphertext is {} bytes, modulus is {k} bytes",
                ciphertext.len()
            )));
        }

        let c = BigUint::from_bytes_be(ciphertext);
        if &c >= key.n() {
            return Err(EngineError::new("data too large for modulus"));
        }

        let m = rsa_encrypt(key, &c).map_err(engine_err)?;
        let raw = m.to_bytes_be();
        let mut em = vec![0u8; k];
        em[k - raw.len()..].copy_from_slice(&raw);

        strip_type1_padding(&em).map(<[u8]>::to_vec)
    }

    fn private_decrypt(&self, ciphertext: &[u8], key: &RsaPrivateKey) -> EngineResult<Vec<u8>> {
        key.decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, ciphertext)
            .map_err(engine_err)
    }
}

/// `00 01 FF..FF 00 message`, at least eight `FF` bytes
fn strip_type1_padding(em: &[u8]) -> EngineResult<&[u8]> {
    if em.len() < PKCS1_V15_OVERHEAD || em[0] != 0x00 || em[1] != 0x01 {
        return Err(EngineError::new("block type is not 01"));
    }

    let body = &em[2..];
    let separator = body
        .iter()
        .position(|&b| b != 0xFF)
        .ok_or_else(|| EngineError::new("padding separator not found"))?;

    if body[separator] != 0x00 {
        return Err(EngineError::new("bad padding byte"));
    }
    if separator < PKCS1_V15_OVERHEAD - 3 {
        return Err(EngineError::new("padding string too short"));
    }

    Ok(&body[separator + 1..])
}

fn generate_rsa(bits: usize, line_ending: LineEnding) -> EngineResult<KeyPairPem> {
    let private = RsaPrivateKey::new(&mut OsRng, bits).map_err(engine_err)?;
    let public = private.to_public_key();

    let private_pem = private.to_pkcs8_pem(line_ending.into()).map_err(engine_err)?;
    let public_pem = public
        .to_public_key_pem(line_ending.into())
        .map_err(engine_err)?;

    Ok(KeyPairPem {
        private_pem: PemText::new(private_pem.as_str().to_owned()),
        public_pem,
    })
}

fn engine_err(err: impl std::fmt::Display) -> EngineError {
    EngineError::new(err.to_string())
}
