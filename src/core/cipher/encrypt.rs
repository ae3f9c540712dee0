// src/core/cipher/encrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use super::{frame_output, transform_err, AsymmetricCipher};
use crate::core::engine::CryptoEngine;
use crate::core::Result;
use crate::enums::{Framing, Operation};

impl<E: CryptoEngine> AsymmetricCipher<E> {
    /// Private-key encrypt (PKCS#1 block type 1); reversed by
    /// [`decrypt_with_public`](Self::decrypt_with_public)
    pub fn encrypt_with_private(&self, plaintext: &[u8], framing: Framing) -> Result<Vec<u8>> {
        self.private_encrypt_raw(plaintext)
            .map(|raw| frame_output(raw, framing))
    }

    /// Public-key encrypt (PKCS#1 block type 2); reversed by
    /// [`decrypt_with_private`](Self::decrypt_with_private)
    pub fn encrypt_with_public(&self, plaintext: &[u8], framing: Framing) -> Result<Vec<u8>> {
        self.public_encrypt_raw(plaintext)
            .map(|raw| frame_output(raw, framing))
    }

    pub fn encrypt_with_private_to_base64(&self, plaintext: &[u8]) -> Result<String> {
        self.private_encrypt_raw(plaintext)
            .map(|raw| STANDARD.encode(raw))
    }

    pub fn encrypt_with_public_to_base64(&self, plaintext: &[u8]) -> Result<String> {
        self.public_encrypt_raw(plaintext)
            .map(|raw| STANDARD.encode(raw))
    }

    fn private_encrypt_raw(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let operation = Operation::EncryptWithPrivate;
        let key = self.parse_private()?;
        debug!(
            %operation,
            kind = %operation.required_key(),
            len = plaintext.len(),
            "rsa transform"
        );

        let out = self.engine.private_encrypt(plaintext, &key);
        drop(key);
        out.map_err(transform_err(operation))
    }

    fn public_encrypt_raw(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let operation = Operation::EncryptWithPublic;
        let key = self.parse_public()?;
        debug!(
            %operation,
            kind = %operation.required_key(),
            len = plaintext.len(),
            "rsa transform"
        );

        let out = self.engine.public_encrypt(plaintext, &key);
        drop(key);
        out.map_err(transform_err(operation))
    }
}
