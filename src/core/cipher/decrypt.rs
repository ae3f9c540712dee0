// src/core/cipher/decrypt.rs
use tracing::debug;

use super::{transform_err, unframe_input, AsymmetricCipher};
use crate::core::engine::CryptoEngine;
use crate::core::Result;
use crate::enums::{Framing, Operation};

impl<E: CryptoEngine> AsymmetricCipher<E> {
    /// Public-key decrypt of a private-key ciphertext.
    ///
    /// With [`Framing::Base64`] the input is base64 text; a decode failure
    /// is reported as a transform error.
    pub fn decrypt_with_public(&self, ciphertext: &[u8], framing: Framing) -> Result<Vec<u8>> {
        let operation = Operation::DecryptWithPublic;
        let key = self.parse_public()?;
        let raw = unframe_input(ciphertext, framing, operation)?;
        debug!(
            %operation,
            kind = %operation.required_key(),
            len = raw.len(),
            "rsa transform"
        );

        let out = self.engine.public_decrypt(&raw, &key);
        drop(key);
        out.map_err(transform_err(operation))
    }

    /// Private-key decrypt of a public-key ciphertext
    pub fn decrypt_with_private(&self, ciphertext: &[u8], framing: Framing) -> Result<Vec<u8>> {
        let operation = Operation::DecryptWithPrivate;
        let key = self.parse_private()?;
        let raw = unframe_input(ciphertext, framing, operation)?;
        debug!(
            %operation,
            kind = %operation.required_key(),
            len = raw.len(),
            "rsa transform"
        );

        let out = self.engine.private_decrypt(&raw, &key);
        drop(key);
        out.map_err(transform_err(operation))
    }
}
