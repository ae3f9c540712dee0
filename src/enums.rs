// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: key kinds, framing, line endings, etc.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{UNIX_EOL, WINDOWS_EOL};

/// Line terminator convention of a PEM block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Unix,
    /// `\r\n`
    Windows,
}

impl LineEnding {
    /// The terminator itself
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Unix => UNIX_EOL,
            LineEnding::Windows => WINDOWS_EOL,
        }
    }
}

impl From<LineEnding> for rsa::pkcs8::LineEnding {
    fn from(value: LineEnding) -> Self {
        match value {
            LineEnding::Unix => rsa::pkcs8::LineEnding::LF,
            LineEnding::Windows => rsa::pkcs8::LineEnding::CRLF,
        }
    }
}

/// Transport framing applied to ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// Standard-alphabet base64 text
    #[default]
    Base64,
    /// Raw transform bytes
    Raw,
}

/// Asymmetric key algorithm for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum KeyType {
    #[default]
    Rsa,
    // Future:
    // Ec,
}

/// Which half of a key pair an operation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Private,
    Public,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Private => f.write_str("private"),
            KeyKind::Public => f.write_str("public"),
        }
    }
}

/// The four directional RSA transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    EncryptWithPrivate,
    EncryptWithPublic,
    DecryptWithPublic,
    DecryptWithPrivate,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::EncryptWithPrivate,
        Operation::EncryptWithPublic,
        Operation::DecryptWithPublic,
        Operation::DecryptWithPrivate,
    ];

    /// Key slot the operation reads
    pub const fn required_key(self) -> KeyKind {
        match self {
            Operation::EncryptWithPrivate | Operation::DecryptWithPrivate => KeyKind::Private,
            Operation::EncryptWithPublic | Operation::DecryptWithPublic => KeyKind::Public,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::EncryptWithPrivate => "private-encrypt",
            Operation::EncryptWithPublic => "public-encrypt",
            Operation::DecryptWithPublic => "public-decrypt",
            Operation::DecryptWithPrivate => "private-decrypt",
        };
        f.write_str(name)
    }
}
