// src/config/defaults.rs
use crate::config::app::{CipherSection, KeygenSection};
use crate::consts::{DEFAULT_KEY_BITS, DEFAULT_PRIVATE_KEY_FILE, DEFAULT_PUBLIC_KEY_FILE};
use crate::enums::{Framing, KeyType, LineEnding};

pub fn default_keygen() -> KeygenSection {
    KeygenSection {
        bits: DEFAULT_KEY_BITS,
        key_type: KeyType::Rsa,
        line_ending: LineEnding::Unix,
        private_key_file: DEFAULT_PRIVATE_KEY_FILE.into(),
        public_key_file: DEFAULT_PUBLIC_KEY_FILE.into(),
    }
}

pub fn default_cipher() -> CipherSection {
    CipherSection {
        framing: Framing::Base64,
    }
}
