// tests/support.rs
//! Test fixtures: a shared key pair per test binary and sample PEM text

use std::sync::OnceLock;

use asym_helper::{generate_in_memory, KeyGenOptions};
use secure_gate::RevealSecret;

#[allow(dead_code)] // Not every test binary needs both halves
pub struct TestKeys {
    pub private_pem: String,
    pub public_pem: String,
}

#[allow(dead_code)]
fn fresh_keys() -> TestKeys {
    // 1024 bits keeps the suite fast; size does not matter for behavior here
    let pair = generate_in_memory(KeyGenOptions::legacy_insecure()).expect("generate test keys");
    TestKeys {
        private_pem: pair.private_pem.expose_secret().clone(),
        public_pem: pair.public_pem,
    }
}

/// The key pair most tests use
#[allow(dead_code)]
pub fn keys() -> &'static TestKeys {
    static KEYS: OnceLock<TestKeys> = OnceLock::new();
    KEYS.get_or_init(fresh_keys)
}

/// An unrelated key pair, for wrong-key tests
#[allow(dead_code)]
pub fn other_keys() -> &'static TestKeys {
    static KEYS: OnceLock<TestKeys> = OnceLock::new();
    KEYS.get_or_init(fresh_keys)
}

/// A well-framed public key block, LF terminated. Only the framing is exercised.
#[allow(dead_code)]
pub const SAMPLE_PUBLIC_PEM: &str = "-----BEGIN PUBLIC KEY-----\n\
MFwwDQYJKoZIhvcNAQEBBQADSwAwSAJBAKj34GkxFhD90vcNLYLInFEX6Ppy1tPf\n\
9Cnzj4p4WGeKLs1Pt8QuKUpRKfFLfRYC9AIKjbJTWit+CqvjWYzvQwECAwEAAQ==\n\
-----END PUBLIC KEY-----\n";

#[allow(dead_code)]
pub fn to_windows(pem: &str) -> String {
    pem.replace('\n', "\r\n")
}
