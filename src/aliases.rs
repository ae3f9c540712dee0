// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! PEM key text is held in these so it is zeroized on drop and never printed.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(pub PemText, String); // private or public key PEM held by a cipher
