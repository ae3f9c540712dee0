// src/core/mod.rs
pub mod cipher;
pub mod engine;
pub mod keygen;
pub mod pem;

pub use cipher::*;
pub use engine::*;
pub use keygen::*;
pub use pem::*;

// Keep only the absolute top-level public API here if needed
pub type Result<T> = std::result::Result<T, crate::error::CipherError>;
