// src/consts.rs
//! Shared constants: PEM framing and key-size defaults

/// Header line of a SubjectPublicKeyInfo PEM block
pub const PUBLIC_KEY_BEGIN: &str = "-----BEGIN PUBLIC KEY-----";

/// Footer line of a SubjectPublicKeyInfo PEM block
pub const PUBLIC_KEY_END: &str = "-----END PUBLIC KEY-----";

pub const UNIX_EOL: &str = "\n";
pub const WINDOWS_EOL: &str = "\r\n";

/// Default modulus size for freshly generated key pairs
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Modulus size historically used by this helper's key generator.
///
/// Too small for new deployments; only reachable through
/// [`KeyGenOptions::legacy_insecure`](crate::core::KeyGenOptions::legacy_insecure).
pub const LEGACY_INSECURE_KEY_BITS: usize = 1024;

/// Smallest modulus the generator accepts
pub const MIN_KEY_BITS: usize = 512;

/// PKCS#1 v1.5 padding overhead in bytes (both block types)
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// Default artifact names used by the key generator CLI
pub const DEFAULT_PRIVATE_KEY_FILE: &str = "private.pem";
pub const DEFAULT_PUBLIC_KEY_FILE: &str = "public.pem";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "ASYM_HELPER_CONFIG";

/// Config file looked up when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "asym-helper.toml";
