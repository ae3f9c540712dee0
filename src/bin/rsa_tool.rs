// src/bin/rsa_tool.rs
//! Command-line front end: key generation, PEM normalization, and the four RSA transforms
//!
//! ```text
//! rsa_tool keygen [private.pem] [public.pem] [bits]
//! rsa_tool normalize <public.pem>
//! rsa_tool encrypt-public  <public.pem>  <plaintext>
//! rsa_tool encrypt-private <private.pem> <plaintext>
//! rsa_tool decrypt-public  <public.pem>  <ciphertext>
//! rsa_tool decrypt-private <private.pem> <ciphertext>
//! ```
//!
//! Ciphertext framing comes from the `[cipher]` section of the config file.

use std::io::Write;

use anyhow::{bail, Context, Result};
use asym_helper::{
    generate, load_config, normalize_detected, AsymmetricCipher, KeyGenOptions, KeyKind,
    KeyMaterial, Operation,
};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!("usage: rsa_tool <keygen|normalize|encrypt-public|encrypt-private|decrypt-public|decrypt-private> ...");
    };

    match command.as_str() {
        "keygen" => keygen(rest),
        "normalize" => normalize(rest),
        "encrypt-public" => transform(Operation::EncryptWithPublic, rest),
        "encrypt-private" => transform(Operation::EncryptWithPrivate, rest),
        "decrypt-public" => transform(Operation::DecryptWithPublic, rest),
        "decrypt-private" => transform(Operation::DecryptWithPrivate, rest),
        other => bail!("unknown command: {other}"),
    }
}

fn keygen(args: &[String]) -> Result<()> {
    let section = &load_config().keygen;
    let private_path = args.first().unwrap_or(&section.private_key_file);
    let public_path = args.get(1).unwrap_or(&section.public_key_file);

    let mut options = KeyGenOptions::from_config(section);
    if let Some(bits) = args.get(2) {
        options.bits = bits
            .parse()
            .with_context(|| format!("invalid key size: {bits}"))?;
    }

    generate(private_path, public_path, options).context("key generation failed")?;
    info!("Wrote {private_path} and {public_path} ({} bits)", options.bits);
    Ok(())
}

fn normalize(args: &[String]) -> Result<()> {
    let [path] = args else {
        bail!("usage: rsa_tool normalize <public.pem>");
    };
    let pem = std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    let normalized =
        normalize_detected(&pem).context("cannot determine the line ending of the key")?;
    print!("{normalized}");
    Ok(())
}

fn transform(operation: Operation, args: &[String]) -> Result<()> {
    let [key_path, input] = args else {
        bail!("usage: rsa_tool {operation} <key.pem> <input>");
    };
    let pem = std::fs::read_to_string(key_path)
        .with_context(|| format!("cannot read {key_path}"))?;
    let key = Some(KeyMaterial::new(pem));
    let framing = load_config().cipher.framing;

    let cipher = match operation.required_key() {
        KeyKind::Private => AsymmetricCipher::new(key, None),
        KeyKind::Public => AsymmetricCipher::new(None, key),
    };

    let input = input.as_bytes();
    let output = match operation {
        Operation::EncryptWithPublic => cipher.encrypt_with_public(input, framing),
        Operation::EncryptWithPrivate => cipher.encrypt_with_private(input, framing),
        Operation::DecryptWithPublic => cipher.decrypt_with_public(input, framing),
        Operation::DecryptWithPrivate => cipher.decrypt_with_private(input, framing),
    }?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
