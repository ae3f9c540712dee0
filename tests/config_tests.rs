// tests/config_tests.rs
use asym_helper::config::Config;
use asym_helper::consts::CONFIG_ENV_VAR;
use asym_helper::{load_config, ConfigError, Framing, KeyGenOptions, KeyType, LineEnding};
use tempfile::tempdir;

#[test]
fn test_full_config_parses() {
    let conf = Config::from_toml_str(
        r#"
        [keygen]
        bits = 3072
        key_type = "rsa"
        line_ending = "windows"
        private_key_file = "id_rsa.pem"
        public_key_file = "id_rsa.pub.pem"

        [cipher]
        framing = "raw"
        "#,
    )
    .unwrap();

    assert_eq!(conf.keygen.bits, 3072);
    assert_eq!(conf.keygen.key_type, KeyType::Rsa);
    assert_eq!(conf.keygen.line_ending, LineEnding::Windows);
    assert_eq!(conf.keygen.private_key_file, "id_rsa.pem");
    assert_eq!(conf.cipher.framing, Framing::Raw);

    let options = KeyGenOptions::from_config(&conf.keygen);
    assert_eq!(options.bits, 3072);
    assert_eq!(options.line_ending, LineEnding::Windows);
}

#[test]
fn test_partial_config_takes_defaults() {
    let conf = Config::from_toml_str("[cipher]\nframing = \"raw\"\n").unwrap();
    assert_eq!(conf.keygen, Config::default().keygen);
    assert_eq!(conf.keygen.bits, 2048);
    assert_eq!(conf.keygen.public_key_file, "public.pem");

    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    assert_eq!(Config::default().cipher.framing, Framing::Base64);
}

#[test]
fn test_invalid_config_is_an_error() {
    assert!(matches!(
        Config::from_toml_str("[keygen]\nbits = \"lots\"\n"),
        Err(ConfigError::Toml(_))
    ));

    let dir = tempdir().unwrap();
    assert!(matches!(
        Config::from_file(dir.path().join("absent.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_from_file_reads_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("asym-helper.toml");
    std::fs::write(&path, "[keygen]\nbits = 4096\n").unwrap();

    assert_eq!(Config::from_file(&path).unwrap().keygen.bits, 4096);
}

#[test]
fn test_load_falls_back_to_defaults_when_file_is_missing() {
    let dir = tempdir().unwrap();
    std::env::set_var(CONFIG_ENV_VAR, dir.path().join("missing.toml"));

    assert_eq!(load_config(), &Config::default());
}
