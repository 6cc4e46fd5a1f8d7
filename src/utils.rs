use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Random value for the `state` parameter of the consent URL.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Shortens a credential for log output: the first four characters and the length.
///
/// Values of eight characters or less show no prefix at all.
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    let prefix: String = if len > 8 {
        value.chars().take(4).collect()
    } else {
        String::new()
    };
    format!("{}… ({} chars)", prefix, len)
}
