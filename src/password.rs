//! Salted, iterated SHA-256 password digests.
//!
//! Encoded form: `sha256$<iterations>$<salt-hex>$<digest-hex>`.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;
pub const ITERATIONS: u32 = 10_000;

pub fn hash_password(plain: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let digest = stretch(&salt, ITERATIONS, plain);
    format!("{SCHEME}${ITERATIONS}${}${}", hex::encode(salt), hex::encode(digest))
}

/// Malformed encodings never verify.
pub fn verify_password(plain: &str, encoded: &str) -> bool {
    let Some((iterations, salt, expected)) = parse(encoded) else {
        return false;
    };
    let actual = stretch(&salt, iterations, plain);
    actual.ct_eq(&expected).into()
}

fn parse(encoded: &str) -> Option<(u32, Vec<u8>, Vec<u8>)> {
    let mut parts = encoded.splitn(4, '$');
    if parts.next()? != SCHEME {
        return None;
    }
    let iterations: u32 = parts.next()?.parse().ok().filter(|n| *n > 0)?;
    let salt = hex::decode(parts.next()?).ok()?;
    let digest = hex::decode(parts.next()?).ok()?;
    Some((iterations, salt, digest))
}

fn stretch(salt: &[u8], iterations: u32, plain: &str) -> Vec<u8> {
    let mut out = Sha256::new()
        .chain_update(salt)
        .chain_update(plain.as_bytes())
        .finalize();
    for _ in 1..iterations {
        out = Sha256::new().chain_update(salt).chain_update(out.as_slice()).finalize();
    }
    out.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies() {
        let encoded = hash_password("hunter22");
        assert!(verify_password("hunter22", &encoded));
        assert!(!verify_password("hunter23", &encoded));
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let encoded = hash_password("Secret1");
        assert!(!verify_password("secret1", &encoded));
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same-password");
        let b = hash_password("same-password");
        assert_ne!(a, b);
        assert!(verify_password("same-password", &a));
        assert!(verify_password("same-password", &b));
    }

    #[test]
    fn test_encoded_shape() {
        let encoded = hash_password("pw1234");
        let parts: Vec<&str> = encoded.split('$').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "sha256");
        assert_eq!(parts[1], ITERATIONS.to_string());
        assert_eq!(parts[2].len(), SALT_LEN * 2);
        assert_eq!(parts[3].len(), 64);
    }

    #[test]
    fn test_plaintext_or_garbage_never_verifies() {
        assert!(!verify_password("pw", "pw"));
        assert!(!verify_password("pw", "sha256$0$00$00"));
        assert!(!verify_password("pw", "sha256$10$zz$00"));
        assert!(!verify_password("pw", "md5$10$00$00"));
        assert!(!verify_password("", ""));
    }
}
