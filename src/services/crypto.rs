use base64::{engine::general_purpose, Engine as _};
use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::errors::ServiceError;

const SALT_LENGTH: usize = 16;

/// Generate a fresh random salt, base64-encoded
///
/// 16 bytes from the thread-local CSPRNG, unique per call with
/// overwhelming probability.
///
/// # Returns
/// A base64-encoded salt string (24 characters for 16 bytes)
pub fn generate_salt() -> String {
    let mut rng = rand::rng();
    let salt: [u8; SALT_LENGTH] = rng.random();
    general_purpose::STANDARD.encode(salt)
}

/// Compute the salted SHA-256 digest of a password
///
/// Deterministic: the same (password, salt) pair always yields the same
/// digest. The digest covers the raw salt bytes followed by the
/// password bytes.
///
/// # Arguments
/// * `password` - The plaintext password
/// * `salt` - A base64-encoded salt produced by `generate_salt`
///
/// # Returns
/// * `Ok(String)` - The base64-encoded digest
/// * `Err(ServiceError::Crypto)` - The salt is not valid base64
pub fn hash_password(password: &str, salt: &str) -> Result<String, ServiceError> {
    let mut salt_bytes = decode("salt", salt)?;
    let mut digest = digest_password(password, &salt_bytes);
    let encoded = general_purpose::STANDARD.encode(&digest);
    salt_bytes.zeroize();
    digest.zeroize();
    Ok(encoded)
}

/// Verify a candidate password against a stored salt and digest
///
/// Recomputes the digest and compares in constant time. Sensitive
/// intermediate buffers are wiped before returning.
///
/// # Arguments
/// * `password` - The candidate plaintext password
/// * `salt` - The stored base64-encoded salt
/// * `expected` - The stored base64-encoded digest
///
/// # Returns
/// * `Ok(bool)` - Whether the password matches
/// * `Err(ServiceError::Crypto)` - Stored salt or digest is not valid
///   base64 (a corrupted record, not a mismatch)
pub fn verify_password(password: &str, salt: &str, expected: &str) -> Result<bool, ServiceError> {
    let mut expected_bytes = decode("stored digest", expected)?;
    let mut salt_bytes = decode("salt", salt)?;
    let mut actual = digest_password(password, &salt_bytes);

    let matches = bool::from(actual.as_slice().ct_eq(expected_bytes.as_slice()));

    actual.zeroize();
    salt_bytes.zeroize();
    expected_bytes.zeroize();
    Ok(matches)
}

fn digest_password(password: &str, salt: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

fn decode(what: &str, value: &str) -> Result<Vec<u8>, ServiceError> {
    general_purpose::STANDARD
        .decode(value)
        .map_err(|e| ServiceError::Crypto {
            operation: format!("decode {}", what),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_salt_length() {
        let salt = generate_salt();
        // base64-encoded 16 bytes
        assert_eq!(salt.len(), 24);
    }

    #[test]
    fn test_generate_salt_uniqueness() {
        let salt1 = generate_salt();
        let salt2 = generate_salt();

        assert_ne!(salt1, salt2);
    }

    #[test]
    fn test_hash_password_is_deterministic() {
        let salt = generate_salt();

        let digest1 = hash_password("secret@123", &salt).unwrap();
        let digest2 = hash_password("secret@123", &salt).unwrap();

        assert_eq!(digest1, digest2);
    }

    #[test]
    fn test_different_salts_produce_different_digests() {
        let salt1 = generate_salt();
        let salt2 = generate_salt();

        let digest1 = hash_password("secret@123", &salt1).unwrap();
        let digest2 = hash_password("secret@123", &salt2).unwrap();

        assert_ne!(digest1, digest2);
    }

    #[test]
    fn test_verify_password_round_trip() {
        let salt = generate_salt();
        let digest = hash_password("secret@123", &salt).unwrap();

        assert!(verify_password("secret@123", &salt, &digest).unwrap());
        assert!(!verify_password("wrong@123", &salt, &digest).unwrap());
    }

    #[test]
    fn test_verify_password_rejects_corrupted_salt() {
        let salt = generate_salt();
        let digest = hash_password("secret@123", &salt).unwrap();

        let result = verify_password("secret@123", "not base64!!!", &digest);

        assert!(matches!(result, Err(ServiceError::Crypto { .. })));
    }
}
