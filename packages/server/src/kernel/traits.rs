// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Credential
// storage is opaque to the core: domain code only ever sees the trait.

use sha2::{Digest, Sha256};
use uuid::Uuid;

// =============================================================================
// PasswordHasher Trait (Infrastructure - credential verification collaborator)
// =============================================================================

/// Hashes and verifies password credentials.
///
/// The produced hash is an opaque string; the core stores it on the user
/// record and never inspects it.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    fn hash(&self, password: &str) -> String;

    /// Check a plaintext password against a stored hash.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

// =============================================================================
// Salted SHA-256 implementation
// =============================================================================

/// Default `PasswordHasher` backed by salted SHA-256.
///
/// Stored format is `<salt-hex>$<digest-hex>` with a random per-credential
/// salt.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        format!("{}${}", salt, digest)
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        match stored.split_once('$') {
            Some((salt, digest)) => Self::digest(salt, password) == digest,
            None => false,
        }
    }
}
