use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// A shared secret that lets a CI agent post suites for one repository.
///
/// Only the SHA-256 digest of the secret is kept; the plain key is handed out
/// once, when the secret is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSecret {
    pub id: Option<i64>,
    pub repo_id: Option<i64>,
    digest: [u8; 32],
}

impl RepoSecret {
    /// Rebuild a secret from a digest previously obtained via [`Self::digest`].
    #[must_use]
    pub const fn from_digest(repo_id: Option<i64>, digest: [u8; 32]) -> Self {
        Self { id: None, repo_id, digest }
    }

    #[must_use]
    pub const fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// The digest in base64, as shown to operators.
    #[must_use]
    pub fn digest_base64(&self) -> String {
        STANDARD.encode(self.digest)
    }

    /// Check a candidate key against this secret in constant time.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate_digest: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        bool::from(self.digest.as_slice().ct_eq(candidate_digest.as_slice()))
    }
}

/// Generate a new secret made of `len` random bytes.
///
/// Returns the base64 key to give to the user along with the record to persist.
#[must_use]
pub fn generate_secret(repo_id: Option<i64>, len: usize) -> (String, RepoSecret) {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);

    let key = STANDARD.encode(&bytes);
    let digest: [u8; 32] = Sha256::digest(key.as_bytes()).into();

    (key, RepoSecret::from_digest(repo_id, digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_key_matches() {
        let (key, secret) = generate_secret(Some(1), 40);
        assert!(secret.matches(&key));
        assert_eq!(secret.repo_id, Some(1));
    }

    #[test]
    fn test_key_length() {
        let (key, _) = generate_secret(None, 40);
        assert_eq!(STANDARD.decode(&key).unwrap().len(), 40);
    }

    #[test]
    fn test_rejects_other_keys() {
        let (key, secret) = generate_secret(None, 40);
        assert!(!secret.matches(""));
        assert!(!secret.matches(&format!("{key}x")));

        let (other_key, _) = generate_secret(None, 40);
        assert_ne!(key, other_key);
        assert!(!secret.matches(&other_key));
    }

    #[test]
    fn test_from_digest_round_trip() {
        let (key, secret) = generate_secret(Some(5), 16);
        let restored = RepoSecret::from_digest(Some(5), *secret.digest());
        assert!(restored.matches(&key));
        assert_eq!(restored.digest_base64(), secret.digest_base64());
    }
}
