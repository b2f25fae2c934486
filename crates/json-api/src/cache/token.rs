//! Revalidation token

use std::fmt;

use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("revalidation token must not be empty")]
pub struct EmptyTokenError;

/// Shared secret guarding cache revalidation, held only as its SHA-256 digest.
#[derive(Clone)]
pub struct RevalidateToken {
    digest: [u8; 32],
}

impl RevalidateToken {
    /// Parse a configured token. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTokenError`] for a blank token.
    pub fn parse(token: &str) -> Result<Self, EmptyTokenError> {
        let token = token.trim();

        if token.is_empty() {
            return Err(EmptyTokenError);
        }

        Ok(Self {
            digest: digest(token),
        })
    }

    #[cfg(test)]
    pub(crate) fn unchecked(token: &str) -> Self {
        Self {
            digest: digest(token),
        }
    }

    /// Whether `candidate` is the configured token. Digests are compared in
    /// constant time.
    pub(crate) fn matches(&self, candidate: &str) -> bool {
        digest(candidate)
            .iter()
            .zip(self.digest)
            .fold(0, |diff, (left, right)| diff | (left ^ right))
            == 0
    }
}

impl fmt::Debug for RevalidateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RevalidateToken(..)")
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
