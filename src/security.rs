//! Action tokens for state-changing requests.
//!
//! Every save, reset, and template-apply request must carry a token
//! derived from the site secret and the action name. Verification happens
//! before any option is touched.

use sha2::{Digest, Sha256};

use crate::error::{Result, RossError};

/// Length of the hex token handed to forms.
const TOKEN_LEN: usize = 20;

/// Token action for applying a template.
pub const APPLY_TEMPLATE_ACTION: &str = "ross_apply_template";

/// Mints and verifies per-action tokens.
#[derive(Clone)]
pub struct TokenSigner {
    secret: String,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Create a signer from the site secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Token for an action.
    pub fn token(&self, action: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b":");
        hasher.update(action.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..TOKEN_LEN].to_string()
    }

    /// Verify a submitted token for an action.
    pub fn verify(&self, action: &str, submitted: Option<&str>) -> Result<()> {
        let submitted = match submitted.map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("Rejected '{}' request without a token", action);
                return Err(RossError::MissingToken {
                    action: action.to_string(),
                });
            }
        };

        if constant_time_eq(self.token(action).as_bytes(), submitted.as_bytes()) {
            Ok(())
        } else {
            tracing::warn!("Rejected '{}' request with a bad token", action);
            Err(RossError::InvalidToken {
                action: action.to_string(),
            })
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
