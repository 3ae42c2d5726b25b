//! # Caller Identity
//!
//! The resolved identity of an authenticated caller, plus the
//! [`CredentialResolver`] seam that turns an opaque bearer token into one.
//!
//! ## Design Rationale
//!
//! Subsystem operations never inspect tokens, headers, or any other ambient
//! authentication state. The transport edge resolves credentials **once** and
//! hands the resulting [`Identity`] down by value. Everything below the edge
//! can therefore be exercised in tests by constructing identities directly.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use thiserror::Error;

/// The privilege level carried by a credential.
///
/// Ownership, not role, is what gates space mutations; the role exists for
/// administrative tooling layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Operator with administrative tooling access.
    Admin,
    /// Regular account holder.
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

/// A verified caller: who they are and what privilege level they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated account.
    pub user_id: UserId,
    /// Privilege level resolved from the credential.
    pub role: Role,
}

impl Identity {
    /// Builds an identity from its parts.
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns true for operator credentials.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Failure to turn a token into an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The token is unknown, malformed, or expired. Deliberately one signal:
    /// callers learn nothing about *why* a credential was rejected.
    #[error("credential was not recognized")]
    Unauthenticated,
}

/// Resolves opaque bearer tokens into verified identities.
///
/// Production deployments back this with their token infrastructure; tests
/// use [`StaticTokenDirectory`].
#[async_trait::async_trait]
pub trait CredentialResolver: Send + Sync {
    /// Verifies `token` and returns the identity it was issued to.
    async fn resolve(&self, token: &str) -> Result<Identity, CredentialError>;
}

/// An in-memory token directory with pre-registered credentials.
///
/// ## Usage
///
/// ```rust,ignore
/// let directory = StaticTokenDirectory::new();
/// directory.register("alice-token", Identity::new(alice, Role::User));
///
/// let identity = directory.resolve("alice-token").await?;
/// ```
#[derive(Debug, Default)]
pub struct StaticTokenDirectory {
    /// Map of token -> identity it resolves to.
    tokens: RwLock<HashMap<String, Identity>>,
}

impl StaticTokenDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the identity a token resolves to.
    pub fn register(&self, token: impl Into<String>, identity: Identity) {
        let mut tokens = match self.tokens.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tokens.insert(token.into(), identity);
    }

    /// Returns the number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Returns true if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl CredentialResolver for StaticTokenDirectory {
    async fn resolve(&self, token: &str) -> Result<Identity, CredentialError> {
        let tokens = match self.tokens.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match tokens.get(token) {
            Some(identity) => Ok(*identity),
            None => {
                // Never log the token itself.
                tracing::warn!("[identity] rejected unrecognized credential");
                Err(CredentialError::Unauthenticated)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
