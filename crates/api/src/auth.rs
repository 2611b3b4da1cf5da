// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential storage and session token issuance.

use campus_parking::{CredentialVerifier, DemoCredentials};
use campus_parking_domain::User;
use std::collections::HashMap;
use time::OffsetDateTime;

use crate::error::CredentialError;

/// The password seeded demo users are enrolled with.
pub const DEMO_SEED_PASSWORD: &str = "demo123";

/// A credential verifier that can also record passwords.
///
/// Registration enrolls the new user's password before the user is
/// committed, so a failed enrollment leaves the directory unchanged.
pub trait CredentialStore: CredentialVerifier + Send {
    /// Records the password for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the password cannot be stored.
    fn enroll(&mut self, user: &User, password: &str) -> Result<(), CredentialError>;

    /// Drops every recorded password.
    fn clear(&mut self);
}

impl CredentialStore for DemoCredentials {
    fn enroll(&mut self, _user: &User, _password: &str) -> Result<(), CredentialError> {
        Ok(())
    }

    fn clear(&mut self) {}
}

/// Stores a bcrypt hash per user id.
///
/// Users without an enrolled hash never authenticate.
#[derive(Debug, Clone)]
pub struct BcryptCredentials {
    cost: u32,
    hashes: HashMap<u64, String>,
}

impl BcryptCredentials {
    /// Creates an empty store hashing at the given bcrypt cost.
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            hashes: HashMap::new(),
        }
    }

    /// Returns true if a hash is recorded for the user.
    #[must_use]
    pub fn is_enrolled(&self, user_id: u64) -> bool {
        self.hashes.contains_key(&user_id)
    }
}

impl Default for BcryptCredentials {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialVerifier for BcryptCredentials {
    fn verify(&self, user: &User, password: &str) -> bool {
        self.hashes
            .get(&user.id)
            .is_some_and(|hash| bcrypt::verify(password, hash).unwrap_or(false))
    }
}

impl CredentialStore for BcryptCredentials {
    fn enroll(&mut self, user: &User, password: &str) -> Result<(), CredentialError> {
        let hash: String = bcrypt::hash(password, self.cost)?;
        self.hashes.insert(user.id, hash);
        Ok(())
    }

    fn clear(&mut self) {
        self.hashes.clear();
    }
}

/// Issues an opaque session token.
///
/// Tokens are handed to clients on login but no route checks them.
#[must_use]
pub fn issue_session_token(now: OffsetDateTime) -> String {
    format!("session_{}_{}", now.unix_timestamp(), rand::random::<u64>())
}
