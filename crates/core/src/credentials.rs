// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_parking_domain::User;

/// Decides whether a password is valid for a directory user.
///
/// The directory only resolves usernames. Whether a password matches is
/// delegated to an implementation of this trait.
pub trait CredentialVerifier {
    /// Returns true if `password` is valid for `user`.
    fn verify(&self, user: &User, password: &str) -> bool;
}

/// Accepts the shared demo passwords for every directory user.
///
/// Intended for demonstrations only. Nothing is stored per user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoCredentials;

impl DemoCredentials {
    /// The passwords accepted for any user.
    pub const PASSWORDS: [&'static str; 2] = ["demo123", "password"];
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, _user: &User, password: &str) -> bool {
        Self::PASSWORDS.contains(&password)
    }
}
