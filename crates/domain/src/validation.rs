// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Spot, SpotStatus, User};

/// Validates that a username and university id are both unused.
///
/// This function is pure, deterministic, and has no side effects.
/// Usernames are checked before university ids.
///
/// # Arguments
///
/// * `username` - The username to validate
/// * `klu_id` - The university id to validate
/// * `existing_users` - The users already registered
///
/// # Errors
///
/// Returns `DomainError::DuplicateUser` naming the first colliding field.
pub fn validate_user_unique(
    username: &str,
    klu_id: &str,
    existing_users: &[User],
) -> Result<(), DomainError> {
    if existing_users.iter().any(|user| user.username == username) {
        return Err(DomainError::DuplicateUser {
            field: "username",
            value: username.to_string(),
        });
    }

    if existing_users.iter().any(|user| user.klu_id == klu_id) {
        return Err(DomainError::DuplicateUser {
            field: "kluId",
            value: klu_id.to_string(),
        });
    }

    Ok(())
}

/// Validates that a spot can be reserved.
///
/// # Errors
///
/// Returns `DomainError::SpotUnavailable` if the spot is occupied or already
/// reserved.
pub fn validate_spot_reservable(spot: &Spot) -> Result<(), DomainError> {
    if spot.status != SpotStatus::Available {
        return Err(DomainError::SpotUnavailable {
            spot_id: spot.id.clone(),
            status: spot.status,
        });
    }
    Ok(())
}
