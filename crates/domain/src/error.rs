// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{SpotStatus, ZoneId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The zone code does not name a known zone.
    ZoneNotFound(String),
    /// The spot does not exist in the zone.
    SpotNotFound {
        /// The zone that was searched.
        zone: ZoneId,
        /// The requested spot identifier.
        spot_id: String,
    },
    /// The spot cannot be reserved in its current status.
    SpotUnavailable {
        /// The requested spot identifier.
        spot_id: String,
        /// The status the spot currently has.
        status: SpotStatus,
    },
    /// A spot transition was requested from a status the spot is not in.
    SpotStatusMismatch {
        /// The spot identifier.
        spot_id: String,
        /// The status the transition expected.
        expected: SpotStatus,
        /// The status the spot actually has.
        actual: SpotStatus,
    },
    /// No reservation with this identifier is in the ledger.
    ReservationNotFound(String),
    /// A user with the same username or university id already exists.
    DuplicateUser {
        /// The colliding field (`username` or `kluId`).
        field: &'static str,
        /// The colliding value.
        value: String,
    },
    /// Unknown username or wrong password.
    InvalidCredentials,
    /// User type is invalid.
    InvalidUserType(String),
    /// A zone counter would leave its valid range.
    ZoneCounterOverflow {
        /// The zone whose counter overflowed.
        zone: ZoneId,
        /// The counter name.
        counter: &'static str,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZoneNotFound(zone) => write!(f, "Zone '{zone}' not found"),
            Self::SpotNotFound { zone, spot_id } => {
                write!(f, "Spot '{spot_id}' not found in zone {zone}")
            }
            Self::SpotUnavailable { spot_id, status } => {
                write!(f, "Spot '{spot_id}' is not available (currently {status})")
            }
            Self::SpotStatusMismatch {
                spot_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Spot '{spot_id}' was expected to be {expected} but is {actual}"
                )
            }
            Self::ReservationNotFound(id) => write!(f, "Reservation '{id}' not found"),
            Self::DuplicateUser { field, value } => {
                write!(f, "A user with {field} '{value}' already exists")
            }
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::InvalidUserType(msg) => write!(f, "Invalid user type: {msg}"),
            Self::ZoneCounterOverflow { zone, counter } => {
                write!(f, "Zone {zone} counter '{counter}' out of range")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
