// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use campus_parking::CoreError;
use campus_parking_domain::DomainError;
use thiserror::Error;

/// Credential storage errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The password could not be hashed.
    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// The `Display` output is the message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => write!(f, "{reason}"),
            Self::DomainRuleViolation { message, .. } | Self::ResourceNotFound { message, .. } => {
                write!(f, "{message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::ZoneNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Zone"),
            message: err.to_string(),
        },
        DomainError::SpotNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Spot"),
            message: err.to_string(),
        },
        DomainError::ReservationNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: err.to_string(),
        },
        DomainError::SpotUnavailable { .. } => ApiError::DomainRuleViolation {
            rule: String::from("spot_available"),
            message: err.to_string(),
        },
        DomainError::DuplicateUser { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_user"),
            message: err.to_string(),
        },
        DomainError::InvalidCredentials => ApiError::AuthenticationFailed {
            reason: err.to_string(),
        },
        DomainError::InvalidUserType(msg) => ApiError::InvalidInput {
            field: String::from("userType"),
            message: msg,
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::SpotStatusMismatch { .. } | DomainError::ZoneCounterOverflow { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvariantViolation { .. } | CoreError::InvalidSeedPlan(_) => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}
