// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_parking_domain::{DomainError, ZoneId};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Spots, zone counters, and the ledger disagree.
    InvariantViolation {
        /// The zone where the disagreement was found.
        zone: ZoneId,
        /// What disagreed.
        detail: String,
    },
    /// The seed plan cannot produce a valid state.
    InvalidSeedPlan(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvariantViolation { zone, detail } => {
                write!(f, "Invariant violated in zone {zone}: {detail}")
            }
            Self::InvalidSeedPlan(msg) => write!(f, "Invalid seed plan: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
