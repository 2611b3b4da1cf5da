// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_parking_domain::{UserType, ZoneId};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reserve an available spot.
    ReserveSpot {
        /// The zone containing the spot.
        zone: ZoneId,
        /// The spot to reserve.
        spot_id: String,
        /// The user making the reservation.
        user_id: u64,
        /// The day the reservation is for.
        date: Date,
        /// Free-form start time.
        start_time: String,
        /// Free-form end time.
        end_time: String,
        /// Free-form vehicle description.
        vehicle: String,
    },
    /// Cancel an active reservation, releasing its spot.
    CancelReservation {
        /// The ledger identifier of the reservation.
        reservation_id: String,
    },
    /// Register a new user in the directory.
    RegisterUser {
        /// The login name.
        username: String,
        /// The contact email.
        email: String,
        /// The university id.
        klu_id: String,
        /// The user's type classification.
        user_type: UserType,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReserveSpot { .. } => "ReserveSpot",
            Self::CancelReservation { .. } => "CancelReservation",
            Self::RegisterUser { .. } => "RegisterUser",
        }
    }
}
