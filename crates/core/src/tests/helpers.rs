// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, SeedPlan, State, TransitionResult, apply};
use campus_parking_domain::ZoneId;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-03-15 10:30 UTC)
}

pub fn create_test_date() -> Date {
    date!(2026 - 03 - 15)
}

/// The default campus, laid out sequentially and seeded at `create_test_now`.
///
/// Zone A spots `A-001..=A-060` are available, `A-061..=A-075` occupied and
/// `A-076..=A-080` reserved. Holds take ids `RES-00000001..=RES-00000014`.
pub fn create_test_state() -> State {
    State::seeded(&SeedPlan::campus_default(), create_test_now()).unwrap()
}

pub fn create_reserve_command(zone: ZoneId, spot_id: &str, user_id: u64) -> Command {
    Command::ReserveSpot {
        zone,
        spot_id: String::from(spot_id),
        user_id,
        date: create_test_date(),
        start_time: String::from("09:00"),
        end_time: String::from("17:00"),
        vehicle: String::from("AP-07-1234"),
    }
}

pub fn create_cancel_command(reservation_id: &str) -> Command {
    Command::CancelReservation {
        reservation_id: String::from(reservation_id),
    }
}

/// Applies a command and returns the committed state.
pub fn apply_ok(state: &State, command: Command) -> State {
    let result: TransitionResult = apply(state, command, create_test_now()).unwrap();
    result.new_state
}
