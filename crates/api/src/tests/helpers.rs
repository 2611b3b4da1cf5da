// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use campus_parking::{DemoCredentials, SeedPlan, State};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{BcryptCredentials, CreateReservationRequest, ParkingService, RegisterRequest};

/// The cheapest bcrypt cost the crate accepts.
pub const TEST_COST: u32 = 4;

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-03-15 10:30 UTC)
}

/// The default campus laid out sequentially.
pub fn create_test_state() -> State {
    State::seeded(&SeedPlan::campus_default(), create_test_now()).unwrap()
}

pub fn create_test_service() -> ParkingService {
    ParkingService::init(SeedPlan::campus_default(), Box::new(DemoCredentials)).unwrap()
}

pub fn create_test_bcrypt_service() -> ParkingService {
    ParkingService::init(
        SeedPlan::campus_default(),
        Box::new(BcryptCredentials::new(TEST_COST)),
    )
    .unwrap()
}

pub fn create_test_reservation_request(
    zone: &str,
    spot_id: &str,
    user_id: u64,
) -> CreateReservationRequest {
    CreateReservationRequest {
        zone: String::from(zone),
        spot_id: String::from(spot_id),
        date: String::from("2026-03-15"),
        start_time: String::from("09:00"),
        end_time: String::from("17:00"),
        user_id,
        vehicle: String::from("AP-07-1234"),
    }
}

pub fn create_test_register_request(username: &str, klu_id: &str) -> RegisterRequest {
    RegisterRequest {
        username: String::from(username),
        email: format!("{username}@kluniversity.in"),
        klu_id: String::from(klu_id),
        password: String::from("s3cret-pass"),
        user_type: None,
    }
}
