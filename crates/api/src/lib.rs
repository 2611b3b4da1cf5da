// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

pub use auth::{
    BcryptCredentials, CredentialStore, DEMO_SEED_PASSWORD, issue_session_token,
};
pub use error::{ApiError, CredentialError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, cancel_reservation, create_reservation, list_spots, list_user_reservations,
    list_zones, login, register_user, statistics,
};
pub use request_response::{
    CancelReservationResponse, CreateReservationRequest, CreateReservationResponse,
    ListZonesResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    ReservationInfo, SpotInfo, StatisticsResponse, UserInfo, ZoneInfo,
};
pub use service::ParkingService;
