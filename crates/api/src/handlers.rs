// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers never mutate the state they are given. State-changing handlers
//! return the new state inside an [`ApiResult`] for the caller to commit.

use campus_parking::{
    Command, CredentialVerifier, Outcome, State, TransitionResult, apply, compute_statistics,
};
use campus_parking_domain::{
    DomainError, Reservation, Spot, Statistics, User, UserType, Zone, ZoneId,
};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::auth::issue_session_token;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CancelReservationResponse, CreateReservationRequest, CreateReservationResponse,
    ListZonesResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    ReservationInfo, SpotInfo, StatisticsResponse, UserInfo, ZoneInfo,
};

/// The result of a state-changing API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: State,
}

/// Applies a command, logging and translating a rejection.
fn apply_command(
    state: &State,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    let name: &'static str = command.name();
    apply(state, command, now).map_err(|err| {
        debug!(command = name, error = %err, "Command rejected");
        translate_core_error(err)
    })
}

fn unexpected_outcome(command: &str, outcome: &Outcome) -> ApiError {
    ApiError::Internal {
        message: format!("{command} produced an unexpected outcome: {outcome:?}"),
    }
}

fn parse_zone(zone: &str) -> Result<ZoneId, ApiError> {
    ZoneId::from_str(zone).map_err(translate_domain_error)
}

fn parse_date(date: &str) -> Result<Date, ApiError> {
    Date::parse(date, format_description!("[year]-[month]-[day]")).map_err(|e| {
        translate_domain_error(DomainError::DateParseError {
            date_string: date.to_string(),
            error: e.to_string(),
        })
    })
}

fn parse_user_type(user_type: Option<&str>) -> Result<UserType, ApiError> {
    match user_type.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => UserType::parse(s).map_err(translate_domain_error),
        None => Ok(UserType::default()),
    }
}

fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, ApiError> {
    timestamp.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

fn spot_info(spot: &Spot) -> SpotInfo {
    SpotInfo {
        id: spot.id.clone(),
        zone: spot.zone.to_string(),
        status: spot.status,
        spot_type: spot.spot_type,
    }
}

fn zone_info(zone: &Zone) -> ZoneInfo {
    ZoneInfo {
        id: zone.id.to_string(),
        name: zone.name.clone(),
        capacity: zone.capacity,
        available: zone.available,
        occupied: zone.occupied,
        reserved: zone.reserved,
    }
}

fn reservation_info(reservation: &Reservation) -> Result<ReservationInfo, ApiError> {
    Ok(ReservationInfo {
        id: reservation.id.clone(),
        user_id: reservation.user_id,
        zone: reservation.zone.to_string(),
        spot_id: reservation.spot_id.clone(),
        date: reservation.date.to_string(),
        start_time: reservation.start_time.clone(),
        end_time: reservation.end_time.clone(),
        vehicle: reservation.vehicle.clone(),
        status: Reservation::STATUS,
        created_at: format_timestamp(reservation.created_at)?,
    })
}

fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        klu_id: user.klu_id.clone(),
        user_type: user.user_type,
        created_at: None,
    }
}

impl From<Statistics> for StatisticsResponse {
    fn from(stats: Statistics) -> Self {
        Self {
            total_spots: stats.total_spots,
            available: stats.available,
            occupied: stats.occupied,
            reserved: stats.reserved,
            efficiency: stats.efficiency,
            today_reservations: stats.today_reservations,
        }
    }
}

/// Lists the spots of a zone.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the zone code is unknown.
pub fn list_spots(state: &State, zone: &str) -> Result<Vec<SpotInfo>, ApiError> {
    let zone_id: ZoneId = parse_zone(zone)?;
    let spots: &[Spot] = state
        .spots()
        .list_spots(zone_id)
        .map_err(translate_domain_error)?;
    Ok(spots.iter().map(spot_info).collect())
}

/// Lists every zone's counters keyed by zone code.
#[must_use]
pub fn list_zones(state: &State) -> ListZonesResponse {
    state
        .zones()
        .zones()
        .map(|zone| (zone.id.to_string(), zone_info(zone)))
        .collect()
}

/// Reserves a spot.
///
/// # Errors
///
/// Returns an error if:
/// - The zone or spot does not exist
/// - The spot is not available
/// - The date is not `YYYY-MM-DD`
pub fn create_reservation(
    state: &State,
    request: &CreateReservationRequest,
    now: OffsetDateTime,
) -> Result<ApiResult<CreateReservationResponse>, ApiError> {
    let command: Command = Command::ReserveSpot {
        zone: parse_zone(&request.zone)?,
        spot_id: request.spot_id.clone(),
        user_id: request.user_id,
        date: parse_date(&request.date)?,
        start_time: request.start_time.clone(),
        end_time: request.end_time.clone(),
        vehicle: request.vehicle.clone(),
    };

    let result: TransitionResult = apply_command(state, command, now)?;
    let Outcome::Reserved(reservation) = &result.outcome else {
        return Err(unexpected_outcome("ReserveSpot", &result.outcome));
    };

    Ok(ApiResult {
        response: CreateReservationResponse {
            success: true,
            reservation: reservation_info(reservation)?,
            message: format!("Spot {} reserved successfully!", reservation.spot_id),
        },
        new_state: result.new_state,
    })
}

/// Lists a user's reservations in creation order.
///
/// An id that is not a number matches no reservation.
///
/// # Errors
///
/// Returns `ApiError::Internal` if a timestamp cannot be formatted.
pub fn list_user_reservations(
    state: &State,
    user_id: &str,
) -> Result<Vec<ReservationInfo>, ApiError> {
    let Ok(user_id) = user_id.trim().parse::<u64>() else {
        return Ok(Vec::new());
    };

    state
        .reservations()
        .list_by_user(user_id)
        .into_iter()
        .map(reservation_info)
        .collect()
}

/// Cancels a reservation, releasing its spot.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the reservation does not exist.
pub fn cancel_reservation(
    state: &State,
    reservation_id: &str,
    now: OffsetDateTime,
) -> Result<ApiResult<CancelReservationResponse>, ApiError> {
    let command: Command = Command::CancelReservation {
        reservation_id: reservation_id.to_string(),
    };

    let result: TransitionResult = apply_command(state, command, now)?;
    if !matches!(result.outcome, Outcome::Cancelled(_)) {
        return Err(unexpected_outcome("CancelReservation", &result.outcome));
    }

    Ok(ApiResult {
        response: CancelReservationResponse {
            success: true,
            message: String::from("Reservation cancelled successfully!"),
        },
        new_state: result.new_state,
    })
}

/// Authenticates a user and issues a session token.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` for an unknown user or a wrong
/// password. The two cases are indistinguishable.
pub fn login<V: CredentialVerifier + ?Sized>(
    state: &State,
    request: &LoginRequest,
    verifier: &V,
    now: OffsetDateTime,
) -> Result<LoginResponse, ApiError> {
    let user: &User = state
        .users()
        .authenticate(&request.username, &request.password, verifier)
        .map_err(translate_domain_error)?;

    Ok(LoginResponse {
        success: true,
        user: user_info(user),
        token: issue_session_token(now),
    })
}

/// Registers a new user.
///
/// The password is not handled here; the caller enrolls it before
/// committing the new state.
///
/// # Errors
///
/// Returns an error if:
/// - The username or university id is already registered
/// - The user type is not one of the known types
pub fn register_user(
    state: &State,
    request: &RegisterRequest,
    now: OffsetDateTime,
) -> Result<ApiResult<RegisterResponse>, ApiError> {
    let command: Command = Command::RegisterUser {
        username: request.username.clone(),
        email: request.email.clone(),
        klu_id: request.klu_id.clone(),
        user_type: parse_user_type(request.user_type.as_deref())?,
    };

    let result: TransitionResult = apply_command(state, command, now)?;
    let Outcome::Registered(user) = &result.outcome else {
        return Err(unexpected_outcome("RegisterUser", &result.outcome));
    };

    let mut registered: UserInfo = user_info(user);
    registered.created_at = Some(format_timestamp(user.created_at)?);

    Ok(ApiResult {
        response: RegisterResponse {
            success: true,
            user: registered,
            message: String::from("Registration successful!"),
        },
        new_state: result.new_state,
    })
}

/// Computes campus statistics for the given UTC day.
#[must_use]
pub fn statistics(state: &State, today: Date) -> StatisticsResponse {
    compute_statistics(state, today).into()
}
