// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Dates travel as `YYYY-MM-DD`
//! strings and timestamps as RFC 3339 strings.

use campus_parking_domain::{SpotStatus, SpotType, UserType};
use std::collections::BTreeMap;

/// A spot as listed for a zone.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotInfo {
    /// The spot identifier (e.g. `A-001`).
    pub id: String,
    /// The zone code.
    pub zone: String,
    /// The current status.
    pub status: SpotStatus,
    /// The spot category.
    #[serde(rename = "type")]
    pub spot_type: SpotType,
}

/// A zone's counters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub available: u32,
    pub occupied: u32,
    pub reserved: u32,
}

/// All zones keyed by zone code.
pub type ListZonesResponse = BTreeMap<String, ZoneInfo>;

/// API request to reserve a spot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    /// The zone code (case-insensitive).
    pub zone: String,
    /// The spot to reserve.
    pub spot_id: String,
    /// The reservation day (`YYYY-MM-DD`).
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// The reserving user. Accepts a JSON number or a numeric string.
    #[serde(deserialize_with = "deserialize_user_id")]
    pub user_id: u64,
    pub vehicle: String,
}

/// A user id as clients send it.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum UserIdRepr {
    Number(u64),
    Text(String),
}

fn deserialize_user_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match <UserIdRepr as serde::Deserialize>::deserialize(deserializer)? {
        UserIdRepr::Number(id) => Ok(id),
        UserIdRepr::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("userId '{text}' is not a numeric user id"))
        }),
    }
}

/// A reservation as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInfo {
    pub id: String,
    pub user_id: u64,
    pub zone: String,
    pub spot_id: String,
    /// The reservation day (`YYYY-MM-DD`).
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub vehicle: String,
    /// Always `reserved` while the reservation exists.
    pub status: SpotStatus,
    /// When the reservation was created (RFC 3339, UTC).
    pub created_at: String,
}

/// API response for a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub success: bool,
    pub reservation: ReservationInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationResponse {
    pub success: bool,
    /// A success message.
    pub message: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub klu_id: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// When the user registered (RFC 3339, UTC). Only sent on registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserInfo,
    /// Opaque session token.
    pub token: String,
}

/// API request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub klu_id: String,
    pub password: String,
    /// One of `student`, `faculty`, `visitor`, `vip`. Defaults to `student`.
    #[serde(default)]
    pub user_type: Option<String>,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub user: UserInfo,
    /// A success message.
    pub message: String,
}

/// Aggregate statistics across all zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub total_spots: u64,
    pub available: u64,
    pub occupied: u64,
    pub reserved: u64,
    /// Whole percentage of spots not occupied.
    pub efficiency: u8,
    pub today_reservations: u64,
}
