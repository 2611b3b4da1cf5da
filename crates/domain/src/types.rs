// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Identifies one of the campus parking zones.
///
/// Zones are fixed domain constants. Each zone maps to exactly one spot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// Student parking.
    A,
    /// Faculty parking.
    B,
    /// Visitor parking.
    C,
    /// VIP parking.
    D,
}

impl ZoneId {
    /// All zones in display order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the single-letter code for this zone.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Returns the spot type every spot in this zone carries.
    #[must_use]
    pub const fn spot_type(&self) -> SpotType {
        match self {
            Self::A => SpotType::Student,
            Self::B => SpotType::Faculty,
            Self::C => SpotType::Visitor,
            Self::D => SpotType::Vip,
        }
    }

    /// Formats the spot identifier for the given 1-based sequence number.
    ///
    /// Identifiers take the form `<zone>-<3-digit-sequence>`, e.g. `A-001`.
    #[must_use]
    pub fn spot_id(&self, sequence: u32) -> String {
        format!("{}-{sequence:03}", self.as_str())
    }
}

impl FromStr for ZoneId {
    type Err = DomainError;

    /// Parses a zone code case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(DomainError::ZoneNotFound(s.to_string())),
        }
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The occupancy status of a single spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    /// Free to reserve.
    Available,
    /// A vehicle is parked in the spot.
    Occupied,
    /// Held by an active reservation.
    Reserved,
}

impl SpotStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
        }
    }
}

impl std::fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The category of a spot, derived from its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    Student,
    Faculty,
    Visitor,
    Vip,
}

impl SpotType {
    /// Returns the wire representation of this spot type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Visitor => "visitor",
            Self::Vip => "vip",
        }
    }
}

/// Represents a user type classification.
///
/// User types are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Faculty,
    Visitor,
    Vip,
}

impl UserType {
    /// Parses a user type from a string, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid user type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "visitor" => Ok(Self::Visitor),
            "vip" => Ok(Self::Vip),
            _ => Err(DomainError::InvalidUserType(format!(
                "Unknown user type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this user type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Visitor => "visitor",
            Self::Vip => "vip",
        }
    }
}

/// An individually addressable parking space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    /// The spot identifier, unique within its zone (e.g. `A-001`).
    pub id: String,
    /// The zone this spot belongs to.
    pub zone: ZoneId,
    /// The current occupancy status.
    pub status: SpotStatus,
    /// The spot category. Always `zone.spot_type()`.
    pub spot_type: SpotType,
}

impl Spot {
    /// Creates the spot with the given 1-based sequence number in a zone.
    #[must_use]
    pub fn new(zone: ZoneId, sequence: u32, status: SpotStatus) -> Self {
        Self {
            id: zone.spot_id(sequence),
            zone,
            status,
            spot_type: zone.spot_type(),
        }
    }
}

/// A signed change to the three status counters of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneDelta {
    pub available: i32,
    pub occupied: i32,
    pub reserved: i32,
}

impl ZoneDelta {
    /// Returns the counter change implied by moving one spot from `from` to `to`.
    ///
    /// A transition to the same status yields the zero delta.
    #[must_use]
    pub fn between(from: SpotStatus, to: SpotStatus) -> Self {
        let mut delta: Self = Self::default();
        if from == to {
            return delta;
        }
        *delta.counter_mut(from) -= 1;
        *delta.counter_mut(to) += 1;
        delta
    }

    fn counter_mut(&mut self, status: SpotStatus) -> &mut i32 {
        match status {
            SpotStatus::Available => &mut self.available,
            SpotStatus::Occupied => &mut self.occupied,
            SpotStatus::Reserved => &mut self.reserved,
        }
    }
}

/// Aggregate counters for one zone.
///
/// Invariant: `available + occupied + reserved == capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// The zone identifier.
    pub id: ZoneId,
    /// Display name (e.g. "Student Parking").
    pub name: String,
    /// Total number of spots in the zone.
    pub capacity: u32,
    /// Spots free to reserve.
    pub available: u32,
    /// Spots with a parked vehicle.
    pub occupied: u32,
    /// Spots held by a reservation.
    pub reserved: u32,
}

impl Zone {
    /// Creates a zone whose capacity is the sum of the given counters.
    #[must_use]
    pub const fn new(id: ZoneId, name: String, available: u32, occupied: u32, reserved: u32) -> Self {
        Self {
            id,
            name,
            capacity: available + occupied + reserved,
            available,
            occupied,
            reserved,
        }
    }

    /// Returns true when the counters sum to the capacity.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        u64::from(self.available) + u64::from(self.occupied) + u64::from(self.reserved)
            == u64::from(self.capacity)
    }

    /// Returns the counter tracking the given status.
    #[must_use]
    pub const fn count(&self, status: SpotStatus) -> u32 {
        match status {
            SpotStatus::Available => self.available,
            SpotStatus::Occupied => self.occupied,
            SpotStatus::Reserved => self.reserved,
        }
    }

    /// Applies a delta to all three counters as one step.
    ///
    /// Every new value is computed before any is written, so on error the
    /// zone is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZoneCounterOverflow` if any counter would leave
    /// the `u32` range.
    pub fn apply_delta(&mut self, delta: ZoneDelta) -> Result<(), DomainError> {
        let available: u32 = shift(self.available, delta.available).ok_or(
            DomainError::ZoneCounterOverflow {
                zone: self.id,
                counter: "available",
            },
        )?;
        let occupied: u32 =
            shift(self.occupied, delta.occupied).ok_or(DomainError::ZoneCounterOverflow {
                zone: self.id,
                counter: "occupied",
            })?;
        let reserved: u32 =
            shift(self.reserved, delta.reserved).ok_or(DomainError::ZoneCounterOverflow {
                zone: self.id,
                counter: "reserved",
            })?;

        self.available = available;
        self.occupied = occupied;
        self.reserved = reserved;
        Ok(())
    }
}

fn shift(value: u32, by: i32) -> Option<u32> {
    value.checked_add_signed(by)
}

/// A claim on a specific spot by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Ledger-issued identifier (e.g. `RES-00000001`).
    pub id: String,
    /// The owning user. `SYSTEM_USER_ID` for seeded holds.
    pub user_id: u64,
    /// The zone of the reserved spot.
    pub zone: ZoneId,
    /// The reserved spot.
    pub spot_id: String,
    /// The calendar day the reservation is for.
    pub date: Date,
    /// Free-form start time (e.g. `09:00`).
    pub start_time: String,
    /// Free-form end time (e.g. `17:00`).
    pub end_time: String,
    /// Free-form vehicle description or plate.
    pub vehicle: String,
    /// When the reservation entered the ledger (UTC).
    pub created_at: OffsetDateTime,
}

impl Reservation {
    /// The user id that owns holds created at seed time.
    pub const SYSTEM_USER_ID: u64 = 0;

    /// The status every ledger entry reports. Cancelled reservations are removed
    /// from the ledger rather than marked.
    pub const STATUS: SpotStatus = SpotStatus::Reserved;
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Login name. Unique within the directory.
    pub username: String,
    /// Contact email (informational, not unique).
    pub email: String,
    /// University identifier. Unique within the directory.
    pub klu_id: String,
    /// The user's type classification.
    pub user_type: UserType,
    /// When the user entered the directory (UTC).
    pub created_at: OffsetDateTime,
}

impl User {
    /// Creates a new `User`.
    #[must_use]
    pub const fn new(
        id: u64,
        username: String,
        email: String,
        klu_id: String,
        user_type: UserType,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            username,
            email,
            klu_id,
            user_type,
            created_at,
        }
    }
}
