// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::credentials::CredentialVerifier;
use campus_parking_domain::{
    DomainError, Reservation, Spot, SpotStatus, User, Zone, ZoneDelta, ZoneId,
};
use std::collections::BTreeMap;
use time::Date;

/// Per-zone spot records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpotRegistry {
    spots: BTreeMap<ZoneId, Vec<Spot>>,
}

impl SpotRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            spots: BTreeMap::new(),
        }
    }

    /// Returns the zones that have spots registered, in zone order.
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.spots.keys().copied()
    }

    /// Returns every spot in every zone.
    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.spots.values().flatten()
    }

    /// Lists the spots of a zone in sequence order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZoneNotFound` if the zone has no spots registered.
    pub fn list_spots(&self, zone: ZoneId) -> Result<&[Spot], DomainError> {
        self.spots
            .get(&zone)
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::ZoneNotFound(zone.to_string()))
    }

    /// Finds a spot by zone and identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZoneNotFound` if the zone is unknown, or
    /// `DomainError::SpotNotFound` if the zone has no such spot.
    pub fn find_spot(&self, zone: ZoneId, spot_id: &str) -> Result<&Spot, DomainError> {
        self.list_spots(zone)?
            .iter()
            .find(|spot| spot.id == spot_id)
            .ok_or_else(|| DomainError::SpotNotFound {
                zone,
                spot_id: spot_id.to_string(),
            })
    }

    /// Counts the spots of a zone that have the given status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZoneNotFound` if the zone has no spots registered.
    pub fn count_by_status(&self, zone: ZoneId, status: SpotStatus) -> Result<u32, DomainError> {
        let count: usize = self
            .list_spots(zone)?
            .iter()
            .filter(|spot| spot.status == status)
            .count();
        u32::try_from(count).map_err(|_| DomainError::ZoneCounterOverflow {
            zone,
            counter: status.as_str(),
        })
    }

    pub(crate) fn insert_zone(&mut self, zone: ZoneId, spots: Vec<Spot>) {
        self.spots.insert(zone, spots);
    }

    /// Sets a spot's status, returning the previous one.
    ///
    /// Only the spot transition calls this; every other caller would break the
    /// pairing with the zone counters.
    pub(crate) fn set_status(
        &mut self,
        zone: ZoneId,
        spot_id: &str,
        status: SpotStatus,
    ) -> Result<SpotStatus, DomainError> {
        let spot: &mut Spot = self
            .spots
            .get_mut(&zone)
            .ok_or_else(|| DomainError::ZoneNotFound(zone.to_string()))?
            .iter_mut()
            .find(|spot| spot.id == spot_id)
            .ok_or_else(|| DomainError::SpotNotFound {
                zone,
                spot_id: spot_id.to_string(),
            })?;
        Ok(std::mem::replace(&mut spot.status, status))
    }
}

/// Per-zone aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneStore {
    zones: BTreeMap<ZoneId, Zone>,
}

impl ZoneStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zones: BTreeMap::new(),
        }
    }

    /// Returns a zone's counters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZoneNotFound` if the zone is not in the store.
    pub fn get_zone(&self, zone: ZoneId) -> Result<&Zone, DomainError> {
        self.zones
            .get(&zone)
            .ok_or_else(|| DomainError::ZoneNotFound(zone.to_string()))
    }

    /// Returns all zones in zone order.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    pub(crate) fn insert(&mut self, zone: Zone) {
        self.zones.insert(zone.id, zone);
    }

    /// Applies a counter delta to one zone as a single step.
    pub(crate) fn adjust(&mut self, zone: ZoneId, delta: ZoneDelta) -> Result<(), DomainError> {
        self.zones
            .get_mut(&zone)
            .ok_or_else(|| DomainError::ZoneNotFound(zone.to_string()))?
            .apply_delta(delta)
    }
}

/// Active reservations, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationLedger {
    reservations: Vec<Reservation>,
    /// The sequence number the next issued id will carry.
    next_sequence: u64,
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationLedger {
    /// Prefix of every reservation id.
    pub const ID_PREFIX: &'static str = "RES-";

    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reservations: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Returns every active reservation.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Finds a reservation by id.
    #[must_use]
    pub fn find(&self, reservation_id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == reservation_id)
    }

    /// Lists the reservations of one user in creation order.
    #[must_use]
    pub fn list_by_user(&self, user_id: u64) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    /// Counts reservations dated on the given day.
    #[must_use]
    pub fn count_on(&self, date: Date) -> u64 {
        let count: usize = self.reservations.iter().filter(|r| r.date == date).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// Counts reservations that reference the given spot.
    #[must_use]
    pub fn references(&self, zone: ZoneId, spot_id: &str) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.zone == zone && r.spot_id == spot_id)
            .count()
    }

    /// Number of active reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns true if the ledger holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Issues the next reservation id. Ids are never reissued.
    pub(crate) fn issue_id(&mut self) -> String {
        let id: String = format!("{}{:08}", Self::ID_PREFIX, self.next_sequence);
        self.next_sequence += 1;
        id
    }

    pub(crate) fn append(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub(crate) fn remove(&mut self, reservation_id: &str) -> Option<Reservation> {
        let index: usize = self
            .reservations
            .iter()
            .position(|r| r.id == reservation_id)?;
        Some(self.reservations.remove(index))
    }
}

/// Registered users, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Returns every registered user.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds a user by login name.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Finds a user by university id.
    #[must_use]
    pub fn find_by_klu_id(&self, klu_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.klu_id == klu_id)
    }

    /// Finds a user by numeric id.
    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Returns the id the next registered user will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    /// Checks a username and password against the directory.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCredentials` if the user does not exist or
    /// the verifier rejects the password.
    pub fn authenticate<V: CredentialVerifier + ?Sized>(
        &self,
        username: &str,
        password: &str,
        verifier: &V,
    ) -> Result<&User, DomainError> {
        self.find_by_username(username)
            .filter(|user| verifier.verify(user, password))
            .ok_or(DomainError::InvalidCredentials)
    }

    pub(crate) fn append(&mut self, user: User) {
        self.users.push(user);
    }
}

/// The complete in-memory parking dataset.
///
/// All mutation goes through [`crate::apply`], which works on a clone and
/// returns the new state, so a failed command never leaves partial changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    pub(crate) spots: SpotRegistry,
    pub(crate) zones: ZoneStore,
    pub(crate) reservations: ReservationLedger,
    pub(crate) users: UserDirectory,
}

impl State {
    /// Creates an empty state with no zones, spots, reservations, or users.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            spots: SpotRegistry::new(),
            zones: ZoneStore::new(),
            reservations: ReservationLedger::new(),
            users: UserDirectory::new(),
        }
    }

    /// The spot registry.
    #[must_use]
    pub const fn spots(&self) -> &SpotRegistry {
        &self.spots
    }

    /// The zone aggregate store.
    #[must_use]
    pub const fn zones(&self) -> &ZoneStore {
        &self.zones
    }

    /// The reservation ledger.
    #[must_use]
    pub const fn reservations(&self) -> &ReservationLedger {
        &self.reservations
    }

    /// The user directory.
    #[must_use]
    pub const fn users(&self) -> &UserDirectory {
        &self.users
    }
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A spot was reserved.
    Reserved(Reservation),
    /// A reservation was cancelled and its spot released.
    Cancelled(Reservation),
    /// A user was added to the directory.
    Registered(User),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition produced.
    pub outcome: Outcome,
}
