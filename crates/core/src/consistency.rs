// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-structure invariant checks.
//!
//! These checks read the whole state and are meant for seeding, tests, and
//! diagnostics rather than the per-request path.

use crate::error::CoreError;
use crate::state::State;
use campus_parking_domain::{Spot, SpotStatus, Zone};

/// Verifies that spots, zone counters, and the ledger agree.
///
/// # Checks
///
/// 1. Every zone's counters sum to its capacity
/// 2. Every zone's counters equal the tallies of its spot statuses
/// 3. Every reserved spot is referenced by exactly one reservation
/// 4. Every reservation references an existing spot that is reserved
///
/// # Errors
///
/// Returns `CoreError::InvariantViolation` describing the first disagreement.
pub fn verify_consistency(state: &State) -> Result<(), CoreError> {
    for zone in state.zones.zones() {
        verify_zone_counters(state, zone)?;
    }

    for spot in state.spots.iter() {
        let references: usize = state.reservations.references(spot.zone, &spot.id);
        let expected: usize = usize::from(spot.status == SpotStatus::Reserved);
        if references != expected {
            return Err(CoreError::InvariantViolation {
                zone: spot.zone,
                detail: format!(
                    "spot {} is {} but {references} reservations reference it",
                    spot.id, spot.status
                ),
            });
        }
    }

    for reservation in state.reservations.reservations() {
        let spot: Option<&Spot> = state
            .spots
            .find_spot(reservation.zone, &reservation.spot_id)
            .ok();
        if spot.is_none_or(|s| s.status != SpotStatus::Reserved) {
            return Err(CoreError::InvariantViolation {
                zone: reservation.zone,
                detail: format!(
                    "reservation {} references spot {} which is not reserved",
                    reservation.id, reservation.spot_id
                ),
            });
        }
    }

    Ok(())
}

fn verify_zone_counters(state: &State, zone: &Zone) -> Result<(), CoreError> {
    if !zone.is_balanced() {
        return Err(CoreError::InvariantViolation {
            zone: zone.id,
            detail: format!(
                "available {} + occupied {} + reserved {} != capacity {}",
                zone.available, zone.occupied, zone.reserved, zone.capacity
            ),
        });
    }

    for status in [
        SpotStatus::Available,
        SpotStatus::Occupied,
        SpotStatus::Reserved,
    ] {
        let tally: u32 = state
            .spots
            .count_by_status(zone.id, status)
            .map_err(|err| CoreError::InvariantViolation {
                zone: zone.id,
                detail: err.to_string(),
            })?;
        if tally != zone.count(status) {
            return Err(CoreError::InvariantViolation {
                zone: zone.id,
                detail: format!(
                    "{status} counter is {} but {tally} spots are {status}",
                    zone.count(status)
                ),
            });
        }
    }

    Ok(())
}
