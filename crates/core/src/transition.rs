// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Spot status transitions.
//!
//! A spot's status and its zone's counters only ever change together, through
//! [`transition_spot`]. No other code path writes a spot status.

use crate::state::State;
use campus_parking_domain::{DomainError, Spot, SpotStatus, ZoneDelta, ZoneId};

/// Moves one spot from `from` to `to` and adjusts its zone's counters to match.
///
/// The zone counters are adjusted first and the spot status written second.
/// If the status write fails the delta is reverted, so the registry and the
/// zone store never disagree.
///
/// # Errors
///
/// Returns an error if:
/// - The zone or spot does not exist
/// - The spot is not currently in `from`
/// - A zone counter would leave its valid range
pub(crate) fn transition_spot(
    state: &mut State,
    zone: ZoneId,
    spot_id: &str,
    from: SpotStatus,
    to: SpotStatus,
) -> Result<(), DomainError> {
    let spot: &Spot = state.spots.find_spot(zone, spot_id)?;
    if spot.status != from {
        return Err(DomainError::SpotStatusMismatch {
            spot_id: spot_id.to_string(),
            expected: from,
            actual: spot.status,
        });
    }

    state.zones.adjust(zone, ZoneDelta::between(from, to))?;
    if let Err(err) = state.spots.set_status(zone, spot_id, to) {
        state.zones.adjust(zone, ZoneDelta::between(to, from))?;
        return Err(err);
    }
    Ok(())
}

/// Releases the zone counters of a reservation whose spot is gone.
///
/// Spots are never removed by any command, so this only matters for states
/// assembled by hand. A missing zone is left alone.
pub(crate) fn release_orphaned_hold(state: &mut State, zone: ZoneId) -> Result<(), DomainError> {
    match state.zones.adjust(
        zone,
        ZoneDelta::between(SpotStatus::Reserved, SpotStatus::Available),
    ) {
        Ok(()) | Err(DomainError::ZoneNotFound(_)) => Ok(()),
        Err(err) => Err(err),
    }
}
