// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, State, TransitionResult};
use crate::transition::{release_orphaned_hold, transition_spot};
use campus_parking_domain::{
    DomainError, Reservation, SpotStatus, User, validate_spot_reservable, validate_user_unique,
};
use time::OffsetDateTime;

/// Applies a command to the current state, producing a new state and an outcome.
///
/// The input state is never modified. The caller commits `new_state` only
/// when the whole command succeeded.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `now` - The current time, stamped on created records
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what was produced
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The zone, spot, or reservation does not exist
/// - The spot is not available for reservation
/// - The username or university id is already registered
pub fn apply(
    state: &State,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ReserveSpot {
            zone,
            spot_id,
            user_id,
            date,
            start_time,
            end_time,
            vehicle,
        } => {
            // Validate the spot exists and is free before cloning anything
            validate_spot_reservable(state.spots.find_spot(zone, &spot_id)?)?;

            let mut new_state: State = state.clone();
            let id: String = new_state.reservations.issue_id();
            transition_spot(
                &mut new_state,
                zone,
                &spot_id,
                SpotStatus::Available,
                SpotStatus::Reserved,
            )?;

            let reservation: Reservation = Reservation {
                id,
                user_id,
                zone,
                spot_id,
                date,
                start_time,
                end_time,
                vehicle,
                created_at: now,
            };
            new_state.reservations.append(reservation.clone());

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Reserved(reservation),
            })
        }
        Command::CancelReservation { reservation_id } => {
            let reservation: Reservation = state
                .reservations
                .find(&reservation_id)
                .cloned()
                .ok_or_else(|| DomainError::ReservationNotFound(reservation_id.clone()))?;

            let mut new_state: State = state.clone();
            // Counters first, then the spot; both inside the transition
            if state
                .spots
                .find_spot(reservation.zone, &reservation.spot_id)
                .is_ok()
            {
                transition_spot(
                    &mut new_state,
                    reservation.zone,
                    &reservation.spot_id,
                    SpotStatus::Reserved,
                    SpotStatus::Available,
                )?;
            } else {
                release_orphaned_hold(&mut new_state, reservation.zone)?;
            }
            new_state.reservations.remove(&reservation_id);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Cancelled(reservation),
            })
        }
        Command::RegisterUser {
            username,
            email,
            klu_id,
            user_type,
        } => {
            validate_user_unique(&username, &klu_id, state.users.users())?;

            let user: User = User::new(
                state.users.next_id(),
                username,
                email,
                klu_id,
                user_type,
                now,
            );
            let mut new_state: State = state.clone();
            new_state.users.append(user.clone());

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Registered(user),
            })
        }
    }
}
