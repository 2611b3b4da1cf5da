// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_ok, create_cancel_command, create_reserve_command, create_test_now, create_test_state,
};
use crate::{CoreError, State, TransitionResult, apply};
use crate::transition::transition_spot;
use crate::verify_consistency;
use campus_parking_domain::{DomainError, Spot, SpotStatus, Zone, ZoneId};

fn assert_all_zones_balanced(state: &State) {
    for zone in state.zones().zones() {
        assert!(zone.is_balanced(), "zone {} is unbalanced", zone.id);
    }
}

#[test]
fn test_reserve_then_cancel_restores_spots_and_zones() {
    let before: State = create_test_state();

    let reserved: State = apply_ok(&before, create_reserve_command(ZoneId::B, "B-010", 2));
    let reservation_id: String = reserved.reservations().list_by_user(2)[0].id.clone();
    let after: State = apply_ok(&reserved, create_cancel_command(&reservation_id));

    assert_eq!(after.spots(), before.spots());
    assert_eq!(after.zones(), before.zones());
    assert_eq!(after.reservations().reservations(), before.reservations().reservations());
}

#[test]
fn test_invariants_hold_across_many_operations() {
    let mut state: State = create_test_state();
    let mut reservation_ids: Vec<String> = Vec::new();

    for sequence in 1..=20 {
        let spot_id: String = ZoneId::A.spot_id(sequence);
        state = apply_ok(&state, create_reserve_command(ZoneId::A, &spot_id, 1));
        reservation_ids.push(state.reservations().reservations().last().unwrap().id.clone());
        assert_all_zones_balanced(&state);
        verify_consistency(&state).unwrap();
    }

    for reservation_id in reservation_ids.iter().step_by(2) {
        state = apply_ok(&state, create_cancel_command(reservation_id));
        assert_all_zones_balanced(&state);
        verify_consistency(&state).unwrap();
    }

    let zone: &Zone = state.zones().get_zone(ZoneId::A).unwrap();
    assert_eq!(zone.available, 50);
    assert_eq!(zone.reserved, 15);
    assert_eq!(state.reservations().list_by_user(1).len(), 10);
}

#[test]
fn test_failed_reservation_changes_nothing() {
    let state: State = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        create_reserve_command(ZoneId::D, "D-018", 1),
        create_test_now(),
    );

    assert!(result.is_err());
    assert_eq!(state, create_test_state());
    verify_consistency(&state).unwrap();
}

#[test]
fn test_transition_moves_counters_with_status() {
    let mut state: State = create_test_state();

    transition_spot(
        &mut state,
        ZoneId::A,
        "A-001",
        SpotStatus::Available,
        SpotStatus::Occupied,
    )
    .unwrap();

    let spot: &Spot = state.spots().find_spot(ZoneId::A, "A-001").unwrap();
    assert_eq!(spot.status, SpotStatus::Occupied);
    let zone: &Zone = state.zones().get_zone(ZoneId::A).unwrap();
    assert_eq!(zone.available, 59);
    assert_eq!(zone.occupied, 16);
    assert_eq!(zone.reserved, 5);
}

#[test]
fn test_transition_from_wrong_status_fails() {
    let mut state: State = create_test_state();
    let before: State = state.clone();

    let result: Result<(), DomainError> = transition_spot(
        &mut state,
        ZoneId::A,
        "A-061",
        SpotStatus::Available,
        SpotStatus::Reserved,
    );

    assert_eq!(
        result.unwrap_err(),
        DomainError::SpotStatusMismatch {
            spot_id: String::from("A-061"),
            expected: SpotStatus::Available,
            actual: SpotStatus::Occupied,
        }
    );
    assert_eq!(state, before);
}

#[test]
fn test_transition_counter_underflow_leaves_spot_unchanged() {
    let mut state: State = State::new();
    state
        .spots
        .insert_zone(ZoneId::A, vec![Spot::new(ZoneId::A, 1, SpotStatus::Available)]);
    state
        .zones
        .insert(Zone::new(ZoneId::A, String::from("Student Parking"), 0, 1, 0));

    let result: Result<(), DomainError> = transition_spot(
        &mut state,
        ZoneId::A,
        "A-001",
        SpotStatus::Available,
        SpotStatus::Reserved,
    );

    assert_eq!(
        result.unwrap_err(),
        DomainError::ZoneCounterOverflow {
            zone: ZoneId::A,
            counter: "available",
        }
    );
    let spot: &Spot = state.spots().find_spot(ZoneId::A, "A-001").unwrap();
    assert_eq!(spot.status, SpotStatus::Available);
    let zone: &Zone = state.zones().get_zone(ZoneId::A).unwrap();
    assert_eq!((zone.available, zone.occupied, zone.reserved), (0, 1, 0));
}
