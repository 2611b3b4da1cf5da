// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_date, create_test_now, create_test_state};
use crate::{
    CoreError, DemoUser, HOLD_VEHICLE, SeedLayout, SeedPlan, State, ZoneSeed, verify_consistency,
};
use campus_parking_domain::{Reservation, Spot, SpotStatus, SpotType, User, UserType, Zone, ZoneId};

#[test]
fn test_default_plan_zone_counters() {
    let state: State = create_test_state();

    let expected: [(ZoneId, &str, u32, u32, u32, u32); 4] = [
        (ZoneId::A, "Student Parking", 80, 60, 15, 5),
        (ZoneId::B, "Faculty Parking", 60, 45, 10, 5),
        (ZoneId::C, "Visitor Parking", 40, 30, 8, 2),
        (ZoneId::D, "VIP Parking", 20, 15, 3, 2),
    ];
    for (id, name, capacity, available, occupied, reserved) in expected {
        let zone: &Zone = state.zones().get_zone(id).unwrap();
        assert_eq!(zone.name, name);
        assert_eq!(zone.capacity, capacity);
        assert_eq!(zone.available, available);
        assert_eq!(zone.occupied, occupied);
        assert_eq!(zone.reserved, reserved);
    }
}

#[test]
fn test_zones_iterate_in_order() {
    let state: State = create_test_state();

    let ids: Vec<ZoneId> = state.zones().zones().map(|zone| zone.id).collect();

    assert_eq!(ids, ZoneId::ALL.to_vec());
}

#[test]
fn test_sequential_layout_spot_ids_and_statuses() {
    let state: State = create_test_state();

    let spots: &[Spot] = state.spots().list_spots(ZoneId::A).unwrap();
    assert_eq!(spots.len(), 80);
    assert_eq!(spots[0].id, "A-001");
    assert_eq!(spots[0].status, SpotStatus::Available);
    assert_eq!(spots[59].id, "A-060");
    assert_eq!(spots[59].status, SpotStatus::Available);
    assert_eq!(spots[60].status, SpotStatus::Occupied);
    assert_eq!(spots[79].id, "A-080");
    assert_eq!(spots[79].status, SpotStatus::Reserved);
    assert!(spots.iter().all(|spot| spot.spot_type == SpotType::Student));

    let vip: &[Spot] = state.spots().list_spots(ZoneId::D).unwrap();
    assert!(vip.iter().all(|spot| spot.spot_type == SpotType::Vip));
}

#[test]
fn test_seeded_reserved_spots_get_system_holds() {
    let state: State = create_test_state();

    let holds: &[Reservation] = state.reservations().reservations();
    assert_eq!(holds.len(), 14);
    assert_eq!(holds[0].id, "RES-00000001");
    assert_eq!(holds[0].spot_id, "A-076");
    assert_eq!(holds[13].id, "RES-00000014");
    assert_eq!(holds[13].spot_id, "D-020");
    for hold in holds {
        assert_eq!(hold.user_id, Reservation::SYSTEM_USER_ID);
        assert_eq!(hold.vehicle, HOLD_VEHICLE);
        assert_eq!(hold.date, create_test_date());
        assert_eq!(hold.created_at, create_test_now());
    }
}

#[test]
fn test_demo_users_are_registered() {
    let state: State = create_test_state();

    let student: &User = state.users().find_by_username("vamsi_krishna").unwrap();
    assert_eq!(student.id, 1);
    assert_eq!(student.email, "vamsi@kluniversity.in");
    assert_eq!(student.klu_id, "KLU2023001");
    assert_eq!(student.user_type, UserType::Student);

    let faculty: &User = state.users().find_by_username("faculty_demo").unwrap();
    assert_eq!(faculty.id, 2);
    assert_eq!(faculty.user_type, UserType::Faculty);
}

#[test]
fn test_shuffled_layout_is_reproducible() {
    let plan: SeedPlan =
        SeedPlan::campus_default().with_layout(SeedLayout::Shuffled { seed: 42 });

    let first: State = State::seeded(&plan, create_test_now()).unwrap();
    let second: State = State::seeded(&plan, create_test_now()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_shuffled_layout_keeps_counters() {
    let plan: SeedPlan =
        SeedPlan::campus_default().with_layout(SeedLayout::Shuffled { seed: 7 });

    let shuffled: State = State::seeded(&plan, create_test_now()).unwrap();

    assert_eq!(shuffled.zones(), create_test_state().zones());
    assert_eq!(shuffled.reservations().len(), 14);
    verify_consistency(&shuffled).unwrap();
}

#[test]
fn test_different_seeds_give_different_layouts() {
    let first: State = State::seeded(
        &SeedPlan::campus_default().with_layout(SeedLayout::Shuffled { seed: 1 }),
        create_test_now(),
    )
    .unwrap();
    let second: State = State::seeded(
        &SeedPlan::campus_default().with_layout(SeedLayout::Shuffled { seed: 2 }),
        create_test_now(),
    )
    .unwrap();

    assert_ne!(first.spots(), second.spots());
}

#[test]
fn test_empty_plan_gives_empty_state() {
    let plan: SeedPlan = SeedPlan {
        zones: Vec::new(),
        layout: SeedLayout::Sequential,
        demo_users: Vec::new(),
    };

    let state: State = State::seeded(&plan, create_test_now()).unwrap();

    assert_eq!(state, State::new());
}

#[test]
fn test_zone_with_no_spots_is_seeded_empty() {
    let plan: SeedPlan = SeedPlan {
        zones: vec![ZoneSeed::new(ZoneId::C, "Visitor Parking", 0, 0, 0)],
        layout: SeedLayout::Sequential,
        demo_users: Vec::new(),
    };

    let state: State = State::seeded(&plan, create_test_now()).unwrap();

    assert!(state.spots().list_spots(ZoneId::C).unwrap().is_empty());
    assert_eq!(state.zones().get_zone(ZoneId::C).unwrap().capacity, 0);
}

#[test]
fn test_duplicate_zone_is_rejected() {
    let plan: SeedPlan = SeedPlan {
        zones: vec![
            ZoneSeed::new(ZoneId::A, "Student Parking", 1, 0, 0),
            ZoneSeed::new(ZoneId::A, "Student Parking Annex", 1, 0, 0),
        ],
        layout: SeedLayout::Sequential,
        demo_users: Vec::new(),
    };

    let result: Result<State, CoreError> = State::seeded(&plan, create_test_now());

    assert!(matches!(result, Err(CoreError::InvalidSeedPlan(_))));
}

#[test]
fn test_overflowing_capacity_is_rejected() {
    let plan: SeedPlan = SeedPlan {
        zones: vec![ZoneSeed::new(ZoneId::B, "Faculty Parking", u32::MAX, 1, 0)],
        layout: SeedLayout::Sequential,
        demo_users: Vec::new(),
    };

    let result: Result<State, CoreError> = State::seeded(&plan, create_test_now());

    assert!(matches!(result, Err(CoreError::InvalidSeedPlan(_))));
}

#[test]
fn test_colliding_demo_users_are_rejected() {
    let mut plan: SeedPlan = SeedPlan::campus_default();
    plan.demo_users.push(DemoUser::new(
        "copycat",
        "copy@kluniversity.in",
        "KLU2023001",
        UserType::Visitor,
    ));

    let result: Result<State, CoreError> = State::seeded(&plan, create_test_now());

    let Err(CoreError::InvalidSeedPlan(message)) = result else {
        panic!("expected an invalid seed plan");
    };
    assert!(message.contains("KLU2023001"));
}
