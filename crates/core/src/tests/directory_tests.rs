// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{apply_ok, create_reserve_command, create_test_state};
use crate::{CredentialVerifier, DemoCredentials, State};
use campus_parking_domain::{DomainError, Reservation, User, ZoneId};

/// Accepts exactly one password per username.
struct FixedPassword;

impl CredentialVerifier for FixedPassword {
    fn verify(&self, user: &User, password: &str) -> bool {
        password == format!("{}-secret", user.username)
    }
}

#[test]
fn test_demo_passwords_authenticate() {
    let state: State = create_test_state();

    for password in DemoCredentials::PASSWORDS {
        let user: &User = state
            .users()
            .authenticate("vamsi_krishna", password, &DemoCredentials)
            .unwrap();
        assert_eq!(user.klu_id, "KLU2023001");
    }
}

#[test]
fn test_wrong_password_is_rejected() {
    let state: State = create_test_state();

    let result: Result<&User, DomainError> =
        state
            .users()
            .authenticate("vamsi_krishna", "hunter2", &DemoCredentials);

    assert_eq!(result.unwrap_err(), DomainError::InvalidCredentials);
}

#[test]
fn test_unknown_user_is_indistinguishable_from_wrong_password() {
    let state: State = create_test_state();

    let unknown: Result<&User, DomainError> =
        state.users().authenticate("nobody", "demo123", &DemoCredentials);
    let wrong: Result<&User, DomainError> =
        state
            .users()
            .authenticate("faculty_demo", "nope", &DemoCredentials);

    assert_eq!(unknown.unwrap_err(), wrong.unwrap_err());
}

#[test]
fn test_custom_verifier_is_consulted() {
    let state: State = create_test_state();

    assert!(
        state
            .users()
            .authenticate("faculty_demo", "faculty_demo-secret", &FixedPassword)
            .is_ok()
    );
    assert!(
        state
            .users()
            .authenticate("faculty_demo", "demo123", &FixedPassword)
            .is_err()
    );
}

#[test]
fn test_directory_lookups() {
    let state: State = create_test_state();

    assert_eq!(
        state.users().find_by_klu_id("FAC2023001").unwrap().username,
        "faculty_demo"
    );
    assert_eq!(state.users().find_by_id(1).unwrap().username, "vamsi_krishna");
    assert!(state.users().find_by_id(99).is_none());
    assert_eq!(state.users().next_id(), 3);
    assert_eq!(State::new().users().next_id(), 1);
}

#[test]
fn test_list_by_user_preserves_creation_order() {
    let mut state: State = create_test_state();
    for spot_id in ["A-010", "A-003", "A-007"] {
        state = apply_ok(&state, create_reserve_command(ZoneId::A, spot_id, 1));
    }
    state = apply_ok(&state, create_reserve_command(ZoneId::A, "A-004", 2));

    let mine: Vec<&Reservation> = state.reservations().list_by_user(1);

    let spot_ids: Vec<&str> = mine.iter().map(|r| r.spot_id.as_str()).collect();
    assert_eq!(spot_ids, vec!["A-010", "A-003", "A-007"]);
    assert!(state.reservations().list_by_user(42).is_empty());
}
