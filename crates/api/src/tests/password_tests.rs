// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for bcrypt credential storage.

use campus_parking::{CredentialVerifier, SeedPlan};
use campus_parking_domain::{User, UserType};

use crate::tests::helpers::{
    TEST_COST, create_test_bcrypt_service, create_test_now, create_test_register_request,
};
use crate::{
    ApiError, BcryptCredentials, CredentialError, CredentialStore, DEMO_SEED_PASSWORD,
    LoginRequest, ParkingService,
};

fn create_test_user(id: u64) -> User {
    User::new(
        id,
        format!("user{id}"),
        format!("user{id}@kluniversity.in"),
        format!("KLU{id:07}"),
        UserType::Student,
        create_test_now(),
    )
}

fn create_login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: String::from(username),
        password: String::from(password),
    }
}

#[test]
fn test_enrolled_password_verifies() {
    let mut store: BcryptCredentials = BcryptCredentials::new(TEST_COST);
    let user: User = create_test_user(7);

    store.enroll(&user, "correct horse").unwrap();

    assert!(store.is_enrolled(7));
    assert!(store.verify(&user, "correct horse"));
    assert!(!store.verify(&user, "battery staple"));
}

#[test]
fn test_unenrolled_user_never_verifies() {
    let store: BcryptCredentials = BcryptCredentials::new(TEST_COST);
    let user: User = create_test_user(8);

    assert!(!store.is_enrolled(8));
    assert!(!store.verify(&user, ""));
    assert!(!store.verify(&user, DEMO_SEED_PASSWORD));
}

#[test]
fn test_hashes_are_per_user() {
    let mut store: BcryptCredentials = BcryptCredentials::new(TEST_COST);
    let first: User = create_test_user(1);
    let second: User = create_test_user(2);

    store.enroll(&first, "first-pass").unwrap();
    store.enroll(&second, "second-pass").unwrap();

    assert!(store.verify(&first, "first-pass"));
    assert!(!store.verify(&first, "second-pass"));
    assert!(store.verify(&second, "second-pass"));
}

#[test]
fn test_clear_forgets_every_hash() {
    let mut store: BcryptCredentials = BcryptCredentials::new(TEST_COST);
    let user: User = create_test_user(3);
    store.enroll(&user, "pass").unwrap();

    store.clear();

    assert!(!store.is_enrolled(3));
    assert!(!store.verify(&user, "pass"));
}

#[test]
fn test_cost_below_minimum_fails_to_enroll() {
    let mut store: BcryptCredentials = BcryptCredentials::new(TEST_COST - 1);

    let result: Result<(), CredentialError> = store.enroll(&create_test_user(4), "pass");

    assert!(result.is_err());
    assert!(!store.is_enrolled(4));
}

#[test]
fn test_bcrypt_service_demo_users_use_seed_password() {
    let service: ParkingService = create_test_bcrypt_service();

    assert!(
        service
            .login(&create_login_request("vamsi_krishna", DEMO_SEED_PASSWORD))
            .is_ok()
    );
    // The second shared demo password only applies to the demo verifier
    assert!(
        service
            .login(&create_login_request("vamsi_krishna", "password"))
            .is_err()
    );
}

#[test]
fn test_bcrypt_service_registered_user_logs_in_with_own_password() {
    let mut service: ParkingService = create_test_bcrypt_service();
    service
        .register(&create_test_register_request("bcrypt_user", "KLU2024200"))
        .unwrap();

    assert!(
        service
            .login(&create_login_request("bcrypt_user", "s3cret-pass"))
            .is_ok()
    );
    let err: ApiError = service
        .login(&create_login_request("bcrypt_user", DEMO_SEED_PASSWORD))
        .unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_service_init_fails_when_demo_enrollment_fails() {
    let result: Result<ParkingService, ApiError> = ParkingService::init(
        SeedPlan::campus_default(),
        Box::new(BcryptCredentials::new(TEST_COST - 1)),
    );

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}
