// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod consistency;
mod credentials;
mod error;
mod seed;
mod state;
mod statistics;
mod transition;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use consistency::verify_consistency;
pub use credentials::{CredentialVerifier, DemoCredentials};
pub use error::CoreError;
pub use seed::{
    DemoUser, HOLD_END_TIME, HOLD_START_TIME, HOLD_VEHICLE, SeedLayout, SeedPlan, ZoneSeed,
};
pub use state::{
    Outcome, ReservationLedger, SpotRegistry, State, TransitionResult, UserDirectory, ZoneStore,
};
pub use statistics::compute_statistics;
