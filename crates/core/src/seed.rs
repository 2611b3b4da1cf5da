// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Initial dataset construction.
//!
//! Seeding builds the spot lists first and derives every zone's counters from
//! them, then places a ledger hold on each spot seeded as reserved. The result
//! passes [`verify_consistency`] before it is returned.

use crate::apply::apply;
use crate::command::Command;
use crate::consistency::verify_consistency;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use campus_parking_domain::{Reservation, Spot, SpotStatus, UserType, Zone, ZoneId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use time::OffsetDateTime;

/// Start time recorded on seeded holds.
pub const HOLD_START_TIME: &str = "00:00";
/// End time recorded on seeded holds.
pub const HOLD_END_TIME: &str = "23:59";
/// Vehicle recorded on seeded holds.
pub const HOLD_VEHICLE: &str = "UNASSIGNED";

/// How spot statuses are placed within a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedLayout {
    /// Available spots first, then occupied, then reserved.
    Sequential,
    /// Statuses shuffled with a seeded RNG. The same seed gives the same layout.
    Shuffled {
        /// The RNG seed.
        seed: u64,
    },
}

/// The spot counts for one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSeed {
    pub zone: ZoneId,
    pub name: String,
    pub available: u32,
    pub occupied: u32,
    pub reserved: u32,
}

impl ZoneSeed {
    /// Creates a zone seed.
    #[must_use]
    pub fn new(zone: ZoneId, name: &str, available: u32, occupied: u32, reserved: u32) -> Self {
        Self {
            zone,
            name: name.to_string(),
            available,
            occupied,
            reserved,
        }
    }

    fn statuses(&self) -> Result<Vec<SpotStatus>, CoreError> {
        if self
            .available
            .checked_add(self.occupied)
            .and_then(|n| n.checked_add(self.reserved))
            .is_none()
        {
            return Err(CoreError::InvalidSeedPlan(format!(
                "zone {} capacity overflows",
                self.zone
            )));
        }

        let mut statuses: Vec<SpotStatus> = Vec::new();
        for (status, count) in [
            (SpotStatus::Available, self.available),
            (SpotStatus::Occupied, self.occupied),
            (SpotStatus::Reserved, self.reserved),
        ] {
            statuses.extend((0..count).map(|_| status));
        }
        Ok(statuses)
    }
}

/// A user registered at seed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub username: String,
    pub email: String,
    pub klu_id: String,
    pub user_type: UserType,
}

impl DemoUser {
    /// Creates a demo user.
    #[must_use]
    pub fn new(username: &str, email: &str, klu_id: &str, user_type: UserType) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            klu_id: klu_id.to_string(),
            user_type,
        }
    }
}

/// Everything needed to build an initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub zones: Vec<ZoneSeed>,
    pub layout: SeedLayout,
    pub demo_users: Vec<DemoUser>,
}

impl SeedPlan {
    /// The standard four-zone campus with two demo users.
    ///
    /// 200 spots in total, 36 of them occupied and 14 reserved.
    #[must_use]
    pub fn campus_default() -> Self {
        Self {
            zones: vec![
                ZoneSeed::new(ZoneId::A, "Student Parking", 60, 15, 5),
                ZoneSeed::new(ZoneId::B, "Faculty Parking", 45, 10, 5),
                ZoneSeed::new(ZoneId::C, "Visitor Parking", 30, 8, 2),
                ZoneSeed::new(ZoneId::D, "VIP Parking", 15, 3, 2),
            ],
            layout: SeedLayout::Sequential,
            demo_users: vec![
                DemoUser::new(
                    "vamsi_krishna",
                    "vamsi@kluniversity.in",
                    "KLU2023001",
                    UserType::Student,
                ),
                DemoUser::new(
                    "faculty_demo",
                    "faculty@kluniversity.in",
                    "FAC2023001",
                    UserType::Faculty,
                ),
            ],
        }
    }

    /// Returns the same plan with a different layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: SeedLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl State {
    /// Builds the initial state described by a seed plan.
    ///
    /// Holds and demo users are stamped with `now`. Holds are dated on
    /// `now`'s calendar day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSeedPlan` if a zone appears twice, a zone's
    /// capacity overflows, or the demo users collide.
    pub fn seeded(plan: &SeedPlan, now: OffsetDateTime) -> Result<Self, CoreError> {
        let mut state: Self = Self::new();
        let mut seen: BTreeSet<ZoneId> = BTreeSet::new();
        let mut rng: Option<StdRng> = match plan.layout {
            SeedLayout::Sequential => None,
            SeedLayout::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
        };

        for zone_seed in &plan.zones {
            if !seen.insert(zone_seed.zone) {
                return Err(CoreError::InvalidSeedPlan(format!(
                    "zone {} appears more than once",
                    zone_seed.zone
                )));
            }

            let mut statuses: Vec<SpotStatus> = zone_seed.statuses()?;
            if let Some(rng) = rng.as_mut() {
                statuses.shuffle(rng);
            }

            let spots: Vec<Spot> = (1..)
                .zip(statuses)
                .map(|(sequence, status)| Spot::new(zone_seed.zone, sequence, status))
                .collect();
            state.spots.insert_zone(zone_seed.zone, spots);

            // Counters come from the spot list, never from the plan directly
            let zone: Zone = Zone::new(
                zone_seed.zone,
                zone_seed.name.clone(),
                state
                    .spots
                    .count_by_status(zone_seed.zone, SpotStatus::Available)?,
                state
                    .spots
                    .count_by_status(zone_seed.zone, SpotStatus::Occupied)?,
                state
                    .spots
                    .count_by_status(zone_seed.zone, SpotStatus::Reserved)?,
            );
            state.zones.insert(zone);
        }

        state.place_holds(now);

        for demo_user in &plan.demo_users {
            let result: TransitionResult = apply(
                &state,
                Command::RegisterUser {
                    username: demo_user.username.clone(),
                    email: demo_user.email.clone(),
                    klu_id: demo_user.klu_id.clone(),
                    user_type: demo_user.user_type,
                },
                now,
            )
            .map_err(|err| CoreError::InvalidSeedPlan(err.to_string()))?;
            state = result.new_state;
        }

        verify_consistency(&state)?;
        Ok(state)
    }

    /// Places a system-owned hold on every spot that is reserved.
    fn place_holds(&mut self, now: OffsetDateTime) {
        let reserved: Vec<(ZoneId, String)> = self
            .spots
            .iter()
            .filter(|spot| spot.status == SpotStatus::Reserved)
            .map(|spot| (spot.zone, spot.id.clone()))
            .collect();

        for (zone, spot_id) in reserved {
            let id: String = self.reservations.issue_id();
            self.reservations.append(Reservation {
                id,
                user_id: Reservation::SYSTEM_USER_ID,
                zone,
                spot_id,
                date: now.date(),
                start_time: HOLD_START_TIME.to_string(),
                end_time: HOLD_END_TIME.to_string(),
                vehicle: HOLD_VEHICLE.to_string(),
                created_at: now,
            });
        }
    }
}
