// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Zone;
use serde::{Deserialize, Serialize};

/// Aggregate parking statistics across all zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Sum of zone capacities.
    pub total_spots: u64,
    /// Sum of available counters.
    pub available: u64,
    /// Sum of occupied counters.
    pub occupied: u64,
    /// Sum of reserved counters.
    pub reserved: u64,
    /// Percentage of spots not currently occupied, rounded half up.
    pub efficiency: u8,
    /// Ledger entries dated today.
    pub today_reservations: u64,
}

impl Statistics {
    /// Sums the counters of the given zones.
    ///
    /// `today_reservations` is supplied by the caller, since zones do not
    /// know about the reservation ledger.
    #[must_use]
    pub fn from_zones<'a>(zones: impl IntoIterator<Item = &'a Zone>, today_reservations: u64) -> Self {
        let mut stats: Self = Self {
            today_reservations,
            ..Self::default()
        };
        for zone in zones {
            stats.total_spots += u64::from(zone.capacity);
            stats.available += u64::from(zone.available);
            stats.occupied += u64::from(zone.occupied);
            stats.reserved += u64::from(zone.reserved);
        }
        stats.efficiency = efficiency_percent(stats.total_spots, stats.occupied);
        stats
    }
}

/// Computes the share of spots not occupied as a whole percentage.
///
/// Reserved and available spots both count as not occupied. Rounds half up
/// using integer arithmetic. An empty campus (`total == 0`) reports 0.
#[must_use]
pub fn efficiency_percent(total: u64, occupied: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let free: u64 = total.saturating_sub(occupied);
    let percent: u64 = (free * 100 + total / 2) / total;
    u8::try_from(percent.min(100)).unwrap_or(100)
}
