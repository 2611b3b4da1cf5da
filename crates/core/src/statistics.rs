// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::State;
use campus_parking_domain::Statistics;
use time::Date;

/// Aggregates the zone counters and today's reservations.
///
/// `today` is supplied by the caller so the result does not depend on the
/// clock. The service passes the current UTC date.
#[must_use]
pub fn compute_statistics(state: &State, today: Date) -> Statistics {
    Statistics::from_zones(state.zones.zones(), state.reservations.count_on(today))
}
