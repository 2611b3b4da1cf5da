// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The owner of the live parking state.

use campus_parking::{SeedPlan, State, compute_statistics};
use campus_parking_domain::{Statistics, User};
use time::OffsetDateTime;
use tracing::info;

use crate::auth::{CredentialStore, DEMO_SEED_PASSWORD};
use crate::error::{ApiError, translate_core_error};
use crate::handlers::{self, ApiResult};
use crate::request_response::{
    CancelReservationResponse, CreateReservationRequest, CreateReservationResponse,
    ListZonesResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    ReservationInfo, SpotInfo, StatisticsResponse,
};

/// Owns the parking state and the credential store for one process.
///
/// Every state-changing method computes the new state first and commits it
/// only when the whole operation succeeded.
pub struct ParkingService {
    plan: SeedPlan,
    state: State,
    credentials: Box<dyn CredentialStore>,
}

impl std::fmt::Debug for ParkingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParkingService")
            .field("plan", &self.plan)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ParkingService {
    /// Seeds the state from a plan and enrolls the demo users.
    ///
    /// Demo users are enrolled with [`DEMO_SEED_PASSWORD`].
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the plan is invalid or enrollment fails.
    pub fn init(plan: SeedPlan, credentials: Box<dyn CredentialStore>) -> Result<Self, ApiError> {
        let mut service: Self = Self {
            state: State::new(),
            plan,
            credentials,
        };
        service.seed()?;

        info!(
            zones = service.state.zones().zones().count(),
            reservations = service.state.reservations().len(),
            users = service.state.users().users().len(),
            "Parking service initialized"
        );
        Ok(service)
    }

    /// Reseeds from the original plan.
    ///
    /// Reservations and registered users are discarded and the reservation
    /// id sequence restarts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the plan cannot be seeded or a demo
    /// password cannot be enrolled.
    pub fn reset(&mut self) -> Result<(), ApiError> {
        self.seed()?;
        info!("Parking service reset");
        Ok(())
    }

    /// Stops the service and returns the final statistics.
    #[must_use]
    pub fn shutdown(self) -> Statistics {
        let stats: Statistics = compute_statistics(&self.state, today());
        info!(
            total_spots = stats.total_spots,
            occupied = stats.occupied,
            reserved = stats.reserved,
            efficiency = stats.efficiency,
            "Parking service shut down"
        );
        stats
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Lists the spots of a zone.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if the zone code is unknown.
    pub fn list_spots(&self, zone: &str) -> Result<Vec<SpotInfo>, ApiError> {
        handlers::list_spots(&self.state, zone)
    }

    /// Lists every zone's counters.
    #[must_use]
    pub fn list_zones(&self) -> ListZonesResponse {
        handlers::list_zones(&self.state)
    }

    /// Reserves a spot.
    ///
    /// # Errors
    ///
    /// See [`handlers::create_reservation`].
    pub fn create_reservation(
        &mut self,
        request: &CreateReservationRequest,
    ) -> Result<CreateReservationResponse, ApiError> {
        let result: ApiResult<CreateReservationResponse> =
            handlers::create_reservation(&self.state, request, OffsetDateTime::now_utc())?;
        Ok(self.commit(result))
    }

    /// Lists a user's reservations. A non-numeric id lists nothing.
    ///
    /// # Errors
    ///
    /// See [`handlers::list_user_reservations`].
    pub fn list_user_reservations(&self, user_id: &str) -> Result<Vec<ReservationInfo>, ApiError> {
        handlers::list_user_reservations(&self.state, user_id)
    }

    /// Cancels a reservation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if the reservation does not exist.
    pub fn cancel_reservation(
        &mut self,
        reservation_id: &str,
    ) -> Result<CancelReservationResponse, ApiError> {
        let result: ApiResult<CancelReservationResponse> =
            handlers::cancel_reservation(&self.state, reservation_id, OffsetDateTime::now_utc())?;
        Ok(self.commit(result))
    }

    /// Authenticates a user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthenticationFailed` on bad credentials.
    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        handlers::login(
            &self.state,
            request,
            self.credentials.as_ref(),
            OffsetDateTime::now_utc(),
        )
    }

    /// Registers a user and enrolls their password.
    ///
    /// # Errors
    ///
    /// Returns an error if the user collides with an existing one, the user
    /// type is unknown, or the password cannot be enrolled. Nothing is
    /// committed on error.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let result: ApiResult<RegisterResponse> =
            handlers::register_user(&self.state, request, OffsetDateTime::now_utc())?;
        let user: &User = result
            .new_state
            .users()
            .find_by_id(result.response.user.id)
            .ok_or_else(|| ApiError::Internal {
                message: format!("Registered user {} is missing", result.response.user.id),
            })?;
        self.credentials.enroll(user, &request.password)?;
        Ok(self.commit(result))
    }

    /// Computes statistics for the current UTC day.
    #[must_use]
    pub fn statistics(&self) -> StatisticsResponse {
        handlers::statistics(&self.state, today())
    }

    fn commit<T>(&mut self, result: ApiResult<T>) -> T {
        self.state = result.new_state;
        result.response
    }

    /// Builds a fresh state from the plan and enrolls its users.
    fn seed(&mut self) -> Result<(), ApiError> {
        let state: State =
            State::seeded(&self.plan, OffsetDateTime::now_utc()).map_err(translate_core_error)?;

        self.credentials.clear();
        for user in state.users().users() {
            self.credentials.enroll(user, DEMO_SEED_PASSWORD)?;
        }
        self.state = state;
        Ok(())
    }
}

fn today() -> time::Date {
    OffsetDateTime::now_utc().date()
}
