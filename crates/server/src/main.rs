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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use campus_parking::{DemoCredentials, SeedLayout, SeedPlan};
use campus_parking_api::{
    ApiError, BcryptCredentials, CancelReservationResponse, CreateReservationRequest,
    CreateReservationResponse, CredentialStore, ListZonesResponse, LoginRequest, LoginResponse,
    ParkingService, RegisterRequest, RegisterResponse, ReservationInfo, SpotInfo,
    StatisticsResponse,
};
use campus_parking_domain::Statistics;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Campus Parking Server - HTTP server for campus parking reservations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    /// Shuffle the seeded spot layout with this seed instead of a random one
    #[arg(long, conflicts_with = "sequential")]
    seed: Option<u64>,

    /// Lay out seeded spot statuses in order instead of shuffling them
    #[arg(long)]
    sequential: bool,

    /// How passwords are checked at login
    #[arg(long, value_enum, default_value_t = AuthMode::Demo)]
    auth: AuthMode,
}

/// Credential verifier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum AuthMode {
    /// Any user with one of the shared demo passwords.
    Demo,
    /// Per-user bcrypt hashes.
    Bcrypt,
}

/// Picks the seed layout requested on the command line.
fn seed_layout(args: &Args) -> SeedLayout {
    if args.sequential {
        SeedLayout::Sequential
    } else {
        SeedLayout::Shuffled {
            seed: args.seed.unwrap_or_else(rand::random),
        }
    }
}

fn credential_store(mode: AuthMode) -> Box<dyn CredentialStore> {
    match mode {
        AuthMode::Demo => Box::new(DemoCredentials),
        AuthMode::Bcrypt => Box::new(BcryptCredentials::default()),
    }
}

/// Application state shared across handlers.
///
/// The parking service is wrapped in a Mutex so that every operation runs
/// against a consistent state and commits before the next one starts.
#[derive(Clone)]
struct AppState {
    service: Arc<Mutex<ParkingService>>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always false.
    success: bool,
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            success: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } | ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Handler for GET `/api/parking/{zone}` endpoint.
async fn handle_list_spots(
    AxumState(app_state): AxumState<AppState>,
    Path(zone): Path<String>,
) -> Result<Json<Vec<SpotInfo>>, HttpError> {
    info!(zone = %zone, "Handling list_spots request");

    let service = app_state.service.lock().await;
    let spots: Vec<SpotInfo> = service.list_spots(&zone)?;
    drop(service);

    Ok(Json(spots))
}

/// Handler for GET `/api/zones` endpoint.
async fn handle_list_zones(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListZonesResponse> {
    info!("Handling list_zones request");

    let service = app_state.service.lock().await;
    let zones: ListZonesResponse = service.list_zones();
    drop(service);

    Json(zones)
}

/// Handler for POST `/api/reservations` endpoint.
///
/// Reserves an available spot.
async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<Json<CreateReservationResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        zone = %req.zone,
        spot_id = %req.spot_id,
        user_id = req.user_id,
        "Handling create_reservation request"
    );

    let mut service = app_state.service.lock().await;
    let response: CreateReservationResponse = service.create_reservation(&req)?;
    drop(service);

    info!(
        reservation_id = %response.reservation.id,
        spot_id = %response.reservation.spot_id,
        "Successfully created reservation"
    );

    Ok(Json(response))
}

/// Handler for GET `/api/reservations/{user_id}` endpoint.
async fn handle_list_user_reservations(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ReservationInfo>>, HttpError> {
    info!(user_id = %user_id, "Handling list_user_reservations request");

    let service = app_state.service.lock().await;
    let reservations: Vec<ReservationInfo> = service.list_user_reservations(&user_id)?;
    drop(service);

    Ok(Json(reservations))
}

/// Handler for DELETE `/api/reservations/{reservation_id}` endpoint.
///
/// Cancels a reservation and releases its spot.
async fn handle_cancel_reservation(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<Json<CancelReservationResponse>, HttpError> {
    info!(reservation_id = %reservation_id, "Handling cancel_reservation request");

    let mut service = app_state.service.lock().await;
    let response: CancelReservationResponse = service.cancel_reservation(&reservation_id)?;
    drop(service);

    info!(reservation_id = %reservation_id, "Successfully cancelled reservation");

    Ok(Json(response))
}

/// Handler for POST `/api/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, HttpError> {
    let Json(req) = payload?;
    info!(username = %req.username, "Handling login request");

    let service = app_state.service.lock().await;
    let response: LoginResponse = service.login(&req)?;
    drop(service);

    info!(
        username = %response.user.username,
        user_id = response.user.id,
        "Successfully logged in"
    );

    Ok(Json(response))
}

/// Handler for POST `/api/register` endpoint.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        username = %req.username,
        klu_id = %req.klu_id,
        "Handling register request"
    );

    let mut service = app_state.service.lock().await;
    let response: RegisterResponse = service.register(&req)?;
    drop(service);

    info!(
        username = %response.user.username,
        user_id = response.user.id,
        "Successfully registered user"
    );

    Ok(Json(response))
}

/// Handler for GET `/api/statistics` endpoint.
async fn handle_statistics(
    AxumState(app_state): AxumState<AppState>,
) -> Json<StatisticsResponse> {
    info!("Handling statistics request");

    let service = app_state.service.lock().await;
    let stats: StatisticsResponse = service.statistics();
    drop(service);

    Json(stats)
}

/// Handler for GET `/api/health` endpoint.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Method and path of every route, logged at startup.
const ROUTES: [(&str, &str); 9] = [
    ("GET", "/api/parking/{zone}"),
    ("GET", "/api/zones"),
    ("POST", "/api/reservations"),
    ("GET", "/api/reservations/{user_id}"),
    ("DELETE", "/api/reservations/{reservation_id}"),
    ("POST", "/api/login"),
    ("POST", "/api/register"),
    ("GET", "/api/statistics"),
    ("GET", "/api/health"),
];

/// Builds the application router with all endpoints.
///
/// GET and DELETE on `/api/reservations/{id}` share one path; the segment is
/// a user id for GET and a reservation id for DELETE.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/parking/{zone}", get(handle_list_spots))
        .route("/api/zones", get(handle_list_zones))
        .route("/api/reservations", post(handle_create_reservation))
        .route(
            "/api/reservations/{id}",
            get(handle_list_user_reservations).delete(handle_cancel_reservation),
        )
        .route("/api/login", post(handle_login))
        .route("/api/register", post(handle_register))
        .route("/api/statistics", get(handle_statistics))
        .route("/api/health", get(handle_health))
        .with_state(app_state)
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Campus Parking Server");

    let layout: SeedLayout = seed_layout(&args);
    info!(layout = ?layout, auth = ?args.auth, "Seeding campus");

    let plan: SeedPlan = SeedPlan::campus_default().with_layout(layout);
    let service: ParkingService = ParkingService::init(plan, credential_store(args.auth))?;

    let app_state: AppState = AppState {
        service: Arc::new(Mutex::new(service)),
    };
    let service_handle: Arc<Mutex<ParkingService>> = Arc::clone(&app_state.service);

    // Build router
    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.host, args.port);
    for (method, path) in ROUTES {
        info!(method, path, "Route registered");
    }
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(service_handle) {
        Ok(service) => {
            let stats: Statistics = service.into_inner().shutdown();
            info!(
                available = stats.available,
                today_reservations = stats.today_reservations,
                "Final statistics"
            );
        }
        Err(shared) => {
            let stats: StatisticsResponse = shared.lock().await.statistics();
            warn!(
                efficiency = stats.efficiency,
                "Service still shared at shutdown; final statistics taken in place"
            );
        }
    }

    Ok(())
}
