use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use storage::Database;
use tower_http::cors::CorsLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod session;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::register,
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::me,
        features::teams::handlers::list_teams,
        features::ballots::handlers::submit_ballot,
        features::ballots::handlers::get_ballot,
        features::ballots::handlers::get_my_ballots,
        features::consensus::handlers::get_week_consensus,
        features::consensus::handlers::get_overall_consensus,
        features::consensus::handlers::get_week_ballots,
        features::consensus::handlers::get_vote_statistics,
    ),
    components(
        schemas(
            storage::dto::auth::RegisterRequest,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::UserResponse,
            storage::dto::ballot::SubmitBallotRequest,
            storage::dto::ballot::BallotResponse,
            storage::dto::ballot::UserBallotsResponse,
            storage::dto::consensus::ConsensusEntry,
            storage::dto::consensus::RankedTeam,
            storage::dto::consensus::VoterBallot,
            storage::dto::consensus::WeekBallotsResponse,
            storage::dto::stats::WeekVoteStats,
            storage::dto::stats::VoteStatisticsResponse,
            storage::models::Team,
        )
    ),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "teams", description = "Team roster endpoints"),
        (name = "ballots", description = "Per-user weekly ballot endpoints"),
        (name = "consensus", description = "Aggregate ranking and statistics endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new("id"),
                    ),
                ),
            )
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting ranked-ballot poll API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(cors_origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    // In-memory sessions: logins do not survive a restart, which is
    // acceptable for this deployment size.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_http_only(true)
        .with_same_site(SameSite::Lax);

    let app = Router::new()
        .nest("/api/auth", features::auth::routes::routes())
        .nest("/api/teams", features::teams::routes::routes())
        .nest("/api/ballots", features::ballots::routes::routes())
        .nest("/api/consensus", features::consensus::routes::routes())
        .route(
            "/api/stats",
            get(features::consensus::handlers::get_vote_statistics),
        )
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(session_layer)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listen address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
