//! MindCare API server.

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mindcare::{
    adapters::{
        http::{api_router, ApiState},
        memory::starter_stores,
        postgres, InMemoryKeyValueStore, PostgresAchievementCatalog, PostgresTherapyRepository,
        PostgresUserAchievementRepository, RedisKeyValueStore,
    },
    config::{AppConfig, ServerConfig},
    ports::KeyValueStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    init_tracing(&config.server);

    config.validate().context("validating configuration")?;

    info!(
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        activity_cache = ?config.storage.activity_cache,
        "Starting MindCare API"
    );

    let state = build_state(&config).await?;
    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| server.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn build_state(config: &AppConfig) -> anyhow::Result<ApiState> {
    let activity_logs: Arc<dyn KeyValueStore> = if config.storage.uses_redis() {
        let store = tokio::time::timeout(
            config.redis.timeout(),
            RedisKeyValueStore::connect(&config.redis.url),
        )
        .await
        .context("connecting to Redis timed out")?
        .context("connecting to Redis")?;
        info!("Redis connected");
        Arc::new(store)
    } else {
        warn!("Activity logs are held in memory and start empty");
        Arc::new(InMemoryKeyValueStore::new())
    };

    if config.storage.uses_postgres() {
        let pool = postgres::connect(&config.database)
            .await
            .context("connecting to PostgreSQL")?;
        info!("PostgreSQL connected");

        if config.database.run_migrations {
            postgres::run_migrations(&pool)
                .await
                .context("running migrations")?;
            info!("Migrations applied");
        }

        return Ok(ApiState {
            achievement_catalog: Arc::new(PostgresAchievementCatalog::new(pool.clone())),
            user_achievements: Arc::new(PostgresUserAchievementRepository::new(pool.clone())),
            therapies: Arc::new(PostgresTherapyRepository::new(pool)),
            activity_logs,
        });
    }

    let (achievements, therapies) = starter_stores(config.storage.seed_catalog);
    let achievements = Arc::new(achievements);
    Ok(ApiState {
        achievement_catalog: achievements.clone(),
        user_achievements: achievements,
        therapies: Arc::new(therapies),
        activity_logs,
    })
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
