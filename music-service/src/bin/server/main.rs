use std::sync::Arc;

use anyhow::Context;
use auth::TokenManager;
use auth::TokenSettings;
use chrono::Duration;
use music_service::config::Config;
use music_service::domain::album::service::AlbumService;
use music_service::domain::authentication::service::AuthenticationService;
use music_service::domain::collaboration::service::CollaborationService;
use music_service::domain::playlist::service::PlaylistService;
use music_service::domain::song::service::SongService;
use music_service::domain::user::service::UserService;
use music_service::inbound::http::router::create_router;
use music_service::inbound::http::router::AppState;
use music_service::outbound::repositories::PostgresAlbumRepository;
use music_service::outbound::repositories::PostgresCollaborationRepository;
use music_service::outbound::repositories::PostgresPlaylistRepository;
use music_service::outbound::repositories::PostgresRefreshTokenRepository;
use music_service::outbound::repositories::PostgresSongRepository;
use music_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "music_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "music-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        access_token_age = config.tokens.access_token_age,
        refresh_token_age = config.tokens.refresh_token_age,
        cors_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    let token_manager = Arc::new(
        TokenManager::new(
            TokenSettings {
                secret: config.tokens.access_token_key.as_bytes(),
                max_age: Duration::seconds(config.tokens.access_token_age),
            },
            TokenSettings {
                secret: config.tokens.refresh_token_key.as_bytes(),
                max_age: Duration::seconds(config.tokens.refresh_token_age),
            },
        )
        .context("Invalid token configuration")?,
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool.clone()));
    let album_repository = Arc::new(PostgresAlbumRepository::new(pg_pool.clone()));
    let song_repository = Arc::new(PostgresSongRepository::new(pg_pool.clone()));
    let playlist_repository = Arc::new(PostgresPlaylistRepository::new(pg_pool.clone()));
    let collaboration_repository = Arc::new(PostgresCollaborationRepository::new(pg_pool));

    let state = AppState {
        album_service: Arc::new(AlbumService::new(album_repository)),
        song_service: Arc::new(SongService::new(song_repository)),
        user_service: Arc::new(UserService::new(Arc::clone(&user_repository))),
        authentication_service: Arc::new(AuthenticationService::new(
            Arc::clone(&user_repository),
            refresh_token_repository,
            Arc::clone(&token_manager),
        )),
        playlist_service: Arc::new(PlaylistService::new(
            Arc::clone(&playlist_repository),
            Arc::clone(&collaboration_repository),
        )),
        collaboration_service: Arc::new(CollaborationService::new(
            collaboration_repository,
            playlist_repository,
            user_repository,
        )),
        token_manager,
    };

    let http_address = config.server.address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.cors);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
