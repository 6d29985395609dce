use std::sync::Arc;
use std::time::Duration;

use auth::TokenManager;
use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::albums;
use super::handlers::authentications;
use super::handlers::collaborations;
use super::handlers::playlists;
use super::handlers::songs;
use super::handlers::users;
use super::handlers::ApiError;
use super::middleware::authenticate as auth_middleware;
use crate::config::CorsConfig;
use crate::domain::album::ports::AlbumServicePort;
use crate::domain::authentication::ports::AuthenticationServicePort;
use crate::domain::collaboration::ports::CollaborationServicePort;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::song::ports::SongServicePort;
use crate::domain::user::ports::UserServicePort;

/// Services shared by every handler.
///
/// Held as trait objects so the router can be built over any implementation
/// of the ports.
#[derive(Clone)]
pub struct AppState {
    pub album_service: Arc<dyn AlbumServicePort>,
    pub song_service: Arc<dyn SongServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub authentication_service: Arc<dyn AuthenticationServicePort>,
    pub playlist_service: Arc<dyn PlaylistServicePort>,
    pub collaboration_service: Arc<dyn CollaborationServicePort>,
    pub token_manager: Arc<TokenManager>,
}

pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    let public_routes = Router::new()
        .route("/albums", post(albums::create_album))
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        .route("/songs", post(songs::create_song).get(songs::list_songs))
        .route(
            "/songs/:id",
            get(songs::get_song)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route(
            "/authentications",
            post(authentications::login)
                .put(authentications::refresh)
                .delete(authentications::logout),
        );

    let protected_routes = Router::new()
        .route(
            "/playlists",
            post(playlists::create_playlist).get(playlists::list_playlists),
        )
        .route("/playlists/:id", delete(playlists::delete_playlist))
        .route(
            "/playlists/:id/songs",
            post(playlists::add_playlist_song)
                .get(playlists::get_playlist_songs)
                .delete(playlists::delete_playlist_song),
        )
        .route(
            "/collaborations",
            post(collaborations::add_collaboration).delete(collaborations::delete_collaboration),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(route_not_found)
        .layer(trace_layer)
        .layer(cors_layer(cors))
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
