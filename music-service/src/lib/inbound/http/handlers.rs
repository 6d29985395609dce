use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::album::errors::AlbumError;
use crate::domain::authentication::errors::AuthenticationError;
use crate::domain::collaboration::errors::CollaborationError;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::song::errors::SongError;
use crate::domain::song::models::SongSummary;
use crate::user::errors::UserError;

pub mod albums;
pub mod authentications;
pub mod collaborations;
pub mod playlists;
pub mod songs;
pub mod users;

/// Message sent for every server fault; the cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "There was a failure on our servers";

/// Message sent when the bearer-token gate rejects a request.
pub const UNAUTHENTICATED_MESSAGE: &str = "Missing or invalid access token";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::success(data)))
    }
}

impl ApiSuccess<()> {
    /// Success without a payload, only a human-readable message.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::success_message(message)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure a handler can report.
///
/// This is the only type that renders error envelopes, so the status-code
/// mapping lives in one `match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Validation or business-rule failure (400).
    Invariant(String),
    /// Rejected credentials or refresh token (401).
    Authentication(String),
    /// Bearer-token gate rejection (401).
    Unauthenticated,
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Invariant(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Invariant(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Invariant(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Invariant(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, UNAUTHENTICATED_MESSAGE.to_string())
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(cause) => {
                tracing::error!(error = %cause, "Request failed with a server fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ApiResponseBody::<()>::failure(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_)
            | UserError::InvalidField(_)
            | UserError::UsernameAlreadyExists(_) => ApiError::Invariant(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthenticationError> for ApiError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidField(_) | AuthenticationError::UnknownRefreshToken => {
                ApiError::Invariant(err.to_string())
            }
            AuthenticationError::UserNotFound(_)
            | AuthenticationError::InvalidCredentials
            | AuthenticationError::InvalidRefreshToken(_) => {
                ApiError::Authentication(err.to_string())
            }
            AuthenticationError::User(user_err) => user_err.into(),
            AuthenticationError::TokenIssuance(_)
            | AuthenticationError::Password(_)
            | AuthenticationError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AlbumError> for ApiError {
    fn from(err: AlbumError) -> Self {
        match err {
            AlbumError::InvalidField(_) | AlbumError::InvalidYear(_) => {
                ApiError::Invariant(err.to_string())
            }
            AlbumError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AlbumError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SongError> for ApiError {
    fn from(err: SongError) -> Self {
        match err {
            SongError::InvalidField(_) | SongError::InvalidYear(_) | SongError::InvalidDuration(_) => {
                ApiError::Invariant(err.to_string())
            }
            SongError::NotFound(_) | SongError::AlbumNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            SongError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PlaylistError> for ApiError {
    fn from(err: PlaylistError) -> Self {
        match err {
            PlaylistError::InvalidField(_)
            | PlaylistError::SongAlreadyInPlaylist(_)
            | PlaylistError::SongNotInPlaylist(_) => ApiError::Invariant(err.to_string()),
            PlaylistError::NotFound(_) | PlaylistError::SongNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            PlaylistError::AccessDenied(_) => ApiError::Forbidden(err.to_string()),
            PlaylistError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CollaborationError> for ApiError {
    fn from(err: CollaborationError) -> Self {
        match err {
            CollaborationError::Playlist(playlist_err) => playlist_err.into(),
            CollaborationError::InvalidField(_)
            | CollaborationError::AlreadyExists
            | CollaborationError::NotFound => ApiError::Invariant(err.to_string()),
            CollaborationError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            CollaborationError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// `axum::Json` whose rejections render as a 400 fail envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// Wire envelope: `{status, message?, data?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }

    /// `"error"` for server faults, `"fail"` for everything the client caused.
    pub fn failure(status_code: StatusCode, message: String) -> Self {
        Self {
            status: if status_code.is_server_error() {
                "error"
            } else {
                "fail"
            },
            message: Some(message),
            data: None,
        }
    }
}

/// Song listing entry shared by album, song and playlist responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongSummaryData {
    pub id: String,
    pub title: String,
    pub performer: String,
}

impl From<&SongSummary> for SongSummaryData {
    fn from(song: &SongSummary) -> Self {
        Self {
            id: song.id.to_string(),
            title: song.title.clone(),
            performer: song.performer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::JwtError;

    use super::*;
    use crate::domain::album::models::AlbumId;
    use crate::domain::common::FieldError;
    use crate::domain::playlist::models::PlaylistId;
    use crate::domain::user::models::UserId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_errors_render_fail_envelope() {
        let response = ApiError::Invariant("name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "fail", "message": "name is required"})
        );
    }

    #[tokio::test]
    async fn test_server_fault_hides_cause() {
        let response =
            ApiError::InternalServerError("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "error", "message": INTERNAL_ERROR_MESSAGE})
        );
    }

    #[tokio::test]
    async fn test_gate_rejection_uses_fixed_message() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["message"],
            UNAUTHENTICATED_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_message_success_has_no_data() {
        let response = ApiSuccess::message(StatusCode::OK, "Album deleted").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "success", "message": "Album deleted"})
        );
    }

    #[test]
    fn test_domain_error_status_mapping() {
        assert!(matches!(
            ApiError::from(UserError::UsernameAlreadyExists("alice".to_string())),
            ApiError::Invariant(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::NotFound(UserId::new())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(AuthenticationError::UnknownRefreshToken),
            ApiError::Invariant(_)
        ));
        assert!(matches!(
            ApiError::from(AuthenticationError::InvalidRefreshToken(
                JwtError::TokenExpired
            )),
            ApiError::Authentication(_)
        ));
        assert!(matches!(
            ApiError::from(AuthenticationError::TokenIssuance(JwtError::MissingSecret)),
            ApiError::InternalServerError(_)
        ));
        assert!(matches!(
            ApiError::from(SongError::AlbumNotFound(AlbumId::new())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(PlaylistError::AccessDenied(PlaylistId::new())),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from(CollaborationError::Playlist(PlaylistError::NotFound(
                PlaylistId::new()
            ))),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(CollaborationError::InvalidField(FieldError::Empty {
                field: "userId"
            })),
            ApiError::Invariant(_)
        ));
    }

    #[test]
    fn test_login_failures_share_message() {
        let unknown = ApiError::from(AuthenticationError::UserNotFound("bob".to_string()));
        let mismatch = ApiError::from(AuthenticationError::InvalidCredentials);
        assert_eq!(unknown, mismatch);
    }
}
