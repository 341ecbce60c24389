//! Authentication extractors
//!
//! Read the bearer token from the `Authorization` header and verify it with
//! the [`JwtService`](booknest_common::JwtService) held in [`AppState`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use booknest_common::{AppError, Claims};
use booknest_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Signed-in user taken from a verified access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub claims: Claims,
}

impl AuthUser {
    /// User id in the string form services accept
    pub fn id(&self) -> String {
        self.user_id.to_string()
    }
}

fn verify(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state
        .jwt_service()
        .validate_access_token(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::App(e)
        })?;
    let user_id = claims.user_id()?;

    Ok(AuthUser { user_id, claims })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        verify(&AppState::from_ref(state), bearer.token())
    }
}

/// Viewer on public endpoints
///
/// `None` when no `Authorization` header is sent. A header carrying a bad
/// token is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn id(&self) -> Option<String> {
        self.0.as_ref().map(AuthUser::id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
            return Ok(Self(None));
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::InvalidToken))?;

        verify(&AppState::from_ref(state), bearer.token()).map(|user| Self(Some(user)))
    }
}
