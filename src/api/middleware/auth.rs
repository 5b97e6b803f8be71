use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::{verify_token, Claims, WRITER_ROLE};

/// JWT authentication extractor for protected routes
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     JwtAuth(claims): JwtAuth,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello user {}", claims.sub))
/// }
/// ```
pub struct JwtAuth(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract the authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        // Extract bearer token
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
            tracing::warn!(error = %e, "rejected bearer token");
            ApiError::unauthorized(format!("Invalid token: {}", e))
        })?;

        Ok(JwtAuth(claims))
    }
}

/// Authenticated caller holding the `Writer` role
///
/// Rejects with 401 when no valid token is present and 403 when the token
/// lacks the role.
pub struct WriterAuth(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for WriterAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let JwtAuth(claims) = JwtAuth::from_request_parts(parts, state).await?;

        if !claims.has_role(WRITER_ROLE) {
            tracing::warn!(user_id = %claims.sub, "write attempted without Writer role");
            return Err(ApiError::forbidden(format!("Role {} required", WRITER_ROLE)));
        }

        Ok(WriterAuth(claims))
    }
}
