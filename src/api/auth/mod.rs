//! Token issuance endpoint
//!
//! Exchanges an API key, its secret and a payload for a signed token.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Payload;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/token", post(generate_token))
}

/// Token request
#[derive(Deserialize, Validate)]
pub struct CreateTokenRequest {
    /// API key associated with the calling application
    #[validate(length(min = 1, message = "apikey must not be empty"))]
    pub apikey: String,
    /// Secret that must match the stored hash for the key
    #[validate(length(min = 1, message = "secret must not be empty"))]
    pub secret: String,
    /// Claims to embed in the token
    pub payload: Payload,
}

impl std::fmt::Debug for CreateTokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateTokenRequest")
            .field("apikey", &self.apikey)
            .field("secret", &"[REDACTED]")
            .field("payload", &self.payload)
            .finish()
    }
}

/// Token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: String,
}

/// Issue a token
///
/// POST /auth/token
///
/// Returns 401 when the key is unknown or the secret does not match.
pub async fn generate_token(
    State(state): State<AppState>,
    Json(request): Json<CreateTokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()).with_code("validation_error"))?;

    let issued = state
        .token_issuer
        .generate(&request.apikey, &request.secret, &request.payload)
        .await?
        .ok_or_else(|| ApiError::unauthorized("API key or secret is invalid"))?;

    Ok(Json(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at.to_rfc3339(),
    }))
}
