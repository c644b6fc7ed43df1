//! Handlers for the `/auth` resource: sign in, sign out, and `me`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::user::UserResponse;
use storefront_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Credentials for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// The profile slice embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub shop_id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Unknown username and wrong password must answer identically, or the
/// login form doubles as a username oracle.
fn bad_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Checks the credentials, opens a login session, and returns an access
/// token whose claims carry the user's shop and that session's id. The
/// activity feed brackets the visit with the resulting user_login event.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(bad_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "This account has been deactivated".into(),
        )));
    }

    let password_ok = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password check failed: {e}")))?;
    if !password_ok {
        return Err(bad_credentials());
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    // Best-effort: a broken activity pipeline must not lock staff out, so
    // the sign-in proceeds even when no session could be opened.
    let session_id = state.logger.track_login(user.shop_id, user.id).await;

    let access_token =
        generate_access_token(user.id, user.shop_id, &user.role, session_id, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Could not sign access token: {e}")))?;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            shop_id: user.shop_id,
            username: user.username,
            email: user.email,
            role: user.role,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Closes the caller's login session, if the token carries one, and emits
/// the matching user_logout event. Always 204; signing out twice is fine.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> AppResult<StatusCode> {
    state
        .logger
        .track_logout(auth.shop_id, auth.user_id, auth.session_id)
        .await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// The authenticated user's own profile, hash stripped.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "User behind this token no longer exists".into(),
            ))
        })?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}
