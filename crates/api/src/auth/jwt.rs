//! Access tokens.
//!
//! Tokens are HS256-signed JWTs. The tenant rides in the claims: handlers
//! take `shop_id` from the verified token and from nowhere else, which is
//! what makes cross-shop reads impossible rather than merely forbidden.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use storefront_core::types::DbId;
use uuid::Uuid;

/// Token lifetime covers a full shift with slack.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 480;

/// Claims payload carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's database id.
    pub sub: DbId,
    /// Tenant scope for every query this token authorizes.
    pub shop_id: DbId,
    /// Role name, `"owner"` or `"staff"`.
    pub role: String,
    /// Login-session row opened when this token was issued. Absent when
    /// session tracking failed at sign-in; logout then falls back to
    /// closing the user's youngest open session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<DbId>,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Unique token id (UUID v4).
    pub jti: String,
}

/// Signing secret and lifetime for issued tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and
    /// `JWT_ACCESS_EXPIRY_MINS` (default 480) from the environment.
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or empty. There is no safe
    /// default for a signing key.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET is required");
        assert!(
            !secret.is_empty(),
            "Refusing to start with an empty JWT_SECRET"
        );

        Self {
            secret,
            access_token_expiry_mins: std::env::var("JWT_ACCESS_EXPIRY_MINS")
                .map(|raw| {
                    raw.parse()
                        .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64")
                })
                .unwrap_or(DEFAULT_ACCESS_EXPIRY_MINS),
        }
    }
}

/// Issue a signed token for a successful sign-in.
///
/// `session_id` is the login-session row opened for this sign-in, `None`
/// when session tracking was unavailable.
pub fn generate_access_token(
    user_id: DbId,
    shop_id: DbId,
    role: &str,
    session_id: Option<DbId>,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        shop_id,
        role: role.to_string(),
        sid: session_id,
        exp: issued_at + config.access_token_expiry_mins * 60,
        iat: issued_at,
        jti: Uuid::new_v4().to_string(),
    };

    // Header::default() is HS256.
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry, returning the claims on success.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
