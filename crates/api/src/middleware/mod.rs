//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user (and their shop)
//!   from a JWT Bearer token.

pub mod auth;
