//! Credential handling: [`password`] hashes and checks staff passwords,
//! [`jwt`] issues and validates the access tokens they trade them for.

pub mod jwt;
pub mod password;
