//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`credentials`] -- email normalization and signup input rules.

pub mod credentials;
pub mod jwt;
pub mod password;
