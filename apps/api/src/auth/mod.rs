//! Fixed-credential login. Two plaintext username/password pairs map to roles;
//! no session or token is issued.

pub mod handlers;

use crate::errors::AppError;

const CREDENTIALS: &[(&str, &str, &str)] = &[
    ("admin", "admin123", "admin"),
    ("viewer", "viewer123", "viewer"),
];

/// Returns the role for a known username/password pair.
pub fn check_credentials(username: &str, password: &str) -> Result<&'static str, AppError> {
    CREDENTIALS
        .iter()
        .find(|(u, p, _)| *u == username && *p == password)
        .map(|(_, _, role)| *role)
        .ok_or(AppError::InvalidCredentials)
}
