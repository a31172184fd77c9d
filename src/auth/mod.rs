//! Credential helpers shared by the account endpoints.
//!
//! Hashing is CPU-bound, so both bcrypt calls run on tokio's blocking pool and
//! callers only ever await them.

use thiserror::Error;
use uuid::Uuid;

/// Work factor for new hashes
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Salted bcrypt hash of `password` at the default cost
pub async fn hash_password(password: &str) -> Result<String, AuthError> {
    hash_password_with_cost(password, DEFAULT_COST).await
}

pub async fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AuthError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Check `password` against a stored hash. A mismatch is `Ok(false)`; a hash
/// that cannot be parsed is an error.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}

/// Opaque bearer credential: a random UUID in canonical hyphenated form.
/// Carries no claims; expiry and revocation belong to whoever stores it.
pub fn generate_refresh_token() -> String {
    Uuid::new_v4().to_string()
}
