use thiserror::Error;

/// Errors from user lookup and creation.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("user query failed: {0}")]
    Query(#[from] sqlx::Error),
}
