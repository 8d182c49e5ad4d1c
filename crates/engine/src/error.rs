//! Error types for the engine crate.

use data_loader::UserId;
use thiserror::Error;

/// Errors raised by the similarity and recommendation engines.
///
/// Identifier resolution failures are typed errors, not sentinel values;
/// the missing-prediction case (zero similarity sum) is handled locally by
/// excluding the movie and never surfaces here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Requested user identifier has no corresponding user
    #[error("User {user_id} not found")]
    UserNotFound { user_id: UserId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
