use std::sync::Arc;

use data_loader::RawUser;
use engine::Recommender;

/// Shared application state.
///
/// The catalog is built before the server binds and never mutated, so
/// handlers share it read-only without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded user table, served as-is by `/users/all`
    pub users: Arc<Vec<RawUser>>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(users: Vec<RawUser>, recommender: Recommender) -> Self {
        Self {
            users: Arc::new(users),
            recommender: Arc::new(recommender),
        }
    }
}
