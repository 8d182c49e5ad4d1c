//! Result row types returned by the engines.

use data_loader::{MovieId, UserId};
use serde::Serialize;

/// One row of the ranked similarity list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarUser {
    pub user_id: UserId,
    pub name: String,
    /// Bounded value in (0, 1], or exactly 0 for users with no commonly
    /// rated movie; published at two decimals
    pub similarity: f64,
}

/// One row of the ranked recommendation list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMovie {
    pub movie_id: MovieId,
    pub title: String,
    /// Similarity-weighted average of other users' scores for this movie
    pub score: f64,
}
