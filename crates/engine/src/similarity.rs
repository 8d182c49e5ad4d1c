//! User-to-user similarity.
//!
//! ## Algorithm
//! For two users, every pair of ratings sharing a movie id contributes
//! `(score_a - score_b)^2` to a distance sum. Users sharing no rated movie
//! score 0 (no comparable basis, so strangers are maximally dissimilar, not
//! unknown). Otherwise the similarity is `1 / (1 + sum)`, which maps
//! distance 0 to 1.0 and larger distances asymptotically toward 0.
//!
//! Ranked lists are sorted ascending and then reversed; equal scores end up
//! in reverse encounter order. That tie behavior is load-bearing for callers
//! and is pinned by tests.

use crate::error::{EngineError, Result};
use crate::types::SimilarUser;
use data_loader::{Catalog, User, UserId};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Round to two decimal places; similarity is published at this precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sort ascending by score, then reverse to get highest first.
pub(crate) fn rank_descending<T>(rows: &mut [T], score: impl Fn(&T) -> f64) {
    rows.sort_by(|a, b| score(a).partial_cmp(&score(b)).unwrap_or(Ordering::Equal));
    rows.reverse();
}

/// Euclidean-distance-derived similarity between two users' rating patterns.
pub fn euclidean_similarity(a: &User, b: &User) -> f64 {
    let mut sum_squares = 0.0f64;
    let mut matches = 0u32;

    for rating_a in &a.ratings {
        for rating_b in &b.ratings {
            if rating_a.movie_id == rating_b.movie_id {
                let diff = f64::from(rating_a.score) - f64::from(rating_b.score);
                sum_squares += diff * diff;
                matches += 1;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }
    round2(1.0 / (1.0 + sum_squares))
}

/// The recommendation engine.
///
/// Holds a shared reference to the immutable catalog; every method is a pure
/// read-only traversal, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct Recommender {
    pub(crate) catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine runs against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranked similarity list for `user_id`: every other user scored against
    /// the target, most similar first, the target itself excluded.
    #[instrument(skip(self))]
    pub fn similar_users(&self, user_id: UserId) -> Result<Vec<SimilarUser>> {
        let target = self
            .catalog
            .get_user(user_id)
            .ok_or(EngineError::UserNotFound { user_id })?;

        let mut rows: Vec<SimilarUser> = self
            .catalog
            .users()
            .iter()
            .filter(|other| other.id != user_id)
            .map(|other| SimilarUser {
                user_id: other.id,
                name: other.name.clone(),
                similarity: euclidean_similarity(target, other),
            })
            .collect();

        rank_descending(&mut rows, |row| row.similarity);
        debug!(count = rows.len(), "Ranked similarity list");
        Ok(rows)
    }

    /// First `limit` entries of the similarity list. A limit beyond the list
    /// length returns the whole list, not an error.
    pub fn top_similar_users(&self, user_id: UserId, limit: usize) -> Result<Vec<SimilarUser>> {
        let mut rows = self.similar_users(user_id)?;
        rows.truncate(limit);
        Ok(rows)
    }
}
