//! Weighted-score movie recommendation.
//!
//! ## Algorithm
//! For every movie in the reference table that the target has not rated,
//! other users' scores for it are averaged, weighted by each scorer's
//! similarity to the target:
//!
//! ```text
//! predicted = sum(score_u * sim_u) / sum(sim_u)
//! ```
//!
//! A movie no similar user has rated (similarity sum 0) has no well-defined
//! prediction and is excluded; the division is never allowed to produce an
//! infinite or NaN score that would reach ranking.

use crate::error::{EngineError, Result};
use crate::similarity::{rank_descending, Recommender};
use crate::types::{RecommendedMovie, SimilarUser};
use data_loader::{MovieId, UserId};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

impl Recommender {
    /// Ranked predicted scores for every movie the target has not rated,
    /// weighted by the given similarity list. An empty similarity list
    /// yields an empty result, not an error.
    #[instrument(skip(self, similarity))]
    pub fn recommended_movies(
        &self,
        user_id: UserId,
        similarity: &[SimilarUser],
    ) -> Result<Vec<RecommendedMovie>> {
        let target = self
            .catalog
            .get_user(user_id)
            .ok_or(EngineError::UserNotFound { user_id })?;

        let rated: HashSet<MovieId> = target.ratings.iter().map(|r| r.movie_id).collect();
        let similarity_by_user: HashMap<UserId, f64> = similarity
            .iter()
            .map(|row| (row.user_id, row.similarity))
            .collect();

        let mut rows = Vec::new();
        for movie in self.catalog.movies() {
            if rated.contains(&movie.id) {
                continue;
            }

            let mut weighted_sum = 0.0f64;
            let mut similarity_sum = 0.0f64;
            for other in self.catalog.users() {
                if other.id == user_id {
                    continue;
                }
                let Some(rating) = other.ratings.iter().find(|r| r.movie_id == movie.id) else {
                    continue;
                };
                // A scorer absent from the similarity list contributes nothing.
                let Some(&sim) = similarity_by_user.get(&other.id) else {
                    continue;
                };
                weighted_sum += f64::from(rating.score) * sim;
                similarity_sum += sim;
            }

            if similarity_sum == 0.0 {
                continue;
            }

            rows.push(RecommendedMovie {
                movie_id: movie.id,
                title: movie.title.clone(),
                score: weighted_sum / similarity_sum,
            });
        }

        rank_descending(&mut rows, |row| row.score);
        debug!(count = rows.len(), "Ranked recommendations");
        Ok(rows)
    }

    /// First `limit` recommendations for `user_id`, computing the similarity
    /// list internally. A limit beyond the list length returns everything.
    pub fn top_recommended_movies(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> Result<Vec<RecommendedMovie>> {
        let similarity = self.similar_users(user_id)?;
        let mut rows = self.recommended_movies(user_id, &similarity)?;
        rows.truncate(limit);
        Ok(rows)
    }
}
