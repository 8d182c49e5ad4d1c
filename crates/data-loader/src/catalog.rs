//! Catalog building logic.
//!
//! This module builds the immutable `Catalog` from the three raw tables:
//! - Movie reference table with an id index (first occurrence wins)
//! - Users in table order, each owning its ratings in ratings-table order,
//!   with movie titles resolved and denormalized at this point
//! - Explicit id→position maps instead of positional id arithmetic, so
//!   gapped or out-of-order identifiers resolve correctly

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Catalog, Movie, Rating, RawRating, RawTables, User, UserId};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the three tables from a directory and build the catalog.
    ///
    /// This is the main entry point for binaries; the build must complete
    /// before any query runs against the model.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let tables = parser::load_tables(dir)?;
        info!(
            users = tables.users.len(),
            movies = tables.movies.len(),
            ratings = tables.ratings.len(),
            "Loaded raw tables from {}",
            dir.display()
        );
        Self::build(&tables)
    }

    /// Build the catalog from already-loaded tables.
    ///
    /// A rating that references a movie id absent from the movies table is
    /// skipped and reported; the build itself still succeeds.
    pub fn build(tables: &RawTables) -> Result<Self> {
        let mut movies = Vec::with_capacity(tables.movies.len());
        let mut movie_index = HashMap::with_capacity(tables.movies.len());
        for raw in &tables.movies {
            if movie_index.contains_key(&raw.movie_id) {
                warn!(movie_id = raw.movie_id, "Duplicate movie id, keeping first occurrence");
                continue;
            }
            movie_index.insert(raw.movie_id, movies.len());
            movies.push(Movie {
                id: raw.movie_id,
                title: raw.title.clone(),
            });
        }

        // Group ratings per user up front; encounter order is preserved.
        let mut ratings_by_user: HashMap<UserId, Vec<&RawRating>> = HashMap::new();
        for raw in &tables.ratings {
            ratings_by_user.entry(raw.user_id).or_default().push(raw);
        }

        let mut users = Vec::with_capacity(tables.users.len());
        let mut user_index = HashMap::with_capacity(tables.users.len());
        let mut skipped = 0usize;
        for raw in &tables.users {
            if user_index.contains_key(&raw.user_id) {
                warn!(user_id = raw.user_id, "Duplicate user id, keeping first occurrence");
                continue;
            }

            let raw_ratings = ratings_by_user
                .get(&raw.user_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let mut ratings = Vec::with_capacity(raw_ratings.len());
            for raw_rating in raw_ratings {
                match movie_index.get(&raw_rating.movie_id) {
                    Some(&idx) => ratings.push(Rating {
                        movie_id: raw_rating.movie_id,
                        title: movies[idx].title.clone(),
                        score: raw_rating.score,
                    }),
                    None => {
                        let err = DataLoadError::MissingReference {
                            entity: "Movie".to_string(),
                            id: raw_rating.movie_id,
                        };
                        warn!(user_id = raw.user_id, "Skipping rating: {err}");
                        skipped += 1;
                    }
                }
            }

            user_index.insert(raw.user_id, users.len());
            users.push(User {
                id: raw.user_id,
                name: raw.name.clone(),
                ratings,
            });
        }

        let catalog = Self {
            users,
            user_index,
            movies,
            movie_index,
        };

        let (user_count, movie_count, rating_count) = catalog.counts();
        let orphaned = tables.ratings.len() - rating_count - skipped;
        if orphaned > 0 {
            warn!(orphaned, "Ratings referencing unknown users were dropped");
        }
        info!(
            users = user_count,
            movies = movie_count,
            ratings = rating_count,
            skipped,
            "Catalog built"
        );
        Ok(catalog)
    }
}
