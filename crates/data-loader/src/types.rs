//! Core domain types for the ratings dataset.
//!
//! Two layers live here:
//! - Raw records (`RawUser`, `RawMovie`, `RawRating`) exactly as they appear
//!   in the CSV tables, with their original PascalCase field names.
//! - The built model: `User` owning its `Rating`s, the shared `Movie`
//!   reference table, and the `Catalog` that holds both.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Raw records
// =============================================================================

/// One row of `users.csv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
}

/// One row of `movies.csv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMovie {
    #[serde(rename = "MovieId")]
    pub movie_id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
}

/// One row of `ratings.csv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRating {
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "MovieId")]
    pub movie_id: MovieId,
    #[serde(rename = "Rating")]
    pub score: f32,
}

/// The three loaded tables, in file order.
///
/// All three must be available before the catalog is built; ratings are
/// resolved against movies during the build.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub users: Vec<RawUser>,
    pub movies: Vec<RawMovie>,
    pub ratings: Vec<RawRating>,
}

// =============================================================================
// Built model
// =============================================================================

/// A single rating owned by a user.
///
/// The movie title is denormalized at build time so ranked results never go
/// back to the reference table for display data.
#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
}

/// A user together with the ratings it owns, in ratings-table order.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub ratings: Vec<Rating>,
}

/// An entry of the shared, read-only movie reference table.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

/// The immutable in-memory model the engines run against.
///
/// Users and movies keep their table order in vectors; id lookups go through
/// explicit maps rather than assuming ids are dense or 1-based. Built once at
/// startup and never mutated, so it can be shared across handlers without
/// locking.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) users: Vec<User>,
    pub(crate) user_index: HashMap<UserId, usize>,
    pub(crate) movies: Vec<Movie>,
    pub(crate) movie_index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Get a user by id
    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).map(|&idx| &self.users[idx])
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movie_index.get(&id).map(|&idx| &self.movies[idx])
    }

    /// All users, in users-table order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The movie reference table, in movies-table order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// (users, movies, ratings) counts for logging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        let ratings = self.users.iter().map(|u| u.ratings.len()).sum();
        (self.users.len(), self.movies.len(), ratings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_queries() {
        let catalog = Catalog::default();

        assert!(catalog.get_user(1).is_none());
        assert!(catalog.get_movie(1).is_none());
        assert_eq!(catalog.counts(), (0, 0, 0));
    }
}
