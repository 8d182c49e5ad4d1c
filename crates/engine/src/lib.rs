//! # Engine Crate
//!
//! User-to-user similarity and weighted-score movie recommendation over the
//! catalog built by the data-loader crate.
//!
//! ## Components
//!
//! - **similarity**: Euclidean-distance-derived pairwise similarity and the
//!   ranked similar-users list
//! - **recommend**: similarity-weighted predicted scores for unseen movies
//! - **types**: result row types (`SimilarUser`, `RecommendedMovie`)
//! - **error**: typed engine errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use engine::Recommender;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_dir("data".as_ref())?);
//! let recommender = Recommender::new(catalog);
//!
//! let similar = recommender.top_similar_users(1, 10)?;
//! let movies = recommender.top_recommended_movies(1, 10)?;
//! ```
//!
//! Both engines are pure functions of the immutable catalog and hold no
//! state across calls; a single `Recommender` can serve concurrent callers.

pub mod error;
pub mod recommend;
pub mod similarity;
pub mod types;

// Re-export the public surface
pub use error::{EngineError, Result};
pub use similarity::{Recommender, euclidean_similarity};
pub use types::{RecommendedMovie, SimilarUser};
