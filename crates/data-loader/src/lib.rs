//! # Data Loader Crate
//!
//! This crate handles loading the ratings dataset and building the
//! in-memory catalog the recommendation engine runs against.
//!
//! ## Main Components
//!
//! - **types**: Raw CSV records and domain types (User, Rating, Movie, Catalog)
//! - **parser**: Parse the `;`-separated CSV tables into raw records
//! - **catalog**: Build the immutable catalog from the raw tables
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//!
//! // Query the model
//! let user = catalog.get_user(1).unwrap();
//! println!("{} rated {} movies", user.name, user.ratings.len());
//! ```
//!
//! The catalog is built once and never mutated afterwards; wrap it in an
//! `Arc` to share it across threads without locking.

// Public modules
pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Raw records
    RawUser,
    RawMovie,
    RawRating,
    RawTables,
    // Built model
    User,
    Rating,
    Movie,
    Catalog,
};
