//! HTTP query interface for the CineMatch engine.
//!
//! Thin plumbing over the engine crate: routing, query-parameter decoding,
//! response shaping, and error-to-status mapping. The endpoints mirror the
//! client form:
//!
//! - `GET /users/all` — the loaded user table
//! - `GET /top-matching-users?userId=&results=&similarity=euclidean`
//! - `GET /recommended-movies?userId=&results=&similarity=euclidean`
//! - `GET /health`

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
