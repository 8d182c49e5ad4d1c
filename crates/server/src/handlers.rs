use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use data_loader::{MovieId, RawUser, UserId};
use engine::{RecommendedMovie, SimilarUser};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// Request/Response types

/// Query parameters shared by the two ranking endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingParams {
    pub user_id: UserId,
    /// Upper bound on returned rows; asking for more than exist returns
    /// everything
    pub results: usize,
    /// Metric name from the client form; only "euclidean" is implemented
    pub similarity: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarUsersResponse {
    pub user_id: UserId,
    pub results: usize,
    pub data: Vec<SimilarUser>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMoviesResponse {
    pub user_id: UserId,
    pub results: usize,
    pub data: Vec<MovieRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRow {
    pub movie_id: MovieId,
    pub movie: String,
    pub score: f64,
}

impl From<RecommendedMovie> for MovieRow {
    fn from(row: RecommendedMovie) -> Self {
        Self {
            movie_id: row.movie_id,
            movie: row.title,
            // scores are published at two decimals
            score: (row.score * 100.0).round() / 100.0,
        }
    }
}

fn validate_metric(param: &Option<String>) -> ApiResult<()> {
    match param.as_deref() {
        None | Some("euclidean") => Ok(()),
        Some(other) => Err(ApiError::InvalidInput(format!(
            "Unknown similarity metric: {other}"
        ))),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The loaded user table, exactly as it came off disk.
pub async fn all_users(State(state): State<AppState>) -> Json<Vec<RawUser>> {
    Json(state.users.as_ref().clone())
}

/// Top matching users for a target user.
pub async fn top_matching_users(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> ApiResult<Json<SimilarUsersResponse>> {
    validate_metric(&params.similarity)?;

    let data = state
        .recommender
        .top_similar_users(params.user_id, params.results)?;

    Ok(Json(SimilarUsersResponse {
        user_id: params.user_id,
        results: params.results,
        data,
    }))
}

/// Top recommended movies for a target user.
pub async fn recommended_movies(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> ApiResult<Json<RecommendedMoviesResponse>> {
    validate_metric(&params.similarity)?;

    let rows = state
        .recommender
        .top_recommended_movies(params.user_id, params.results)?;

    Ok(Json(RecommendedMoviesResponse {
        user_id: params.user_id,
        results: params.results,
        data: rows.into_iter().map(MovieRow::from).collect(),
    }))
}
