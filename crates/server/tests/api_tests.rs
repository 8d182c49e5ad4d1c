use axum_test::TestServer;
use std::sync::Arc;

use data_loader::{Catalog, RawMovie, RawRating, RawTables, RawUser};
use engine::Recommender;
use server::{AppState, create_router};

/// Two users sharing movie A two points apart, plus movie B only Bob rated:
/// similarity(1,2) = 0.25 and the predicted score for movie B is 5.00.
fn test_tables() -> RawTables {
    RawTables {
        users: vec![
            RawUser {
                user_id: 1,
                name: "Alice".to_string(),
            },
            RawUser {
                user_id: 2,
                name: "Bob".to_string(),
            },
        ],
        movies: vec![
            RawMovie {
                movie_id: 1,
                title: "The Matrix".to_string(),
            },
            RawMovie {
                movie_id: 2,
                title: "Toy Story".to_string(),
            },
        ],
        ratings: vec![
            RawRating {
                user_id: 1,
                movie_id: 1,
                score: 4.0,
            },
            RawRating {
                user_id: 2,
                movie_id: 1,
                score: 2.0,
            },
            RawRating {
                user_id: 2,
                movie_id: 2,
                score: 5.0,
            },
        ],
    }
}

fn create_test_server() -> TestServer {
    let tables = test_tables();
    let catalog = Catalog::build(&tables).unwrap();
    let state = AppState::new(tables.users, Recommender::new(Arc::new(catalog)));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_all_users_is_a_raw_pass_through() {
    let server = create_test_server();

    let response = server.get("/users/all").await;
    response.assert_status_ok();

    let users: Vec<serde_json::Value> = response.json();
    assert_eq!(users.len(), 2);
    // Raw table rows keep their original field names
    assert_eq!(users[0]["UserId"], 1);
    assert_eq!(users[0]["Name"], "Alice");
    assert_eq!(users[1]["Name"], "Bob");
}

#[tokio::test]
async fn test_top_matching_users() {
    let server = create_test_server();

    let response = server
        .get("/top-matching-users")
        .add_query_param("userId", 1)
        .add_query_param("results", 10)
        .add_query_param("similarity", "euclidean")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["userId"], 1);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["userId"], 2);
    assert_eq!(data[0]["name"], "Bob");
    assert_eq!(data[0]["similarity"], 0.25);
}

#[tokio::test]
async fn test_recommended_movies() {
    let server = create_test_server();

    let response = server
        .get("/recommended-movies")
        .add_query_param("userId", 1)
        .add_query_param("results", 10)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["movieId"], 2);
    assert_eq!(data[0]["movie"], "Toy Story");
    assert_eq!(data[0]["score"], 5.0);
}

#[tokio::test]
async fn test_results_beyond_available_returns_everything() {
    let server = create_test_server();

    let response = server
        .get("/top-matching-users")
        .add_query_param("userId", 1)
        .add_query_param("results", 5000)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_user_maps_to_404() {
    let server = create_test_server();

    let response = server
        .get("/top-matching-users")
        .add_query_param("userId", 99)
        .add_query_param("results", 10)
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_unknown_metric_maps_to_400() {
    let server = create_test_server();

    let response = server
        .get("/recommended-movies")
        .add_query_param("userId", 1)
        .add_query_param("results", 10)
        .add_query_param("similarity", "cosine")
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_user_id_maps_to_400() {
    let server = create_test_server();

    let response = server
        .get("/top-matching-users")
        .add_query_param("userId", "not-a-number")
        .add_query_param("results", 10)
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}
