//! Parser for the CSV dataset tables.
//!
//! The dataset ships as three `;`-separated tables with headers:
//! - `users.csv`: UserId;Name
//! - `movies.csv`: MovieId;Title
//! - `ratings.csv`: UserId;MovieId;Rating
//!
//! Numeric fields arrive as strings in the files; the csv/serde layer does
//! the conversion and reports the offending record on failure.

use crate::error::{DataLoadError, Result};
use crate::types::{RawMovie, RawRating, RawTables, RawUser};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn read_table<T, R>(reader: R) -> std::result::Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader.deserialize().collect()
}

fn parse_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    read_table(file).map_err(|source| DataLoadError::Table {
        file: path.display().to_string(),
        source,
    })
}

/// Parse the users table
pub fn parse_users(path: &Path) -> Result<Vec<RawUser>> {
    parse_table(path)
}

/// Parse the movies table
pub fn parse_movies(path: &Path) -> Result<Vec<RawMovie>> {
    parse_table(path)
}

/// Parse the ratings table
pub fn parse_ratings(path: &Path) -> Result<Vec<RawRating>> {
    parse_table(path)
}

/// Load all three tables from a dataset directory.
///
/// One explicit load step: everything must be present before the catalog
/// build resolves ratings against movies, so there is no point serving a
/// partially loaded set of tables.
pub fn load_tables(dir: &Path) -> Result<RawTables> {
    let users = parse_users(&dir.join("users.csv"))?;
    let movies = parse_movies(&dir.join("movies.csv"))?;
    let ratings = parse_ratings(&dir.join("ratings.csv"))?;

    Ok(RawTables {
        users,
        movies,
        ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_users_table() {
        let input = "UserId;Name\n1;Alice\n2;Bob\n";
        let users: Vec<RawUser> = read_table(input.as_bytes()).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_id, 1);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].user_id, 2);
    }

    #[test]
    fn parses_movies_table() {
        let input = "MovieId;Title\n10;The Matrix\n11;Toy Story\n";
        let movies: Vec<RawMovie> = read_table(input.as_bytes()).unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].movie_id, 10);
        assert_eq!(movies[1].title, "Toy Story");
    }

    #[test]
    fn parses_ratings_table() {
        let input = "UserId;MovieId;Rating\n1;10;5\n1;11;3.5\n";
        let ratings: Vec<RawRating> = read_table(input.as_bytes()).unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].score, 5.0);
        assert_eq!(ratings[1].score, 3.5);
    }

    #[test]
    fn preserves_file_order() {
        let input = "UserId;MovieId;Rating\n2;11;4\n1;10;5\n2;10;1\n";
        let ratings: Vec<RawRating> = read_table(input.as_bytes()).unwrap();

        let order: Vec<(u32, u32)> = ratings.iter().map(|r| (r.user_id, r.movie_id)).collect();
        assert_eq!(order, vec![(2, 11), (1, 10), (2, 10)]);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let input = "UserId;Name\nnot-a-number;Alice\n";
        let result: std::result::Result<Vec<RawUser>, _> = read_table(input.as_bytes());

        assert!(result.is_err());
    }

    #[test]
    fn load_tables_reads_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("users.csv"), "UserId;Name\n1;Alice\n").unwrap();
        std::fs::write(dir.path().join("movies.csv"), "MovieId;Title\n10;The Matrix\n").unwrap();
        std::fs::write(
            dir.path().join("ratings.csv"),
            "UserId;MovieId;Rating\n1;10;5\n",
        )
        .unwrap();

        let tables = load_tables(dir.path()).unwrap();
        assert_eq!(tables.users.len(), 1);
        assert_eq!(tables.movies.len(), 1);
        assert_eq!(tables.ratings.len(), 1);
    }

    #[test]
    fn load_tables_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_tables(dir.path()).is_err());
    }
}
