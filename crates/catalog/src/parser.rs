//! Source loaders for delimited TV show datasets.
//!
//! Two CSV schemas are supported:
//! - the project CSV: `title,genre,episodes,rating,language,year`
//! - the Kaggle TMDB TV dataset (v3): `name,genres,number_of_episodes,
//!   vote_average,original_language,first_air_date,...`
//!
//! Both loaders are defensive: a row with a missing or non-numeric required
//! field is skipped, never fatal, so a dataset with some dirty rows still
//! loads the clean majority. Only a missing file aborts the load.

use crate::error::{CatalogError, Result};
use crate::show::TvShow;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Result of a load: the parsed shows plus a skipped-row count for
/// diagnostics.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Successfully parsed shows, in file order
    pub shows: Vec<TvShow>,
    /// Data rows dropped because a required field was missing or malformed
    pub skipped_rows: usize,
}

/// Read a source file, mapping a missing path to
/// [`CatalogError::FileNotFound`].
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::Io(e),
    })
}

/// Split one CSV line into fields, honoring double-quoted fields with
/// embedded commas and `""` escapes. The TMDB dataset quotes its
/// comma-joined genre lists, so a plain `split(',')` would shear them apart.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // An escaped quote inside a quoted field
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Map header names to column positions so rows can be read by field name
/// regardless of column order.
fn header_positions(header: &str) -> HashMap<String, usize> {
    split_csv_line(header)
        .into_iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect()
}

/// Look up a named field in a row, trimmed. `None` when the column is absent
/// or the row is too short.
fn field<'a>(row: &'a [String], columns: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    columns
        .get(name)
        .and_then(|&idx| row.get(idx))
        .map(|value| value.trim())
}

/// Parse one project-schema row into a show. `None` marks a malformed row
/// the caller should skip.
fn parse_project_row(row: &[String], columns: &HashMap<String, usize>) -> Option<TvShow> {
    let title = field(row, columns, "title")?;
    let genre = field(row, columns, "genre").unwrap_or("");
    let num_episodes: i64 = field(row, columns, "episodes")?.parse().ok()?;
    let avg_rating: f64 = field(row, columns, "rating")?.parse().ok()?;
    let language = field(row, columns, "language").unwrap_or("");
    let year = field(row, columns, "year").and_then(|y| y.parse::<i32>().ok());

    TvShow::new(title, genre, num_episodes, avg_rating, language, year).ok()
}

/// Parse one TMDB-schema row into a show.
///
/// Column mapping: `name` -> title, `genres` -> genre tags (comma-joined),
/// `number_of_episodes` -> episodes, `vote_average` -> rating,
/// `original_language` -> language, `first_air_date` -> year (the leading
/// YYYY of a YYYY-MM-DD date).
fn parse_tmdb_row(row: &[String], columns: &HashMap<String, usize>) -> Option<TvShow> {
    let title = field(row, columns, "name")?;
    let genres = field(row, columns, "genres").unwrap_or("");
    let num_episodes: i64 = field(row, columns, "number_of_episodes")?.parse().ok()?;
    let avg_rating: f64 = field(row, columns, "vote_average")?.parse().ok()?;
    let language = field(row, columns, "original_language").unwrap_or("");
    let year = field(row, columns, "first_air_date")
        .and_then(|date| date.get(..4))
        .and_then(|year| year.parse::<i32>().ok());

    TvShow::new(title, genres, num_episodes, avg_rating, language, year).ok()
}

/// Load the project CSV (`title,genre,episodes,rating,language,year`).
///
/// Rows are independent, so they are parsed in parallel; the result keeps
/// the file's row order.
///
/// # Errors
/// [`CatalogError::FileNotFound`] if `path` does not exist; malformed rows
/// are counted in [`LoadOutcome::skipped_rows`] instead of erroring.
pub fn load_shows_from_csv(path: &Path) -> Result<LoadOutcome> {
    let content = read_source(path)?;
    let mut lines = content.lines();

    let columns = match lines.next() {
        Some(header) => header_positions(header),
        None => {
            return Ok(LoadOutcome {
                shows: Vec::new(),
                skipped_rows: 0,
            });
        }
    };

    let rows: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
    let parsed: Vec<Option<TvShow>> = rows
        .par_iter()
        .map(|line| parse_project_row(&split_csv_line(line), &columns))
        .collect();

    let total_rows = parsed.len();
    let shows: Vec<TvShow> = parsed.into_iter().flatten().collect();
    let skipped_rows = total_rows - shows.len();
    if skipped_rows > 0 {
        tracing::warn!(
            "Skipped {} malformed rows while loading {}",
            skipped_rows,
            path.display()
        );
    }

    Ok(LoadOutcome {
        shows,
        skipped_rows,
    })
}

/// Load the Kaggle TMDB TV dataset (v3), mapping its columns onto show
/// fields (see [`parse_tmdb_row`] for the mapping).
///
/// Stops once `limit` valid shows have been produced; `None` loads the whole
/// file. The early exit keeps this loader sequential.
///
/// # Errors
/// [`CatalogError::FileNotFound`] if `path` does not exist; malformed rows
/// are counted in [`LoadOutcome::skipped_rows`] instead of erroring.
pub fn load_shows_from_tmdb_csv(path: &Path, limit: Option<usize>) -> Result<LoadOutcome> {
    let content = read_source(path)?;
    let mut lines = content.lines();

    let columns = match lines.next() {
        Some(header) => header_positions(header),
        None => {
            return Ok(LoadOutcome {
                shows: Vec::new(),
                skipped_rows: 0,
            });
        }
    };

    let mut shows = Vec::new();
    let mut skipped_rows = 0;

    for line in lines {
        if limit.is_some_and(|max| shows.len() >= max) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_tmdb_row(&split_csv_line(line), &columns) {
            Some(show) => shows.push(show),
            None => skipped_rows += 1,
        }
    }

    if skipped_rows > 0 {
        tracing::warn!(
            "Skipped {} malformed rows while loading {}",
            skipped_rows,
            path.display()
        );
    }

    Ok(LoadOutcome {
        shows,
        skipped_rows,
    })
}
