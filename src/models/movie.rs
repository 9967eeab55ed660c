//! Movie metadata returned by the movie service

use serde::{Deserialize, Serialize};

/// Movie metadata from the movie lookup service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieDetails {
    /// Movie title as reported by the service
    pub title: String,
    /// Release date string, e.g. "15 May 2015"
    pub released: String,
    /// Genre list string, e.g. "Action, Adventure, Sci-Fi"
    pub genre: String,
    /// IMDb rating string, e.g. "8.1"
    pub imdb_rating: String,
    /// Poster image URL; `None` when the service reports no poster
    pub poster_url: Option<String>,
    /// Full plot text
    pub plot: String,
}
