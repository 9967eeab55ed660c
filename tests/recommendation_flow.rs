//! End-to-end recommendation flow exercised through the public API with
//! stubbed service collaborators.

use cinecast::{
    CinecastError, Coordinates, CurrentWeather, ForecastService, GeocodeService, MovieDetails,
    MovieService, Recommender, WeatherKind, conditions, roulette,
};

struct FixedGeocoder(Coordinates);

impl GeocodeService for FixedGeocoder {
    fn resolve(&self, _place: &str) -> cinecast::Result<Option<Coordinates>> {
        Ok(Some(self.0.clone()))
    }
}

struct FixedForecast(i32, f64);

impl ForecastService for FixedForecast {
    fn current(&self, _coords: &Coordinates) -> cinecast::Result<CurrentWeather> {
        Ok(CurrentWeather {
            temperature_celsius: self.1,
            weather_code: self.0,
        })
    }
}

/// Records the title it was asked for, then succeeds.
struct RecordingMovies(std::sync::Mutex<Option<String>>);

impl MovieService for RecordingMovies {
    fn lookup(&self, title: &str, _api_key: &str) -> cinecast::Result<MovieDetails> {
        *self.0.lock().unwrap() = Some(title.to_string());
        Ok(MovieDetails {
            title: title.to_string(),
            released: "15 May 2015".to_string(),
            genre: "Action".to_string(),
            imdb_rating: "8.1".to_string(),
            poster_url: None,
            plot: "...".to_string(),
        })
    }
}

struct FailingMovies;

impl MovieService for FailingMovies {
    fn lookup(&self, _title: &str, _api_key: &str) -> cinecast::Result<MovieDetails> {
        Err(CinecastError::transport("movie", "connection reset"))
    }
}

#[test]
fn recommendation_looks_up_the_bucket_movie_title() {
    let movies = RecordingMovies(std::sync::Mutex::new(None));
    let recommender = Recommender::new(
        FixedGeocoder(Coordinates::new(37.5667, 126.9783)),
        FixedForecast(99, 24.0),
        movies,
    );

    let result = recommender.recommend("Seoul", "key").unwrap();
    assert_eq!(result.conditions.kind, WeatherKind::Thunderstorm);
    assert_eq!(
        result.movie.as_ref().unwrap().title,
        "Mad Max: Fury Road"
    );
}

#[test]
fn weather_survives_movie_outage() {
    let recommender = Recommender::new(
        FixedGeocoder(Coordinates::new(52.52, 13.405)),
        FixedForecast(71, -2.3),
        FailingMovies,
    );

    let result = recommender.recommend("Berlin", "key").unwrap();
    assert_eq!(result.weather.temperature_celsius, -2.3);
    assert_eq!(result.conditions.kind, WeatherKind::Snow);
    assert!(result.movie.is_none());
    assert!(result.advisory.is_some());
}

#[test]
fn condition_table_is_total_for_arbitrary_codes() {
    for code in [-3, 12, 44, 70, 500] {
        let profile = conditions::describe(code);
        assert_eq!(profile.kind, WeatherKind::Other);
        assert_eq!(profile.movie_title, "Inception");
    }
}

#[test]
fn roulette_pick_honors_parse_rules() {
    assert!(roulette::pick(",  ,").is_none());

    let choice = roulette::pick("짜장면, 짬뽕, 볶음밥").unwrap();
    assert!(["짜장면", "짬뽕", "볶음밥"].contains(&choice.as_str()));
}
