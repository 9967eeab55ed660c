use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cinecast::{
    AppConfig, GeocodingClient, MovieClient, Recommendation, Recommender, WeatherClient, roulette,
};

#[derive(Parser, Debug)]
#[command(name = "cinecast", version, about = "날씨에 어울리는 영화 추천과 선택 룰렛")]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick one option at random from a comma-separated list
    Pick {
        /// Comma-separated options, e.g. "짜장면, 짬뽕, 볶음밥"
        #[arg(long)]
        options: String,
    },
    /// Recommend a movie matched to the current weather in a city
    Recommend {
        /// City name to look up
        #[arg(long)]
        city: String,
        /// OMDb API key; falls back to the configured key
        #[arg(long)]
        api_key: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;

    init_logging(&config, cli.verbose);

    match cli.command {
        Command::Pick { options } => run_pick(&options),
        Command::Recommend { city, api_key } => run_recommend(&config, &city, api_key),
    }
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let level = if verbose { "debug" } else { &config.logging.level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cinecast={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_pick(options: &str) -> Result<()> {
    match roulette::pick(options) {
        Some(choice) => {
            println!("🎉 당신의 선택은... '{choice}' 입니다! 🎉");
            Ok(())
        }
        None => {
            eprintln!("룰렛 항목을 입력해주세요. 예: --options \"짜장면, 짬뽕, 볶음밥\"");
            std::process::exit(1);
        }
    }
}

fn run_recommend(config: &AppConfig, city: &str, api_key: Option<String>) -> Result<()> {
    let api_key = api_key
        .or_else(|| config.movie.api_key.clone())
        .unwrap_or_default();

    let recommender = Recommender::new(
        GeocodingClient::new(config)?,
        WeatherClient::new(config)?,
        MovieClient::new(config)?,
    );

    match recommender.recommend(city, &api_key) {
        Ok(result) => {
            render(&result);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}

fn render(result: &Recommendation) {
    let conditions = result.conditions;

    println!("📍 {}", result.city);
    println!(
        "🌡️ 현재 날씨: {} ({})",
        conditions.description,
        result.weather.format_temperature()
    );
    println!("🖼️ 오늘의 풍경: {}", conditions.image_prompt);
    println!(
        "🎬 {}에는 {} 영화 어때요? 추천작: '{}'",
        conditions.weather_phrase, conditions.genre, conditions.movie_title
    );

    if let Some(movie) = &result.movie {
        println!();
        println!("   {} ({})", movie.title, movie.released);
        println!("   장르: {}", movie.genre);
        println!("   IMDb 평점: {}", movie.imdb_rating);
        if let Some(poster) = &movie.poster_url {
            println!("   포스터: {poster}");
        }
        println!("   줄거리: {}", movie.plot);
    }

    if let Some(advisory) = &result.advisory {
        println!();
        println!("⚠️ {advisory}");
    }
}
