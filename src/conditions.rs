//! Weather-code mapping tables
//!
//! Buckets the WMO weather codes reported by the weather service into seven
//! condition classes and maps each class to a fixed description, image
//! prompt, and movie recommendation. The mapping is total: any code outside
//! the enumerated sets falls to [`WeatherKind::Other`].

use serde::Serialize;

/// Condition class for a WMO weather code
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Fog,
    Other,
}

/// Fixed outcome for one condition class.
///
/// `image_prompt` is inert descriptive data: it is shown to the user but
/// never sent to an image-generation service.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ConditionProfile {
    pub kind: WeatherKind,
    /// Human-readable weather description
    pub description: &'static str,
    /// Prompt string describing the scene
    pub image_prompt: &'static str,
    /// Recommended movie genre for this weather
    pub genre: &'static str,
    /// Day phrase used when presenting the recommendation
    pub weather_phrase: &'static str,
    /// Canonical movie title looked up at the movie service
    pub movie_title: &'static str,
}

static CLEAR: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Clear,
    description: "맑음",
    image_prompt: "A bright sunny day over a city skyline, clear blue sky, warm golden sunlight",
    genre: "로맨스/코미디",
    weather_phrase: "맑은 날",
    movie_title: "La La Land",
};

static CLOUDY: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Cloudy,
    description: "흐림",
    image_prompt: "An overcast city street under soft grey clouds, muted diffused light",
    genre: "드라마",
    weather_phrase: "흐린 날",
    movie_title: "Forrest Gump",
};

static RAIN: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Rain,
    description: "비",
    image_prompt: "Rain falling on a city street at dusk, umbrellas and reflections on wet asphalt",
    genre: "멜로/감성",
    weather_phrase: "비 오는 날",
    movie_title: "The Notebook",
};

static SNOW: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Snow,
    description: "눈",
    image_prompt: "Snow falling gently over rooftops, soft white light, quiet winter streets",
    genre: "판타지/가족",
    weather_phrase: "눈 오는 날",
    movie_title: "Frozen",
};

static THUNDERSTORM: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Thunderstorm,
    description: "뇌우",
    image_prompt: "Dramatic lightning splitting a dark storm sky over the city, heavy rain",
    genre: "액션/스릴러",
    weather_phrase: "천둥 치는 날",
    movie_title: "Mad Max: Fury Road",
};

static FOG: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Fog,
    description: "안개",
    image_prompt: "A city disappearing into thick morning fog, dim street lamps, low visibility",
    genre: "미스터리/스릴러",
    weather_phrase: "안개 낀 날",
    movie_title: "Shutter Island",
};

static OTHER: ConditionProfile = ConditionProfile {
    kind: WeatherKind::Other,
    description: "알 수 없음",
    image_prompt: "A city under changing skies, unpredictable weather",
    genre: "장르 무관",
    weather_phrase: "어떤 날씨",
    movie_title: "Inception",
};

/// Classify a WMO weather code into its condition class.
///
/// Total over all integers; codes outside the enumerated buckets map to
/// [`WeatherKind::Other`].
#[must_use]
pub fn classify(code: i32) -> WeatherKind {
    match code {
        0 | 1 => WeatherKind::Clear,
        2 | 3 => WeatherKind::Cloudy,
        45 | 48 => WeatherKind::Fog,
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => WeatherKind::Rain,
        71 | 73 | 75 | 77 | 85 | 86 => WeatherKind::Snow,
        95 | 96 | 99 => WeatherKind::Thunderstorm,
        _ => WeatherKind::Other,
    }
}

/// Look up the condition profile for a WMO weather code.
///
/// Never partial: unmapped codes return the fallback profile.
#[must_use]
pub fn describe(code: i32) -> &'static ConditionProfile {
    match classify(code) {
        WeatherKind::Clear => &CLEAR,
        WeatherKind::Cloudy => &CLOUDY,
        WeatherKind::Rain => &RAIN,
        WeatherKind::Snow => &SNOW,
        WeatherKind::Thunderstorm => &THUNDERSTORM,
        WeatherKind::Fog => &FOG,
        WeatherKind::Other => &OTHER,
    }
}
