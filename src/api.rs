//! OpenWeatherMap forecast client
//!
//! Side effects stay out of the reducer: `ForecastFetch` spawns a task
//! that calls [`WeatherClient::fetch_forecast`] and sends the result back
//! as a `Did*` action. Temperatures are returned in kelvin, exactly as the
//! API delivers them; conversion happens at render time.

use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::state::ForecastEntry;

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Why a lookup failed. The UI collapses all of these into one fixed
/// localized message; the distinction exists for the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured (set OPENWEATHER_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the forecast list for a city.
    ///
    /// A missing key fails here rather than at startup, so the app opens
    /// normally and the failure surfaces like any other lookup failure.
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let url = format!(
            "{}?q={}&appid={}",
            FORECAST_URL,
            urlencoding::encode(city),
            api_key
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ForecastResponse = response.json().await?;
        Ok(parsed.list.into_iter().map(ForecastEntry::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ApiEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    main: ApiMain,
    #[serde(default)]
    weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

impl From<ApiEntry> for ForecastEntry {
    fn from(entry: ApiEntry) -> Self {
        ForecastEntry {
            temp_kelvin: entry.main.temp,
            description: entry
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body
            .char_indices()
            .take_while(|&(i, _)| i < MAX)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_forecast_response() {
        let json = r#"{
            "list": [
                {"main": {"temp": 300.0}, "weather": [{"description": "clear sky"}]},
                {"main": {"temp": 295.5}, "weather": [{"description": "light rain"}]}
            ]
        }"#;

        let parsed: ForecastResponse = serde_json::from_str(json).expect("valid forecast json");
        let entries: Vec<ForecastEntry> =
            parsed.list.into_iter().map(ForecastEntry::from).collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].temp_kelvin, 300.0);
        assert_eq!(entries[0].description, "clear sky");
        assert_eq!(entries[1].description, "light rain");
    }

    #[test]
    fn entry_without_conditions_gets_empty_description() {
        let json = r#"{"list": [{"main": {"temp": 280.2}, "weather": []}]}"#;

        let parsed: ForecastResponse = serde_json::from_str(json).expect("valid forecast json");
        let entries: Vec<ForecastEntry> =
            parsed.list.into_iter().map(ForecastEntry::from).collect();

        assert_eq!(entries[0].description, "");
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = WeatherClient::new(&Config { api_key: None });

        let err = client.fetch_forecast("Kathmandu").await.unwrap_err();
        assert!(matches!(err, FetchError::MissingApiKey));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "क".repeat(200);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() < long.len());
    }
}
