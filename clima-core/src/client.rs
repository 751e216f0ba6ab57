use reqwest::Client;
use tokio::task::JoinHandle;

use crate::{
    config::{Config, Units},
    error::WeatherError,
    model::{WeatherQuery, WeatherResult},
    wire,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Outcome of one fetch, as handed to closure observers.
pub type WeatherOutcome = Result<WeatherResult, WeatherError>;

/// Receives the outcome of exactly one fetch.
///
/// Both hooks consume the observer, so a dispatched call notifies it once.
/// Any `FnOnce(WeatherOutcome)` closure is an observer.
pub trait WeatherObserver: Send + 'static {
    fn on_weather_updated(self, result: WeatherResult);
    fn on_failure(self, error: WeatherError);
}

impl<F> WeatherObserver for F
where
    F: FnOnce(WeatherOutcome) + Send + 'static,
{
    fn on_weather_updated(self, result: WeatherResult) {
        self(Ok(result))
    }

    fn on_failure(self, error: WeatherError) {
        self(Err(error))
    }
}

/// Client for the OpenWeather current-weather endpoint.
///
/// Cloning is cheap and clones share one connection pool. Calls are
/// independent of each other: nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    endpoint: String,
    units: Units,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            units: Units::default(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut client = Self::new(config.api_key()?).with_units(config.units);
        if let Some(endpoint) = &config.endpoint {
            client = client.with_endpoint(endpoint.clone());
        }
        Ok(client)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a preconfigured HTTP client (proxy, TLS or pool settings).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// Query parameters for `query`. Values are raw; percent-encoding happens
    /// when they are attached to the request URL.
    pub fn request_params(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("appid", self.api_key.clone()),
            ("units", self.units.as_str().to_string()),
        ];

        match query {
            WeatherQuery::City { name } => params.push(("q", name.clone())),
            WeatherQuery::Coordinates { latitude, longitude } => {
                params.push(("lat", latitude.to_string()));
                params.push(("lon", longitude.to_string()));
            }
        }

        params
    }

    /// Fetch current weather for `query` with a single GET.
    ///
    /// Any non-2xx status is reported as [`WeatherError::Status`] without
    /// looking at the body.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResult, WeatherError> {
        tracing::debug!(%query, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&self.request_params(query))
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Transport)?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let result = wire::decode(&body)?;
        tracing::debug!(
            %query,
            city = result.city_name(),
            condition_id = result.condition_id(),
            "decoded current weather"
        );

        Ok(result)
    }

    /// Start a fetch on the tokio runtime and hand the outcome to `observer`.
    ///
    /// Returns immediately. Overlapping dispatches run independently and
    /// complete in whatever order their responses arrive. Must be called from
    /// within a tokio runtime.
    pub fn dispatch<O>(&self, query: WeatherQuery, observer: O) -> JoinHandle<()>
    where
        O: WeatherObserver,
    {
        let client = self.clone();
        tokio::spawn(async move {
            match client.fetch(&query).await {
                Ok(result) => observer.on_weather_updated(result),
                Err(error) => observer.on_failure(error),
            }
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
