use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use clima_core::{Config, Units, WeatherClient, WeatherOutcome, WeatherQuery};
use tokio::sync::mpsc;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather from OpenWeather")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred units.
    Configure,

    /// Show current weather for cities and/or coordinates.
    Show {
        /// City names, e.g. "London" or "New York".
        cities: Vec<String>,

        /// Coordinates as LAT,LON; may be repeated.
        #[arg(long = "at", value_name = "LAT,LON", value_parser = parse_coordinates, allow_hyphen_values = true)]
        at: Vec<(f64, f64)>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { cities, at } => {
                let queries = cities
                    .into_iter()
                    .map(WeatherQuery::city)
                    .chain(at.into_iter().map(|(lat, lon)| WeatherQuery::coordinates(lat, lon)))
                    .collect();
                show(queries).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let units = inquire::Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(Units::all().iter().position(|u| *u == config.units).unwrap_or(0))
        .prompt()
        .context("Failed to read units")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(queries: Vec<WeatherQuery>) -> anyhow::Result<()> {
    if queries.is_empty() {
        bail!("Nothing to show: pass a city name or --at LAT,LON");
    }

    let config = Config::load()?;
    let client = WeatherClient::from_config(&config)?;
    let symbol = client.units().symbol();

    let (tx, mut rx) = mpsc::unbounded_channel();
    for query in queries {
        let tx = tx.clone();
        let label = query.to_string();
        client.dispatch(query, move |outcome: WeatherOutcome| {
            let _ = tx.send((label, outcome));
        });
    }
    drop(tx);

    let mut failures = 0usize;
    while let Some((label, outcome)) = rx.recv().await {
        match outcome {
            Ok(weather) => println!(
                "{}: {}{} {} ({})",
                weather.city_name(),
                weather.temperature_string(),
                symbol,
                weather.condition_icon_id(),
                weather.description(),
            ),
            Err(err) => {
                failures += 1;
                tracing::warn!(query = %label, kind = %err.kind(), error = %err, "weather request failed");
                println!("{label}: {} error: {err}", err.kind());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} weather request(s) failed");
    }
    Ok(())
}

fn parse_coordinates(value: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{value}'"))?;

    let parse = |part: &str, name: &str| -> Result<f64, String> {
        let v: f64 = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid {name} '{}'", part.trim()))?;
        if !v.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
        Ok(v)
    };

    Ok((parse(lat, "latitude")?, parse(lon, "longitude")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pair() {
        assert_eq!(parse_coordinates("51.5,-0.12"), Ok((51.5, -0.12)));
        assert_eq!(parse_coordinates(" -33.87 , 151.21 "), Ok((-33.87, 151.21)));
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(parse_coordinates("51.5").is_err());
        assert!(parse_coordinates("north,-0.12").is_err());
        assert!(parse_coordinates("NaN,1").is_err());
        assert!(parse_coordinates("1,inf").is_err());
    }

    #[test]
    fn show_accepts_cities_and_coordinates() {
        let cli = Cli::try_parse_from(["clima", "show", "New York", "--at", "-33.87,151.21"])
            .expect("valid arguments");

        match cli.command {
            Command::Show { cities, at } => {
                assert_eq!(cities, vec!["New York".to_string()]);
                assert_eq!(at, vec![(-33.87, 151.21)]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
