use anyhow::{Context, Result};
use compute::{ForecastGenerator, default_generator, forecast::RandomForecastGenerator};
use tracing::debug;

use crate::handlers::weather_forecast::WeatherForecastResponse;

/// Generates a forecast and writes it to stdout in the same JSON shape the
/// HTTP endpoint returns.
pub fn print_forecast(days: i32, seed: Option<u64>) -> Result<()> {
    debug!("Printing {} day forecast (seed: {:?})", days, seed);

    let forecasts = match seed {
        Some(seed) => RandomForecastGenerator::seeded(seed, None).generate(days),
        None => default_generator(None).generate(days),
    }
    .with_context(|| format!("Failed to generate a {} day forecast", days))?;

    let body: Vec<WeatherForecastResponse> = forecasts
        .into_iter()
        .map(WeatherForecastResponse::from)
        .collect();

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
