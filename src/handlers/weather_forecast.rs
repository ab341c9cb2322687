use crate::schemas::{AppState, ForecastQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use compute::error::ComputeError;
use model::WeatherForecast;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Number of days forecast when the request does not say
pub const DEFAULT_FORECAST_DAYS: i32 = 5;

/// Body of the 400 response for an out of range `days` parameter
pub const DAYS_OUT_OF_RANGE_MESSAGE: &str = "Days parameter must be between 1 and 30.";

/// Response structure for a single forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastResponse {
    /// Forecast date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Temperature in degrees Celsius
    #[schema(example = 21)]
    pub temperature_in_celsius: i32,
    /// Descriptive label such as "Chilly" or "Balmy"
    #[schema(example = "Mild")]
    pub summary: Option<String>,
    /// Temperature in degrees Fahrenheit, derived from the Celsius value
    #[schema(example = 69)]
    pub temperature_in_fahrenheit: i32,
}

impl From<WeatherForecast> for WeatherForecastResponse {
    fn from(forecast: WeatherForecast) -> Self {
        Self {
            date: forecast.date(),
            temperature_in_celsius: forecast.temperature_c(),
            summary: Some(forecast.summary().to_string()),
            temperature_in_fahrenheit: forecast.temperature_f(),
        }
    }
}

/// Get a random weather forecast for the coming days
#[utoipa::path(
    get,
    path = "/api/weatherforecast",
    tag = "weather-forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Weather forecast generated successfully", body = Vec<WeatherForecastResponse>),
        (status = 400, description = "Invalid days parameter", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn get_weather_forecast(
    Query(query): Query<ForecastQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherForecastResponse>>, (StatusCode, String)> {
    trace!("Entering get_weather_forecast function");

    if let Err(e) = query.validate() {
        warn!("Rejecting forecast request: {}", e);
        return Err((StatusCode::BAD_REQUEST, DAYS_OUT_OF_RANGE_MESSAGE.to_string()));
    }

    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    debug!("Generating forecast for {} days", days);

    match state.generator.generate(days) {
        Ok(forecasts) => {
            info!("Generated {} forecast days", forecasts.len());
            let response = forecasts
                .into_iter()
                .map(WeatherForecastResponse::from)
                .collect();
            Ok(Json(response))
        }
        Err(ComputeError::InvalidArgument(message)) => {
            warn!("Generator rejected days={}: {}", days, message);
            Err((StatusCode::BAD_REQUEST, message))
        }
        Err(e) => {
            error!("Failed to generate forecast: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
