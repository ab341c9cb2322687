use compute::ForecastGenerator;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

use crate::handlers::weather_forecast::WeatherForecastResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast generator shared by all requests
    pub generator: Arc<dyn ForecastGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ForecastGenerator>) -> Self {
        Self { generator }
    }
}

/// Query parameters for the weather forecast endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Number of days to forecast (default: 5, max: 30)
    #[validate(range(min = 1, max = 30))]
    pub days: Option<i32>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::weather_forecast::get_weather_forecast,
    ),
    components(
        schemas(
            WeatherForecastResponse,
            ForecastQuery,
        )
    ),
    tags(
        (name = "weather-forecast", description = "Random weather forecast endpoints"),
    ),
    info(
        title = "Weather Forecast API",
        description = "Returns randomly generated weather forecasts for the coming days",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
