//! Root for the forecast value types.

pub mod summary;
pub mod weather_forecast;
