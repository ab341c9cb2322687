//! Domain values of the weather forecast service.
//!
//! Everything in here is plain data: records are built fresh for every
//! request and dropped once the response has been written.

pub mod entities;

pub use entities::summary::Summary;
pub use entities::weather_forecast::WeatherForecast;
