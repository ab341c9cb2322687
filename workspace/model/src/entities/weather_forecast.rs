use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::summary::Summary;

/// Divisor used when deriving Fahrenheit from the stored Celsius value.
const CELSIUS_PER_FAHRENHEIT_DEGREE: f64 = 0.5556;

/// A single day of generated forecast.
///
/// Only the Celsius temperature is stored. The Fahrenheit value is derived on
/// read so the two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecast {
    date: NaiveDate,
    temperature_c: i32,
    summary: Summary,
}

impl WeatherForecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Summary) -> Self {
        Self {
            date,
            temperature_c,
            summary,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// `32 + floor(celsius / 0.5556)`
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / CELSIUS_PER_FAHRENHEIT_DEGREE).floor() as i32
    }
}
