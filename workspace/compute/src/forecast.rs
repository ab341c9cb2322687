//! Random forecast generation.
//!
//! A generator turns a day count into an ordered run of [`WeatherForecast`]
//! records, one per day starting tomorrow. Temperatures and labels are
//! sampled from a random source; the dates and the number of records are
//! fully determined by the day count and the current date.

use crate::error::{ComputeError, Result};
use chrono::{Days, NaiveDate, Utc};
use model::{Summary, WeatherForecast};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, trace};

/// Lowest temperature that can be sampled, in degrees Celsius.
pub const MIN_TEMPERATURE_C: i32 = -20;
/// Highest temperature that can be sampled, in degrees Celsius.
pub const MAX_TEMPERATURE_C: i32 = 54;

/// Produces forecast sequences.
///
/// Implementations are shared between concurrently handled requests, so they
/// must be `Send + Sync`. The request layer only ever sees this trait.
pub trait ForecastGenerator: Send + Sync + fmt::Debug {
    /// Generates `days` consecutive forecasts, the first one dated tomorrow.
    ///
    /// Fails with [`ComputeError::InvalidArgument`] when `days` is zero or
    /// negative.
    fn generate(&self, days: i32) -> Result<Vec<WeatherForecast>>;
}

/// Generator backed by an injectable random number source.
pub struct RandomForecastGenerator<R> {
    rng: Mutex<R>,
    today: Option<NaiveDate>,
}

impl<R: Rng + Send> RandomForecastGenerator<R> {
    /// Creates a generator drawing from `rng`.
    ///
    /// `today` pins the reference date; with `None` the current UTC date is
    /// read on every call.
    pub fn new(rng: R, today: Option<NaiveDate>) -> Self {
        Self {
            rng: Mutex::new(rng),
            today,
        }
    }

    fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl RandomForecastGenerator<StdRng> {
    /// Reproducible generator, mostly useful in tests.
    pub fn seeded(seed: u64, today: Option<NaiveDate>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), today)
    }
}

impl<R> fmt::Debug for RandomForecastGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomForecastGenerator")
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

impl<R: Rng + Send> ForecastGenerator for RandomForecastGenerator<R> {
    fn generate(&self, days: i32) -> Result<Vec<WeatherForecast>> {
        if days <= 0 {
            return Err(ComputeError::InvalidArgument(format!(
                "days must be a positive number, got {}",
                days
            )));
        }

        let today = self.reference_date();
        debug!("Generating {} day forecast from {}", days, today);

        // A panic elsewhere cannot leave the RNG in an inconsistent state,
        // so a poisoned lock is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (1..=days)
            .map(|day_offset| {
                let date = today
                    .checked_add_days(Days::new(day_offset as u64))
                    .ok_or_else(|| {
                        ComputeError::Date(format!(
                            "{} plus {} days is out of the supported calendar range",
                            today, day_offset
                        ))
                    })?;
                let temperature_c = rng.gen_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
                let summary = Summary::ALL[rng.gen_range(0..Summary::ALL.len())];

                trace!("Day +{}: {} {}C {}", day_offset, date, temperature_c, summary);
                Ok(WeatherForecast::new(date, temperature_c, summary))
            })
            .collect()
    }
}
