pub mod error;
pub mod forecast;

use chrono::NaiveDate;
use forecast::RandomForecastGenerator;
use rand::{SeedableRng, rngs::StdRng};

pub use forecast::ForecastGenerator;

/// Returns the generator used by the running service.
///
/// The random source is seeded from the operating system. When `today` is
/// `None` every call to `generate` reads the current UTC date, otherwise the
/// given date is treated as "today" for all calls.
pub fn default_generator(today: Option<NaiveDate>) -> RandomForecastGenerator<StdRng> {
    RandomForecastGenerator::new(StdRng::from_entropy(), today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_with_fixed_today() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 22).unwrap();
        let generator = default_generator(Some(today));

        let forecasts = generator.generate(3).expect("generation should succeed");

        let dates: Vec<NaiveDate> = forecasts.iter().map(|f| f.date()).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 6, 23).unwrap(),
                NaiveDate::from_ymd_opt(2026, 6, 24).unwrap(),
                NaiveDate::from_ymd_opt(2026, 6, 25).unwrap(),
            ]
        );
    }

    #[test]
    fn test_default_generator_starts_tomorrow_in_utc() {
        let before = chrono::Utc::now().date_naive();
        let forecasts = default_generator(None).generate(1).unwrap();
        let after = chrono::Utc::now().date_naive();

        let first = forecasts[0].date();
        assert!(
            first == before.succ_opt().unwrap() || first == after.succ_opt().unwrap(),
            "first forecast date {} is not tomorrow",
            first
        );
    }
}
