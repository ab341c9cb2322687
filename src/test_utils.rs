#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use compute::forecast::RandomForecastGenerator;
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Date the test generator treats as "today"
    pub fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 22).unwrap()
    }

    /// Create AppState for testing with a seeded generator and a fixed date
    pub fn setup_test_app_state() -> AppState {
        let generator = RandomForecastGenerator::seeded(2026, Some(test_today()));
        AppState::new(Arc::new(generator))
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from the RUST_LOG environment variable and
    /// defaults to WARN. Only the first call in a test binary installs the
    /// subscriber.
    fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        init_test_tracing();
        create_router(setup_test_app_state())
    }
}
