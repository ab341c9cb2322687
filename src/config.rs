use compute::default_generator;
use std::sync::Arc;

use crate::schemas::AppState;

/// Address used when neither `--bind-address` nor `BIND_ADDRESS` is given.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Initialize application state
pub fn initialize_app_state() -> AppState {
    tracing::info!("Using random forecast generator seeded from the OS");
    AppState::new(Arc::new(default_generator(None)))
}
