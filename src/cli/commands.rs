pub mod forecast;
pub mod serve;

pub use forecast::print_forecast;
pub use serve::serve;
