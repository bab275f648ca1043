//! Command-line helpers for US weather lookups.
//!
//! * `geocode` resolves a city name to coordinates through Nominatim.
//! * `get_forecast` chains the National Weather Service points, forecast,
//!   hourly forecast, and active alerts endpoints into one report.
//!
//! Both binaries print a single pretty-printed JSON object to stdout, either
//! the result or `{"error": "..."}`. Logs go to stderr.

pub mod client;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod geocode;
pub mod models;

pub use client::{ApiClient, Endpoints};
pub use error::{ForecastError, GeocodeError, RequestError};
pub use forecast::ForecastFetcher;
pub use geocode::Geocoder;
pub use models::{ForecastReport, Place};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_forecast_skill=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
