use std::time::Duration;

/// User agent string for HTTP requests. Nominatim rejects anonymous clients.
pub const USER_AGENT: &str = concat!("weather-forecast-skill/", env!("CARGO_PKG_VERSION"));

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Nominatim (OpenStreetMap) geocoding API base URL
pub const NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Per-request timeout, applied to every call of both tools
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of forecast periods kept (roughly 3.5 days of day/night halves)
pub const FORECAST_PERIOD_LIMIT: usize = 7;

/// Number of hourly periods kept
pub const HOURLY_PERIOD_LIMIT: usize = 24;

pub const NOT_COVERED_MESSAGE: &str =
    "Location not covered by National Weather Service. This API only supports US territories.";
