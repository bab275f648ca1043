use reqwest::StatusCode;

use crate::client::{ApiClient, Endpoints};
use crate::constants::{FORECAST_PERIOD_LIMIT, HOURLY_PERIOD_LIMIT};
use crate::error::{ForecastError, RequestError};
use crate::models::{
    AlertResponse, AlertSummary, CurrentConditions, ForecastPeriod, ForecastReport, ForecastResponse,
    PeriodList, PointsResponse, ReportLocation,
};

/// Runs the points → forecast → hourly → alerts chain against the NWS API.
#[derive(Clone)]
pub struct ForecastFetcher {
    client: ApiClient,
    nws_base: String,
}

impl ForecastFetcher {
    /// Creates a fetcher against the public NWS API
    pub fn new() -> Result<Self, ForecastError> {
        Self::with_endpoints(&Endpoints::default())
    }

    /// Creates a fetcher against the given base URLs
    pub fn with_endpoints(endpoints: &Endpoints) -> Result<Self, ForecastError> {
        Ok(Self {
            client: ApiClient::new()?,
            nws_base: endpoints.nws.clone(),
        })
    }

    /// Fetches the combined report for a coordinate.
    ///
    /// Requests run strictly one after another and the first failure aborts
    /// the chain; nothing fetched before it is returned.
    pub async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastReport, ForecastError> {
        tracing::info!("Getting forecast for coordinates: {}, {}", latitude, longitude);

        let points_url = format!("{}/points/{},{}", self.nws_base, latitude, longitude);
        let points = self
            .client
            .get_json::<PointsResponse>(&points_url, &[])
            .await
            .map_err(|e| match e {
                RequestError::Status {
                    status: StatusCode::NOT_FOUND,
                    ..
                } => ForecastError::NotCovered,
                other => other.into(),
            })?;
        let points = points.properties;

        tracing::info!("Fetching forecast from {}", points.forecast);
        let forecast = self
            .client
            .get_json::<ForecastResponse>(&points.forecast, &[])
            .await?;

        tracing::info!("Fetching hourly forecast from {}", points.forecast_hourly);
        let hourly = self
            .client
            .get_json::<ForecastResponse>(&points.forecast_hourly, &[])
            .await?;

        let alerts_url = format!("{}/alerts/active", self.nws_base);
        let point = format!("{},{}", latitude, longitude);
        tracing::info!("Fetching active alerts for point {}", point);
        let alerts = self
            .client
            .get_json::<AlertResponse>(&alerts_url, &[("point", point.as_str())])
            .await?;

        let periods = forecast.properties.periods;
        let first = periods
            .first()
            .cloned()
            .ok_or_else(|| ForecastError::Format("forecast contains no periods".to_string()))?;
        let first: ForecastPeriod = serde_json::from_value(first)
            .map_err(|e| ForecastError::Format(format!("first forecast period: {e}")))?;
        let current = CurrentConditions::from(&first);

        let relative = points.relative_location.properties;
        Ok(ForecastReport {
            location: ReportLocation {
                lat: latitude,
                lon: longitude,
                city: relative.city,
                state: relative.state,
            },
            current,
            forecast: PeriodList::truncated(periods, FORECAST_PERIOD_LIMIT),
            hourly: PeriodList::truncated(hourly.properties.periods, HOURLY_PERIOD_LIMIT),
            alerts: alerts.features.into_iter().map(AlertSummary::from).collect(),
        })
    }
}
