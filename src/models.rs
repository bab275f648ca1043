use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Nominatim API Models
// ============================================================================

/// One entry of the `/search` result array. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    pub forecast: String,
    #[serde(rename = "forecastHourly")]
    pub forecast_hourly: String,
    #[serde(rename = "relativeLocation")]
    pub relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    /// Kept as raw JSON; only the first forecast period is decoded into a
    /// [`ForecastPeriod`], the listed periods are written back out unchanged.
    pub periods: Vec<Value>,
}

/// The fields of the leading forecast period that feed `current`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default)]
    pub name: String,
    pub temperature: i32,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    #[serde(rename = "detailedForecast", default)]
    pub detailed_forecast: String,
}

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub event: String,
    pub headline: Option<String>,
    pub severity: String,
    pub urgency: String,
}

// ============================================================================
// Tool Output Models
// ============================================================================

/// Successful geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// Combined result of the four chained NWS lookups.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub location: ReportLocation,
    pub current: CurrentConditions,
    pub forecast: PeriodList,
    pub hourly: PeriodList,
    pub alerts: Vec<AlertSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportLocation {
    pub lat: f64,
    pub lon: f64,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: i32,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

impl From<&ForecastPeriod> for CurrentConditions {
    fn from(period: &ForecastPeriod) -> Self {
        Self {
            temperature: period.temperature,
            temperature_unit: period.temperature_unit.clone(),
            wind_speed: period.wind_speed.clone(),
            wind_direction: period.wind_direction.clone(),
            short_forecast: period.short_forecast.clone(),
            detailed_forecast: period.detailed_forecast.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodList {
    pub periods: Vec<Value>,
}

impl PeriodList {
    /// Keeps the first `limit` periods in provider order.
    pub fn truncated(mut periods: Vec<Value>, limit: usize) -> Self {
        periods.truncate(limit);
        Self { periods }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertSummary {
    pub event: String,
    pub headline: Option<String>,
    pub severity: String,
    pub urgency: String,
}

impl From<AlertFeature> for AlertSummary {
    fn from(feature: AlertFeature) -> Self {
        let props = feature.properties;
        Self {
            event: props.event,
            headline: props.headline,
            severity: props.severity,
            urgency: props.urgency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hourly_period() -> Value {
        json!({
            "number": 1,
            "name": "",
            "startTime": "2026-10-17T10:00:00-07:00",
            "endTime": "2026-10-17T11:00:00-07:00",
            "isDaytime": true,
            "temperature": 54,
            "temperatureUnit": "F",
            "temperatureTrend": null,
            "probabilityOfPrecipitation": { "unitCode": "wmoUnit:percent", "value": 20 },
            "dewpoint": { "unitCode": "wmoUnit:degC", "value": 8.3 },
            "relativeHumidity": { "unitCode": "wmoUnit:percent", "value": 83 },
            "windSpeed": "5 mph",
            "windDirection": "SSW",
            "icon": "https://api.weather.gov/icons/land/day/rain,20?size=small",
            "shortForecast": "Slight Chance Light Rain",
            "detailedForecast": ""
        })
    }

    #[test]
    fn test_period_reads_current_fields() {
        let period: ForecastPeriod = serde_json::from_value(hourly_period()).unwrap();
        assert_eq!(period.temperature, 54);
        assert_eq!(period.temperature_unit, "F");
        assert_eq!(period.wind_direction, "SSW");
    }

    #[test]
    fn test_forecast_periods_pass_through_unchecked() {
        let mut odd = hourly_period();
        odd["windDirection"] = Value::Null;
        odd.as_object_mut().unwrap().remove("temperature");

        let forecast: ForecastResponse = serde_json::from_value(json!({
            "properties": { "periods": [hourly_period(), odd] }
        }))
        .unwrap();

        let periods = forecast.properties.periods;
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0]["dewpoint"]["value"], 8.3);
        assert_eq!(periods[0]["isDaytime"], true);
        assert_eq!(periods[1]["windDirection"], Value::Null);
        assert!(periods[1].get("temperature").is_none());
    }

    #[test]
    fn test_period_optional_text_defaults() {
        let mut raw = hourly_period();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("name");
        obj.remove("detailedForecast");

        let period: ForecastPeriod = serde_json::from_value(raw).unwrap();
        assert_eq!(period.name, "");
        assert_eq!(period.detailed_forecast, "");
    }

    #[test]
    fn test_period_requires_temperature() {
        let mut raw = hourly_period();
        raw.as_object_mut().unwrap().remove("temperature");
        let err = serde_json::from_value::<ForecastPeriod>(raw).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_alerts_missing_features_is_empty() {
        let alerts: AlertResponse =
            serde_json::from_value(json!({ "type": "FeatureCollection" })).unwrap();
        assert!(alerts.features.is_empty());
    }

    #[test]
    fn test_alert_null_headline() {
        let alerts: AlertResponse = serde_json::from_value(json!({
            "features": [{
                "properties": {
                    "event": "Wind Advisory",
                    "headline": null,
                    "severity": "Moderate",
                    "urgency": "Expected"
                }
            }]
        }))
        .unwrap();

        let summary: Vec<AlertSummary> = alerts.features.into_iter().map(Into::into).collect();
        assert_eq!(summary[0].event, "Wind Advisory");
        assert!(summary[0].headline.is_none());
        assert_eq!(serde_json::to_value(&summary[0]).unwrap()["headline"], Value::Null);
    }

    #[test]
    fn test_points_missing_forecast_url() {
        let err = serde_json::from_value::<PointsResponse>(json!({
            "properties": {
                "forecastHourly": "https://api.weather.gov/gridpoints/SEW/124,67/forecast/hourly",
                "relativeLocation": { "properties": { "city": "Seattle", "state": "WA" } }
            }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("forecast"));
    }

    #[test]
    fn test_current_conditions_camel_case() {
        let period: ForecastPeriod = serde_json::from_value(hourly_period()).unwrap();
        let current = serde_json::to_value(CurrentConditions::from(&period)).unwrap();
        assert_eq!(current["temperatureUnit"], "F");
        assert_eq!(current["windSpeed"], "5 mph");
        assert_eq!(current["shortForecast"], "Slight Chance Light Rain");
        assert_eq!(current.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_period_list_truncates_in_order() {
        let periods: Vec<Value> = (1..=10)
            .map(|n| {
                let mut raw = hourly_period();
                raw["number"] = json!(n);
                raw
            })
            .collect();

        let list = PeriodList::truncated(periods, 7);
        assert_eq!(list.periods.len(), 7);
        assert_eq!(list.periods[0]["number"], 1);
        assert_eq!(list.periods[6]["number"], 7);

        let short = PeriodList::truncated(list.periods, 24);
        assert_eq!(short.periods.len(), 7);
    }
}
