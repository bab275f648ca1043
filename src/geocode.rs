//! City name to coordinates via Nominatim (OpenStreetMap).
//! Results are restricted to the US since the NWS only covers US territory.

use crate::client::{ApiClient, Endpoints};
use crate::error::GeocodeError;
use crate::models::{NominatimPlace, Place};

#[derive(Clone)]
pub struct Geocoder {
    client: ApiClient,
    search_url: String,
}

impl Geocoder {
    /// Creates a geocoder against the public Nominatim API
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_endpoints(&Endpoints::default())
    }

    /// Creates a geocoder against the given base URLs
    pub fn with_endpoints(endpoints: &Endpoints) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: ApiClient::new()?,
            search_url: format!("{}/search", endpoints.nominatim),
        })
    }

    /// Resolves `city_name` to the provider's top-ranked US match.
    pub async fn geocode_city(&self, city_name: &str) -> Result<Place, GeocodeError> {
        tracing::info!("Geocoding city: {}", city_name);

        let query = [
            ("q", city_name),
            ("format", "json"),
            ("limit", "1"),
            ("countrycodes", "us"),
        ];

        let results = self
            .client
            .get_json::<Vec<NominatimPlace>>(&self.search_url, &query)
            .await?;

        let Some(place) = results.into_iter().next() else {
            tracing::warn!("No geocoding match for {:?}", city_name);
            return Err(GeocodeError::NotFound(city_name.to_string()));
        };

        let place = Place {
            lat: parse_coordinate("lat", &place.lat)?,
            lon: parse_coordinate("lon", &place.lon)?,
            display_name: place.display_name,
        };
        tracing::info!("Geocoded to: {}", place.display_name);
        Ok(place)
    }
}

/// Parses a Nominatim coordinate string into a finite `f64`
fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}
