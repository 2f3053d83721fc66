use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    entities::Coordinates,
    error::{invalid_input_error, upstream_error, Error},
    external::Geocoder,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
}

#[derive(Clone)]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl std::fmt::Debug for GoogleGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleGeocoder")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GoogleGeocoder {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, Error> {
        let url = format!("https://{}/maps/api/geocode/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("address", address)])
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<Place>> = res.json().await?;

        first_location(data)
    }
}

fn first_location(data: Response<Vec<Place>>) -> Result<Option<Coordinates>, Error> {
    match data.status.as_str() {
        "OK" | "ZERO_RESULTS" => {}
        status => {
            tracing::warn!("geocoding returned status {}", status);
            return Err(upstream_error());
        }
    }

    Ok(data
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|place| place.geometry.location)
        .find(Coordinates::is_valid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<Option<Coordinates>, Error> {
        first_location(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn takes_first_result() {
        let location = parse(json!({
            "status": "OK",
            "results": [
                {"formatted_address": "Agra, Uttar Pradesh, India", "geometry": {"location": {"lat": 27.1767, "lng": 78.0081}}},
                {"formatted_address": "Agra, Kansas, USA", "geometry": {"location": {"lat": 39.76, "lng": -99.12}}}
            ]
        }))
        .unwrap();

        assert_eq!(location, Some(Coordinates::new(27.1767, 78.0081)));
    }

    #[test]
    fn zero_results_is_not_found() {
        assert_eq!(parse(json!({"status": "ZERO_RESULTS", "results": []})).unwrap(), None);
        assert_eq!(parse(json!({"status": "OK", "results": []})).unwrap(), None);
    }

    #[test]
    fn denied_request_is_an_upstream_error() {
        let err = parse(json!({"status": "REQUEST_DENIED", "error_message": "bad key"})).unwrap_err();
        assert_eq!(err, upstream_error());
    }
}
