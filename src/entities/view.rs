use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::PlaceCandidate;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesView {
    pub is_loading: bool,
    pub error: Option<String>,
    pub places: Vec<PlaceCandidate>,
    pub updated_at: DateTime<Utc>,
}

impl PlacesView {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            places: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn ready(places: Vec<PlaceCandidate>) -> Self {
        Self {
            is_loading: false,
            error: None,
            places,
            updated_at: Utc::now(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(message.into()),
            places: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

impl From<Result<Vec<PlaceCandidate>, Error>> for PlacesView {
    fn from(result: Result<Vec<PlaceCandidate>, Error>) -> Self {
        match result {
            Ok(places) => PlacesView::ready(places),
            Err(err) if err.is_internal() => PlacesView::failed("Couldn't find new places"),
            Err(err) => PlacesView::failed(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{missing_input_error, upstream_error};

    #[test]
    fn failure_clears_places() {
        let view = PlacesView::from(Err(missing_input_error()));

        assert!(!view.is_loading);
        assert_eq!(view.error.as_deref(), Some("Source or destination is missing"));
        assert!(view.places.is_empty());
    }

    #[test]
    fn internal_failures_use_a_generic_message() {
        let view = PlacesView::from(Err(upstream_error()));
        assert_eq!(view.error.as_deref(), Some("Couldn't find new places"));
    }

    #[test]
    fn serializes_with_presentation_field_names() {
        let value = serde_json::to_value(PlacesView::loading()).unwrap();

        assert_eq!(value["isLoading"], serde_json::json!(true));
        assert!(value["error"].is_null());
        assert!(value["places"].as_array().unwrap().is_empty());
    }
}
