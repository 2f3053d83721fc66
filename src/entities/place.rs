use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Coordinates;

pub const DEFAULT_VISITING_HOURS: &str = "All day";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlace")]
pub struct PlaceCandidate {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub visiting_hours: String,
    pub price: String,
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl PlaceCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            display_name: name.clone(),
            name,
            description: String::new(),
            visiting_hours: DEFAULT_VISITING_HOURS.into(),
            price: String::new(),
            rating: None,
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Places are identified by name, ignoring case and surrounding whitespace.
    pub fn same_place(&self, other: &PlaceCandidate) -> bool {
        self.name.trim().to_lowercase() == other.name.trim().to_lowercase()
    }
}

// Trip data and model output name the same fields in several ways, sometimes
// several at once, so ingestion goes through a permissive shape first.
#[derive(Default, Deserialize)]
struct RawPlace {
    name: Option<String>,
    place_name: Option<String>,
    place: Option<String>,
    display_name: Option<String>,
    description: Option<String>,
    details: Option<String>,
    visiting_hours: Option<String>,
    best_time_to_visit: Option<String>,
    time: Option<String>,
    price: Option<String>,
    ticket_pricing: Option<String>,
    rating: Option<Value>,
    coordinates: Option<Value>,
    geo_coordinates: Option<Value>,
}

fn first_present(values: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}

fn rating(value: &Value) -> Option<f64> {
    let rating = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;

    rating.is_finite().then_some(rating)
}

impl From<RawPlace> for PlaceCandidate {
    fn from(raw: RawPlace) -> Self {
        let name = first_present([raw.name, raw.place_name.clone(), raw.place.clone()])
            .unwrap_or_default();
        let display_name = first_present([raw.display_name, raw.place_name, raw.place])
            .unwrap_or_else(|| name.clone());
        let coordinates = raw
            .coordinates
            .iter()
            .chain(raw.geo_coordinates.iter())
            .find_map(Coordinates::from_value);

        Self {
            name,
            display_name,
            description: first_present([raw.description, raw.details]).unwrap_or_default(),
            visiting_hours: first_present([raw.visiting_hours, raw.best_time_to_visit, raw.time])
                .unwrap_or_else(|| DEFAULT_VISITING_HOURS.into()),
            price: first_present([raw.price, raw.ticket_pricing]).unwrap_or_default(),
            rating: raw.rating.as_ref().and_then(rating),
            coordinates,
        }
    }
}
