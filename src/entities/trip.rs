use serde::{Deserialize, Serialize};

use crate::entities::PlaceCandidate;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTrip")]
pub struct Trip {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub intermediate_places: Vec<PlaceCandidate>,
}

impl Trip {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            destination: Some(destination.into()),
            intermediate_places: Vec::new(),
        }
    }

    pub fn with_places(mut self, places: Vec<PlaceCandidate>) -> Self {
        self.intermediate_places = places;
        self
    }

    pub fn source_label(&self) -> Option<&str> {
        label(&self.source)
    }

    pub fn destination_label(&self) -> Option<&str> {
        label(&self.destination)
    }
}

fn label(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Selected { label: Option<String> },
}

impl Label {
    fn into_text(self) -> Option<String> {
        match self {
            Label::Text(text) => Some(text),
            Label::Selected { label } => label,
        }
    }
}

#[derive(Default, Deserialize)]
struct UserSelection {
    source: Option<Label>,
    location: Option<Label>,
}

#[derive(Default, Deserialize)]
struct TripData {
    #[serde(default)]
    intermediate_places: Option<Vec<PlaceCandidate>>,
}

// Accepts both the flat form and the stored trip document, where the labels live
// under `userSelection` and attached places under `tripData`.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrip {
    source: Option<Label>,
    destination: Option<Label>,
    #[serde(alias = "intermediate_places")]
    intermediate_places: Option<Vec<PlaceCandidate>>,
    user_selection: Option<UserSelection>,
    trip_data: Option<TripData>,
}

impl From<RawTrip> for Trip {
    fn from(raw: RawTrip) -> Self {
        let selection = raw.user_selection.unwrap_or_default();

        let source = raw
            .source
            .or(selection.source)
            .and_then(Label::into_text);
        let destination = raw
            .destination
            .or(selection.location)
            .and_then(Label::into_text);
        let intermediate_places = raw
            .intermediate_places
            .or_else(|| raw.trip_data.and_then(|data| data.intermediate_places))
            .unwrap_or_default();

        Self {
            source,
            destination,
            intermediate_places,
        }
    }
}
