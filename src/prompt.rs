use serde_json::Value;

use crate::entities::PlaceCandidate;

const LIST_FIELDS: [&str; 3] = ["places", "intermediate_places", "waypoints"];

pub fn route_prompt(source: &str, destination: &str, region: Option<&str>) -> String {
    let within = region
        .map(|region| format!(" in {}", region))
        .unwrap_or_default();

    format!(
        r#"Generate 5 interesting tourist places, attractions, or landmarks to visit between {source} and {destination}{within}.

These should be actual places along or near the route that travelers might stop at during their journey.

Return the data as a JSON array of objects with this structure:
[
  {{
    "name": "Place Name",
    "place": "Place Name",
    "details": "Brief description of the place (1-2 sentences)",
    "best_time_to_visit": "Best time to visit/opening hours",
    "ticket_pricing": "Entry fee or 'Free' if applicable",
    "rating": "4.5"
  }}
]

Only include places that are actually between these two locations. Do NOT include places in either {source} or {destination} themselves. Ensure places are geographically between or reasonably near the route from {source} to {destination}."#
    )
}

/// Takes the first JSON array of objects in `text` (bare or under one of
/// [`LIST_FIELDS`]) that yields at least one named place.
pub fn extract_candidates(text: &str) -> Vec<PlaceCandidate> {
    for (start, _) in text.char_indices().filter(|(_, c)| *c == '[' || *c == '{') {
        let mut values = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();

        let items = match values.next() {
            Some(Ok(value)) => match place_list(value) {
                Some(items) => items,
                None => continue,
            },
            _ => continue,
        };

        let places: Vec<PlaceCandidate> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<PlaceCandidate>(item).ok())
            .filter(PlaceCandidate::has_name)
            .collect();

        if !places.is_empty() {
            return places;
        }
    }

    tracing::warn!("no place list found in generated text");
    Vec::new()
}

fn place_list(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) if is_object_list(&items) => Some(items),
        Value::Object(mut map) => LIST_FIELDS.iter().find_map(|field| match map.remove(*field) {
            Some(Value::Array(items)) if is_object_list(&items) => Some(items),
            _ => None,
        }),
        _ => None,
    }
}

fn is_object_list(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_object)
}
