use super::{DynGeocoder, GeocodeHint};

use crate::{
    entities::{Coordinates, PlaceCandidate, Route},
    error::{geocode_failure_error, Error},
    filter::RoutePolicy,
};

#[tracing::instrument(skip(geocoder))]
pub async fn resolve_endpoint(geocoder: &DynGeocoder, label: &str) -> Result<Coordinates, Error> {
    match geocoder.geocode(label).await {
        Ok(Some(coordinates)) => Ok(coordinates),
        Ok(None) => {
            tracing::warn!("no geocoding result for endpoint {:?}", label);
            Err(geocode_failure_error(label))
        }
        Err(err) => {
            tracing::warn!("geocoding endpoint {:?} failed: {}", label, err);
            Err(geocode_failure_error(label))
        }
    }
}

pub fn candidate_query(hint: &GeocodeHint, candidate: &PlaceCandidate, destination: &str) -> String {
    let mut parts = vec![candidate.name.trim()];

    if let Some(region) = hint.region.as_deref() {
        parts.push(region);
    }
    if hint.include_destination {
        parts.push(destination);
    }

    parts.join(", ")
}

#[tracing::instrument(skip(geocoder, hint, candidate), fields(name = %candidate.name))]
pub async fn resolve_candidate(
    geocoder: &DynGeocoder,
    hint: &GeocodeHint,
    candidate: PlaceCandidate,
    destination: &str,
) -> Option<PlaceCandidate> {
    if candidate.coordinates.is_some() {
        return Some(candidate);
    }

    let query = candidate_query(hint, &candidate, destination);

    match geocoder.geocode(&query).await {
        Ok(Some(coordinates)) => Some(candidate.with_coordinates(coordinates)),
        Ok(None) => {
            tracing::warn!("could not geocode place {:?}", query);
            None
        }
        Err(err) => {
            tracing::warn!("geocoding place {:?} failed: {}", query, err);
            None
        }
    }
}

pub fn distinct(candidates: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
    let mut kept: Vec<PlaceCandidate> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if candidate.has_name() && !kept.iter().any(|k| k.same_place(&candidate)) {
            kept.push(candidate);
        }
    }

    kept
}

pub fn on_route(policy: &RoutePolicy, route: &Route, candidate: &PlaceCandidate) -> bool {
    let accepted = candidate
        .coordinates
        .map(|coordinates| policy.accepts(route, coordinates))
        .unwrap_or(false);

    if !accepted {
        tracing::debug!("place not between source and destination: {}", candidate.name);
    }

    accepted
}
