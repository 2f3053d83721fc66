use super::{helpers, Engine};

use async_trait::async_trait;
use futures::future::join_all;

use crate::{
    api::PlacesAPI,
    entities::{Coordinates, PlaceCandidate, Route, Trip},
    error::{generation_empty_error, invalid_input_error, missing_input_error, Error},
    fallback::fallback_places,
    prompt::route_prompt,
};

impl Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_route(&self, source: &str, destination: &str) -> Result<Route, Error> {
        let (origin, destination) = futures::try_join!(
            helpers::resolve_endpoint(&self.geocoder, source),
            helpers::resolve_endpoint(&self.geocoder, destination),
        )?;

        Ok(Route::new(origin, destination))
    }

    async fn filter_candidates(
        &self,
        route: &Route,
        destination: &str,
        candidates: Vec<PlaceCandidate>,
    ) -> Vec<PlaceCandidate> {
        let lookups = helpers::distinct(candidates).into_iter().map(|candidate| {
            helpers::resolve_candidate(&self.geocoder, &self.hint, candidate, destination)
        });

        join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .filter(|candidate| helpers::on_route(&self.policy, route, candidate))
            .collect()
    }

    async fn generate_candidates(&self, source: &str, destination: &str) -> Vec<PlaceCandidate> {
        let prompt = route_prompt(source, destination, self.hint.region.as_deref());

        match self.generator.generate(&prompt).await {
            // model-supplied coordinates are not trusted, every generated place is geocoded
            Ok(places) if !places.is_empty() => places
                .into_iter()
                .map(|place| PlaceCandidate {
                    coordinates: None,
                    ..place
                })
                .collect(),
            Ok(_) => {
                tracing::warn!("{}", generation_empty_error().message);
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("generating places failed: {}", err);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl PlacesAPI for Engine {
    #[tracing::instrument(skip(self, trip), fields(source = ?trip.source, destination = ?trip.destination))]
    async fn find_intermediate_places(&self, trip: Trip) -> Result<Vec<PlaceCandidate>, Error> {
        let source = trip.source_label().ok_or_else(missing_input_error)?.to_string();
        let destination = trip
            .destination_label()
            .ok_or_else(missing_input_error)?
            .to_string();

        tracing::info!("finding places between {} and {}", source, destination);

        let route = self.resolve_route(&source, &destination).await?;

        if !trip.intermediate_places.is_empty() {
            let places = self
                .filter_candidates(&route, &destination, trip.intermediate_places)
                .await;

            tracing::info!("kept {} attached places", places.len());
            return Ok(places);
        }

        let generated = self.generate_candidates(&source, &destination).await;
        let places = self.filter_candidates(&route, &destination, generated).await;

        if !places.is_empty() {
            tracing::info!("kept {} generated places", places.len());
            return Ok(places);
        }

        let places = fallback_places(&source, &destination, &route);
        tracing::info!("using {} fallback places", places.len());

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: String) -> Result<Coordinates, Error> {
        let address = address.trim();
        if address.is_empty() {
            return Err(invalid_input_error());
        }

        self.geocoder
            .geocode(address)
            .await?
            .ok_or_else(invalid_input_error)
    }
}
