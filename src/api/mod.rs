use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, PlaceCandidate, Trip};
use crate::error::Error;

#[async_trait]
pub trait PlacesAPI {
    async fn find_intermediate_places(&self, trip: Trip) -> Result<Vec<PlaceCandidate>, Error>;
    async fn geocode(&self, address: String) -> Result<Coordinates, Error>;
}

pub trait API: PlacesAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
