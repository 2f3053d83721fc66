pub mod google_maps;
pub mod openai;

use async_trait::async_trait;

use crate::entities::{Coordinates, PlaceCandidate};
use crate::error::Error;

/// Resolves a free-text address. `Ok(None)` means the service found nothing.
#[async_trait]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, Error>;
}

#[async_trait]
pub trait Generator {
    async fn generate(&self, prompt: &str) -> Result<Vec<PlaceCandidate>, Error>;
}
