#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use enroute::engine::{DynGenerator, DynGeocoder, Engine};
use enroute::entities::{Coordinates, PlaceCandidate};
use enroute::error::{generation_failure_error, upstream_error, Error};
use enroute::external::{Geocoder, Generator};

/// In-memory geocoder keyed by the first comma-separated part of the query.
#[derive(Default)]
pub struct FakeGeocoder {
    known: HashMap<String, Coordinates>,
    delays: HashMap<String, Duration>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeGeocoder {
    pub fn india() -> Self {
        let mut geocoder = FakeGeocoder::default();

        for (name, latitude, longitude) in [
            ("kolkata", 22.5726, 88.3639),
            ("delhi", 28.6139, 77.2090),
            ("mumbai", 19.0760, 72.8777),
            ("bengaluru", 12.9716, 77.5946),
            ("chennai", 13.0827, 80.2707),
            ("varanasi", 25.3176, 83.0130),
            ("agra", 27.1767, 78.0081),
            ("jaipur", 26.9124, 75.7873),
            ("udaipur", 24.5854, 73.7125),
            ("kanpur", 26.4499, 80.3319),
        ] {
            geocoder
                .known
                .insert(name.into(), Coordinates::new(latitude, longitude));
        }

        geocoder
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.into(), delay);
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.push(name.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn key(address: &str) -> String {
        address
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, Error> {
        let key = Self::key(address);
        self.calls.lock().unwrap().push(key.clone());

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing.contains(&key) {
            return Err(upstream_error());
        }

        Ok(self.known.get(&key).copied())
    }
}

pub enum FakeGenerator {
    Places(Vec<PlaceCandidate>),
    Failing,
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Vec<PlaceCandidate>, Error> {
        match self {
            FakeGenerator::Places(places) => Ok(places.clone()),
            FakeGenerator::Failing => Err(generation_failure_error()),
        }
    }
}

pub fn engine(geocoder: Arc<FakeGeocoder>, generator: FakeGenerator) -> Engine {
    Engine::new(geocoder as DynGeocoder, Arc::new(generator) as DynGenerator)
}

pub fn names(places: &[PlaceCandidate]) -> Vec<&str> {
    places.iter().map(|p| p.name.as_str()).collect()
}

pub const KOLKATA_DELHI: [&str; 5] = [
    "Bodh Gaya",
    "Varanasi",
    "Allahabad (Prayagraj)",
    "Agra",
    "Jaipur",
];
