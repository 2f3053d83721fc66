mod helpers;
mod places_api;

use std::sync::Arc;

use crate::{
    api::API,
    config::Config,
    external::{
        google_maps::GoogleGeocoder,
        openai::{OpenAiGenerator, Unavailable},
        Geocoder, Generator,
    },
    filter::RoutePolicy,
};

pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynGenerator = Arc<dyn Generator + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeocodeHint {
    pub region: Option<String>,
    pub include_destination: bool,
}

pub struct Engine {
    geocoder: DynGeocoder,
    generator: DynGenerator,
    policy: RoutePolicy,
    hint: GeocodeHint,
}

impl Engine {
    pub fn new(geocoder: DynGeocoder, generator: DynGenerator) -> Self {
        Self {
            geocoder,
            generator,
            policy: RoutePolicy::default(),
            hint: GeocodeHint::default(),
        }
    }

    #[tracing::instrument(name = "Engine::from_config", skip_all)]
    pub fn from_config(config: &Config) -> Self {
        let geocoder = Arc::new(GoogleGeocoder::new(
            config.google_maps_api_base.clone(),
            config.google_maps_api_key.clone(),
        )) as DynGeocoder;

        let generator = match &config.openai_api_key {
            Some(key) => Arc::new(OpenAiGenerator::new(
                config.openai_api_base.clone(),
                key.clone(),
                config.openai_model.clone(),
            )) as DynGenerator,
            None => {
                tracing::warn!("OPENAI_API_KEY not set, place generation is unavailable");
                Arc::new(Unavailable) as DynGenerator
            }
        };

        Self::new(geocoder, generator)
            .with_policy(config.route_policy)
            .with_hint(GeocodeHint {
                region: config.region_hint.clone(),
                include_destination: false,
            })
    }

    pub fn with_policy(mut self, policy: RoutePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hint(mut self, hint: GeocodeHint) -> Self {
        self.hint = hint;
        self
    }
}

impl API for Engine {}
