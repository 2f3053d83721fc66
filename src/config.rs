use std::env;
use std::net::SocketAddr;

use crate::error::{invalid_input_error, Error};
use crate::filter::RoutePolicy;

#[derive(Clone, Debug)]
pub struct Config {
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
    pub openai_api_base: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub route_policy: RoutePolicy,
    pub region_hint: Option<String>,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let optional = |key: &str| {
            lookup(key)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let route_policy = match optional("ROUTE_POLICY") {
            Some(name) => RoutePolicy::from_name(&name)?,
            None => RoutePolicy::default(),
        };

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".into())
            .parse()
            .map_err(|_| invalid_input_error())?;

        Ok(Self {
            google_maps_api_base: optional("GOOGLE_MAPS_API_BASE")
                .unwrap_or_else(|| "maps.googleapis.com".into()),
            google_maps_api_key: lookup("GOOGLE_MAPS_API_KEY")?,
            openai_api_base: optional("OPENAI_API_BASE").unwrap_or_else(|| "api.openai.com".into()),
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_model: optional("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".into()),
            route_policy,
            region_hint: match lookup("REGION_HINT") {
                Ok(value) => Some(value.trim().to_string()).filter(|value| !value.is_empty()),
                Err(_) => Some("India".into()),
            },
            bind_addr,
        })
    }
}
