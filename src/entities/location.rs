use std::fmt;
use std::str::FromStr;

use geo_types::{coord, Coord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }

    // "lat,lng", {latitude, longitude} or {lat, lng}; numbers may be strings
    pub fn from_value(value: &Value) -> Option<Self> {
        let coordinates = match value {
            Value::String(s) => s.parse::<Coordinates>().ok()?,
            Value::Object(map) => {
                let latitude = map.get("latitude").or_else(|| map.get("lat"))?;
                let longitude = map.get("longitude").or_else(|| map.get("lng"))?;

                Coordinates::new(number(latitude)?, number(longitude)?)
            }
            _ => return None,
        };

        coordinates.is_valid().then_some(coordinates)
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = s.split_once(',').ok_or_else(invalid_input_error)?;

        let latitude: f64 = latitude
            .trim()
            .parse()
            .map_err(|_| invalid_input_error())?;
        let longitude: f64 = longitude
            .trim()
            .parse()
            .map_err(|_| invalid_input_error())?;

        let coordinates = Coordinates::new(latitude, longitude);
        if !coordinates.is_valid() {
            return Err(invalid_input_error());
        }

        Ok(coordinates)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        coordinates.to_string()
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        coord! { x: coordinates.longitude, y: coordinates.latitude }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(c: Coord<f64>) -> Self {
        Coordinates::new(c.y, c.x)
    }
}
