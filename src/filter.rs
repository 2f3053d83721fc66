use geo_types::{coord, Coord, Rect};

use crate::entities::{Coordinates, Route};
use crate::error::{invalid_input_error, Error};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

// roughly one degree of latitude
pub const KM_PER_DEGREE: f64 = 111.0;

pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Buffer {
    Fixed { degrees: f64 },
    // max(min_degrees, route_km * fraction / 111)
    Scaled { min_degrees: f64, fraction: f64 },
}

impl Buffer {
    pub fn degrees(&self, route_km: f64) -> f64 {
        match *self {
            Buffer::Fixed { degrees } => degrees,
            Buffer::Scaled {
                min_degrees,
                fraction,
            } => min_degrees.max(route_km * fraction / KM_PER_DEGREE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutePolicy {
    pub buffer: Buffer,
    pub endpoint_exclusion_km: Option<f64>,
    pub detour_factor: f64,
    // floor for the route length in the detour rule
    pub min_route_km: f64,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        RoutePolicy::refined()
    }
}

impl RoutePolicy {
    pub fn refined() -> Self {
        Self {
            buffer: Buffer::Scaled {
                min_degrees: 0.5,
                fraction: 0.15,
            },
            endpoint_exclusion_km: None,
            detour_factor: 1.3,
            min_route_km: 10.0,
        }
    }

    pub fn legacy() -> Self {
        Self {
            buffer: Buffer::Fixed { degrees: 0.5 },
            endpoint_exclusion_km: Some(10.0),
            detour_factor: 1.5,
            min_route_km: 10.0,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.trim().to_lowercase().as_str() {
            "refined" => Ok(RoutePolicy::refined()),
            "legacy" => Ok(RoutePolicy::legacy()),
            _ => Err(invalid_input_error()),
        }
    }

    /// The route's bounding box grown by the buffer, in degrees.
    pub fn corridor(&self, route: &Route) -> Rect<f64> {
        let bounds = Rect::new(
            Coord::from(route.origin),
            Coord::from(route.destination),
        );
        let margin = self.buffer.degrees(route.distance_km);

        Rect::new(
            coord! { x: bounds.min().x - margin, y: bounds.min().y - margin },
            coord! { x: bounds.max().x + margin, y: bounds.max().y + margin },
        )
    }

    pub fn accepts(&self, route: &Route, candidate: Coordinates) -> bool {
        let corridor = self.corridor(route);
        let point = Coord::from(candidate);

        let inside = point.x >= corridor.min().x
            && point.x <= corridor.max().x
            && point.y >= corridor.min().y
            && point.y <= corridor.max().y;
        if !inside {
            return false;
        }

        let to_origin = distance_km(route.origin, candidate);
        let to_destination = distance_km(candidate, route.destination);

        // A route shorter than both exclusion zones together has no point outside them.
        if let Some(exclusion) = self.endpoint_exclusion_km {
            let excluded = to_origin < exclusion || to_destination < exclusion;
            if excluded && route.distance_km >= 2.0 * exclusion {
                return false;
            }
        }

        to_origin + to_destination <= route.distance_km.max(self.min_route_km) * self.detour_factor
    }
}
