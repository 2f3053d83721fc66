use crate::entities::Coordinates;
use crate::filter::distance_km;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Route {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub distance_km: f64,
}

impl Route {
    pub fn new(origin: Coordinates, destination: Coordinates) -> Self {
        Route {
            origin,
            destination,
            distance_km: distance_km(origin, destination),
        }
    }

    pub fn midpoint(&self) -> Coordinates {
        Coordinates::new(
            (self.origin.latitude + self.destination.latitude) / 2.0,
            (self.origin.longitude + self.destination.longitude) / 2.0,
        )
    }
}
