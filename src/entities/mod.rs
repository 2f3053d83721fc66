mod location;
mod place;
mod route;
mod trip;
mod view;

pub use location::Coordinates;
pub use place::{PlaceCandidate, DEFAULT_VISITING_HOURS};
pub use route::Route;
pub use trip::Trip;
pub use view::PlacesView;
