use crate::entities::{Coordinates, PlaceCandidate, Route};

struct CuratedPlace {
    name: &'static str,
    display_name: &'static str,
    latitude: f64,
    longitude: f64,
    description: &'static str,
    rating: f64,
    price: &'static str,
    visiting_hours: &'static str,
}

struct CuratedRoute {
    cities: (&'static str, &'static str),
    places: &'static [CuratedPlace],
}

const JAIPUR: CuratedPlace = CuratedPlace {
    name: "Jaipur",
    display_name: "Jaipur",
    latitude: 26.9124,
    longitude: 75.7873,
    description: "The Pink City with magnificent forts, palaces, and vibrant markets.",
    rating: 4.7,
    price: "Varies by site",
    visiting_hours: "9 AM - 5 PM",
};

const KOLKATA_DELHI: &[CuratedPlace] = &[
    CuratedPlace {
        name: "Bodh Gaya",
        display_name: "Bodh Gaya",
        latitude: 24.6961,
        longitude: 84.9923,
        description: "Bodh Gaya is a Buddhist pilgrimage site associated with Gautama Buddha's attainment of Enlightenment.",
        rating: 4.7,
        price: "Free (Temple entry)",
        visiting_hours: "6 AM - 9 PM",
    },
    CuratedPlace {
        name: "Varanasi",
        display_name: "Varanasi",
        latitude: 25.3176,
        longitude: 83.0130,
        description: "One of the oldest continuously inhabited cities in the world and a major religious hub in India.",
        rating: 4.6,
        price: "Free (Most ghats)",
        visiting_hours: "Best at sunrise/sunset",
    },
    CuratedPlace {
        name: "Allahabad (Prayagraj)",
        display_name: "Allahabad",
        latitude: 25.4358,
        longitude: 81.8464,
        description: "The \"City of Prime Ministers\" is a sacred city situated at the confluence of three rivers.",
        rating: 4.4,
        price: "Free (Most sites)",
        visiting_hours: "All day",
    },
    CuratedPlace {
        name: "Agra",
        display_name: "Agra",
        latitude: 27.1767,
        longitude: 78.0081,
        description: "Home to the iconic Taj Mahal, Agra Fort, and Fatehpur Sikri.",
        rating: 4.8,
        price: "Varies by monument",
        visiting_hours: "Sunrise to sunset",
    },
    JAIPUR,
];

const MUMBAI_DELHI: &[CuratedPlace] = &[
    CuratedPlace {
        name: "Udaipur",
        display_name: "Udaipur",
        latitude: 24.5854,
        longitude: 73.7125,
        description: "Known as the \"City of Lakes\" with beautiful palaces and picturesque settings.",
        rating: 4.8,
        price: "Varies by palace/museum",
        visiting_hours: "9 AM - 5 PM",
    },
    JAIPUR,
    CuratedPlace {
        name: "Ajmer",
        display_name: "Ajmer",
        latitude: 26.4499,
        longitude: 74.6399,
        description: "Home to the famous Ajmer Sharif Dargah and surrounded by Aravalli Hills.",
        rating: 4.5,
        price: "Free (Dargah)",
        visiting_hours: "All day",
    },
];

const CURATED_ROUTES: &[CuratedRoute] = &[
    CuratedRoute {
        cities: ("kolkata", "delhi"),
        places: KOLKATA_DELHI,
    },
    CuratedRoute {
        cities: ("mumbai", "delhi"),
        places: MUMBAI_DELHI,
    },
];

pub const PLACEHOLDER_NAME: &str = "Tourist Attraction";

pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

impl CuratedRoute {
    /// Matches in either direction when each label contains one of the city keys.
    fn matches(&self, source: &str, destination: &str) -> bool {
        let (a, b) = self.cities;

        (source.contains(a) && destination.contains(b))
            || (source.contains(b) && destination.contains(a))
    }
}

impl From<&CuratedPlace> for PlaceCandidate {
    fn from(place: &CuratedPlace) -> Self {
        PlaceCandidate {
            name: place.name.into(),
            display_name: place.display_name.into(),
            description: place.description.into(),
            visiting_hours: place.visiting_hours.into(),
            price: place.price.into(),
            rating: Some(place.rating),
            coordinates: Some(Coordinates::new(place.latitude, place.longitude)),
        }
    }
}

pub fn curated_places(source: &str, destination: &str) -> Option<Vec<PlaceCandidate>> {
    let source = normalize(source);
    let destination = normalize(destination);

    CURATED_ROUTES
        .iter()
        .find(|route| route.matches(&source, &destination))
        .map(|route| route.places.iter().map(PlaceCandidate::from).collect())
}

/// A single generic stop placed at the middle of the route.
pub fn placeholder(source: &str, destination: &str, route: &Route) -> PlaceCandidate {
    PlaceCandidate {
        description: format!(
            "Interesting place to visit on your way from {} to {}.",
            source, destination
        ),
        price: "Check at location".into(),
        rating: Some(4.5),
        ..PlaceCandidate::new(PLACEHOLDER_NAME)
    }
    .with_coordinates(route.midpoint())
}

pub fn fallback_places(source: &str, destination: &str, route: &Route) -> Vec<PlaceCandidate> {
    curated_places(source, destination)
        .unwrap_or_else(|| vec![placeholder(source, destination, route)])
}
