// src/models/location.rs

/// Store locations that accept new reviews.
pub const KNOWN_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Exact, case-sensitive membership check.
pub fn is_known_location(location: &str) -> bool {
    KNOWN_LOCATIONS.contains(&location)
}
