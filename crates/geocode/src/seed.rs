//! Static seed table of well-known US postal codes.
//!
//! Acts as a permanent cache in front of the external lookup: exact
//! matches resolve instantly and deterministically, which keeps demo
//! codes and tests off the network.

use crate::client::ResolvedPlace;

/// (postal code, city, region, lat, lon)
const SEED: &[(&str, &str, &str, f64, f64)] = &[
    ("73301", "Austin", "TX", 30.2672, -97.7431),
    ("10001", "New York", "NY", 40.7128, -74.0060),
    ("90210", "Beverly Hills", "CA", 34.0901, -118.4065),
    ("60601", "Chicago", "IL", 41.8781, -87.6298),
    ("77001", "Houston", "TX", 29.7604, -95.3698),
    ("75201", "Dallas", "TX", 32.7767, -96.7970),
    ("85001", "Phoenix", "AZ", 33.4484, -112.0740),
    ("19101", "Philadelphia", "PA", 39.9526, -75.1652),
    ("78205", "San Antonio", "TX", 29.4241, -98.4936),
    ("92101", "San Diego", "CA", 32.7157, -117.1611),
    ("95101", "San Jose", "CA", 37.3382, -121.8863),
    ("98101", "Seattle", "WA", 47.6062, -122.3321),
    ("33101", "Miami", "FL", 25.7617, -80.1918),
    ("80201", "Denver", "CO", 39.7392, -104.9903),
    ("02101", "Boston", "MA", 42.3601, -71.0589),
];

/// Exact-match lookup in the seed table.
pub fn lookup(postal_code: &str) -> Option<ResolvedPlace> {
    SEED.iter()
        .find(|(code, ..)| *code == postal_code)
        .map(|&(_, city, region, lat, lon)| ResolvedPlace {
            city: city.to_string(),
            region: region.to_string(),
            lat,
            lon,
        })
}
