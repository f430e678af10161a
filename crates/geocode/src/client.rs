//! HTTP client for the external postal-code lookup.
//!
//! Wraps a zippopotam-style API (`GET {base_url}/{country}/{code}`)
//! using [`reqwest`]. The upstream returns coordinates as strings, so
//! they are coerced to `f64` explicitly during parsing.

use std::time::Duration;

use serde::Deserialize;

use crate::seed;

/// Default country for bare postal codes on the interactive path.
const DEFAULT_COUNTRY: &str = "us";

/// Countries tried in order by the relaxed batch path when the code
/// carries no country prefix.
const COUNTRY_PRIORITY: &[&str] = &["us", "ca", "gb", "de"];

/// A postal code resolved to a place: name, region abbreviation, and
/// coordinates in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub city: String,
    pub region: String,
    pub lat: f64,
    pub lon: f64,
}

/// Errors from the resolution path.
///
/// Transport failures, non-2xx statuses, and empty result sets all
/// collapse into [`Unresolvable`](GeocodeError::Unresolvable): the
/// caller's remedy is the same in every case (try another code), and
/// upstream diagnostic detail stays in the logs. [`Timeout`] is kept
/// as its own variant for observability but carries the same
/// user-facing meaning.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Postal code {code} could not be resolved")]
    Unresolvable { code: String },

    #[error("Postal code lookup for {code} timed out")]
    Timeout { code: String },
}

/// Response body of the external lookup.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    places: Vec<LookupPlace>,
}

/// One entry of the `places` list. Latitude and longitude arrive as
/// strings and must be parsed.
#[derive(Debug, Deserialize)]
struct LookupPlace {
    #[serde(rename = "place name")]
    place_name: String,
    #[serde(rename = "state abbreviation", default)]
    state_abbreviation: String,
    latitude: String,
    longitude: String,
}

/// Client for the external postal-code lookup with a seed-table
/// short-circuit.
///
/// The seed table is a static cache; a dynamic cache keyed by postal
/// code could be layered in here without changing the interface.
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GeocodeClient {
    /// Create a client for the lookup API at `base_url`
    /// (e.g. `https://api.zippopotam.us`). Every network lookup is
    /// bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Resolve a postal code for the interactive submission path.
    ///
    /// Checks the seed table first (no network), then queries the
    /// external lookup for the default country. Any miss fails with
    /// [`GeocodeError::Unresolvable`]; a lookup exceeding the timeout
    /// fails with [`GeocodeError::Timeout`].
    pub async fn resolve(&self, postal_code: &str) -> Result<ResolvedPlace, GeocodeError> {
        if let Some(place) = seed::lookup(postal_code) {
            return Ok(place);
        }

        match tokio::time::timeout(self.timeout, self.fetch(DEFAULT_COUNTRY, postal_code)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(postal_code, "Postal code lookup timed out");
                Err(GeocodeError::Timeout {
                    code: postal_code.to_string(),
                })
            }
        }
    }

    /// Resolve a postal code for the offline batch/enrichment path.
    ///
    /// A `CC-` prefix (e.g. `gb-EC1A`) restricts the lookup to that
    /// country; otherwise the prioritized country list is tried in
    /// sequence. A total miss yields `None` rather than an error:
    /// batch consumers tolerate unknown places, the interactive path
    /// must not.
    pub async fn resolve_relaxed(&self, postal_code: &str) -> Option<ResolvedPlace> {
        if let Some(place) = seed::lookup(postal_code) {
            return Some(place);
        }

        let (countries, code) = match split_country_prefix(postal_code) {
            Some((country, rest)) => (vec![country], rest),
            None => (
                COUNTRY_PRIORITY.iter().map(|c| c.to_string()).collect(),
                postal_code.to_string(),
            ),
        };

        for country in countries {
            let lookup = tokio::time::timeout(self.timeout, self.fetch(&country, &code)).await;
            match lookup {
                Ok(Ok(place)) => return Some(place),
                Ok(Err(_)) => continue,
                Err(_) => {
                    tracing::debug!(country, code, "Relaxed lookup timed out, trying next");
                    continue;
                }
            }
        }

        None
    }

    /// Execute one lookup request and parse the first returned place.
    async fn fetch(&self, country: &str, code: &str) -> Result<ResolvedPlace, GeocodeError> {
        let unresolvable = || GeocodeError::Unresolvable {
            code: code.to_string(),
        };

        let url = format!("{}/{}/{}", self.base_url, country, code);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(code, error = %e, "Postal code lookup transport failure");
            unresolvable()
        })?;

        if !response.status().is_success() {
            tracing::debug!(code, status = %response.status(), "Postal code lookup non-success");
            return Err(unresolvable());
        }

        let body: LookupResponse = response.json().await.map_err(|e| {
            tracing::warn!(code, error = %e, "Postal code lookup returned malformed body");
            unresolvable()
        })?;

        parse_lookup(body, code)
    }
}

/// Extract the first place from a lookup response, coercing the string
/// coordinates to numbers. An empty place list is indistinguishable
/// from a failed lookup for callers.
fn parse_lookup(body: LookupResponse, code: &str) -> Result<ResolvedPlace, GeocodeError> {
    let unresolvable = || GeocodeError::Unresolvable {
        code: code.to_string(),
    };

    let place = body.places.into_iter().next().ok_or_else(unresolvable)?;

    let lat: f64 = place.latitude.parse().map_err(|_| unresolvable())?;
    let lon: f64 = place.longitude.parse().map_err(|_| unresolvable())?;

    Ok(ResolvedPlace {
        city: place.place_name,
        region: place.state_abbreviation,
        lat,
        lon,
    })
}

/// Split a leading two-letter country prefix (`"gb-EC1A"` ->
/// `("gb", "EC1A")`). Returns `None` when no prefix is present.
fn split_country_prefix(postal_code: &str) -> Option<(String, String)> {
    let (prefix, rest) = postal_code.split_once('-')?;
    if prefix.len() == 2 && prefix.chars().all(|c| c.is_ascii_alphabetic()) && !rest.is_empty() {
        Some((prefix.to_ascii_lowercase(), rest.to_string()))
    } else {
        None
    }
}
