use quick_cache::sync::Cache;
use serde::{Deserialize, Serialize};

const GEOCODING_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
const CACHE_CAPACITY: usize = 256;

/// Keyless maps embed URL for a free-text location. The raw string goes
/// straight into the maps query, URL-encoded.
pub fn embed_url(location: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&output=embed",
        urlencoding::encode(location)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Deserialize)]
struct GeocodingResponse {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    center: Vec<f64>,
}

/// Forward geocoder against the Mapbox places search API, memoizing lookups
/// (misses included) by the raw query string.
pub struct Geocoder {
    http: reqwest::Client,
    token: String,
    cache: Cache<String, Option<Coordinates>>,
}

impl Geocoder {
    pub fn new(http: reqwest::Client, token: String) -> Self {
        Self {
            http,
            token,
            cache: Cache::new(CACHE_CAPACITY),
        }
    }

    /// Coordinates of the first search result, or `None` when the provider
    /// has no match for the query.
    pub async fn locate(&self, query: &str) -> Result<Option<Coordinates>, reqwest::Error> {
        if let Some(hit) = self.cache.get(query) {
            return Ok(hit);
        }

        let url = format!(
            "{GEOCODING_URL}/{}.json?access_token={}&limit=1",
            urlencoding::encode(query),
            self.token
        );

        let response: GeocodingResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let coordinates = response.features.first().and_then(|feature| {
            Some(Coordinates {
                lon: *feature.center.first()?,
                lat: *feature.center.get(1)?,
            })
        });

        self.cache.insert(query.to_string(), coordinates);

        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::embed_url;

    #[test]
    fn embed_url_encodes_the_raw_location() {
        assert_eq!(
            embed_url("Rink A, Main St"),
            "https://maps.google.com/maps?q=Rink%20A%2C%20Main%20St&output=embed"
        );
    }

    #[test]
    fn embed_url_passes_simple_strings_through() {
        assert_eq!(
            embed_url("Eisstadion"),
            "https://maps.google.com/maps?q=Eisstadion&output=embed"
        );
    }
}
