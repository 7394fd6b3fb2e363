use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::GeocodeConfig;

/// Nominatim returns coordinates as strings.
#[derive(Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Place-name to coordinate lookup against a Nominatim endpoint, with an
/// on-disk cache rotated weekly. Negative lookups are cached too, so a batch
/// run does not hammer the service with the same unknown locality.
pub struct Geocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
    cache_path: Option<PathBuf>,
    cache: HashMap<String, Option<(f64, f64)>>,
}

impl Geocoder {
    pub fn new(config: &GeocodeConfig) -> Result<Self> {
        Self::with_cache_path(config, default_cache_path())
    }

    pub fn with_cache_path(config: &GeocodeConfig, cache_path: Option<PathBuf>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("failed to build geocoding client")?;

        let cache = cache_path
            .as_ref()
            .filter(|path| path.exists())
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Ok(Geocoder {
            client,
            endpoint: config.endpoint.clone(),
            cache_path,
            cache,
        })
    }

    /// Coordinates for a place name, from cache or the live endpoint.
    /// `Ok(None)` means the service did not recognize the place.
    pub fn lookup(&mut self, place: &str) -> Result<Option<(f64, f64)>> {
        if let Some(cached) = self.cache.get(place) {
            return Ok(*cached);
        }
        let resolved = self.fetch(place)?;
        self.cache.insert(place.to_string(), resolved);
        Ok(resolved)
    }

    fn fetch(&self, place: &str) -> Result<Option<(f64, f64)>> {
        let places: Vec<Place> = self
            .client
            .get(&self.endpoint)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .with_context(|| format!("geocoding request for '{place}' failed"))?
            .error_for_status()?
            .json()
            .context("unexpected geocoding response")?;

        Ok(places
            .first()
            .and_then(|p| Some((p.lat.parse().ok()?, p.lon.parse().ok()?))))
    }

    pub fn save_cache(&self) -> Result<()> {
        if let Some(path) = &self.cache_path {
            let content = serde_json::to_string(&self.cache)?;
            fs::write(path, content)
                .with_context(|| format!("failed to write geocode cache {}", path.display()))?;
        }
        Ok(())
    }
}

fn default_cache_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "haplomap", "haplomap")?;
    let cache_dir = proj_dirs.cache_dir().join("geocode");
    fs::create_dir_all(&cache_dir).ok()?;
    let now = Local::now();
    Some(cache_dir.join(format!(
        "geocode_{}_w{:02}.json",
        now.year(),
        now.iso_week().week()
    )))
}
