use crate::error::{Result, StorefrontError};

use super::models::StoreLocation;

pub const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";
pub const MAP_EMBED_BASE: &str = "https://www.google.com/maps/embed?pb=";

/// Query interface for physical store locations.
pub struct StoreQuery<'a> {
    stores: &'a [StoreLocation],
}

impl<'a> StoreQuery<'a> {
    pub fn new(stores: &'a [StoreLocation]) -> Self {
        Self { stores }
    }

    pub fn all(&self) -> &'a [StoreLocation] {
        self.stores
    }

    pub fn by_id(&self, store_id: &str) -> Result<&'a StoreLocation> {
        self.stores
            .iter()
            .find(|s| s.id == store_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("store location with ID {store_id}")))
    }

    pub fn by_service(&self, service: &str) -> Vec<&'a StoreLocation> {
        self.stores
            .iter()
            .filter(|s| s.services.iter().any(|x| x == service))
            .collect()
    }

    /// Closest store by straight-line distance in degrees. The first store
    /// wins a tie.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Result<&'a StoreLocation> {
        let distance = |s: &StoreLocation| {
            let lat = latitude - s.coordinates.latitude;
            let lng = longitude - s.coordinates.longitude;
            (lat * lat + lng * lng).sqrt()
        };

        self.stores
            .iter()
            .reduce(|best, s| if distance(s) < distance(best) { s } else { best })
            .ok_or_else(|| StorefrontError::NotFound("no store locations available".to_string()))
    }

    pub fn directions_url(&self, store_id: &str) -> Result<String> {
        let store = self.by_id(store_id)?;
        Ok(format!(
            "{DIRECTIONS_BASE}{},{}",
            store.coordinates.latitude, store.coordinates.longitude
        ))
    }
}

/// Embeddable map URL centred on a store, labelled with its name.
pub fn map_embed_url(store: &StoreLocation) -> String {
    format!(
        "{MAP_EMBED_BASE}!1m18!1m12!1m3!1d3724.1!2d{}!3d{}!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2s{}!5e0!3m2!1sen!2s",
        store.coordinates.longitude,
        store.coordinates.latitude,
        urlencoding::encode(&store.name)
    )
}
