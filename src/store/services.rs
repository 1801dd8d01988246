use crate::error::{Result, StorefrontError};

use super::models::{LightingService, ServicePricing};

pub const LIGHTING_DESIGN: &str = "lighting-design";
pub const PROJECT_SUPPLY: &str = "project-supply";
pub const INSTALLATION_MAINTENANCE: &str = "installation-maintenance";

/// Query interface for the design and installation services on offer.
pub struct ServiceQuery<'a> {
    services: &'a [LightingService],
}

impl<'a> ServiceQuery<'a> {
    pub fn new(services: &'a [LightingService]) -> Self {
        Self { services }
    }

    pub fn all(&self) -> &'a [LightingService] {
        self.services
    }

    pub fn by_id(&self, service_id: &str) -> Result<&'a LightingService> {
        self.find(service_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("service with ID {service_id}")))
    }

    pub fn pricing(&self, service_id: &str) -> Result<&'a ServicePricing> {
        self.by_id(service_id).map(|s| &s.pricing)
    }

    pub fn features(&self, service_id: &str) -> Result<&'a [String]> {
        self.by_id(service_id).map(|s| s.features.as_slice())
    }

    pub fn lighting_design(&self) -> Option<&'a LightingService> {
        self.find(LIGHTING_DESIGN)
    }

    pub fn project_supply(&self) -> Option<&'a LightingService> {
        self.find(PROJECT_SUPPLY)
    }

    pub fn installation_maintenance(&self) -> Option<&'a LightingService> {
        self.find(INSTALLATION_MAINTENANCE)
    }

    fn find(&self, service_id: &str) -> Option<&'a LightingService> {
        self.services.iter().find(|s| s.id == service_id)
    }
}
