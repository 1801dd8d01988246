use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Product catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand_id: String,
    pub category_id: String,
    pub price: f64,
    /// Percentage off the list price.
    pub discount: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: HashMap<String, String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub warranty: String,
    #[serde(default)]
    pub documents: Vec<ProductDocument>,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|d| d != 0.0)
    }

    /// Price after discount.
    pub fn effective_price(&self) -> f64 {
        match self.discount {
            Some(d) if d != 0.0 => self.price * (1.0 - d / 100.0),
            _ => self.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub slogan: String,
    pub founded: i32,
    pub description: String,
    pub contact: ContactInfo,
    pub social_media: SocialMedia,
    pub opening_hours: CompanyHours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub years_in_business: u32,
    #[serde(rename = "LightServiced")]
    pub lights_serviced: u64,
    pub brands_available: u32,
    pub satisfied_customers: u64,
    pub visitors_count: u64,
}

// ---------------------------------------------------------------------------
// Stores and people
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub coordinates: Coordinates,
    pub opening_hours: Option<WeeklyHours>,
    #[serde(default)]
    pub services: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub quote: String,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingService {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub pricing: ServicePricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePricing {
    pub basic: PricingTier,
    pub standard: PricingTier,
    pub premium: PricingTier,
}

/// Prices are display strings in the catalog (e.g. "From $99").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Whole fixture
// ---------------------------------------------------------------------------

/// The storefront JSON file. Every section may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub company: Option<Company>,
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub store_locations: Vec<StoreLocation>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub services: Vec<LightingService>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_parses_camel_case_and_documents() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "name": "Arco Floor Lamp",
            "brandId": "artemide",
            "categoryId": "floor",
            "price": 200.0,
            "discount": null,
            "inStock": true,
            "documents": [{"label": "Manual", "type": "pdf", "url": "/m.pdf"}]
        }))
        .unwrap();

        assert_eq!(product.brand_id, "artemide");
        assert!(product.in_stock);
        assert!(product.features.is_empty());
        assert_eq!(product.documents[0].kind, DocumentKind::Pdf);
    }

    #[test]
    fn effective_price_applies_discount() {
        let mut product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1", "name": "Lamp", "brandId": "b", "categoryId": "c",
            "price": 200.0, "discount": 25.0
        }))
        .unwrap();
        assert!(product.has_discount());
        assert_eq!(product.effective_price(), 150.0);

        product.discount = Some(0.0);
        assert!(!product.has_discount());
        assert_eq!(product.effective_price(), 200.0);
    }

    #[test]
    fn statistics_keeps_odd_field_name() {
        let stats: Statistics = serde_json::from_value(serde_json::json!({
            "yearsInBusiness": 12,
            "LightServiced": 5000,
            "brandsAvailable": 40,
            "satisfiedCustomers": 3000,
            "visitorsCount": 100
        }))
        .unwrap();
        assert_eq!(stats.lights_serviced, 5000);
    }

    #[test]
    fn empty_fixture_is_valid() {
        let data: StoreData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, StoreData::default());
    }
}
