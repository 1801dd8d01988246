//! The storefront catalog.
//!
//! Everything the shop shows (products, categories, brands, stores, team,
//! services, company facts) comes from one JSON file. [`DataStore`] reads it
//! once and hands out lightweight borrowing query wrappers over the parsed
//! data, the same shape for every section.

pub mod company;
pub mod listing;
pub mod locations;
pub mod models;
pub mod products;
pub mod services;
pub mod team;

pub use models::*;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, StorefrontError};

/// Number of products shown on the home page.
pub const HOME_FEATURED_COUNT: usize = 6;
/// Number of same-category products shown next to a product's detail.
pub const DETAIL_RELATED_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage<'a> {
    pub featured_products: &'a [Product],
    pub categories: &'a [Category],
    pub company: Option<&'a Company>,
    pub statistics: Option<&'a Statistics>,
    pub team_members: &'a [TeamMember],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListPage<'a> {
    pub products: &'a [Product],
    pub categories: &'a [Category],
    pub brands: &'a [Brand],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailPage<'a> {
    pub product: &'a Product,
    pub category: Option<&'a Category>,
    pub related_products: Vec<&'a Product>,
}

/// The parsed storefront file, held in memory for the life of the process.
#[derive(Debug, Clone)]
pub struct DataStore {
    raw: serde_json::Value,
    data: StoreData,
}

impl DataStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to read catalog");
            e
        })?;
        let store = Self::from_json_str(&text)?;
        tracing::info!(
            path = %path.display(),
            products = store.data.products.len(),
            stores = store.data.store_locations.len(),
            "catalog loaded"
        );
        Ok(store)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        let data = StoreData::deserialize(&raw)?;
        Ok(Self { raw, data })
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    /// A top-level section of the file as raw JSON.
    pub fn section(&self, name: &str) -> Result<&serde_json::Value> {
        self.raw
            .get(name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| StorefrontError::NotFound(format!("section \"{name}\"")))
    }

    // -- Query accessors ---------------------------------------------------

    pub fn products(&self) -> products::ProductQuery<'_> {
        products::ProductQuery::new(&self.data)
    }

    pub fn stores(&self) -> locations::StoreQuery<'_> {
        locations::StoreQuery::new(&self.data.store_locations)
    }

    pub fn team(&self) -> team::TeamQuery<'_> {
        team::TeamQuery::new(&self.data.team_members)
    }

    pub fn services(&self) -> services::ServiceQuery<'_> {
        services::ServiceQuery::new(&self.data.services)
    }

    pub fn company(&self) -> company::CompanyQuery<'_> {
        company::CompanyQuery::new(&self.data)
    }

    // -- Page aggregates ---------------------------------------------------

    pub fn home_page(&self) -> HomePage<'_> {
        let products = &self.data.products;
        HomePage {
            featured_products: &products[..products.len().min(HOME_FEATURED_COUNT)],
            categories: &self.data.categories,
            company: self.data.company.as_ref(),
            statistics: self.data.statistics.as_ref(),
            team_members: &self.data.team_members,
        }
    }

    pub fn product_list_page(&self) -> ProductListPage<'_> {
        ProductListPage {
            products: &self.data.products,
            categories: &self.data.categories,
            brands: &self.data.brands,
        }
    }

    pub fn product_detail_page(&self, product_id: &str) -> Result<ProductDetailPage<'_>> {
        let query = self.products();
        let product = query.by_id(product_id)?;
        let category = query.category_by_id(&product.category_id).ok();
        let related_products = query
            .by_category(&product.category_id)
            .into_iter()
            .filter(|p| p.id != product_id)
            .take(DETAIL_RELATED_COUNT)
            .collect();

        Ok(ProductDetailPage {
            product,
            category,
            related_products,
        })
    }
}
