use crate::error::{Result, StorefrontError};

use super::models::{Category, Product, StoreData};

pub const DEFAULT_FEATURED_LIMIT: usize = 6;
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Query interface for products, categories and brands.
pub struct ProductQuery<'a> {
    data: &'a StoreData,
}

impl<'a> ProductQuery<'a> {
    pub fn new(data: &'a StoreData) -> Self {
        Self { data }
    }

    pub fn all(&self) -> &'a [Product] {
        &self.data.products
    }

    pub fn by_category(&self, category_id: &str) -> Vec<&'a Product> {
        self.data
            .products
            .iter()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    pub fn by_brand(&self, brand_id: &str) -> Vec<&'a Product> {
        self.data
            .products
            .iter()
            .filter(|p| p.brand_id == brand_id)
            .collect()
    }

    pub fn by_id(&self, product_id: &str) -> Result<&'a Product> {
        self.data
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("product with ID {product_id}")))
    }

    pub fn categories(&self) -> &'a [Category] {
        &self.data.categories
    }

    pub fn category_by_id(&self, category_id: &str) -> Result<&'a Category> {
        self.data
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("category with ID {category_id}")))
    }

    /// Display name for a brand id, falling back to the id itself.
    pub fn brand_name<'b>(&self, brand_id: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.data
            .brands
            .iter()
            .find(|b| b.id == brand_id)
            .map(|b| b.name.as_str())
            .unwrap_or(brand_id)
    }

    /// Discounted products first, topped up with full-price ones, both in
    /// catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&'a Product> {
        let (discounted, others): (Vec<&Product>, Vec<&Product>) =
            self.data.products.iter().partition(|p| p.discount.is_some());

        discounted.into_iter().chain(others).take(limit).collect()
    }

    /// Products whose discounted price lies in `[min_price, max_price]`.
    pub fn by_price_range(&self, min_price: f64, max_price: f64) -> Vec<&'a Product> {
        self.data
            .products
            .iter()
            .filter(|p| {
                let price = p.effective_price();
                price >= min_price && price <= max_price
            })
            .collect()
    }

    /// Case-insensitive substring search over name and description.
    pub fn search(&self, query: &str) -> Vec<&'a Product> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.data
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Products to suggest next to `product_id`: same category first, then
    /// same brand, then anything else.
    pub fn related(&self, product_id: &str, limit: usize) -> Vec<&'a Product> {
        let Ok(current) = self.by_id(product_id) else {
            return Vec::new();
        };

        let others = || self.data.products.iter().filter(move |p| p.id != product_id);

        let mut related: Vec<&Product> = others()
            .filter(|p| p.category_id == current.category_id)
            .collect();
        if related.len() >= limit {
            related.truncate(limit);
            return related;
        }

        let same_brand: Vec<&Product> = others()
            .filter(|p| p.brand_id == current.brand_id && p.category_id != current.category_id)
            .collect();
        related.extend(same_brand);

        if related.len() < limit {
            let rest: Vec<&Product> = others()
                .filter(|p| !related.iter().any(|r| r.id == p.id))
                .take(limit - related.len())
                .collect();
            related.extend(rest);
        }

        related.truncate(limit);
        related
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::Brand;

    fn product(id: &str, category: &str, brand: &str, price: f64, discount: Option<f64>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Lamp {id}"),
            brand_id: brand.to_string(),
            category_id: category.to_string(),
            price,
            discount,
            description: String::new(),
            features: Vec::new(),
            specifications: Default::default(),
            images: Vec::new(),
            in_stock: true,
            warranty: String::new(),
            documents: Vec::new(),
        }
    }

    fn data() -> StoreData {
        StoreData {
            products: vec![
                product("a", "pendant", "philips", 100.0, None),
                product("b", "pendant", "osram", 200.0, Some(50.0)),
                product("c", "floor", "philips", 300.0, None),
                product("d", "wall", "osram", 400.0, Some(10.0)),
                product("e", "wall", "artemide", 500.0, None),
            ],
            brands: vec![Brand {
                id: "philips".to_string(),
                name: "Philips".to_string(),
                description: String::new(),
                image: String::new(),
                features: Vec::new(),
            }],
            ..Default::default()
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn featured_puts_discounted_first() {
        let data = data();
        let query = ProductQuery::new(&data);
        assert_eq!(ids(&query.featured(3)), vec!["b", "d", "a"]);
        assert_eq!(query.featured(10).len(), 5);
    }

    #[test]
    fn price_range_uses_discounted_price() {
        let data = data();
        let query = ProductQuery::new(&data);
        assert_eq!(ids(&query.by_price_range(90.0, 150.0)), vec!["a", "b"]);
        assert_eq!(ids(&query.by_price_range(360.0, 360.0)), vec!["d"]);
    }

    #[test]
    fn related_fills_from_brand_then_rest() {
        let data = data();
        let query = ProductQuery::new(&data);
        // same category: b; same brand: c; rest: d
        assert_eq!(ids(&query.related("a", 3)), vec!["b", "c", "d"]);
        assert_eq!(ids(&query.related("a", 1)), vec!["b"]);
        assert!(query.related("missing", 4).is_empty());
    }

    #[test]
    fn brand_name_falls_back_to_id() {
        let data = data();
        let query = ProductQuery::new(&data);
        assert_eq!(query.brand_name("philips"), "Philips");
        assert_eq!(query.brand_name("osram"), "osram");
    }
}
