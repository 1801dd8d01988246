//! View state for the paged product list and the image gallery.

use serde::Serialize;

use super::models::Product;
use super::products::ProductQuery;

pub const LISTING_PAGE_SIZE: usize = 9;
pub const GALLERY_PAGE_SIZE: usize = 8;
pub const ALL_BRANDS: &str = "all";

fn page_count(items: usize, page_size: usize) -> usize {
    items.div_ceil(page_size)
}

fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FilterMode {
    #[default]
    Category,
    Brand,
}

/// Category/brand filters and the current page of the product list.
///
/// An empty filter matches everything. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    pub category: String,
    pub brand: String,
    pub current_page: usize,
    pub active_filter: FilterMode,
}

impl Default for ProductListing {
    fn default() -> Self {
        Self {
            category: String::new(),
            brand: String::new(),
            current_page: 1,
            active_filter: FilterMode::Category,
        }
    }
}

impl ProductListing {
    /// Start from link filters; a brand filter takes precedence for the
    /// active mode.
    pub fn from_filters(category: Option<&str>, brand: Option<&str>) -> Self {
        let category = category.unwrap_or_default().to_string();
        let brand = brand.unwrap_or_default().to_string();
        let active_filter = if brand.is_empty() {
            FilterMode::Category
        } else {
            FilterMode::Brand
        };

        Self {
            category,
            brand,
            current_page: 1,
            active_filter,
        }
    }

    pub fn filter_by_category(&mut self, category_id: &str) {
        self.category = category_id.to_string();
        self.active_filter = FilterMode::Category;
        self.current_page = 1;
    }

    pub fn filter_by_brand(&mut self, brand_id: &str) {
        self.brand = brand_id.to_string();
        self.active_filter = FilterMode::Brand;
        self.current_page = 1;
    }

    pub fn change_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn filtered<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| self.category.is_empty() || p.category_id == self.category)
            .filter(|p| self.brand.is_empty() || p.brand_id == self.brand)
            .collect()
    }

    /// Never less than one, so an empty result still shows a single page.
    pub fn total_pages(&self, products: &[Product]) -> usize {
        page_count(self.filtered(products).len(), LISTING_PAGE_SIZE).max(1)
    }

    pub fn page_numbers(&self, products: &[Product]) -> Vec<usize> {
        (1..=self.total_pages(products)).collect()
    }

    /// Products on the current page. Falls back to page one when the
    /// current page no longer exists.
    pub fn visible<'a>(&mut self, products: &'a [Product]) -> Vec<&'a Product> {
        let filtered = self.filtered(products);
        let pages = page_count(filtered.len(), LISTING_PAGE_SIZE);
        if pages > 0 && self.current_page > pages {
            self.current_page = 1;
        }
        page_slice(&filtered, self.current_page, LISTING_PAGE_SIZE).to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub name: String,
    pub brand: String,
    pub image: String,
}

impl GalleryItem {
    /// One item per product that has at least one image, labelled with the
    /// brand's display name.
    pub fn from_products(query: &ProductQuery<'_>) -> Vec<GalleryItem> {
        query
            .all()
            .iter()
            .filter_map(|p| {
                p.images.first().map(|image| GalleryItem {
                    name: p.name.clone(),
                    brand: query.brand_name(&p.brand_id).to_string(),
                    image: image.clone(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    pub selected_brand: String,
    pub current_page: usize,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            selected_brand: ALL_BRANDS.to_string(),
            current_page: 1,
        }
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for item in &self.items {
            if !brands.contains(&item.brand.as_str()) {
                brands.push(&item.brand);
            }
        }
        brands
    }

    pub fn filter_by_brand(&mut self, brand: &str) {
        self.selected_brand = brand.to_string();
        self.current_page = 1;
    }

    pub fn filtered(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|i| self.selected_brand == ALL_BRANDS || i.brand == self.selected_brand)
            .collect()
    }

    /// Zero when the current filter matches nothing.
    pub fn total_pages(&self) -> usize {
        page_count(self.filtered().len(), GALLERY_PAGE_SIZE)
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages()).collect()
    }

    /// Out-of-range pages are ignored.
    pub fn change_page(&mut self, page: usize) {
        if page < 1 || page > self.total_pages() {
            return;
        }
        self.current_page = page;
    }

    pub fn paged(&self) -> Vec<&GalleryItem> {
        page_slice(&self.filtered(), self.current_page, GALLERY_PAGE_SIZE).to_vec()
    }
}
