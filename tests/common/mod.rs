//! Shared fixtures for the storefront integration tests.
//!
//! `setup_sample_store()` writes a small catalog to a temporary directory and
//! loads it through `DataStore::load`, the same path the binary takes.

use chic_storefront::DataStore;
use std::io::Write;
use std::path::PathBuf;

/// Returns `(DataStore, TempDir)`. Keep the `TempDir` alive for as long as
/// the test needs the file on disk.
pub fn setup_sample_store() -> (DataStore, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&tmp_dir, &sample_catalog());
    let store = DataStore::load(&path).unwrap();
    (store, tmp_dir)
}

pub fn write_catalog(dir: &tempfile::TempDir, catalog: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_string_pretty(catalog).unwrap().as_bytes())
        .unwrap();
    path
}

/// The catalog shipped with the binary.
pub fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/chic_lighting_and_design.json")
}

fn product(
    id: &str,
    name: &str,
    brand_id: &str,
    category_id: &str,
    price: f64,
    discount: Option<f64>,
) -> serde_json::Value {
    let mut value = serde_json::json!({
        "id": id,
        "name": name,
        "brandId": brand_id,
        "categoryId": category_id,
        "price": price,
        "description": format!("{name} with warm dimmable LED"),
        "features": ["Dimmable"],
        "specifications": { "power": "10W" },
        "images": [format!("img/{id}.jpg")],
        "inStock": true,
        "warranty": "3 years",
        "documents": [{ "label": "Datasheet", "type": "pdf", "url": format!("docs/{id}.pdf") }]
    });
    if let Some(discount) = discount {
        value["discount"] = serde_json::json!(discount);
    }
    value
}

fn tier(name: &str, price: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "price": price, "description": format!("{name} tier") })
}

pub fn sample_catalog() -> serde_json::Value {
    let products: Vec<serde_json::Value> = vec![
        product("p1", "Aurelle Pendant", "philips", "pendant", 400.0, Some(10.0)),
        product("p2", "Ledvance Panel", "osram", "ceiling", 150.0, None),
        product("p3", "Tolomeo Floor", "artemide", "floor", 1890.0, None),
        product("p4", "Tweeter Spot", "delta-light", "spotlight", 275.0, Some(20.0)),
        product("p5", "Melt Pendant", "tom-dixon", "pendant", 2250.0, None),
        product("p6", "CoreLine Downlight", "philips", "ceiling", 98.0, None),
        product("p7", "Nessino Table", "artemide", "table", 760.0, None),
        product("p8", "Beat Pendant", "tom-dixon", "pendant", 1980.0, None),
        product("p9", "Hue Go Table", "philips", "table", 210.0, None),
        product("p10", "Tizio Table", "artemide", "table", 1140.0, None),
        product("p11", "Smart Uplight", "osram", "floor", 430.0, None),
    ];

    serde_json::json!({
        "company": {
            "name": "Chic Lighting & Design",
            "slogan": "Light shapes the space",
            "founded": 2012,
            "description": "Lighting studio",
            "contact": { "email": "hello@chic.test", "phone": "0909 123 456", "address": "12 Nguyen Hue" },
            "socialMedia": {
                "facebook": "https://facebook.com/chic",
                "instagram": "https://instagram.com/chic",
                "twitter": "https://twitter.com/chic",
                "linkedin": "https://linkedin.com/company/chic"
            },
            "openingHours": { "weekdays": "8:30 - 20:00", "saturday": "9:00 - 18:00", "sunday": "Closed" }
        },
        "statistics": {
            "yearsInBusiness": 12,
            "LightServiced": 48000,
            "brandsAvailable": 5,
            "satisfiedCustomers": 9600,
            "visitorsCount": 1500
        },
        "products": products,
        "categories": [
            { "id": "pendant", "name": "Pendant Lights" },
            { "id": "ceiling", "name": "Ceiling Lights" },
            { "id": "floor", "name": "Floor Lamps" },
            { "id": "table", "name": "Table Lamps" },
            { "id": "spotlight", "name": "Spotlights" }
        ],
        "brands": [
            { "id": "philips", "name": "Philips" },
            { "id": "osram", "name": "OSRAM" },
            { "id": "artemide", "name": "Artemide" },
            { "id": "delta-light", "name": "Delta Light" },
            { "id": "tom-dixon", "name": "Tom Dixon" }
        ],
        "storeLocations": [
            {
                "id": "hcm",
                "name": "Showroom District 1",
                "address": "12 Nguyen Hue",
                "phone": "028 3822 1234",
                "email": "hcm@chic.test",
                "coordinates": { "latitude": 10.7743, "longitude": 106.7038 },
                "services": ["lighting-design", "installation-maintenance"]
            },
            {
                "id": "hn",
                "name": "Showroom Hoan Kiem",
                "address": "45 Trang Tien",
                "phone": "024 3936 5678",
                "email": "hn@chic.test",
                "coordinates": { "latitude": 21.0245, "longitude": 105.8560 },
                "services": ["project-supply"]
            }
        ],
        "teamMembers": [
            { "id": "tm1", "name": "Ha", "title": "Lead Designer" },
            { "id": "tm2", "name": "Quan", "title": "Project Manager" },
            { "id": "tm3", "name": "Anh", "title": "Lighting Engineer" }
        ],
        "services": [
            {
                "id": "lighting-design",
                "name": "Lighting Design",
                "description": "Concept and layout design",
                "features": ["Site survey", "3D simulation"],
                "pricing": { "basic": tier("Basic", "From $199"), "standard": tier("Standard", "From $599"), "premium": tier("Premium", "Contact us") }
            },
            {
                "id": "project-supply",
                "name": "Project Supply",
                "description": "Bulk supply",
                "features": ["Volume pricing"],
                "pricing": { "basic": tier("Basic", "5% off"), "standard": tier("Standard", "10% off"), "premium": tier("Premium", "Negotiated") }
            }
        ]
    })
}
