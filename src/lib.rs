//! Storefront core for Chic Lighting & Design.
//!
//! Two halves: a vehicle finance calculator with compiled-in catalogs
//! ([`finance`]), and the shop catalog read from a single JSON file
//! ([`store`]) together with the view state the shop pages need (listing
//! filters, pagination, forms, warranty terms).
//!
//! # Quick start
//!
//! ```no_run
//! use chic_storefront::{DataStore, FinanceCalculator, FINANCE_PLANS};
//!
//! let mut calc = FinanceCalculator::new();
//! calc.change_brand("Audi");
//! calc.select_plan(&FINANCE_PLANS[0]);
//! let monthly = calc.results().map(|r| r.monthly_payment);
//!
//! let store = DataStore::load("data/chic_lighting_and_design.json").unwrap();
//! let featured = store.products().featured(6);
//! ```

pub mod config;
pub mod error;
pub mod finance;
pub mod forms;
pub mod store;
pub mod warranty;

pub use config::Config;
pub use error::{Result, StorefrontError};
pub use finance::{
    CalculatorInput, CalculatorResult, FinanceCalculator, FinancePlan, VehicleModel, FINANCE_PLANS,
};
pub use store::DataStore;
