use serde::Serialize;

/// A vehicle on offer in the finance calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleModel {
    pub brand: &'static str,
    pub name: &'static str,
    /// List price in USD.
    pub price: f64,
}

/// A lender's offer: rate, minimum down payment and the allowed terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancePlan {
    pub partner: &'static str,
    pub apr: f64,
    pub min_down_percent: f64,
    /// Allowed loan lengths in months, in the lender's declared order.
    pub terms: &'static [u32],
    pub processing_fee: Option<f64>,
    pub notes: Option<&'static str>,
}

impl FinancePlan {
    pub fn offers_term(&self, term: u32) -> bool {
        self.terms.contains(&term)
    }
}

pub const BRANDS: &[&str] = &["BMW", "Audi"];

// Every model's brand must appear in BRANDS.
pub const MODELS: &[VehicleModel] = &[
    VehicleModel {
        brand: "BMW",
        name: "BMW M8 Competition Gran Coupé",
        price: 165_000.0,
    },
    VehicleModel {
        brand: "BMW",
        name: "BMW M4 CSL",
        price: 149_000.0,
    },
    VehicleModel {
        brand: "Audi",
        name: "Audi RS 7 Performance",
        price: 145_500.0,
    },
    VehicleModel {
        brand: "Audi",
        name: "Audi R8 V10 RWD",
        price: 205_000.0,
    },
];

pub const FINANCE_PLANS: &[FinancePlan] = &[
    FinancePlan {
        partner: "Carrio Finance",
        apr: 6.9,
        min_down_percent: 10.0,
        terms: &[24, 36, 48, 60],
        processing_fee: Some(199.0),
        notes: Some("Flexible repayment, early closure allowed."),
    },
    FinancePlan {
        partner: "City Bank",
        apr: 7.5,
        min_down_percent: 15.0,
        terms: &[36, 48, 60, 72],
        processing_fee: Some(249.0),
        notes: Some("Best choice for long term loans (up to 72 months)."),
    },
    FinancePlan {
        partner: "Metro Credit Union",
        apr: 5.95,
        min_down_percent: 20.0,
        terms: &[24, 36, 48, 60],
        processing_fee: None,
        notes: Some("Lowest APR with higher down payment."),
    },
    FinancePlan {
        partner: "AutoPartner Co.",
        apr: 8.9,
        min_down_percent: 0.0,
        terms: &[12, 24, 36],
        processing_fee: Some(149.0),
        notes: Some("0% down available for short terms only."),
    },
];

/// Models of one brand, in catalog order. Unknown brands yield nothing.
pub fn models_for_brand(brand: &str) -> Vec<&'static VehicleModel> {
    MODELS.iter().filter(|m| m.brand == brand).collect()
}

pub fn find_model_by_name<'a>(
    models: &[&'a VehicleModel],
    name: &str,
) -> Option<&'a VehicleModel> {
    models.iter().copied().find(|m| m.name == name)
}

pub fn plan_by_partner(partner: &str) -> Option<&'static FinancePlan> {
    FINANCE_PLANS.iter().find(|p| p.partner == partner)
}

/// The term in `terms` closest to `target`.
///
/// Walks the terms in declared order and only replaces the running best on a
/// strictly smaller distance, so the earlier term wins a tie. Returns `target`
/// unchanged when `terms` is empty.
pub fn closest_term(terms: &[u32], target: u32) -> u32 {
    let distance = |t: u32| (i64::from(t) - i64::from(target)).abs();
    terms
        .iter()
        .copied()
        .reduce(|best, t| if distance(t) < distance(best) { t } else { best })
        .unwrap_or(target)
}
