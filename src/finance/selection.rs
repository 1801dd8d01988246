//! Brand, model, plan and term selection for the finance calculator.
//!
//! The whole session lives in one [`SelectionState`] value. Every transition
//! takes the state by value and returns the next one, recalculating the
//! result before it returns. Applying the same transition twice in a row
//! leaves the state unchanged.

use serde::Serialize;

use super::amortization::{calculate, CalculatorInput, CalculatorResult};
use super::catalog::{
    closest_term, find_model_by_name, models_for_brand, FinancePlan, VehicleModel, BRANDS,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub brand: &'static str,
    pub model: Option<&'static VehicleModel>,
    pub plan_partner: Option<&'static str>,
    pub term: Option<u32>,
    pub input: CalculatorInput,
    pub result: Option<CalculatorResult>,
}

impl Default for SelectionState {
    /// Before the first transition: first brand, nothing calculated yet.
    fn default() -> Self {
        Self {
            brand: BRANDS.first().copied().unwrap_or_default(),
            model: None,
            plan_partner: None,
            term: None,
            input: CalculatorInput::default(),
            result: None,
        }
    }
}

impl SelectionState {
    /// The state a fresh calculator starts in: the first brand selected.
    pub fn initial() -> Self {
        let state = Self::default();
        let brand = state.brand;
        change_brand(state, brand)
    }

    pub fn brand_models(&self) -> Vec<&'static VehicleModel> {
        models_for_brand(self.brand)
    }

    fn recalculated(mut self) -> Self {
        self.result = Some(calculate(&self.input));
        self
    }

    fn with_model(mut self, model: &'static VehicleModel) -> Self {
        self.model = Some(model);
        self.input.price = model.price;
        self.plan_partner = None;
        self.term = None;
        self.recalculated()
    }
}

pub fn change_brand(mut state: SelectionState, brand: &'static str) -> SelectionState {
    tracing::debug!(brand, "brand changed");
    state.brand = brand;

    match models_for_brand(brand).first().copied() {
        Some(model) => state.with_model(model),
        None => {
            tracing::warn!(brand, "brand has no models");
            state.model = None;
            state.plan_partner = None;
            state.term = None;
            state.recalculated()
        }
    }
}

/// Switch to another model of the current brand. Unknown names are ignored.
pub fn change_model(state: SelectionState, name: &str) -> SelectionState {
    let models = state.brand_models();
    match find_model_by_name(&models, name) {
        Some(model) => {
            tracing::debug!(model = model.name, "model changed");
            state.with_model(model)
        }
        None => {
            tracing::debug!(name, brand = state.brand, "ignoring unknown model");
            state
        }
    }
}

/// Use a plan, keeping the current term when the plan offers it.
pub fn select_plan(mut state: SelectionState, plan: &'static FinancePlan) -> SelectionState {
    let current = state.input.term_months;
    let term = if plan.offers_term(current) {
        current
    } else {
        closest_term(plan.terms, current)
    };

    state.plan_partner = Some(plan.partner);
    apply_plan(state, plan, term)
}

/// Use a plan with a specific term. The term is applied as given, even when
/// the plan does not list it.
pub fn select_term(mut state: SelectionState, plan: &'static FinancePlan, term: u32) -> SelectionState {
    if !plan.offers_term(term) {
        tracing::debug!(partner = plan.partner, term, "term not listed by plan");
    }

    state.plan_partner = Some(plan.partner);
    state.term = Some(term);
    apply_plan(state, plan, term)
}

/// `select_term` with either the given term or the one nearest to the current term.
pub fn use_plan(state: SelectionState, plan: &'static FinancePlan, term: Option<u32>) -> SelectionState {
    let term = term.unwrap_or_else(|| closest_term(plan.terms, state.input.term_months));
    select_term(state, plan, term)
}

fn apply_plan(mut state: SelectionState, plan: &FinancePlan, term: u32) -> SelectionState {
    state.input.apr = plan.apr;
    state.input.down_percent = state.input.down_percent.max(plan.min_down_percent);
    state.input.term_months = term;
    state.term = Some(term);

    tracing::debug!(
        partner = plan.partner,
        apr = plan.apr,
        down_percent = state.input.down_percent,
        term,
        "plan applied"
    );

    state.recalculated()
}
