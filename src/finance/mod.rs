//! Vehicle finance calculator.
//!
//! Compiled-in catalogs of models and lender plans, the selection state
//! machine that ties them to the calculator inputs, and the amortization maths.

pub mod amortization;
pub mod catalog;
pub mod selection;

pub use amortization::{calculate, schedule, CalculatorInput, CalculatorResult, ScheduleRow};
pub use catalog::{FinancePlan, VehicleModel, BRANDS, FINANCE_PLANS, MODELS};
pub use selection::SelectionState;

use std::path::Path;

use crate::error::Result;

/// One UI session's calculator.
///
/// Wraps a [`SelectionState`] and replaces it on every transition.
#[derive(Debug, Clone)]
pub struct FinanceCalculator {
    state: SelectionState,
}

impl Default for FinanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceCalculator {
    pub fn new() -> Self {
        Self {
            state: SelectionState::initial(),
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn brands(&self) -> &'static [&'static str] {
        BRANDS
    }

    pub fn brand_models(&self) -> Vec<&'static VehicleModel> {
        self.state.brand_models()
    }

    pub fn plans(&self) -> &'static [FinancePlan] {
        FINANCE_PLANS
    }

    pub fn results(&self) -> Option<&CalculatorResult> {
        self.state.result.as_ref()
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.state.input
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn schedule(&self) -> Vec<ScheduleRow> {
        schedule(&self.state.input)
    }

    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        amortization::export_to_csv(path, &self.state.input)
    }

    // -- Transitions -------------------------------------------------------

    fn apply(&mut self, f: impl FnOnce(SelectionState) -> SelectionState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    pub fn change_brand(&mut self, brand: &'static str) {
        self.apply(|s| selection::change_brand(s, brand));
    }

    pub fn change_model(&mut self, name: &str) {
        self.apply(|s| selection::change_model(s, name));
    }

    pub fn select_plan(&mut self, plan: &'static FinancePlan) {
        self.apply(|s| selection::select_plan(s, plan));
    }

    pub fn select_term(&mut self, plan: &'static FinancePlan, term: u32) {
        self.apply(|s| selection::select_term(s, plan, term));
    }

    pub fn use_plan(&mut self, plan: &'static FinancePlan, term: Option<u32>) {
        self.apply(|s| selection::use_plan(s, plan, term));
    }
}
