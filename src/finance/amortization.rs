//! Fixed-rate loan maths for the finance calculator.
//!
//! [`calculate`] is a pure function of the four calculator inputs. It never
//! fails: the down payment percentage is clamped and the term is floored to
//! one month, so odd inputs still give finite numbers.

use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

use crate::error::Result;

pub const MAX_DOWN_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorInput {
    pub price: f64,
    pub down_percent: f64,
    /// Annual percentage rate, e.g. `6.9` for 6.9%.
    pub apr: f64,
    pub term_months: u32,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            price: 0.0,
            down_percent: 20.0,
            apr: 6.9,
            term_months: 60,
        }
    }
}

impl CalculatorInput {
    pub fn effective_down_percent(&self) -> f64 {
        self.down_percent.clamp(0.0, MAX_DOWN_PERCENT)
    }

    pub fn periods(&self) -> u32 {
        self.term_months.max(1)
    }

    pub fn monthly_rate(&self) -> f64 {
        (self.apr / 100.0) / 12.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorResult {
    pub principal: f64,
    pub down_payment: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

pub fn calculate(input: &CalculatorInput) -> CalculatorResult {
    let down_payment = input.price * input.effective_down_percent() / 100.0;
    let principal = (input.price - down_payment).max(0.0);
    let n = input.periods();
    let monthly_payment = level_payment(principal, input.monthly_rate(), n);
    let total_payment = monthly_payment * f64::from(n);

    CalculatorResult {
        principal,
        down_payment,
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    }
}

// Annuity payment; straight-line when the rate is zero.
fn level_payment(principal: f64, monthly_rate: f64, n: u32) -> f64 {
    if monthly_rate == 0.0 {
        principal / f64::from(n)
    } else {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-f64::from(n)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Month-by-month breakdown of the loan described by `input`.
///
/// Uses the same level payment as [`calculate`]. The final row absorbs the
/// floating point residue so the balance ends at zero.
pub fn schedule(input: &CalculatorInput) -> Vec<ScheduleRow> {
    let result = calculate(input);
    let rate = input.monthly_rate();
    let n = input.periods();

    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = result.principal;

    for month in 1..=n {
        let interest = balance * rate;
        let mut principal = result.monthly_payment - interest;

        if month == n || principal > balance {
            principal = balance;
        }

        balance = (balance - principal).max(0.0);

        rows.push(ScheduleRow {
            month,
            payment: interest + principal,
            interest,
            principal,
            balance,
        });
    }

    rows
}

/// Write the schedule and a summary block as CSV.
pub fn write_csv<W: Write>(mut out: W, input: &CalculatorInput) -> Result<()> {
    let result = calculate(input);

    writeln!(out, "Month,Payment,Interest,Principal,Balance")?;
    for row in schedule(input) {
        writeln!(
            out,
            "{},{:.2},{:.2},{:.2},{:.2}",
            row.month, row.payment, row.interest, row.principal, row.balance
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Summary")?;
    writeln!(out, "Price,{:.2}", input.price)?;
    writeln!(out, "Down Payment,{:.2}", result.down_payment)?;
    writeln!(out, "Principal,{:.2}", result.principal)?;
    writeln!(out, "APR,{:.2}", input.apr)?;
    writeln!(out, "Term (months),{}", input.periods())?;
    writeln!(out, "Monthly Payment,{:.2}", result.monthly_payment)?;
    writeln!(out, "Total Payment,{:.2}", result.total_payment)?;
    writeln!(out, "Total Interest,{:.2}", result.total_interest)?;

    Ok(())
}

pub fn export_to_csv<P: AsRef<Path>>(path: P, input: &CalculatorInput) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(file, input)?;
    tracing::info!(path = %path.as_ref().display(), "exported amortization schedule");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: f64, down_percent: f64, apr: f64, term_months: u32) -> CalculatorInput {
        CalculatorInput {
            price,
            down_percent,
            apr,
            term_months,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn carrio_scenario_matches_annuity_formula() {
        let result = calculate(&input(165_000.0, 10.0, 6.9, 60));

        assert_eq!(result.principal, 148_500.0);
        assert_eq!(result.down_payment, 16_500.0);

        let r: f64 = 0.069 / 12.0;
        let growth = (1.0 + r).powi(60);
        let expected = 148_500.0 * r * growth / (growth - 1.0);
        assert!(close(result.monthly_payment, expected));
        assert!((result.monthly_payment - 2933.48).abs() < 0.01);
        assert!(close(result.total_payment, result.monthly_payment * 60.0));
        assert!(close(result.total_interest, result.total_payment - 148_500.0));
    }

    #[test]
    fn zero_apr_is_straight_line() {
        let result = calculate(&input(100_000.0, 20.0, 0.0, 24));

        assert_eq!(result.principal, 80_000.0);
        assert!(close(result.monthly_payment, 80_000.0 / 24.0));
        assert!(close(result.total_payment, 80_000.0));
        assert!(result.total_interest.abs() < 1e-6);
    }

    #[test]
    fn down_percent_is_clamped() {
        let high = calculate(&input(50_000.0, 150.0, 5.0, 36));
        let max = calculate(&input(50_000.0, 90.0, 5.0, 36));
        assert_eq!(high, max);

        let negative = calculate(&input(50_000.0, -10.0, 5.0, 36));
        let zero = calculate(&input(50_000.0, 0.0, 5.0, 36));
        assert_eq!(negative, zero);
        assert_eq!(zero.down_payment, 0.0);
    }

    #[test]
    fn zero_term_counts_as_one_month() {
        let result = calculate(&input(12_000.0, 0.0, 0.0, 0));
        assert_eq!(result.monthly_payment, 12_000.0);
        assert_eq!(result.total_payment, 12_000.0);
    }

    #[test]
    fn zero_price_gives_zero_payments() {
        let result = calculate(&input(0.0, 20.0, 6.9, 60));
        assert_eq!(result.principal, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn invariants_hold_across_inputs() {
        for &price in &[0.0, 1.0, 9_999.99, 145_500.0, 205_000.0] {
            for &down in &[0.0, 10.0, 15.0, 20.0, 33.3, 90.0] {
                for &apr in &[0.0, 0.5, 5.95, 8.9, 24.0] {
                    for &term in &[1, 12, 37, 72, 360] {
                        let result = calculate(&input(price, down, apr, term));
                        assert_eq!(result.down_payment + result.principal, price);
                        assert!(close(result.total_payment, result.monthly_payment * f64::from(term)));
                        assert!(result.total_interest >= -1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn very_long_term_keeps_interest_non_negative() {
        let result = calculate(&input(100_000.0, 0.0, 6.0, u32::MAX));

        assert!(result.monthly_payment > 0.0);
        assert!((result.monthly_payment - 500.0).abs() < 1e-6);
        assert!(result.total_interest >= 0.0);
        assert!(close(result.total_payment, result.monthly_payment * f64::from(u32::MAX)));
    }

    #[test]
    fn schedule_pays_off_principal() {
        let loan = input(145_500.0, 20.0, 7.5, 48);
        let rows = schedule(&loan);
        let result = calculate(&loan);

        assert_eq!(rows.len(), 48);
        assert_eq!(rows.last().map(|r| r.balance), Some(0.0));

        let paid: f64 = rows.iter().map(|r| r.principal).sum();
        assert!((paid - result.principal).abs() < 1e-6);

        let interest: f64 = rows.iter().map(|r| r.interest).sum();
        assert!((interest - result.total_interest).abs() < 1e-4);
    }

    #[test]
    fn schedule_balance_never_increases() {
        let rows = schedule(&input(205_000.0, 15.0, 8.9, 36));
        for pair in rows.windows(2) {
            assert!(pair[1].balance <= pair[0].balance);
        }
    }

    #[test]
    fn csv_has_one_line_per_month_and_summary() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &input(100_000.0, 20.0, 0.0, 24)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Month,Payment,Interest,Principal,Balance\n"));
        assert!(text.contains("\n1,3333.33,0.00,3333.33,76666.67\n"));
        assert!(text.contains("Monthly Payment,3333.33"));
        assert!(text.contains("Total Interest,0.00"));
    }
}
