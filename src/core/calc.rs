use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{validation_failure, ForderungError};
use super::types::*;
use super::validation::validate_cost_items;

/// Round a monetary value to 2 decimal places, half away from zero
/// (commercial rounding). Every externally observable total passes
/// through this; internal accumulation keeps full precision.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregate cost items into subtotal, VAT and grand total.
///
/// Items are applied in ascending `sort_order`. Fixed items add their amount
/// directly; percentage items add `amount% × subtotal-so-far`, so their
/// contribution depends on the items before them. VAT is charged only on the
/// taxable categories ([`CostCategory::is_taxable`]).
///
/// Deterministic: the same ordered item list and rate always yield the same
/// breakdown. An empty list yields all zeros.
pub fn calculate_totals(
    cost_items: &[CostItem],
    vat_rate: Decimal,
) -> Result<FinancialBreakdown, ForderungError> {
    if vat_rate < Decimal::ZERO {
        return Err(ForderungError::Validation(format!(
            "vat_rate must not be negative, got {vat_rate}"
        )));
    }
    let errors = validate_cost_items(cost_items);
    if !errors.is_empty() {
        return Err(validation_failure(&errors));
    }

    let mut ordered: Vec<&CostItem> = cost_items.iter().collect();
    // Stable sort: equal sort_order keeps insertion order.
    ordered.sort_by_key(|i| i.sort_order);

    let mut subtotal = Decimal::ZERO;
    let mut taxable_base = Decimal::ZERO;
    for item in ordered {
        let contribution = if item.is_percentage {
            subtotal * item.amount / dec!(100)
        } else {
            item.amount
        };
        subtotal += contribution;
        if item.category.is_taxable() {
            taxable_base += contribution;
        }
    }

    let subtotal = round_currency(subtotal);
    let vat_amount = round_currency(taxable_base * vat_rate / dec!(100));

    Ok(FinancialBreakdown {
        subtotal,
        vat_amount,
        vat_rate,
        total_amount: subtotal + vat_amount,
    })
}

/// Discounted amount offered for a quick settlement.
///
/// `settlement_amount = total × (1 − reduction/100)`, rounded;
/// `savings = total − settlement_amount`.
pub fn settlement_amount(
    total: Decimal,
    reduction_percentage: Decimal,
) -> Result<Settlement, ForderungError> {
    if total < Decimal::ZERO {
        return Err(ForderungError::Validation(format!(
            "total must not be negative, got {total}"
        )));
    }
    if reduction_percentage < Decimal::ZERO || reduction_percentage > dec!(100) {
        return Err(ForderungError::Validation(format!(
            "reduction_percentage must be between 0 and 100, got {reduction_percentage}"
        )));
    }

    let settlement = round_currency(total * (dec!(1) - reduction_percentage / dec!(100)));
    Ok(Settlement {
        original_amount: total,
        reduction_percentage,
        settlement_amount: settlement,
        savings: round_currency(total - settlement),
    })
}

/// The three standard settlement offers: immediate (30% off),
/// standard (20% off) and minimal (10% off).
pub fn settlement_options(total: Decimal) -> Result<[Settlement; 3], ForderungError> {
    Ok([
        settlement_amount(total, dec!(30))?,
        settlement_amount(total, dec!(20))?,
        settlement_amount(total, dec!(10))?,
    ])
}

/// Simple (non-compounding) daily interest on arrears.
///
/// `daily_rate = annual_rate/100/365`; days are counted as whole days from
/// `reference_date` to `as_of`. An `as_of` before the reference date clamps
/// `days_elapsed` to zero rather than accruing negative interest.
pub fn accrue_interest(
    principal: Decimal,
    annual_rate_percent: Decimal,
    reference_date: NaiveDate,
    as_of: NaiveDate,
) -> Result<InterestAccrual, ForderungError> {
    if principal < Decimal::ZERO {
        return Err(ForderungError::Validation(format!(
            "principal must not be negative, got {principal}"
        )));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(ForderungError::Validation(format!(
            "annual_rate must not be negative, got {annual_rate_percent}"
        )));
    }

    let days_elapsed = (as_of - reference_date).num_days().max(0);
    let daily_rate = annual_rate_percent / dec!(100) / dec!(365);
    let interest_amount = round_currency(principal * daily_rate * Decimal::from(days_elapsed));

    Ok(InterestAccrual {
        principal,
        annual_rate: annual_rate_percent,
        days_elapsed,
        interest_amount,
        total_with_interest: round_currency(principal + interest_amount),
    })
}
