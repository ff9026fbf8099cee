//! Flat-file views of case financials.
//!
//! The CSV export emits one row per case with the fixed column set
//! `case_id;damages_loss;partner_fees;communication_fees;court_fees;vat;total`,
//! semicolon-separated with German locale decimals (comma separator) and CRLF
//! line endings. The JSON view emits the canonical breakdown object.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{
    round_currency, CaseFinancialRecord, CostCategory, FinancialBreakdown, ForderungError,
};

/// Per-category sums of a record's cost items, in euros.
///
/// Percentage items are attributed to their category at the value they
/// contributed, so the replayed walk mirrors the calculation engine.
/// Sums keep full precision; the CSV writer rounds on emit via
/// [`round_currency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub damages: Decimal,
    pub court_fees: Decimal,
    pub legal_fees: Decimal,
    pub other: Decimal,
}

/// Split a record's subtotal back into the four categories.
pub fn category_totals(record: &CaseFinancialRecord) -> CategoryTotals {
    let mut ordered: Vec<_> = record.cost_items.iter().collect();
    ordered.sort_by_key(|i| i.sort_order);

    let mut totals = CategoryTotals::default();
    let mut running = Decimal::ZERO;
    for item in ordered {
        let contribution = if item.is_percentage {
            running * item.amount / dec!(100)
        } else {
            item.amount
        };
        running += contribution;
        match item.category {
            CostCategory::Grundkosten => totals.damages += contribution,
            CostCategory::Gerichtskosten => totals.court_fees += contribution,
            CostCategory::Anwaltskosten => totals.legal_fees += contribution,
            CostCategory::Sonstige => totals.other += contribution,
        }
    }
    totals
}

/// Generate the financial rows CSV for a set of case records.
///
/// Columns: case_id;damages_loss;partner_fees;communication_fees;
///          court_fees;vat;total
pub fn financial_rows_csv(records: &[CaseFinancialRecord]) -> String {
    let mut out = String::new();
    for (i, header) in [
        "case_id",
        "damages_loss",
        "partner_fees",
        "communication_fees",
        "court_fees",
        "vat",
        "total",
    ]
    .iter()
    .enumerate()
    {
        if i > 0 {
            out.push(';');
        }
        csv_field_str(&mut out, header);
    }
    out.push_str("\r\n");

    for record in records {
        let totals = category_totals(record);
        out.push_str(&record.case_id.to_string());
        out.push(';');
        csv_field_decimal(&mut out, totals.damages);
        out.push(';');
        csv_field_decimal(&mut out, totals.legal_fees);
        out.push(';');
        csv_field_decimal(&mut out, totals.other);
        out.push(';');
        csv_field_decimal(&mut out, totals.court_fees);
        out.push(';');
        csv_field_decimal(&mut out, record.vat_amount);
        out.push(';');
        csv_field_decimal(&mut out, record.total_amount);
        out.push_str("\r\n");
    }
    out
}

/// Serialize a breakdown as the canonical JSON object
/// `{subtotal, vat_amount, vat_rate, total_amount}`.
pub fn breakdown_json(breakdown: &FinancialBreakdown) -> Result<String, ForderungError> {
    serde_json::to_string(breakdown).map_err(|e| ForderungError::Persistence(format!("json: {e}")))
}

fn csv_field_str(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

fn csv_field_decimal(out: &mut String, d: Decimal) {
    let s = format!("{:.2}", round_currency(d));
    out.push_str(&s.replace('.', ","));
}
