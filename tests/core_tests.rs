use chrono::NaiveDate;
use forderung::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The standard four-item GDPR cost set.
fn standard_items() -> Vec<CostItem> {
    vec![
        CostItemBuilder::new("Grundschaden", CostCategory::Grundkosten, dec!(350.00))
            .description("DSGVO Art. 82 Schadenersatz")
            .sort_order(1)
            .build(),
        CostItemBuilder::new("Anwaltskosten", CostCategory::Anwaltskosten, dec!(96.90))
            .description("RVG Rechtsanwaltsgebühren")
            .sort_order(2)
            .build(),
        CostItemBuilder::new("Kommunikationskosten", CostCategory::Sonstige, dec!(13.36))
            .sort_order(3)
            .build(),
        CostItemBuilder::new("Gerichtskosten", CostCategory::Gerichtskosten, dec!(32.00))
            .sort_order(4)
            .build(),
    ]
}

// --- Calculation engine ---

#[test]
fn empty_list_yields_zero_breakdown() {
    let b = calculate_totals(&[], dec!(19.00)).unwrap();
    assert_eq!(b, FinancialBreakdown::zero(dec!(19.00)));
}

#[test]
fn standard_gdpr_set_taxes_only_legal_and_communication() {
    let b = calculate_totals(&standard_items(), dec!(19.00)).unwrap();
    assert_eq!(b.subtotal, dec!(492.26));
    // (96.90 + 13.36) × 0.19 = 20.9494 → 20.95
    assert_eq!(b.vat_amount, dec!(20.95));
    assert_eq!(b.total_amount, dec!(513.21));
    assert_eq!(b.vat_rate, dec!(19.00));
}

#[test]
fn calculation_is_idempotent() {
    let items = standard_items();
    let first = calculate_totals(&items, dec!(19.00)).unwrap();
    let second = calculate_totals(&items, dec!(19.00)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn items_are_applied_in_sort_order_not_slice_order() {
    let mut items = standard_items();
    items.reverse();
    let reversed = calculate_totals(&items, dec!(19.00)).unwrap();
    let ordered = calculate_totals(&standard_items(), dec!(19.00)).unwrap();
    assert_eq!(reversed, ordered);
}

#[test]
fn percentage_of_running_subtotal() {
    let items = vec![
        CostItemBuilder::new("Grundschaden", CostCategory::Grundkosten, dec!(400.00))
            .sort_order(1)
            .build(),
        CostItemBuilder::new("Erfolgspauschale", CostCategory::Anwaltskosten, dec!(25))
            .percentage()
            .sort_order(2)
            .build(),
    ];
    let b = calculate_totals(&items, dec!(19.00)).unwrap();
    // 400 + 25%·400 = 500; taxable = 100 → VAT 19.00
    assert_eq!(b.subtotal, dec!(500.00));
    assert_eq!(b.vat_amount, dec!(19.00));
    assert_eq!(b.total_amount, dec!(519.00));
}

#[test]
fn negative_cost_item_is_rejected_before_calculation() {
    let items = vec![
        CostItemBuilder::new("Gutschrift", CostCategory::Sonstige, dec!(-10.00)).build(),
    ];
    let err = calculate_totals(&items, dec!(19.00)).unwrap_err();
    assert!(matches!(err, ForderungError::Validation(_)));
    assert!(err.to_string().contains("cost_items[0].amount"));
}

#[test]
fn zero_vat_rate_is_allowed() {
    let b = calculate_totals(&standard_items(), Decimal::ZERO).unwrap();
    assert_eq!(b.vat_amount, Decimal::ZERO);
    assert_eq!(b.total_amount, b.subtotal);
}

// --- Settlement ---

#[test]
fn settlement_at_twenty_percent() {
    let s = settlement_amount(dec!(548.11), dec!(20)).unwrap();
    assert_eq!(s.original_amount, dec!(548.11));
    assert_eq!(s.settlement_amount, dec!(438.49));
    assert_eq!(s.savings, dec!(109.62));
}

#[test]
fn settlement_full_reduction_and_none() {
    let full = settlement_amount(dec!(200), dec!(100)).unwrap();
    assert_eq!(full.settlement_amount, Decimal::ZERO);
    assert_eq!(full.savings, dec!(200));

    let none = settlement_amount(dec!(200), Decimal::ZERO).unwrap();
    assert_eq!(none.settlement_amount, dec!(200));
    assert_eq!(none.savings, Decimal::ZERO);
}

#[test]
fn three_standard_settlement_offers() {
    let [immediate, standard, minimal] = settlement_options(dec!(548.11)).unwrap();
    assert_eq!(immediate.reduction_percentage, dec!(30));
    assert_eq!(immediate.settlement_amount, dec!(383.68));
    assert_eq!(standard.settlement_amount, dec!(438.49));
    assert_eq!(minimal.settlement_amount, dec!(493.30));
}

// --- Interest accrual ---

#[test]
fn ten_days_of_statutory_interest() {
    let a = accrue_interest(
        dec!(548.11),
        dec!(5.00),
        date(2025, 8, 13),
        date(2025, 8, 23),
    )
    .unwrap();
    assert_eq!(a.days_elapsed, 10);
    // 548.11 × 0.05/365 × 10 = 0.7508… → 0.75
    assert_eq!(a.interest_amount, dec!(0.75));
    assert_eq!(a.total_with_interest, dec!(548.86));
}

#[test]
fn same_day_accrues_nothing() {
    let a = accrue_interest(dec!(548.11), dec!(5.00), date(2025, 8, 23), date(2025, 8, 23)).unwrap();
    assert_eq!(a.days_elapsed, 0);
    assert_eq!(a.interest_amount, Decimal::ZERO);
}

#[test]
fn full_year_of_interest() {
    let a = accrue_interest(dec!(1000), dec!(5.00), date(2024, 3, 1), date(2025, 3, 1)).unwrap();
    assert_eq!(a.days_elapsed, 365);
    assert_eq!(a.interest_amount, dec!(50.00));
    assert_eq!(a.total_with_interest, dec!(1050.00));
}

// --- Category codes ---

#[test]
fn category_codes_round_trip() {
    for cat in [
        CostCategory::Grundkosten,
        CostCategory::Gerichtskosten,
        CostCategory::Anwaltskosten,
        CostCategory::Sonstige,
    ] {
        assert_eq!(CostCategory::from_code(cat.code()), Some(cat));
    }
    assert_eq!(CostCategory::from_code("porto"), None);
}

#[test]
fn cost_item_serde_uses_category_codes() {
    let item = CostItemBuilder::new("Gerichtskosten", CostCategory::Gerichtskosten, dec!(32.00))
        .sort_order(4)
        .build();
    let json = serde_json::to_string(&item).unwrap();
    assert!(json.contains("\"gerichtskosten\""));
    let back: CostItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}
