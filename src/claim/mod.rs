//! Assembly of a complete GDPR spam claim from case facts.
//!
//! Turns [`CaseFacts`] into the standard four-item cost list (base damage,
//! attorney fees, communication fees, court fees) with fee-table amounts,
//! ready for the calculation engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{
    calculate_totals, CostCategory, CostItem, CostItemBuilder, FinancialBreakdown, ForderungError,
};
use crate::fees::{base_gdpr_damage, court_fee_for, legal_fee_for, CaseFacts, COMMUNICATION_FEE};

/// Build the standard GDPR claim cost items for a case. The adjusted base
/// damage doubles as the claim value for both fee-table lookups.
pub fn gdpr_cost_items(facts: &CaseFacts) -> Vec<CostItem> {
    let base_damage = base_gdpr_damage(facts);
    vec![
        CostItemBuilder::new("Grundschaden", CostCategory::Grundkosten, base_damage)
            .description("DSGVO Art. 82 Schadenersatz")
            .sort_order(1)
            .build(),
        CostItemBuilder::new(
            "Anwaltskosten",
            CostCategory::Anwaltskosten,
            legal_fee_for(base_damage),
        )
        .description("RVG Rechtsanwaltsgebühren")
        .sort_order(2)
        .build(),
        CostItemBuilder::new(
            "Kommunikationskosten",
            CostCategory::Sonstige,
            COMMUNICATION_FEE,
        )
        .description("Porto, Telefon, Fax")
        .sort_order(3)
        .build(),
        CostItemBuilder::new(
            "Gerichtskosten",
            CostCategory::Gerichtskosten,
            court_fee_for(base_damage),
        )
        .description("Verfahrenskosten")
        .sort_order(4)
        .build(),
    ]
}

/// One-call damages calculation: assemble the claim and run the engine.
pub fn gdpr_damages(
    facts: &CaseFacts,
    vat_rate: Decimal,
) -> Result<FinancialBreakdown, ForderungError> {
    calculate_totals(&gdpr_cost_items(facts), vat_rate)
}

/// The published reference figures for the standard GDPR claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceClaim {
    pub base_damage: Decimal,
    pub legal_fees: Decimal,
    pub communication_fees: Decimal,
    pub court_fees: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

/// The product's published standard claim (€548.11 total).
///
/// These figures are preserved verbatim from the product sheet; the VAT and
/// total do not follow from the engine's VAT rule and must not be re-derived.
/// Use [`gdpr_damages`] for rule-consistent calculations.
pub fn reference_claim() -> ReferenceClaim {
    ReferenceClaim {
        base_damage: dec!(350.00),
        legal_fees: dec!(96.90),
        communication_fees: dec!(13.36),
        court_fees: dec!(32.00),
        vat: dec!(87.85),
        total: dec!(548.11),
    }
}
