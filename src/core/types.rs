use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// German standard VAT rate (19%), the default for all calculations.
pub const DEFAULT_VAT_RATE: Decimal = dec!(19.00);

/// Cost item category. Legal-fee and communication/other items form the
/// VAT-taxable base; damages and court fees are never taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    /// Base damages (e.g. Art. 82 DSGVO Schadenersatz).
    Grundkosten,
    /// Court fees (GKG).
    Gerichtskosten,
    /// Attorney fees (RVG).
    Anwaltskosten,
    /// Communication and other costs (Porto, Telefon, ...).
    Sonstige,
}

impl CostCategory {
    /// Stable string code, as persisted and exchanged with callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Grundkosten => "grundkosten",
            Self::Gerichtskosten => "gerichtskosten",
            Self::Anwaltskosten => "anwaltskosten",
            Self::Sonstige => "sonstige",
        }
    }

    /// Parse from the string code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "grundkosten" => Some(Self::Grundkosten),
            "gerichtskosten" => Some(Self::Gerichtskosten),
            "anwaltskosten" => Some(Self::Anwaltskosten),
            "sonstige" => Some(Self::Sonstige),
            _ => None,
        }
    }

    /// Whether items in this category enter the VAT base. VAT applies only
    /// to legal and communication fees, never to damages or court fees.
    pub fn is_taxable(&self) -> bool {
        matches!(self, Self::Anwaltskosten | Self::Sonstige)
    }
}

/// A single named charge on a claim, either a fixed amount or a percentage
/// of the running subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Label, e.g. "Grundschaden".
    pub name: String,
    pub category: CostCategory,
    /// Non-negative. If `is_percentage` is set, interpreted as a percentage
    /// of the subtotal accumulated so far instead of an absolute value.
    pub amount: Decimal,
    #[serde(default)]
    pub is_percentage: bool,
    /// Stable ordering key; items are applied in ascending order.
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A reusable, named set of cost items not yet bound to any case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTemplate {
    /// Assigned by the store on first save.
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The canonical deployment-wide template. Deleting it is refused.
    /// Uniqueness is not enforced by the store.
    #[serde(default)]
    pub is_default: bool,
    pub vat_rate: Decimal,
    pub cost_items: Vec<CostItem>,
}

/// The case-bound, persisted snapshot of computed financials.
///
/// `cost_items` is a frozen copy taken when the record was saved; later
/// edits to the source template do not alter it. The denormalized totals
/// are kept in sync by the calculation engine on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFinancialRecord {
    pub case_id: u64,
    /// Provenance: the template this record was derived from, if any.
    pub template_id: Option<u64>,
    pub cost_items: Vec<CostItem>,
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
    pub vat_rate: Decimal,
    pub total_amount: Decimal,
}

/// Canonical calculation output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
    pub vat_rate: Decimal,
    pub total_amount: Decimal,
}

impl FinancialBreakdown {
    /// All-zero breakdown at the given VAT rate.
    pub fn zero(vat_rate: Decimal) -> Self {
        Self {
            subtotal: Decimal::ZERO,
            vat_amount: Decimal::ZERO,
            vat_rate,
            total_amount: Decimal::ZERO,
        }
    }
}

/// Result of a settlement-discount calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub original_amount: Decimal,
    pub reduction_percentage: Decimal,
    pub settlement_amount: Decimal,
    pub savings: Decimal,
}

/// Result of simple (non-compounding) daily interest accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestAccrual {
    pub principal: Decimal,
    /// Annual rate in percent, e.g. 5.00.
    pub annual_rate: Decimal,
    pub days_elapsed: i64,
    pub interest_amount: Decimal,
    pub total_with_interest: Decimal,
}
