//! Statutory fee tables and the base-damage rule for GDPR spam claims.
//!
//! The legal-fee table is the RVG 1.3 Verfahrensgebühr for the value bands
//! relevant to these claims; the court-fee table is the GKG Amtsgericht
//! schedule. Claim values above the last band fall into the last tier —
//! higher bands are deliberately not modelled.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::round_currency;

/// Standard base damage for a GDPR spam claim (Art. 82 DSGVO).
pub const BASE_DAMAGE: Decimal = dec!(350.00);

/// Flat communication fee (Porto, Telefon, Fax).
pub const COMMUNICATION_FEE: Decimal = dec!(13.36);

/// Default annual interest rate on arrears, in percent.
pub const STATUTORY_INTEREST_RATE: Decimal = dec!(5.00);

/// Case-specific facts that adjust the base damage. Whether the sender is a
/// repeat offender is determined by the caller (a lookup over prior email
/// records for the same sender address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFacts {
    /// Number of attachments on the offending email.
    pub attachment_count: u32,
    /// Whether the email carried an unsubscribe link.
    pub has_unsubscribe_link: bool,
    /// Whether the sender has prior recorded violations.
    pub is_repeat_offender: bool,
}

impl Default for CaseFacts {
    /// A neutral case: no attachments, unsubscribe link present, first offense.
    fn default() -> Self {
        Self {
            attachment_count: 0,
            has_unsubscribe_link: true,
            is_repeat_offender: false,
        }
    }
}

/// RVG 1.3 legal fee for a given claim value.
pub fn legal_fee_for(claim_value: Decimal) -> Decimal {
    if claim_value <= dec!(500) {
        dec!(96.90)
    } else if claim_value <= dec!(1000) {
        dec!(132.75)
    } else if claim_value <= dec!(1500) {
        dec!(168.60)
    } else {
        dec!(204.45)
    }
}

/// GKG court fee (Amtsgericht) for a given claim value.
pub fn court_fee_for(claim_value: Decimal) -> Decimal {
    if claim_value <= dec!(300) {
        dec!(23.00)
    } else if claim_value <= dec!(600) {
        dec!(32.00)
    } else if claim_value <= dec!(900) {
        dec!(41.00)
    } else if claim_value <= dec!(1200) {
        dec!(50.00)
    } else {
        dec!(59.00)
    }
}

/// Base GDPR damage adjusted for aggravating factors:
/// +10% for attachments, +20% for a missing unsubscribe link,
/// +30% for a repeat offender.
pub fn base_gdpr_damage(facts: &CaseFacts) -> Decimal {
    let mut multiplier = dec!(1.0);
    if facts.attachment_count > 0 {
        multiplier += dec!(0.1);
    }
    if !facts.has_unsubscribe_link {
        multiplier += dec!(0.2);
    }
    if facts.is_repeat_offender {
        multiplier += dec!(0.3);
    }
    round_currency(BASE_DAMAGE * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_fee_bands() {
        assert_eq!(legal_fee_for(dec!(350)), dec!(96.90));
        assert_eq!(legal_fee_for(dec!(500)), dec!(96.90));
        assert_eq!(legal_fee_for(dec!(500.01)), dec!(132.75));
        assert_eq!(legal_fee_for(dec!(1000)), dec!(132.75));
        assert_eq!(legal_fee_for(dec!(1500)), dec!(168.60));
        assert_eq!(legal_fee_for(dec!(2000)), dec!(204.45));
        // Values above the last band stay in the last tier.
        assert_eq!(legal_fee_for(dec!(25000)), dec!(204.45));
    }

    #[test]
    fn court_fee_bands() {
        assert_eq!(court_fee_for(dec!(300)), dec!(23.00));
        assert_eq!(court_fee_for(dec!(350)), dec!(32.00));
        assert_eq!(court_fee_for(dec!(600)), dec!(32.00));
        assert_eq!(court_fee_for(dec!(900)), dec!(41.00));
        assert_eq!(court_fee_for(dec!(1200)), dec!(50.00));
        assert_eq!(court_fee_for(dec!(1201)), dec!(59.00));
    }

    #[test]
    fn neutral_case_gets_base_damage() {
        assert_eq!(base_gdpr_damage(&CaseFacts::default()), dec!(350.00));
    }

    #[test]
    fn aggravating_factors_stack() {
        let facts = CaseFacts {
            attachment_count: 2,
            has_unsubscribe_link: false,
            is_repeat_offender: true,
        };
        // 350 × (1 + 0.1 + 0.2 + 0.3)
        assert_eq!(base_gdpr_damage(&facts), dec!(560.00));
    }

    #[test]
    fn single_factor() {
        let facts = CaseFacts {
            has_unsubscribe_link: false,
            ..CaseFacts::default()
        };
        assert_eq!(base_gdpr_damage(&facts), dec!(420.00));
    }
}
