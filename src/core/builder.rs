use rust_decimal::Decimal;

use super::error::{validation_failure, ForderungError};
use super::types::*;
use super::validation;

/// Builder for cost items.
///
/// ```
/// use forderung::core::*;
/// use rust_decimal_macros::dec;
///
/// let item = CostItemBuilder::new("Grundschaden", CostCategory::Grundkosten, dec!(350.00))
///     .description("DSGVO Art. 82 Schadenersatz")
///     .sort_order(1)
///     .build();
/// assert!(!item.is_percentage);
/// ```
pub struct CostItemBuilder {
    name: String,
    category: CostCategory,
    amount: Decimal,
    is_percentage: bool,
    sort_order: i32,
    description: Option<String>,
}

impl CostItemBuilder {
    pub fn new(name: impl Into<String>, category: CostCategory, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            is_percentage: false,
            sort_order: 0,
            description: None,
        }
    }

    /// Interpret the amount as a percentage of the running subtotal.
    pub fn percentage(mut self) -> Self {
        self.is_percentage = true;
        self
    }

    pub fn sort_order(mut self, order: i32) -> Self {
        self.sort_order = order;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> CostItem {
        CostItem {
            name: self.name,
            category: self.category,
            amount: self.amount,
            is_percentage: self.is_percentage,
            sort_order: self.sort_order,
            description: self.description,
        }
    }
}

/// Builder for financial templates. `build()` validates the template and
/// returns all validation errors joined, not just the first.
pub struct TemplateBuilder {
    name: String,
    description: Option<String>,
    is_default: bool,
    vat_rate: Decimal,
    cost_items: Vec<CostItem>,
}

impl TemplateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_default: false,
            vat_rate: DEFAULT_VAT_RATE,
            cost_items: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.vat_rate = rate;
        self
    }

    pub fn add_item(mut self, item: CostItem) -> Self {
        self.cost_items.push(item);
        self
    }

    pub fn build(self) -> Result<FinancialTemplate, ForderungError> {
        let template = FinancialTemplate {
            id: None,
            name: self.name,
            description: self.description,
            is_default: self.is_default,
            vat_rate: self.vat_rate,
            cost_items: self.cost_items,
        };
        let errors = validation::validate_template(&template);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn template_builder_validates() {
        let err = TemplateBuilder::new("")
            .add_item(CostItemBuilder::new("x", CostCategory::Sonstige, dec!(1)).build())
            .build()
            .unwrap_err();
        assert!(matches!(err, ForderungError::Validation(_)));
    }

    #[test]
    fn template_builder_defaults() {
        let t = TemplateBuilder::new("Leer").build().unwrap();
        assert_eq!(t.vat_rate, dec!(19.00));
        assert!(!t.is_default);
        assert!(t.id.is_none());
        assert!(t.cost_items.is_empty());
    }
}
