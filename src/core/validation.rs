use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Validate a list of cost items. Returns all errors found (not just the
/// first); an empty vec means the list is acceptable for calculation.
pub fn validate_cost_items(items: &[CostItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, item) in items.iter().enumerate() {
        validate_cost_item(item, &format!("cost_items[{i}]"), &mut errors);
    }
    errors
}

fn validate_cost_item(item: &CostItem, prefix: &str, errors: &mut Vec<ValidationError>) {
    if item.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "cost item name must not be empty",
        ));
    }
    if item.amount < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.amount"),
            format!("amount must not be negative, got {}", item.amount),
        ));
    }
    if item.is_percentage && item.amount > dec!(100) {
        errors.push(ValidationError::new(
            format!("{prefix}.amount"),
            format!("percentage must not exceed 100, got {}", item.amount),
        ));
    }
}

/// Validate a template before saving. Checks the name, the VAT rate and
/// every cost item.
pub fn validate_template(template: &FinancialTemplate) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if template.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "name",
            "template name must not be empty",
        ));
    }
    if template.vat_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            "vat_rate",
            format!("vat_rate must not be negative, got {}", template.vat_rate),
        ));
    }
    errors.extend(validate_cost_items(&template.cost_items));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> CostItem {
        CostItem {
            name: "Anwaltskosten".into(),
            category: CostCategory::Anwaltskosten,
            amount: dec!(96.90),
            is_percentage: false,
            sort_order: 1,
            description: None,
        }
    }

    #[test]
    fn valid_item_passes() {
        assert!(validate_cost_items(&[valid_item()]).is_empty());
    }

    #[test]
    fn collects_all_errors() {
        let mut bad = valid_item();
        bad.name = "  ".into();
        bad.amount = dec!(-3);
        let errors = validate_cost_items(&[bad]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "cost_items[0].name");
        assert_eq!(errors[1].field, "cost_items[0].amount");
    }

    #[test]
    fn percentage_over_100_rejected() {
        let mut item = valid_item();
        item.is_percentage = true;
        item.amount = dec!(150);
        assert_eq!(validate_cost_items(&[item]).len(), 1);
    }

    #[test]
    fn template_name_required() {
        let template = FinancialTemplate {
            id: None,
            name: String::new(),
            description: None,
            is_default: false,
            vat_rate: DEFAULT_VAT_RATE,
            cost_items: vec![valid_item()],
        };
        let errors = validate_template(&template);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }
}
