//! Template and case-record management over an injected storage backend.
//!
//! The [`FinancialStore`] trait is the seam between the calculation core and
//! whatever persists the data; [`MemoryStore`] is the in-process reference
//! implementation. [`FinancialManager`] drives both the template lifecycle
//! and the per-case financial records, keeping denormalized totals in sync
//! with the calculation engine on every change.

mod memory;

pub use memory::MemoryStore;

use rust_decimal::Decimal;

use crate::core::{
    calculate_totals, validate_template, validation_failure, CaseFinancialRecord, CostItem,
    FinancialTemplate, ForderungError, TemplateBuilder, DEFAULT_VAT_RATE,
};
use crate::fees::CaseFacts;

/// Storage backend for templates and case financial records.
///
/// Implementations must apply each call as a single atomic change: a save
/// either fully replaces the stored template/record or leaves it untouched.
pub trait FinancialStore {
    /// Insert a new template and return its assigned id.
    fn insert_template(&mut self, template: FinancialTemplate) -> Result<u64, ForderungError>;
    /// Replace a stored template. Fails with `NotFound` if it does not exist.
    fn update_template(&mut self, template: &FinancialTemplate) -> Result<(), ForderungError>;
    fn get_template(&self, id: u64) -> Result<Option<FinancialTemplate>, ForderungError>;
    /// All templates, default first, then by name.
    fn list_templates(&self) -> Result<Vec<FinancialTemplate>, ForderungError>;
    /// Remove a template and its own cost items. Returns whether it existed.
    fn delete_template(&mut self, id: u64) -> Result<bool, ForderungError>;

    /// Create or replace the record for `record.case_id` in one step.
    fn upsert_case_record(&mut self, record: CaseFinancialRecord) -> Result<(), ForderungError>;
    fn get_case_record(&self, case_id: u64) -> Result<Option<CaseFinancialRecord>, ForderungError>;
    /// Remove a case record and its cost items. Returns whether it existed.
    fn delete_case_record(&mut self, case_id: u64) -> Result<bool, ForderungError>;
}

/// Name of the seeded first-activation template.
pub const DEFAULT_TEMPLATE_NAME: &str = "DSGVO Standard";

/// Manages templates and case financial records on top of a store.
pub struct FinancialManager<S: FinancialStore> {
    store: S,
}

impl<S: FinancialStore> FinancialManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create or update a template, keyed on the presence of `id`.
    /// Validates before any write and returns the template's id.
    pub fn save_template(&mut self, template: FinancialTemplate) -> Result<u64, ForderungError> {
        let errors = validate_template(&template);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }
        match template.id {
            Some(id) => {
                if self.store.get_template(id)?.is_none() {
                    return Err(ForderungError::NotFound(format!("template {id}")));
                }
                self.store.update_template(&template)?;
                Ok(id)
            }
            None => self.store.insert_template(template),
        }
    }

    pub fn get_template(&self, id: u64) -> Result<FinancialTemplate, ForderungError> {
        self.store
            .get_template(id)?
            .ok_or_else(|| ForderungError::NotFound(format!("template {id}")))
    }

    pub fn list_templates(&self) -> Result<Vec<FinancialTemplate>, ForderungError> {
        self.store.list_templates()
    }

    /// Delete a template and its cost items. Refused for the default
    /// template; case snapshots derived from it are untouched.
    pub fn delete_template(&mut self, id: u64) -> Result<(), ForderungError> {
        let template = self.get_template(id)?;
        if template.is_default {
            return Err(ForderungError::Forbidden(format!(
                "template {id} ('{}') is the default template and cannot be deleted",
                template.name
            )));
        }
        self.store.delete_template(id)?;
        Ok(())
    }

    /// Find the default template, if one exists. When several templates are
    /// flagged default, the store's ordering decides which one wins.
    pub fn default_template(&self) -> Result<Option<FinancialTemplate>, ForderungError> {
        Ok(self
            .store
            .list_templates()?
            .into_iter()
            .find(|t| t.is_default))
    }

    /// Snapshot a template's cost items onto a case, recompute totals and
    /// write the record (creating or replacing it).
    pub fn apply_template_to_case(
        &mut self,
        case_id: u64,
        template_id: u64,
    ) -> Result<CaseFinancialRecord, ForderungError> {
        let template = self.get_template(template_id)?;
        let breakdown = calculate_totals(&template.cost_items, template.vat_rate)?;
        let record = CaseFinancialRecord {
            case_id,
            template_id: Some(template_id),
            cost_items: template.cost_items,
            subtotal: breakdown.subtotal,
            vat_amount: breakdown.vat_amount,
            vat_rate: breakdown.vat_rate,
            total_amount: breakdown.total_amount,
        };
        self.store.upsert_case_record(record.clone())?;
        Ok(record)
    }

    /// Apply the default template to a case, if one exists.
    /// Returns the record, or `None` when no default template is configured.
    pub fn apply_default_template(
        &mut self,
        case_id: u64,
    ) -> Result<Option<CaseFinancialRecord>, ForderungError> {
        let Some(template) = self.default_template()? else {
            return Ok(None);
        };
        let id = template
            .id
            .ok_or_else(|| ForderungError::Persistence("stored template has no id".into()))?;
        self.apply_template_to_case(case_id, id).map(Some)
    }

    /// Recompute and overwrite a case's financial record from an explicit
    /// item list. `template_id: Some(..)` keeps that template as provenance
    /// metadata; `None` detaches the record from any template.
    pub fn update_case_financial(
        &mut self,
        case_id: u64,
        cost_items: Vec<CostItem>,
        vat_rate: Decimal,
        template_id: Option<u64>,
    ) -> Result<CaseFinancialRecord, ForderungError> {
        let breakdown = calculate_totals(&cost_items, vat_rate)?;
        let record = CaseFinancialRecord {
            case_id,
            template_id,
            cost_items,
            subtotal: breakdown.subtotal,
            vat_amount: breakdown.vat_amount,
            vat_rate: breakdown.vat_rate,
            total_amount: breakdown.total_amount,
        };
        self.store.upsert_case_record(record.clone())?;
        Ok(record)
    }

    pub fn get_case_financial(&self, case_id: u64) -> Result<CaseFinancialRecord, ForderungError> {
        self.store
            .get_case_record(case_id)?
            .ok_or_else(|| ForderungError::NotFound(format!("financial record for case {case_id}")))
    }

    /// Cascading delete of a case's financial record and its cost items.
    /// Returns whether a record existed.
    pub fn delete_case_financial(&mut self, case_id: u64) -> Result<bool, ForderungError> {
        self.store.delete_case_record(case_id)
    }

    /// Case lifecycle hook: a new case gets the default template's
    /// financials, when a default template is configured.
    pub fn on_case_created(
        &mut self,
        case_id: u64,
    ) -> Result<Option<CaseFinancialRecord>, ForderungError> {
        self.apply_default_template(case_id)
    }

    /// Case lifecycle hook: deleting a case removes its financials.
    /// Idempotent — a missing record is not an error.
    pub fn on_case_deleted(&mut self, case_id: u64) -> Result<(), ForderungError> {
        self.delete_case_financial(case_id)?;
        Ok(())
    }

    /// First-activation seeding: create the "DSGVO Standard" default template
    /// with the standard four-item GDPR claim. Idempotent — if a default
    /// template already exists, its id is returned and nothing is written.
    pub fn seed_default_template(&mut self) -> Result<u64, ForderungError> {
        if let Some(existing) = self.default_template()? {
            return existing
                .id
                .ok_or_else(|| ForderungError::Persistence("stored template has no id".into()));
        }
        let mut builder = TemplateBuilder::new(DEFAULT_TEMPLATE_NAME)
            .description("Standard DSGVO-Spam-Forderung (Art. 82 DSGVO)")
            .is_default()
            .vat_rate(DEFAULT_VAT_RATE);
        for item in crate::claim::gdpr_cost_items(&CaseFacts::default()) {
            builder = builder.add_item(item);
        }
        self.save_template(builder.build()?)
    }
}
