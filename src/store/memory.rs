use std::collections::HashMap;

use super::FinancialStore;
use crate::core::{CaseFinancialRecord, FinancialTemplate, ForderungError};

/// HashMap-backed reference store.
///
/// Every write replaces a whole template or record in one step, so a failed
/// or interrupted save never leaves partial state behind.
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: HashMap<u64, FinancialTemplate>,
    records: HashMap<u64, CaseFinancialRecord>,
    next_template_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            records: HashMap::new(),
            next_template_id: 1,
        }
    }
}

impl FinancialStore for MemoryStore {
    fn insert_template(&mut self, mut template: FinancialTemplate) -> Result<u64, ForderungError> {
        let id = self.next_template_id.max(1);
        self.next_template_id = id + 1;
        template.id = Some(id);
        self.templates.insert(id, template);
        Ok(id)
    }

    fn update_template(&mut self, template: &FinancialTemplate) -> Result<(), ForderungError> {
        let id = template
            .id
            .ok_or_else(|| ForderungError::Persistence("template has no id".into()))?;
        if !self.templates.contains_key(&id) {
            return Err(ForderungError::NotFound(format!("template {id}")));
        }
        self.templates.insert(id, template.clone());
        Ok(())
    }

    fn get_template(&self, id: u64) -> Result<Option<FinancialTemplate>, ForderungError> {
        Ok(self.templates.get(&id).cloned())
    }

    fn list_templates(&self) -> Result<Vec<FinancialTemplate>, ForderungError> {
        let mut templates: Vec<FinancialTemplate> = self.templates.values().cloned().collect();
        // Default template first, then by name.
        templates.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(templates)
    }

    fn delete_template(&mut self, id: u64) -> Result<bool, ForderungError> {
        // The template owns its cost items; removing it removes them too.
        // Case snapshots hold their own copies and are untouched.
        Ok(self.templates.remove(&id).is_some())
    }

    fn upsert_case_record(&mut self, record: CaseFinancialRecord) -> Result<(), ForderungError> {
        self.records.insert(record.case_id, record);
        Ok(())
    }

    fn get_case_record(&self, case_id: u64) -> Result<Option<CaseFinancialRecord>, ForderungError> {
        Ok(self.records.get(&case_id).cloned())
    }

    fn delete_case_record(&mut self, case_id: u64) -> Result<bool, ForderungError> {
        Ok(self.records.remove(&case_id).is_some())
    }
}
