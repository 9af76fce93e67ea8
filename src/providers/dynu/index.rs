use std::collections::HashMap;

use crate::providers::dynu::types::DynuRecord;

/// Record type -> node name -> record id, used to choose between create
/// and update.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordIndex {
    ids: HashMap<String, HashMap<String, u64>>,
}

impl RecordIndex {
    /// Builds the index walking `records` last to first, so on duplicate
    /// (type, name) pairs the earliest record in fetch order wins.
    pub fn build(records: &[DynuRecord]) -> Self {
        let mut ids: HashMap<String, HashMap<String, u64>> = HashMap::new();
        for record in records.iter().rev() {
            ids.entry(record.record_type.clone())
                .or_default()
                .insert(record.node_name.clone(), record.id);
        }
        Self { ids }
    }

    /// A zero id counts as absent.
    pub fn lookup(&self, record_type: &str, name: &str) -> Option<u64> {
        self.ids
            .get(record_type)
            .and_then(|names| names.get(name))
            .copied()
            .filter(|id| *id != 0)
    }
}
