use std::collections::BTreeMap;
use std::sync::RwLock;

/// Most recently ingested raw station fields, replaced wholesale on every
/// accepted report.
#[derive(Debug, Default)]
pub struct LatestDataStore {
    fields: RwLock<BTreeMap<String, String>>,
}

impl LatestDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, fields: BTreeMap<String, String>) {
        *self.fields.write().unwrap_or_else(|e| e.into_inner()) = fields;
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.fields
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
