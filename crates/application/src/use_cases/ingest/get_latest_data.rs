use crate::services::LatestDataStore;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct GetLatestDataUseCase {
    latest: Arc<LatestDataStore>,
}

impl GetLatestDataUseCase {
    pub fn new(latest: Arc<LatestDataStore>) -> Self {
        Self { latest }
    }

    pub fn execute(&self) -> BTreeMap<String, String> {
        self.latest.snapshot()
    }
}
