use std::{collections::HashMap, sync::RwLock};

use serde_json::Value;

/// key under which the most recent raw metadata payload is kept.
pub const OVERPASS_ROUTE_DATA_KEY: &str = "overpassRouteData";

/// process-lifetime convenience cache. never authoritative; the store is.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl SessionCache {
    pub fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(String::from(key), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    pub fn set_latest_metadata(&self, raw: Value) {
        self.set(OVERPASS_ROUTE_DATA_KEY, raw)
    }

    pub fn latest_metadata(&self) -> Option<Value> {
        self.get(OVERPASS_ROUTE_DATA_KEY)
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn latest_metadata_is_overwritten() {
        let cache = SessionCache::default();
        assert!(cache.latest_metadata().is_none());
        cache.set_latest_metadata(json!({"elements": [1]}));
        cache.set_latest_metadata(json!({"elements": [2]}));
        assert_eq!(cache.latest_metadata(), Some(json!({"elements": [2]})));
        assert_eq!(cache.get(OVERPASS_ROUTE_DATA_KEY), cache.latest_metadata());
        cache.clear();
        assert!(cache.latest_metadata().is_none());
    }
}
