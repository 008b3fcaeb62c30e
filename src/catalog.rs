//! Immutable snapshot of the product catalog.
//!
//! The lifecycle database's `/all.json` endpoint has served two shapes over
//! time: a JSON array of product name strings, and a JSON object keyed by
//! product name. Both are normalized into a [`Catalog`] right after fetch,
//! so nothing downstream ever branches on the response shape again.

use serde_json::Value;
use std::collections::HashSet;

/// The set of known product keys, lowercased, in a fixed iteration order.
///
/// The order is whatever the normalized response yielded: array order for a
/// list response, sorted key order for an object response. Substring-match
/// tie-breaking in the matcher depends on this order, so it is deterministic
/// for a given snapshot but unspecified across snapshots.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    keys: Vec<String>,
    index: HashSet<String>,
}

impl Catalog {
    /// Build a catalog from product names, lowercasing each and keeping the
    /// first occurrence of any duplicate.
    pub fn from_products(products: Vec<String>) -> Self {
        let mut keys = Vec::with_capacity(products.len());
        let mut index = HashSet::with_capacity(products.len());
        for product in products {
            let key = product.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if index.insert(key.clone()) {
                keys.push(key);
            }
        }
        Self { keys, index }
    }

    /// Exact-key membership test.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Keys in snapshot order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Flatten a raw `/all.json` response into product names.
///
/// Accepts an array of strings or an object whose keys are the product
/// names. Anything else yields no products.
pub fn normalize_products(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
