use crate::error::{CoreError, CoreResult};
use crate::normalized::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A value that carries its own identifier within a collection.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Field access by key, in the string form used to build sort keys.
///
/// `Key` plays the role of `keyof T`: dynamic records use `str`, typed
/// records usually an enum of their sortable fields.
pub trait FieldLookup {
    type Key: ?Sized;

    /// `None` when the field is absent or null.
    fn field_text(&self, key: &Self::Key) -> Option<String>;
}

impl Identified for Record {
    fn id(&self) -> &str {
        self.get("id")
            .as_json()
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

impl FieldLookup for Record {
    type Key = str;

    fn field_text(&self, key: &str) -> Option<String> {
        self.get(key).to_sort_text()
    }
}

/// Ordered ids plus an id -> record lookup.
///
/// Well-formed collections satisfy `items[id].id() == id` for every id in
/// `ids`. That is a precondition of producers; see [`NormalizedCollection::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCollection<T> {
    pub ids: Vec<String>,
    pub items: BTreeMap<String, T>,
}

impl<T> Default for NormalizedCollection<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            items: BTreeMap::new(),
        }
    }
}

impl<T> NormalizedCollection<T> {
    pub fn new(ids: Vec<String>, items: BTreeMap<String, T>) -> Self {
        Self { ids, items }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Records in `ids` order; ids without an item are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.ids.iter().filter_map(|id| self.items.get(id))
    }
}

impl<T: Identified> NormalizedCollection<T> {
    /// Later records replace earlier ones with the same id; the id keeps its
    /// first position.
    pub fn from_records<I: IntoIterator<Item = T>>(records: I) -> Self {
        let mut out = Self::default();
        for r in records {
            let id = r.id().to_string();
            if out.items.insert(id.clone(), r).is_none() {
                out.ids.push(id);
            }
        }
        out
    }

    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::with_capacity(self.ids.len());
        for id in &self.ids {
            if !seen.insert(id.as_str()) {
                return Err(CoreError::InvalidInput(format!("duplicate id {}", id)));
            }
            let item = self
                .items
                .get(id)
                .ok_or_else(|| CoreError::MissingItem(id.clone()))?;
            if item.id() != id {
                return Err(CoreError::InvalidInput(format!(
                    "items[{}] carries id {}",
                    id,
                    item.id()
                )));
            }
        }
        Ok(())
    }
}

impl<T: Clone> NormalizedCollection<T> {
    /// Same items, reordered by a derived id sequence.
    pub fn with_ids(&self, ids: Vec<String>) -> Self {
        Self {
            ids,
            items: self.items.clone(),
        }
    }
}
