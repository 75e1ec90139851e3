use crate::error::{CoreError, CoreResult};
use crate::normalized::collate::locale_compare;
use crate::normalized::model::{FieldLookup, NormalizedCollection};
use crate::normalized::record::{FieldValue, Record};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Ascending),
            "DESC" => Ok(SortOrder::Descending),
            other => Err(CoreError::InvalidInput(format!(
                "sort order must be ASC or DESC, got {}",
                other
            ))),
        }
    }
}

/// Copy of `record` without absent or null fields. Other falsy values
/// (0, "", false) are kept.
pub fn strip_empty_fields(record: &Record) -> Record {
    record
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Shallow copy of `record` minus `keys`. Unknown keys are ignored.
/// Present values share their allocation with `record`.
pub fn project_excluding(record: &Record, keys: &[&str]) -> Record {
    record
        .iter()
        .filter(|(k, _)| !keys.contains(k))
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// [`project_excluding`], then read the result as `T`.
pub fn project_into<T: DeserializeOwned>(record: &Record, keys: &[&str]) -> CoreResult<T> {
    project_excluding(record, keys).into_typed()
}

pub fn is_absent(value: &FieldValue) -> bool {
    value.is_absent()
}

/// Orders `collection.ids` by the concatenated text of `sort_keys`.
///
/// Per id the key is `field_text(k1) + field_text(k2) + ...` with absent and
/// null fields contributing `""`. Keys are compared with [`locale_compare`].
/// The sort is stable, so equal keys keep their input order for either
/// direction. The collection is not modified.
///
/// Concatenating without a separator means multi-key sorts are not a true
/// primary/secondary comparison: `("Al", 10)` and `("Al1", 0)` both yield
/// `"Al10"`. Existing output depends on this, so it is kept.
pub fn sort_ids_by_keys<T: FieldLookup>(
    collection: &NormalizedCollection<T>,
    sort_keys: &[&T::Key],
    order: SortOrder,
) -> Vec<String> {
    let mut keyed: Vec<(String, &String)> = collection
        .ids
        .iter()
        .map(|id| {
            let text = match collection.items.get(id) {
                Some(item) => sort_keys
                    .iter()
                    .map(|k| item.field_text(k).unwrap_or_default())
                    .collect::<String>(),
                None => {
                    log::warn!("sort_ids_by_keys: id {} has no item; sorting as empty", id);
                    String::new()
                }
            };
            (text, id)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Ascending => locale_compare(a, b),
        SortOrder::Descending => locale_compare(b, a),
    });

    keyed.into_iter().map(|(_, id)| id.clone()).collect()
}
