//! Fill a target document with the keys it is missing relative to the
//! reference.
//!
//! Existing values are never touched. A target section that is present but is
//! not an object is reported as a conflict and left alone.

use serde_json::{Map, Value};

use crate::types::Reference;

/// One key-set change applied to a target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The section was absent and has been created empty.
    Section { section: String },
    /// The key was absent and has been set to the placeholder.
    Key { section: String, key: String },
}

/// Everything [`fill_missing`] did to one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// In application order: a section insertion precedes its keys.
    pub insertions: Vec<Insertion>,
    /// Sections whose target value is not an object.
    pub conflicts: Vec<String>,
}

impl MergeReport {
    pub fn is_noop(&self) -> bool {
        self.insertions.is_empty()
    }

    pub fn inserted_keys(&self) -> usize {
        self.insertions
            .iter()
            .filter(|i| matches!(i, Insertion::Key { .. }))
            .count()
    }
}

/// Insert every reference section and key absent from `target`, using
/// `placeholder` as the value of each inserted key.
pub fn fill_missing(
    target: &mut Map<String, Value>,
    reference: &Reference,
    placeholder: &str,
) -> MergeReport {
    let mut report = MergeReport::default();

    for (section, keys) in &reference.sections {
        let entry = target.entry(section.clone()).or_insert_with(|| {
            report.insertions.push(Insertion::Section {
                section: section.clone(),
            });
            Value::Object(Map::new())
        });

        let Value::Object(entries) = entry else {
            report.conflicts.push(section.clone());
            continue;
        };

        for key in keys {
            if entries.contains_key(key) {
                continue;
            }
            entries.insert(key.clone(), Value::String(placeholder.to_owned()));
            report.insertions.push(Insertion::Key {
                section: section.clone(),
                key: key.clone(),
            });
        }
    }

    report
}
