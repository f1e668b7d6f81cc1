//! Dependency version diffing

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ChangeRecord, DependencyMap};

/// A structural difference between two dependency maps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DependencyChange {
    /// Present only in the current map
    Added { name: String, version: String },
    /// Present only in the previous map
    Removed { name: String, version: String },
    /// Present in both with a different version
    Edited {
        name: String,
        previous: String,
        current: String,
    },
}

impl DependencyChange {
    /// Project an edit into a change record; additions and removals have none
    pub fn as_record(&self) -> Option<ChangeRecord> {
        match self {
            Self::Edited {
                name,
                previous,
                current,
            } => Some(ChangeRecord::new(name, previous, current)),
            Self::Added { .. } | Self::Removed { .. } => None,
        }
    }
}

/// Compare two dependency maps, in key order
pub fn compare_dependencies(
    previous: &DependencyMap,
    current: &DependencyMap,
) -> Vec<DependencyChange> {
    let mut changes = Vec::new();
    let mut prev_iter = previous.iter().peekable();
    let mut curr_iter = current.iter().peekable();

    loop {
        let order = match (prev_iter.peek(), curr_iter.peek()) {
            (Some((p, _)), Some((c, _))) => p.cmp(c),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };

        match order {
            Ordering::Less => {
                if let Some((name, version)) = prev_iter.next() {
                    changes.push(DependencyChange::Removed {
                        name: name.clone(),
                        version: version.clone(),
                    });
                }
            }
            Ordering::Greater => {
                if let Some((name, version)) = curr_iter.next() {
                    changes.push(DependencyChange::Added {
                        name: name.clone(),
                        version: version.clone(),
                    });
                }
            }
            Ordering::Equal => {
                if let (Some((name, prev)), Some((_, curr))) = (prev_iter.next(), curr_iter.next())
                {
                    if prev != curr {
                        changes.push(DependencyChange::Edited {
                            name: name.clone(),
                            previous: prev.clone(),
                            current: curr.clone(),
                        });
                    }
                }
            }
        }
    }

    changes
}

/// Modules whose version changed between two releases.
///
/// Only edits are reported; added or removed dependencies are ignored.
/// Records come out sorted by module name.
pub fn diff_dependencies(previous: &DependencyMap, current: &DependencyMap) -> Vec<ChangeRecord> {
    let changes = compare_dependencies(previous, current);
    let records: Vec<ChangeRecord> = changes.iter().filter_map(DependencyChange::as_record).collect();

    debug!(
        differences = changes.len(),
        edited = records.len(),
        "diffed dependencies"
    );
    records
}
