//! Severity bucketing
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::diff::change::{ChangeRecord, Severity};
use serde::{Deserialize, Serialize};

/// All changes between two schema versions, grouped by origin and by severity
///
/// `major`, `minor` and `patch` partition `removed`, `added` and `changed`:
/// every record appears in exactly one severity bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub removed: Vec<ChangeRecord>,
    pub added: Vec<ChangeRecord>,
    pub changed: Vec<ChangeRecord>,
    pub major: Vec<ChangeRecord>,
    pub minor: Vec<ChangeRecord>,
    pub patch: Vec<ChangeRecord>,
}

impl ChangeSet {
    /// Records of one severity tier
    pub fn bucket(&self, severity: Severity) -> &[ChangeRecord] {
        match severity {
            Severity::Major => &self.major,
            Severity::Minor => &self.minor,
            Severity::Patch => &self.patch,
        }
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.major.len() + self.minor.len() + self.patch.len()
    }

    /// True when the two schemas are equivalent for every rule
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when any change is breaking
    pub fn has_breaking_changes(&self) -> bool {
        !self.major.is_empty()
    }
}

/// Build a [`ChangeSet`]; changed records go to the bucket named by their own severity
pub fn aggregate(
    removed: Vec<ChangeRecord>,
    added: Vec<ChangeRecord>,
    changed: Vec<ChangeRecord>,
) -> ChangeSet {
    let mut major = removed.clone();
    let mut minor = added.clone();
    let mut patch = Vec::new();

    for record in &changed {
        match record.severity {
            Severity::Major => major.push(record.clone()),
            Severity::Minor => minor.push(record.clone()),
            Severity::Patch => patch.push(record.clone()),
        }
    }

    ChangeSet {
        removed,
        added,
        changed,
        major,
        minor,
        patch,
    }
}
