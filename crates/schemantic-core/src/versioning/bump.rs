//! Release bump selection
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::diff::ChangeSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which version component a set of changes requires to increase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    None,
}

impl VersionBump {
    /// The highest tier with at least one record
    pub fn from_change_set(changes: &ChangeSet) -> Self {
        if !changes.major.is_empty() {
            Self::Major
        } else if !changes.minor.is_empty() {
            Self::Minor
        } else if !changes.patch.is_empty() {
            Self::Patch
        } else {
            Self::None
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{aggregate, ChangeRecord, Severity};
    use crate::schema::SchemaType;

    fn record(severity: Severity) -> ChangeRecord {
        ChangeRecord {
            key: "a".to_string(),
            structural_path: "properties.a".to_string(),
            display_path: "a".to_string(),
            schema_type: SchemaType::String,
            message: "changed".to_string(),
            severity,
        }
    }

    #[test]
    fn test_highest_tier_wins() {
        let changes = aggregate(
            Vec::new(),
            vec![record(Severity::Minor)],
            vec![record(Severity::Patch), record(Severity::Major)],
        );
        assert_eq!(VersionBump::from_change_set(&changes), VersionBump::Major);

        let changes = aggregate(Vec::new(), vec![record(Severity::Minor)], vec![record(Severity::Patch)]);
        assert_eq!(VersionBump::from_change_set(&changes), VersionBump::Minor);

        let changes = aggregate(Vec::new(), Vec::new(), vec![record(Severity::Patch)]);
        assert_eq!(VersionBump::from_change_set(&changes), VersionBump::Patch);

        assert_eq!(VersionBump::from_change_set(&ChangeSet::default()), VersionBump::None);
    }

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(VersionBump::Major.to_string(), "major");
        assert_eq!(VersionBump::None.to_string(), "none");
        assert_eq!(serde_json::to_value(VersionBump::Patch).unwrap(), serde_json::json!("patch"));
    }
}
