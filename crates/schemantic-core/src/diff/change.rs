//! Change records and severity tiers
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::diff::paths::PropertyDescriptor;
use crate::error::DiffError;
use crate::schema::SchemaType;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backward-compatibility tier of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Breaking change
    Major,
    /// Additive, backward-compatible change
    Minor,
    /// Documentation or non-restrictive change
    Patch,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Major => "major",
            Severity::Minor => "minor",
            Severity::Patch => "patch",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Severity::Major),
            "minor" => Ok(Severity::Minor),
            "patch" => Ok(Severity::Patch),
            _ => Err(DiffError::UnknownSeverity(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single classified change to one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub key: String,
    pub structural_path: String,
    pub display_path: String,
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub message: String,
    pub severity: Severity,
}

impl ChangeRecord {
    /// Create a record for a property
    pub fn new(descriptor: &PropertyDescriptor, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            key: descriptor.key.clone(),
            structural_path: descriptor.structural_path.clone(),
            display_path: descriptor.display_path.clone(),
            schema_type: descriptor.schema_type,
            message: message.into(),
            severity,
        }
    }

    /// A property present only in the source schema
    pub fn removed(descriptor: &PropertyDescriptor) -> Self {
        Self::new(descriptor, Severity::Major, "property was removed")
    }

    /// A property present only in the destination schema
    pub fn added(descriptor: &PropertyDescriptor) -> Self {
        Self::new(descriptor, Severity::Minor, "property was added")
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_path, self.message)
    }
}
