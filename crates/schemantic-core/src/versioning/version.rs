//! Semantic version parsing and arithmetic
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::error::DiffError;
use crate::versioning::bump::VersionBump;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
    pub build_metadata: Option<String>,
}

impl SchemaVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Parse a version string
    ///
    /// Accepts `X.Y.Z[-pre][+build]`, optionally prefixed with `v`.
    pub fn parse(version_str: &str) -> Result<Self, DiffError> {
        let invalid = |reason: String| DiffError::invalid_version(version_str, reason);

        let trimmed = version_str.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        // Split on '+' for build metadata
        let (version_part, build_metadata) = match trimmed.split_once('+') {
            Some((version, build)) => (version, Some(build)),
            None => (trimmed, None),
        };

        // Split on '-' for pre-release
        let (version_part, pre_release) = match version_part.split_once('-') {
            Some((version, pre)) => (version, Some(pre)),
            None => (version_part, None),
        };

        let parts: Vec<&str> = version_part.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid(format!("Expected format X.Y.Z, got: {}", version_part)));
        }

        let major = parse_numeric(parts[0]).map_err(|e| invalid(format!("Invalid major version: {}", e)))?;
        let minor = parse_numeric(parts[1]).map_err(|e| invalid(format!("Invalid minor version: {}", e)))?;
        let patch = parse_numeric(parts[2]).map_err(|e| invalid(format!("Invalid patch version: {}", e)))?;

        if let Some(pre) = pre_release {
            validate_identifiers(pre, true).map_err(|e| invalid(format!("Invalid pre-release: {}", e)))?;
        }
        if let Some(build) = build_metadata {
            validate_identifiers(build, false).map_err(|e| invalid(format!("Invalid build metadata: {}", e)))?;
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
            build_metadata: build_metadata.map(str::to_string),
        })
    }

    /// Apply a bump; bumped versions are plain releases with lower components reset
    ///
    /// A component already at `u64::MAX` cannot be incremented and is reported
    /// as [`DiffError::InvalidVersion`].
    pub fn bump(&self, bump: VersionBump) -> Result<Self, DiffError> {
        let increment = |component: u64| {
            component
                .checked_add(1)
                .ok_or_else(|| DiffError::invalid_version(self.to_string(), "component overflow"))
        };

        Ok(match bump {
            VersionBump::Major => Self::new(increment(self.major)?, 0, 0),
            VersionBump::Minor => Self::new(self.major, increment(self.minor)?, 0),
            VersionBump::Patch => Self::new(self.major, self.minor, increment(self.patch)?),
            VersionBump::None => self.clone(),
        })
    }
}

fn parse_numeric(part: &str) -> Result<u64, String> {
    if part.is_empty() {
        return Err("empty component".to_string());
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{}' is not a number", part));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(format!("'{}' has a leading zero", part));
    }
    part.parse().map_err(|_| format!("'{}' is out of range", part))
}

fn validate_identifiers(identifiers: &str, numeric_rules: bool) -> Result<(), String> {
    for identifier in identifiers.split('.') {
        if identifier.is_empty() {
            return Err(format!("empty identifier in '{}'", identifiers));
        }
        if !identifier.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(format!("'{}' contains invalid characters", identifier));
        }
        if numeric_rules
            && identifier.len() > 1
            && identifier.starts_with('0')
            && identifier.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(format!("'{}' has a leading zero", identifier));
        }
    }
    Ok(())
}

/// Pre-release precedence: numeric identifiers compare numerically and sort
/// before alphanumeric ones; a shorter list of equal prefix sorts first
fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for SchemaVersion {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| {
                // Pre-release versions have lower precedence
                match (&self.pre_release, &other.pre_release) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => compare_pre_release(a, b),
                }
            })
            // build metadata has no precedence; compared last to stay consistent with Eq
            .then_with(|| self.build_metadata.cmp(&other.build_metadata))
    }
}

impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SchemaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
