//! Schemantic Core - semantic versioning for JSON Schemas
//!
//! This crate compares two versions of a JSON Schema document and decides
//! which semantic version the newer one deserves:
//! - **Diff**: every property is matched across versions by its path and
//!   each difference is classified as major, minor or patch
//! - **Versioning**: the `$version` keyword of the older schema is bumped
//!   according to the highest severity found
//! - **Warnings**: advisory hygiene findings about the newer schema
//!
//! ## Quick Start
//!
//! ```rust
//! use schemantic_core::{Changelog, SchemaVersion};
//! use serde_json::json;
//!
//! let previous = json!({
//!     "$version": "1.0.0",
//!     "properties": {
//!         "url": {"type": "string"}
//!     }
//! });
//! let next = json!({
//!     "$version": "1.0.0",
//!     "properties": {}
//! });
//!
//! let changelog = Changelog::generate(&previous, &next).unwrap();
//! assert_eq!(changelog.version_new, SchemaVersion::new(2, 0, 0));
//! for change in &changelog.changes.major {
//!     println!("{}", change);
//! }
//! ```
//!
//! ## Severity Rules
//!
//! - **Major**: a property was removed, or its set of valid values shrank
//!   (type change, tighter bounds, newly required keys)
//! - **Minor**: a property was added
//! - **Patch**: documentation edits and constraints that only widen
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

pub mod changelog;
pub mod diff;
pub mod error;
pub mod schema;
pub mod versioning;
pub mod warnings;

pub use changelog::Changelog;
pub use diff::{
    diff_values, generate_schema_changes, ChangeRecord, ChangeSet, PropertyDescriptor, Severity,
};
pub use error::{DiffError, DiffResult};
pub use schema::{PropertyNode, SchemaDocument, SchemaKind, SchemaType};
pub use versioning::{current_version, next_version, SchemaVersion, VersionBump};
pub use warnings::{generate_warnings, WarningRecord};
