//! Version command handler

use crate::cli::VersionArgs;
use crate::error::Result;
use crate::handlers::utils::load_schema;
use crate::output::OutputWriter;
use schemantic_core::{current_version, SchemaDocument};
use tracing::instrument;

/// Handle the version command
#[instrument(skip(output), fields(schema = %args.schema.display()))]
pub fn handle_version(args: VersionArgs, output: &mut OutputWriter) -> Result<()> {
    let value = load_schema(&args.schema)?;
    let document = SchemaDocument::from_value(&value)?;

    output.version(&current_version(&document)?)
}
