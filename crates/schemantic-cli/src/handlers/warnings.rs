//! Warnings command handler

use crate::cli::WarningsArgs;
use crate::error::Result;
use crate::handlers::utils::load_schema;
use crate::output::OutputWriter;
use schemantic_core::{generate_warnings, SchemaDocument};
use tracing::{info, instrument};

/// Handle the warnings command
#[instrument(skip(output), fields(schema = %args.schema.display()))]
pub fn handle_warnings(args: WarningsArgs, output: &mut OutputWriter) -> Result<()> {
    let value = load_schema(&args.schema)?;
    let document = SchemaDocument::from_value(&value)?;

    let warnings = generate_warnings(&document);
    info!(count = warnings.len(), "Generated schema warnings");

    output.warnings(&warnings)
}
