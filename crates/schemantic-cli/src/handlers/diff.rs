//! Diff command handler

use crate::cli::DiffArgs;
use crate::config::Config;
use crate::error::Result;
use crate::handlers::utils::load_schema;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemantic_core::Changelog;
use tracing::{info, instrument};

/// Handle the diff command
#[instrument(skip(config, output), fields(schema_a = %args.schema_a.display(), schema_b = %args.schema_b.display()))]
pub fn handle_diff(args: DiffArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details(
        "diff_command",
        &format!("{} -> {}", args.schema_a.display(), args.schema_b.display()),
    );

    output.info(&format!("schemaA: {}", args.schema_a.display()))?;
    output.info(&format!("schemaB: {}", args.schema_b.display()))?;

    let source = load_schema(&args.schema_a)?;
    let destination = load_schema(&args.schema_b)?;

    let changelog = {
        let _diff_timer = Timer::new("changelog_generation");
        Changelog::generate(&source, &destination)?
    };

    info!(
        version_current = %changelog.version_current,
        version_new = %changelog.version_new,
        major = changelog.changes.major.len(),
        minor = changelog.changes.minor.len(),
        patch = changelog.changes.patch.len(),
        "Diff completed"
    );

    let ignore_warnings = args.ignore_warnings || config.warnings.ignore;
    output.changelog(&changelog, ignore_warnings)
}
