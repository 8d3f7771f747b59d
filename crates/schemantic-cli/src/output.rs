//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output in
//! various formats (human-readable, Markdown, JSON, YAML) with dedicated
//! renderings for changelogs and schema warnings.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use schemantic_core::{ChangeRecord, ChangeSet, Changelog, SchemaVersion, VersionBump, WarningRecord};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Serializable view of a changelog handed to machine-readable formats
#[derive(Debug, Serialize)]
pub struct ChangelogReport<'a> {
    pub version_current: &'a SchemaVersion,
    pub version_new: &'a SchemaVersion,
    pub bump: VersionBump,
    pub changes: &'a ChangeSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<&'a [WarningRecord]>,
}

impl<'a> ChangelogReport<'a> {
    pub fn new(changelog: &'a Changelog, ignore_warnings: bool) -> Self {
        Self {
            version_current: &changelog.version_current,
            version_new: &changelog.version_new,
            bump: changelog.bump(),
            changes: &changelog.changes,
            warnings: (!ignore_warnings).then_some(changelog.warnings.as_slice()),
        }
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a changelog, optionally without its warnings
    fn format_changelog(
        &self,
        changelog: &Changelog,
        ignore_warnings: bool,
        use_color: bool,
    ) -> Result<String>;

    /// Format a list of schema warnings
    fn format_warnings(&self, warnings: &[WarningRecord], use_color: bool) -> Result<String>;

    /// Format a declared schema version
    fn format_version(&self, version: &SchemaVersion) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human | OutputFormat::Markdown => {
                // No dedicated rendering, fall back to pretty JSON
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_changelog(
        &self,
        changelog: &Changelog,
        ignore_warnings: bool,
        use_color: bool,
    ) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_changelog_human(changelog, ignore_warnings, use_color)),
            OutputFormat::Markdown => Ok(format_changelog_markdown(changelog, ignore_warnings)),
            _ => self.format(&ChangelogReport::new(changelog, ignore_warnings)),
        }
    }

    fn format_warnings(&self, warnings: &[WarningRecord], use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_warnings_human(warnings, use_color)),
            OutputFormat::Markdown => Ok(format_warnings_markdown(warnings)),
            _ => self.format(&warnings),
        }
    }

    fn format_version(&self, version: &SchemaVersion) -> Result<String> {
        match self {
            OutputFormat::Human | OutputFormat::Markdown => Ok(version.to_string()),
            _ => self.format(&serde_json::json!({ "version": version })),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.dimmed().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a changelog
    pub fn changelog(&mut self, changelog: &Changelog, ignore_warnings: bool) -> Result<()> {
        trace!(
            changes = changelog.changes.len(),
            warnings = changelog.warnings.len(),
            ignore_warnings,
            "Outputting changelog"
        );
        let formatted = self
            .format
            .format_changelog(changelog, ignore_warnings, self.use_color)?;
        self.emit(formatted)
    }

    /// Write schema warnings
    pub fn warnings(&mut self, warnings: &[WarningRecord]) -> Result<()> {
        trace!(count = warnings.len(), "Outputting warnings");
        let formatted = self.format.format_warnings(warnings, self.use_color)?;
        self.emit(formatted)
    }

    /// Write a schema version
    pub fn version(&mut self, version: &SchemaVersion) -> Result<()> {
        let formatted = self.format.format_version(version)?;
        self.emit(formatted)
    }

    fn emit(&mut self, formatted: String) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(&formatted)
        } else {
            self.writeln(&formatted)
        }
    }
}

fn paint(text: &str, color: Color, use_color: bool) -> String {
    if use_color {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

fn heading(text: &str, color: Color, use_color: bool) -> String {
    if use_color {
        text.color(color).bold().to_string()
    } else {
        text.to_string()
    }
}

fn change_line(marker: &str, record: &ChangeRecord, color: Color, use_color: bool) -> String {
    if use_color {
        format!(
            "{} {} {}",
            marker.color(color),
            record.display_path.color(color).bold(),
            record.message.color(color)
        )
    } else {
        format!("{} {} {}", marker, record.display_path, record.message)
    }
}

/// Format a changelog for a terminal
pub fn format_changelog_human(changelog: &Changelog, ignore_warnings: bool, use_color: bool) -> String {
    let mut output = String::new();

    let bold = |text: String| if use_color { text.bold().to_string() } else { text };
    output.push_str(&format!(
        "Current version: {}\n",
        bold(changelog.version_current.to_string())
    ));
    output.push_str(&format!("New version: {}", bold(changelog.version_new.to_string())));
    if changelog.bump() != VersionBump::None {
        output.push_str(&format!(" ({} release)", changelog.bump()));
    }
    output.push('\n');

    let sections = [
        ("Breaking changes", "-", Color::Red, &changelog.changes.major),
        ("Minor changes", "+", Color::Green, &changelog.changes.minor),
        ("Patch changes", "-+", Color::BrightBlue, &changelog.changes.patch),
    ];

    for (title, marker, color, records) in sections {
        if records.is_empty() {
            continue;
        }
        output.push('\n');
        output.push_str(&heading(title, color, use_color));
        output.push_str("\n\n");
        for record in records {
            output.push_str(&change_line(marker, record, color, use_color));
            output.push('\n');
        }
    }

    if changelog.changes.is_empty() {
        output.push('\n');
        output.push_str(&paint("No changes detected", Color::Green, use_color));
        output.push('\n');
    }

    if !ignore_warnings && !changelog.warnings.is_empty() {
        output.push('\n');
        output.push_str(&format_warnings_human(&changelog.warnings, use_color));
    }

    output
}

/// Format schema warnings for a terminal
pub fn format_warnings_human(warnings: &[WarningRecord], use_color: bool) -> String {
    if warnings.is_empty() {
        return format!("{}\n", paint("No schema warnings", Color::Green, use_color));
    }

    let mut output = heading("Schema warnings", Color::Yellow, use_color);
    output.push_str("\n\n");
    for warning in warnings {
        output.push_str(&paint(&warning.to_string(), Color::Yellow, use_color));
        output.push('\n');
    }
    output
}

fn markdown_change(record: &ChangeRecord) -> String {
    format!("- `{}` {}\n", record.display_path, record.message)
}

fn markdown_warning(warning: &WarningRecord) -> String {
    if warning.is_root() {
        format!("- {}\n", warning.message)
    } else {
        format!("- `{}` {}\n", warning.path, warning.message)
    }
}

/// Format a changelog as a Markdown release entry
pub fn format_changelog_markdown(changelog: &Changelog, ignore_warnings: bool) -> String {
    let mut output = format!("## {}\n\n", changelog.version_new);

    match changelog.bump() {
        VersionBump::None => output.push_str(&format!(
            "Unchanged from `{}`.\n",
            changelog.version_current
        )),
        bump => output.push_str(&format!(
            "{} release, previous version `{}`.\n",
            capitalize(&bump.to_string()),
            changelog.version_current
        )),
    }

    let sections = [
        ("Breaking changes", &changelog.changes.major),
        ("Minor changes", &changelog.changes.minor),
        ("Patch changes", &changelog.changes.patch),
    ];
    for (title, records) in sections {
        if records.is_empty() {
            continue;
        }
        output.push_str(&format!("\n### {}\n\n", title));
        for record in records {
            output.push_str(&markdown_change(record));
        }
    }

    if !ignore_warnings && !changelog.warnings.is_empty() {
        output.push('\n');
        output.push_str(&format_warnings_markdown(&changelog.warnings));
    }

    output
}

/// Format schema warnings as a Markdown list
pub fn format_warnings_markdown(warnings: &[WarningRecord]) -> String {
    if warnings.is_empty() {
        return "_No schema warnings._\n".to_string();
    }

    let mut output = "### Schema warnings\n\n".to_string();
    for warning in warnings {
        output.push_str(&markdown_warning(warning));
    }
    output
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
