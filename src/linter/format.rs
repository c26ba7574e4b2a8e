use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Context;
use askama::Template;
use clap::ValueEnum;
use serde::Serialize;

use super::{LintResult, Severity};

/// Renders lint results for output.
pub trait ResultFormatter {
    fn format(&self, results: &[LintResult]) -> anyhow::Result<String>;
}

/// Output format selectable with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report grouped by severity
    #[default]
    Text,
    /// JSON document with a summary and every result
    Json,
    /// Checkstyle XML, understood by most CI annotation tools
    Checkstyle,
}

impl OutputFormat {
    pub fn formatter(self) -> Box<dyn ResultFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Checkstyle => Box::new(CheckstyleFormatter),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl Summary {
    pub fn of(results: &[LintResult]) -> Self {
        results.iter().fold(Summary::default(), |mut s, r| {
            match r.severity {
                Severity::Error => s.errors += 1,
                Severity::Warning => s.warnings += 1,
                Severity::Info => s.infos += 1,
            }
            s
        })
    }
}

/// Console report, one section per severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ResultFormatter for TextFormatter {
    fn format(&self, results: &[LintResult]) -> anyhow::Result<String> {
        let mut out = String::new();
        if results.is_empty() {
            writeln!(out, "✅ No naming issues found!")?;
            return Ok(out);
        }

        let summary = Summary::of(results);
        writeln!(out, "\n📋 Naming Consistency Results:")?;
        writeln!(
            out,
            "   {} error(s), {} warning(s), {} info(s)\n",
            summary.errors, summary.warnings, summary.infos
        )?;

        let sections = [
            (Severity::Error, "❌ Errors (must fix):"),
            (Severity::Warning, "⚠️  Warnings (should fix):"),
            (Severity::Info, "ℹ️  Info:"),
        ];
        for (severity, heading) in sections {
            let mut matching = results.iter().filter(|r| r.severity == severity).peekable();
            if matching.peek().is_none() {
                continue;
            }
            writeln!(out, "{heading}")?;
            for result in matching {
                writeln!(out, "   [{}] {}", result.rule, result.file.display())?;
                writeln!(out, "      {}", result.message)?;
                if let Some(suggestion) = &result.suggestion {
                    writeln!(out, "      💡 Suggestion: {suggestion}")?;
                }
            }
            writeln!(out)?;
        }
        Ok(out)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    results: &'a [LintResult],
}

/// `{"summary": {...}, "results": [...]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ResultFormatter for JsonFormatter {
    fn format(&self, results: &[LintResult]) -> anyhow::Result<String> {
        let report = JsonReport {
            summary: Summary::of(results),
            results,
        };
        let mut out =
            serde_json::to_string_pretty(&report).context("failed to serialize lint results")?;
        out.push('\n');
        Ok(out)
    }
}

struct CheckstyleError {
    line: usize,
    column: usize,
    severity: &'static str,
    message: String,
    source: String,
}

struct CheckstyleFile {
    name: String,
    errors: Vec<CheckstyleError>,
}

#[derive(Template)]
#[template(path = "checkstyle.xml")]
struct CheckstyleTemplate {
    files: Vec<CheckstyleFile>,
}

/// Checkstyle XML grouped by file; suggestions are appended to the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckstyleFormatter;

impl ResultFormatter for CheckstyleFormatter {
    fn format(&self, results: &[LintResult]) -> anyhow::Result<String> {
        let mut by_file: BTreeMap<String, Vec<CheckstyleError>> = BTreeMap::new();
        for result in results {
            let message = match &result.suggestion {
                Some(suggestion) => format!("{} (suggestion: {suggestion})", result.message),
                None => result.message.clone(),
            };
            by_file
                .entry(result.file.display().to_string())
                .or_default()
                .push(CheckstyleError {
                    line: result.line,
                    column: result.column,
                    severity: result.severity.as_str(),
                    message,
                    source: format!("standardize.{}", result.rule),
                });
        }
        let template = CheckstyleTemplate {
            files: by_file
                .into_iter()
                .map(|(name, errors)| CheckstyleFile { name, errors })
                .collect(),
        };
        template
            .render()
            .context("failed to render checkstyle report")
    }
}
