//! # Naming-Consistency Linter
//!
//! Checks that the `.go.tmpl` files of every generated layer refer to the entity through
//! template placeholders (`{{ Entity }}`, `{{ EntitiesSnake }}`, `{{ Domain }}`) and agree
//! on the names derived from it, so that a template edit in one layer cannot silently
//! drift from the others.
//!
//! The linter works on raw text with regular expressions. Template files are not valid
//! Go until rendered, so nothing is parsed.
//!
//! ## Phases
//!
//! 1. **Discovery** - walk `<root>/internal/core/entity/` for `.tmpl` files and register
//!    the entity templates. A file is an entity template when it carries the
//!    `// @entity-template` marker, or, failing that, when it uses the `Entity` placeholder
//!    and declares a UUID `ID` plus `CreatedAt`/`UpdatedAt` timestamps.
//! 2. **Validation** - for each discovered entity, the repository, use case, handler, DI
//!    and model templates must exist (`missing-file`) and contain every required
//!    declaration (`naming-consistency`).
//!
//! Placeholders are recognised in both the `{{ Entity }}` and `{{.Entity}}` spellings.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use standardize::linter::{NamingLinter, ResultFormatter, TextFormatter};
//!
//! let mut linter = NamingLinter::new("templates");
//! linter.run()?;
//! print!("{}", TextFormatter.format(linter.results())?);
//! if linter.has_errors() {
//!     std::process::exit(1);
//! }
//! ```

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::generator::{Component, TemplateMode};

mod format;
mod rules;


pub use format::{
    CheckstyleFormatter, JsonFormatter, OutputFormat, ResultFormatter, Summary, TextFormatter,
};
pub use rules::{placeholder, rules_for, Rule, CHECKED_LAYERS};

/// Directory, relative to the lint root, scanned for entity templates
pub const ENTITY_TEMPLATE_DIR: &str = "internal/core/entity";

/// Marker line that identifies an entity template without heuristics
pub const ENTITY_MARKER: &str = "// @entity-template";

static MARKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*//\s*@entity-template\s*$").expect("marker regex must compile")
});
static ENTITY_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&placeholder("Entity")).expect("placeholder regex must compile"));
static UUID_ID_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*ID\s+\S*UUID\b").expect("ID regex must compile"));
static CREATED_AT_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*CreatedAt\s+\*?time\.Time\b").expect("CreatedAt regex must compile")
});
static UPDATED_AT_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*UpdatedAt\s+\*?time\.Time\b").expect("UpdatedAt regex must compile")
});

/// Severity of a lint result; only `Error` affects the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding of a lint run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    /// File the finding refers to
    pub file: PathBuf,
    /// 1-based line, 0 when the finding concerns the whole file
    pub line: usize,
    /// 1-based column, 0 when unknown
    pub column: usize,
    pub severity: Severity,
    /// Rule identifier, e.g. `missing-file` or `naming-consistency`
    pub rule: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintResult {
    pub fn new(
        file: impl Into<PathBuf>,
        severity: Severity,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintResult {
            file: file.into(),
            line: 0,
            column: 0,
            severity,
            rule: rule.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// How an entity template was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Detection {
    /// The file carries [`ENTITY_MARKER`]
    Marker,
    /// Placeholder, UUID `ID` and timestamp fields were all found
    Heuristic,
}

impl Detection {
    pub fn as_str(self) -> &'static str {
        match self {
            Detection::Marker => "marker",
            Detection::Heuristic => "heuristic",
        }
    }
}

/// An entity discovered in the template tree.
///
/// Templates describe a placeholder entity, so the names recorded here are the placeholder
/// names the other layers are expected to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityInfo {
    pub name: String,
    pub snake: String,
    pub plural_snake: String,
    pub domain: String,
    pub file: PathBuf,
    pub detection: Detection,
}

impl EntityInfo {
    fn placeholder(file: PathBuf, detection: Detection) -> Self {
        EntityInfo {
            name: "Entity".to_string(),
            snake: "EntitySnake".to_string(),
            plural_snake: "EntitiesSnake".to_string(),
            domain: "Domain".to_string(),
            file,
            detection,
        }
    }
}

/// Classify template text as an entity template, marker first.
pub fn detect_entity_template(content: &str) -> Option<Detection> {
    if MARKER_LINE.is_match(content) {
        return Some(Detection::Marker);
    }
    let heuristic = ENTITY_PLACEHOLDER.is_match(content)
        && UUID_ID_FIELD.is_match(content)
        && CREATED_AT_FIELD.is_match(content)
        && UPDATED_AT_FIELD.is_match(content);
    heuristic.then_some(Detection::Heuristic)
}

/// Lints one template tree. Results accumulate across calls until the linter is dropped.
pub struct NamingLinter {
    root: PathBuf,
    verbose: bool,
    entities: BTreeMap<String, EntityInfo>,
    results: Vec<LintResult>,
}

impl NamingLinter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        NamingLinter {
            root: root.into(),
            verbose: false,
            entities: BTreeMap::new(),
            results: Vec::new(),
        }
    }

    /// Also record `info` results (`entity-discovered`).
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Discover entities, then validate every layer of each.
    ///
    /// # Errors
    ///
    /// Fails when the entity template directory cannot be walked. Unreadable individual
    /// files are recorded as `read-error` results instead.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!(root = %self.root.display(), "linting templates");
        self.discover_entities()?;

        if self.entities.is_empty() {
            warn!(root = %self.root.display(), "no entity templates found");
            self.results.push(
                LintResult::new(
                    self.root.join(ENTITY_TEMPLATE_DIR),
                    Severity::Warning,
                    "no-entity-templates",
                    "no entity templates found",
                )
                .with_suggestion(format!(
                    "add `{ENTITY_MARKER}` to the entity template or declare ID, CreatedAt and UpdatedAt fields"
                )),
            );
            return Ok(());
        }

        let names: Vec<String> = self.entities.keys().cloned().collect();
        for name in names {
            for layer in CHECKED_LAYERS {
                self.check_layer(&name, layer);
            }
        }
        info!(
            entities = self.entities.len(),
            results = self.results.len(),
            "lint finished"
        );
        Ok(())
    }

    /// Walk the entity template directory and register entity templates.
    pub fn discover_entities(&mut self) -> anyhow::Result<()> {
        let dir = self.root.join(ENTITY_TEMPLATE_DIR);
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension() != Some(OsStr::new("tmpl")) {
                continue;
            }
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "skipping unreadable template");
                    self.results.push(LintResult::new(
                        path,
                        Severity::Error,
                        "read-error",
                        format!("failed to read template: {err}"),
                    ));
                    continue;
                }
            };
            let Some(detection) = detect_entity_template(&content) else {
                debug!(file = %path.display(), "not an entity template");
                continue;
            };
            let info = EntityInfo::placeholder(path.to_path_buf(), detection);
            if self.entities.contains_key(&info.name) {
                debug!(file = %path.display(), "entity already registered");
                continue;
            }
            debug!(file = %path.display(), ?detection, "entity template found");
            if self.verbose {
                self.results.push(LintResult::new(
                    path,
                    Severity::Info,
                    "entity-discovered",
                    format!("entity template found by {}", detection.as_str()),
                ));
            }
            self.entities.insert(info.name.clone(), info);
        }
        Ok(())
    }

    fn check_layer(&mut self, entity: &str, layer: Component) {
        let path = self.root.join(layer.template_path(TemplateMode::Legacy));
        if !path.is_file() {
            self.results.push(
                LintResult::new(
                    &path,
                    Severity::Error,
                    "missing-file",
                    format!("{layer} template for {entity} does not exist"),
                )
                .with_suggestion(format!("create {}", path.display())),
            );
            return;
        }
        match fs::read_to_string(&path) {
            Ok(content) => self.check_content(layer, &path, &content),
            Err(err) => self.results.push(LintResult::new(
                &path,
                Severity::Error,
                "read-error",
                format!("failed to read template: {err}"),
            )),
        }
    }

    /// Match every rule of `layer` line by line; unmatched rules become errors.
    pub fn check_content(&mut self, layer: Component, file: &Path, content: &str) {
        for rule in rules_for(layer) {
            if content.lines().any(|line| rule.pattern.is_match(line)) {
                continue;
            }
            debug!(file = %file.display(), pattern = %rule.pattern, "required pattern missing");
            self.results.push(
                LintResult::new(file, Severity::Error, "naming-consistency", &rule.message)
                    .with_suggestion(&rule.suggestion),
            );
        }
    }

    pub fn entities(&self) -> &BTreeMap<String, EntityInfo> {
        &self.entities
    }

    pub fn results(&self) -> &[LintResult] {
        &self.results
    }

    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Error)
    }
}
