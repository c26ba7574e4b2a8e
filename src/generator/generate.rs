use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use super::layout::{Component, Target, TemplateMode};
use super::templates::{write_output, TemplateEngine};
use crate::config::TemplateData;

/// Environment variable overriding the default templates root
pub const TEMPLATES_ENV: &str = "STANDARDIZE_TEMPLATES";

/// `$STANDARDIZE_TEMPLATES`, falling back to `templates`.
pub fn default_templates_root() -> PathBuf {
    env::var_os(TEMPLATES_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Where templates are read from and generated files are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root that generated paths (`internal/...`) are joined onto
    pub output_root: PathBuf,
    /// Root of the `.go.tmpl` tree
    pub templates_root: PathBuf,
    /// Render everything but write nothing
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            templates_root: default_templates_root(),
            dry_run: false,
        }
    }
}

/// One rendered file, not yet written
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub component: Component,
    /// Absolute or output-root-relative destination
    pub path: PathBuf,
    pub contents: String,
}

/// Renders the layers of one entity and writes them out.
///
/// Rendering is staged: every requested file is rendered in memory first and nothing is
/// written unless all renders succeeded. A failing write still leaves earlier files on
/// disk.
pub struct Generator {
    data: TemplateData,
    mode: TemplateMode,
    options: GenerateOptions,
    engine: TemplateEngine,
}

impl Generator {
    pub fn new(data: TemplateData, mode: TemplateMode, options: GenerateOptions) -> Self {
        Self {
            data,
            mode,
            options,
            engine: TemplateEngine::new(),
        }
    }

    /// Render every file of `target` in generation order.
    ///
    /// The first failure aborts, wrapped with the name of the failing layer.
    pub fn render(&self, target: Target) -> anyhow::Result<Vec<RenderedFile>> {
        let mut rendered = Vec::new();
        for component in target.components() {
            for (template, output) in component.files(self.mode, &self.data) {
                let template_path = self.options.templates_root.join(template);
                let contents = self
                    .engine
                    .render(&template_path, &self.data)
                    .with_context(|| format!("failed to generate {component}"))?;
                rendered.push(RenderedFile {
                    component,
                    path: self.options.output_root.join(output),
                    contents,
                });
            }
        }
        Ok(rendered)
    }

    /// Render and write `target`, returning the written (or, in dry-run, planned) paths.
    pub fn generate(&self, target: Target) -> anyhow::Result<Vec<PathBuf>> {
        info!(
            entity = %self.data.entity,
            domain = %self.data.domain,
            mode = ?self.mode,
            target = ?target,
            "generating"
        );
        let files = self.render(target)?;
        let mut paths = Vec::with_capacity(files.len());
        for file in files {
            if self.options.dry_run {
                println!("📝 Would generate {}", file.path.display());
            } else {
                write_output(&file.path, &file.contents)
                    .with_context(|| format!("failed to generate {}", file.component))?;
                println!("✅ Generated {}", file.path.display());
            }
            paths.push(file.path);
        }
        info!(files = paths.len(), dry_run = self.options.dry_run, "generation finished");
        Ok(paths)
    }

    /// Entity, model, repository, use case, handler and DI, in that order.
    pub fn generate_all_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        self.generate(Target::All)
    }

    pub fn generate_component(&self, component: Component) -> anyhow::Result<Vec<PathBuf>> {
        self.generate(Target::Only(component))
    }
}
