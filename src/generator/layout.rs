//! Template and output path conventions.
//!
//! The template tree mirrors the generated tree:
//!
//! ```text
//! templates/internal/core/entity/entity.go.tmpl        → internal/core/entity/<domain>/<entity>.go
//! templates/internal/core/models/model.go.tmpl         → internal/core/models/<domain>/<entity>.go
//! templates/internal/repository/repository.go.tmpl     → internal/repository/<domain>/<entity>_repository.go
//! templates/internal/repository/repositories.go.tmpl   → internal/repository/<domain>/repositories.go
//! templates/internal/usecase/usecase.go.tmpl           → internal/usecase/<domain>/<entity>_usecase.go
//! templates/internal/usecase/usecases.go.tmpl          → internal/usecase/<domain>/usecases.go
//! templates/internal/interface/http/handlers/handler.go.tmpl → internal/interface/http/handlers/<domain>/<entity>.go
//! templates/internal/di/di.go.tmpl                     → internal/di/<domain>/di.go
//! ```
//!
//! Each per-entity template has a `_config` variant (`entity_config.go.tmpl`, ...) used in
//! configuration-driven mode.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::GenerateError;
use crate::config::TemplateData;

/// Which template family renders a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateMode {
    /// `<layer>.go.tmpl`, driven only by the domain/entity names
    Legacy,
    /// `<layer>_config.go.tmpl`, driven by the full configuration
    ConfigDriven,
}

impl TemplateMode {
    fn suffix(self) -> &'static str {
        match self {
            TemplateMode::Legacy => "",
            TemplateMode::ConfigDriven => "_config",
        }
    }
}

/// A generated architectural layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Component {
    Entity,
    Model,
    Repository,
    UseCase,
    Handler,
    Di,
}

impl Component {
    /// Generation order.
    pub const ALL: [Component; 6] = [
        Component::Entity,
        Component::Model,
        Component::Repository,
        Component::UseCase,
        Component::Handler,
        Component::Di,
    ];

    /// Command-line name of the component.
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Entity => "entity",
            Component::Model => "model",
            Component::Repository => "repository",
            Component::UseCase => "usecase",
            Component::Handler => "handler",
            Component::Di => "di",
        }
    }

    /// Directory of the layer, relative to both the template root and the output root.
    pub fn layer_dir(self) -> &'static str {
        match self {
            Component::Entity => "internal/core/entity",
            Component::Model => "internal/core/models",
            Component::Repository => "internal/repository",
            Component::UseCase => "internal/usecase",
            Component::Handler => "internal/interface/http/handlers",
            Component::Di => "internal/di",
        }
    }

    fn template_stem(self) -> &'static str {
        match self {
            Component::Entity => "entity",
            Component::Model => "model",
            Component::Repository => "repository",
            Component::UseCase => "usecase",
            Component::Handler => "handler",
            Component::Di => "di",
        }
    }

    /// Main template of the layer, relative to the template root.
    pub fn template_path(self, mode: TemplateMode) -> PathBuf {
        PathBuf::from(self.layer_dir()).join(format!(
            "{}{}.go.tmpl",
            self.template_stem(),
            mode.suffix()
        ))
    }

    /// Every `(template, output)` pair the layer produces, relative to their roots.
    pub fn files(self, mode: TemplateMode, data: &TemplateData) -> Vec<(PathBuf, PathBuf)> {
        let layer = PathBuf::from(self.layer_dir());
        let out_dir = layer.join(&data.domain);
        let entity = &data.entity_snake;
        let main_output = match self {
            Component::Entity | Component::Model | Component::Handler => {
                out_dir.join(format!("{entity}.go"))
            }
            Component::Repository => out_dir.join(format!("{entity}_repository.go")),
            Component::UseCase => out_dir.join(format!("{entity}_usecase.go")),
            Component::Di => out_dir.join("di.go"),
        };
        let mut files = vec![(self.template_path(mode), main_output)];
        match self {
            Component::Repository => files.push((
                layer.join("repositories.go.tmpl"),
                out_dir.join("repositories.go"),
            )),
            Component::UseCase => {
                files.push((layer.join("usecases.go.tmpl"), out_dir.join("usecases.go")))
            }
            _ => {}
        }
        files
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entity" => Ok(Component::Entity),
            "model" => Ok(Component::Model),
            "repository" => Ok(Component::Repository),
            "usecase" | "use_case" => Ok(Component::UseCase),
            "handler" => Ok(Component::Handler),
            "di" => Ok(Component::Di),
            _ => Err(GenerateError::UnknownCommand {
                command: s.to_string(),
            }),
        }
    }
}

/// What a generate command produces: every layer or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    All,
    Only(Component),
}

impl Target {
    /// Layers to render, in generation order.
    pub fn components(self) -> Vec<Component> {
        match self {
            Target::All => Component::ALL.to_vec(),
            Target::Only(component) => vec![component],
        }
    }
}

impl FromStr for Target {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Target::All);
        }
        s.parse().map(Target::Only)
    }
}
