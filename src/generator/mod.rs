//! # Generator Module
//!
//! Renders the Go source files of one domain entity from a tree of `.go.tmpl` templates.
//!
//! ## Overview
//!
//! Every entity is generated as six architectural layers:
//! - **Entity** - the domain struct with validation and conversion methods
//! - **Model** - the GORM persistence struct with tags, hooks and `TableName()`
//! - **Repository** - interface + implementation, plus the domain's `repositories.go`
//! - **Use case** - business interface + implementation, plus `usecases.go`
//! - **Handler** - HTTP handler with route registration
//! - **DI** - constructors wiring repository → use case → handler
//!
//! ## Architecture
//!
//! ```text
//! TemplateData → Generator::render (all files, in memory) → write_output → Go sources
//! ```
//!
//! Templates are MiniJinja documents resolved under a templates root (see
//! [`Component::files`] for the path conventions). Two template families exist:
//! [`TemplateMode::Legacy`] templates only use the entity/domain names, while
//! [`TemplateMode::ConfigDriven`] templates (`*_config.go.tmpl`) consume the full
//! configuration (fields, methods, pagination, middleware, ...).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use standardize::config::{create_template_data, load_config};
//! use standardize::generator::{GenerateOptions, Generator, TemplateMode};
//!
//! let config = load_config("configs/user.yaml")?;
//! let generator = Generator::new(
//!     create_template_data(&config),
//!     TemplateMode::ConfigDriven,
//!     GenerateOptions::default(),
//! );
//! generator.generate_all_files()?;
//! ```
//!
//! ## Failure Behaviour
//!
//! Generation stops at the first failing layer and the error names it
//! (`failed to generate repository: template file ... does not exist`). A missing
//! template is reported explicitly as [`GenerateError::TemplateMissing`].

mod error;
mod generate;
mod layout;
mod templates;

#[cfg(test)]
mod tests;

pub use error::GenerateError;
pub use generate::{default_templates_root, GenerateOptions, Generator, RenderedFile, TEMPLATES_ENV};
pub use layout::{Component, Target, TemplateMode};
pub use templates::{write_output, TemplateEngine};
