//! # standardize
//!
//! **standardize** generates the layered Go code of a domain entity (entity, GORM model,
//! repository, use case, HTTP handler and dependency wiring) from a YAML description and a
//! tree of templates, and lints those templates for consistent entity naming.
//!
//! ## Overview
//!
//! A Go service built on clean-architecture layers repeats the same names everywhere:
//! `User`, `IUserRepository`, `NewUserUseCase`, `users`, ... This crate derives all of them
//! from one configuration so that every layer agrees, and keeps the templates honest with a
//! linter that checks each layer refers to the entity through placeholders.
//!
//! ## Architecture
//!
//! - **[`naming`]** - case conversion and pluralization
//! - **[`config`]** - YAML schema, defaults, validation and the [`config::TemplateData`]
//!   projection
//! - **[`generator`]** - template rendering and file emission
//! - **[`linter`]** - naming-consistency checks over the template tree
//! - **[`cli`]** - the `standardize` and `standardize-lint` command lines
//! - **[`logging`]** - `tracing` subscriber setup shared by both binaries
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(standardize)
//!     participant Config as config::load_config
//!     participant Data as config::create_template_data
//!     participant Gen as generator::Generator
//!     participant FS as File System
//!
//!     User->>CLI: standardize --config user.yaml
//!     CLI->>Config: load_config("user.yaml")
//!     Config->>Config: Parse YAML, apply defaults, validate
//!     Config-->>CLI: DomainConfig
//!     CLI->>Data: create_template_data(&config)
//!     Data->>Data: Derive names, inject ID/CreatedAt/UpdatedAt,<br/>build GORM tags, default every layer
//!     Data-->>CLI: TemplateData
//!     CLI->>Gen: generate(Target::All)
//!     Gen->>Gen: Render entity → model → repository →<br/>use case → handler → DI in memory
//!     alt Any template missing or invalid
//!         Gen-->>User: ❌ failed to generate <layer>
//!     end
//!     Gen->>FS: Write internal/**/<domain>/*.go
//!     Gen-->>User: ✅ Generated <path>
//! ```
//!
//! ### Lint Flow
//!
//! ```text
//! templates/internal/core/entity/*.tmpl → discover entity templates
//!                                        → for repository, usecase, handler, di, model:
//!                                             file exists?  → missing-file
//!                                             rules match?  → naming-consistency
//!                                        → text / json / checkstyle report
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate every layer of the user domain
//! standardize --config configs/user.yaml --templates templates --output .
//!
//! # Only the repository, without writing anything
//! standardize --config configs/user.yaml --component repository --dry-run
//!
//! # Name-only generation with the plain templates
//! standardize --domain billing --name Invoice all
//!
//! # Check the templates themselves
//! standardize-lint --path templates
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod linter;
pub mod logging;
pub mod naming;

pub use config::{create_template_data, load_config, DomainConfig, TemplateData};
pub use generator::{Component, GenerateOptions, Generator, Target, TemplateMode};
pub use linter::{LintResult, NamingLinter, Severity};
