//! # Configuration Module
//!
//! Loads a YAML domain description, fills in defaults, validates it and projects it into
//! the [`TemplateData`] consumed by the generator.
//!
//! ## Overview
//!
//! ```text
//! domain.yaml → load_config (parse + apply_defaults + validate) → create_template_data → TemplateData
//! ```
//!
//! Only `domain` is required. A minimal file:
//!
//! ```yaml
//! domain: user
//! entity:
//!   fields:
//!     - name: Email
//!       type: string
//!       unique: true
//! ```
//!
//! produces an entity `User` with `ID`, `CreatedAt`, `UpdatedAt` and `Email`, a `users`
//! table, `IUserRepository` / `IUserUseCase` interfaces with every CRUD method, offset
//! pagination and the default filter operators.
//!
//! ## Limitations
//!
//! - Field types are not checked. A typo such as `strnig` is rendered as-is and only
//!   fails when the generated Go code is compiled.
//! - Sections are treated as absent when all of their values are zero. Explicitly
//!   disabling every standard method of a layer therefore re-enables all of them, and a
//!   `generation` section with both `uuid_primary_key` and `preserve_custom_code` set to
//!   false is replaced by the recommended flags.

mod error;
mod load;
mod template_data;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use load::{apply_defaults, load_config, parse_config, DEFAULT_MODULE};
pub use template_data::{
    add_standard_fields, add_standard_model_fields, create_template_data, gorm_tag, json_tag,
    primary_key_type, TemplateData, DEFAULT_FILTER_OPERATORS, DEFAULT_MUTATING_METHODS,
    STANDARD_FIELDS,
};
pub use types::*;
