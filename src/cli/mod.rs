//! # CLI Module
//!
//! Command-line front ends for the generator (`standardize`) and the naming linter
//! (`standardize-lint`).
//!
//! ## `standardize`
//!
//! Configuration-driven generation renders the `*_config.go.tmpl` templates:
//!
//! ```bash
//! standardize --config configs/user.yaml
//! standardize --config configs/user.yaml --component repository --dry-run
//! standardize --config configs/user.yaml --validate
//! ```
//!
//! Legacy generation only needs a domain and an entity name and renders the plain
//! templates:
//!
//! ```bash
//! standardize --domain user --name User entity model repository
//! standardize --domain user --name User all
//! ```
//!
//! Options:
//! - `--output <DIR>` - root the `internal/...` tree is written under (default: `.`)
//! - `--templates <DIR>` - template root (default: `$STANDARDIZE_TEMPLATES` or `templates`)
//! - `--dry-run` - render everything, write nothing
//!
//! ## `standardize-lint`
//!
//! ```bash
//! standardize-lint --path templates --format checkstyle > lint.xml
//! ```
//!
//! Exits with status 1 when any error-level result is reported or when the lint itself
//! fails.

mod commands;
mod lint;


pub use commands::{
    execute, generate_from_config, generate_legacy, run_cli, validate_config, Cli,
};
pub use lint::{run_lint, LintCli};
