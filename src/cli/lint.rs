use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use crate::linter::{NamingLinter, OutputFormat};

/// Command-line interface of the naming-consistency linter
#[derive(Parser, Debug)]
#[command(name = "standardize-lint", version)]
#[command(
    about = "Check that layer templates use consistent entity placeholders",
    long_about = None
)]
pub struct LintCli {
    /// Template root containing `internal/...`
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Also report discovered entities
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Fixes are not applied automatically; suggestions are printed instead
    #[arg(long, default_value_t = false)]
    pub fix: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Lint, print the report and return whether any error was found.
pub fn run_lint(cli: &LintCli) -> anyhow::Result<bool> {
    if cli.fix {
        warn!("--fix does not rewrite templates; apply the printed suggestions by hand");
    }
    let mut linter = NamingLinter::new(&cli.path).verbose(cli.verbose);
    linter
        .run()
        .with_context(|| format!("failed to lint {}", cli.path.display()))?;
    let report = cli.format.formatter().format(linter.results())?;
    print!("{report}");
    Ok(linter.has_errors())
}
