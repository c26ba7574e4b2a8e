use clap::Parser;
use standardize::cli::{run_lint, LintCli};
use standardize::logging::{init_logging, LogConfig};

fn main() {
    if let Err(e) = init_logging(&LogConfig::from_env()) {
        eprintln!("Warning: {e:#}");
    }
    let cli = LintCli::parse();
    let failed = match run_lint(&cli) {
        Ok(has_errors) => has_errors,
        Err(e) => {
            eprintln!("❌ {e:#}");
            true
        }
    };
    if failed {
        std::process::exit(1);
    }
}
