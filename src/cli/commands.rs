use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};
use tracing::info;

use crate::config::{create_template_data, load_config, DomainConfig, TemplateData};
use crate::generator::{GenerateError, GenerateOptions, Generator, Target, TemplateMode};

/// Command-line interface of the generator
///
/// Two modes are supported:
/// - configuration-driven: `standardize --config user.yaml [--component repository]`
/// - legacy: `standardize --domain user --name User entity repository`
#[derive(Parser, Debug)]
#[command(name = "standardize", version)]
#[command(about = "Generate the Go layers of a domain entity from templates", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["config", "domain"])))]
pub struct Cli {
    /// YAML domain configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate only this component in configuration-driven mode
    /// (entity, model, repository, usecase, handler, di or all)
    #[arg(long, value_name = "NAME", requires = "config")]
    pub component: Option<String>,

    /// Domain name for legacy generation
    #[arg(short, long, requires = "name")]
    pub domain: Option<String>,

    /// Entity name for legacy generation
    #[arg(short, long, requires = "domain")]
    pub name: Option<String>,

    /// Legacy components to generate: entity, model, repository, usecase, handler, di, all
    #[arg(value_name = "COMMAND", conflicts_with = "config")]
    pub commands: Vec<String>,

    /// Load and validate the configuration, then exit without generating
    #[arg(long, requires = "config")]
    pub validate: bool,

    /// Render everything and list the files that would be written
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Directory the generated `internal/...` tree is written under
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Root of the `.go.tmpl` template tree
    #[arg(short, long, env = "STANDARDIZE_TEMPLATES", default_value = "templates")]
    pub templates: PathBuf,
}

impl Cli {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            output_root: self.output.clone(),
            templates_root: self.templates.clone(),
            dry_run: self.dry_run,
        }
    }
}

/// Load a configuration and generate `target` from the `_config` templates.
pub fn generate_from_config(
    config_path: &Path,
    target: Target,
    options: &GenerateOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let config = load_config(config_path)?;
    let data = create_template_data(&config);
    println!(
        "🔧 Generating {} ({}) from {}",
        data.entity,
        data.domain,
        config_path.display()
    );
    let domain = data.domain.clone();
    Generator::new(data, TemplateMode::ConfigDriven, options.clone())
        .generate(target)
        .with_context(|| format!("failed to generate domain {domain}"))
}

/// Generate one legacy command (`entity`, ..., `all`) from a domain and entity name.
pub fn generate_legacy(
    domain: &str,
    entity: &str,
    command: &str,
    options: &GenerateOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let target: Target = command.parse()?;
    let data = TemplateData::from_names(domain, entity);
    Generator::new(data, TemplateMode::Legacy, options.clone()).generate(target)
}

/// Load, default and validate a configuration and print what it would generate.
pub fn validate_config(config_path: &Path) -> anyhow::Result<DomainConfig> {
    let config = load_config(config_path)?;
    let data = create_template_data(&config);
    println!("✅ Configuration is valid: {}", config_path.display());
    println!("   Domain: {}", data.domain);
    println!(
        "   Entity: {} ({} fields)",
        data.entity,
        data.entity_config.fields.len()
    );
    println!("   Table: {}", data.model_config.table_name);
    println!(
        "   Repository: {} / {}",
        data.repository_config.interface.name, data.repository_config.implementation.name
    );
    println!(
        "   Use case: {} / {}",
        data.use_case_config.interface.name, data.use_case_config.implementation.name
    );
    println!(
        "   Handler: {} at {}",
        data.handlers_config.name, data.handlers_config.base_path
    );
    println!("   Endpoints: {}", data.endpoints.len());
    Ok(config)
}

fn parse_component(component: &str) -> Result<Target, GenerateError> {
    component
        .parse()
        .map_err(|_| GenerateError::UnknownComponent {
            component: component.to_string(),
        })
}

/// Run a parsed command line.
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();

    if let Some(config) = &cli.config {
        if cli.validate {
            validate_config(config)?;
            return Ok(());
        }
        let target = match &cli.component {
            Some(component) => parse_component(component)?,
            None => Target::All,
        };
        let files = generate_from_config(config, target, &options)?;
        info!(files = files.len(), "configuration-driven generation complete");
        return Ok(());
    }

    let (Some(domain), Some(name)) = (&cli.domain, &cli.name) else {
        bail!("either --config or both --domain and --name are required");
    };
    if cli.commands.is_empty() {
        bail!("no command given (expected entity, model, repository, usecase, handler, di or all)");
    }
    // reject unknown commands before anything is written
    for command in &cli.commands {
        command.parse::<Target>()?;
    }
    for command in &cli.commands {
        generate_legacy(domain, name, command, &options)?;
    }
    Ok(())
}

/// Parse `std::env::args` and run.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}
