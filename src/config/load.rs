use std::path::Path;

use tracing::{debug, info};

use super::error::ConfigError;
use super::types::{DomainConfig, GenerationConfig, MethodConfig};
use crate::naming::to_pascal_case;

/// Module path used when the configuration does not name one.
pub const DEFAULT_MODULE: &str = "go_backend_gorm";

/// Load, default and validate a domain configuration file.
///
/// # Errors
///
/// - [`ConfigError::Read`] if the file is missing or unreadable
/// - [`ConfigError::Parse`] if the YAML is malformed
/// - [`ConfigError::Validation`] if `domain` is empty after defaulting, or a declared
///   method has neither an `implementation` nor `placeholder: true`
pub fn load_config(path: impl AsRef<Path>) -> Result<DomainConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, path)?;
    info!(
        path = %path.display(),
        domain = %config.domain,
        entity = %config.entity.name,
        "loaded domain config"
    );
    Ok(config)
}

/// Parse, default and validate configuration text; `origin` is used in error messages.
pub fn parse_config(content: &str, origin: &Path) -> Result<DomainConfig, ConfigError> {
    let mut config: DomainConfig =
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
    apply_defaults(&mut config);
    validate(&config, origin)?;
    Ok(config)
}

/// Fill top-level defaults in place.
///
/// The generation section counts as absent when both `uuid_primary_key` and
/// `preserve_custom_code` are false. A file that explicitly sets both to false therefore
/// gets the recommended values too.
pub fn apply_defaults(config: &mut DomainConfig) {
    if config.module.is_empty() {
        config.module = DEFAULT_MODULE.to_string();
    }
    if config.entity.name.is_empty() {
        config.entity.name = to_pascal_case(&config.domain);
        debug!(entity = %config.entity.name, "entity name defaulted from domain");
    }
    if !config.generation.uuid_primary_key && !config.generation.preserve_custom_code {
        config.generation = GenerationConfig::recommended();
        debug!("generation section absent, using recommended flags");
    }
}

fn validate(config: &DomainConfig, origin: &Path) -> Result<(), ConfigError> {
    if config.domain.trim().is_empty() {
        return Err(ConfigError::Validation {
            path: origin.to_path_buf(),
            field: "domain",
            reason: "is required".to_string(),
        });
    }

    // the four conversions below get generated bodies when left empty
    let entity = &config.entity.name;
    let generated = [
        format!("From{entity}Model"),
        format!("To{entity}Model"),
        format!("From{entity}Request"),
        format!("To{entity}Response"),
    ];
    let conversions = config
        .entity
        .conversion_methods
        .iter()
        .filter(|m| !generated.contains(&m.name));
    check_methods(origin, "entity.conversion_methods", conversions)?;

    let declared: [(&'static str, &[MethodConfig]); 6] = [
        ("entity.custom_methods", config.entity.custom_methods.as_slice()),
        ("model.computed_methods", config.model.computed_methods.as_slice()),
        ("model.validation_methods", config.model.validation_methods.as_slice()),
        ("model.custom_methods", config.model.custom_methods.as_slice()),
        (
            "repository.interface.custom_methods",
            config.repository.interface.custom_methods.as_slice(),
        ),
        (
            "use_case.interface.custom_methods",
            config.use_case.interface.custom_methods.as_slice(),
        ),
    ];
    for (field, methods) in declared {
        check_methods(origin, field, methods.iter())?;
    }
    check_methods(
        origin,
        "handlers.custom_methods",
        config.handlers.custom_methods.iter(),
    )
}

fn check_methods<'a>(
    origin: &Path,
    field: &'static str,
    methods: impl Iterator<Item = &'a MethodConfig>,
) -> Result<(), ConfigError> {
    for method in methods {
        if method.implementation.trim().is_empty() && !method.placeholder {
            return Err(ConfigError::Validation {
                path: origin.to_path_buf(),
                field,
                reason: format!(
                    "method {} needs an implementation or placeholder: true",
                    method.name
                ),
            });
        }
    }
    Ok(())
}
