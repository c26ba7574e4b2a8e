use std::fmt;
use std::path::PathBuf;

/// Failure while loading a domain configuration
///
/// Returned by [`load_config`](super::load_config). Each variant carries the path of the
/// offending file so the CLI can report it without extra context.
#[derive(Debug)]
pub enum ConfigError {
    /// The file is missing or unreadable
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid YAML for the configuration schema
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying YAML error
        source: serde_yaml::Error,
    },
    /// A required field is missing after defaulting
    Validation {
        /// Path of the configuration file
        path: PathBuf,
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config file {}: {}", path.display(), source)
            }
            ConfigError::Validation {
                path,
                field,
                reason,
            } => {
                write!(
                    f,
                    "invalid config file {}: field '{}' {}",
                    path.display(),
                    field,
                    reason
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Validation { .. } => None,
        }
    }
}
