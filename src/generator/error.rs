use std::fmt;
use std::path::PathBuf;

/// Generator failure that callers may want to match on
///
/// Rendering and I/O failures are reported through `anyhow` with context; these
/// variants cover the cases a user fixes by changing their invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The resolved template file is not on disk
    TemplateMissing {
        /// Path that was looked up
        path: PathBuf,
    },
    /// A legacy command that is not one of the known layers or `all`
    UnknownCommand {
        /// The rejected input
        command: String,
    },
    /// A `--component` value that is not one of the known layers or `all`
    UnknownComponent {
        /// The rejected input
        component: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::TemplateMissing { path } => {
                write!(f, "template file {} does not exist", path.display())
            }
            GenerateError::UnknownCommand { command } => {
                write!(f, "unknown command: {command}")
            }
            GenerateError::UnknownComponent { component } => {
                write!(
                    f,
                    "unknown component: {component} (expected entity, model, repository, usecase, handler, di or all)"
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}
