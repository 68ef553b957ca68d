use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scaffolding a component.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Component name is required")]
    MissingName,

    #[error("Cannot create component, a directory with name: {name} already exists !")]
    ComponentExists { name: String },

    #[error("No package.json could be found upwards from directory {}", .start.display())]
    WorkspaceRootNotFound { start: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ScaffoldError.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
