//! sprout core - React component scaffolding.
//!
//! Locates the workspace, infers project conventions (TypeScript, Sass) by
//! scanning the source tree, renders the component templates, and writes the
//! component directory plus its barrel export.

pub mod barrel;
pub mod config;
pub mod conventions;
pub mod error;
pub mod generator;
pub mod naming;
pub mod scan;
pub mod template;
pub mod workspace;

pub use config::SproutConfig;
pub use conventions::{Language, StyleDialect};
pub use error::{Result, ScaffoldError};
pub use generator::{CreateRequest, GeneratedComponent, GeneratedFile};
pub use naming::ComponentName;
pub use template::TemplateKind;
