//! Project conventions: language variant and stylesheet dialect.

use std::path::Path;

use crate::scan::{contains_match, SASS_TOKENS, TYPESCRIPT_TOKENS};

/// Source language variant of the generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// TypeScript (`.tsx` / `.ts`).
    Typed,
    /// JavaScript (`.jsx` / `.js`).
    Untyped,
}

impl Language {
    pub fn from_typed(typed: bool) -> Self {
        if typed {
            Language::Typed
        } else {
            Language::Untyped
        }
    }

    /// Extension for files containing JSX.
    pub fn component_ext(self) -> &'static str {
        match self {
            Language::Typed => "tsx",
            Language::Untyped => "jsx",
        }
    }

    /// Extension for plain modules (index files).
    pub fn module_ext(self) -> &'static str {
        match self {
            Language::Typed => "ts",
            Language::Untyped => "js",
        }
    }
}

/// Stylesheet dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleDialect {
    Sass,
    Css,
}

impl StyleDialect {
    pub fn from_sass(sass: bool) -> Self {
        if sass {
            StyleDialect::Sass
        } else {
            StyleDialect::Css
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            StyleDialect::Sass => "scss",
            StyleDialect::Css => "css",
        }
    }
}

/// Resolve the language: explicit flag, then configured preference, then a
/// scan of the workspace for TypeScript sources.
pub fn resolve_language(flag: Option<bool>, preference: Option<bool>, root: &Path) -> Language {
    let typed = flag
        .or(preference)
        .unwrap_or_else(|| contains_match(root, TYPESCRIPT_TOKENS));
    tracing::debug!(typed, explicit = flag.is_some(), "Resolved language");
    Language::from_typed(typed)
}

/// Resolve the stylesheet dialect the same way, scanning for `.scss` files.
pub fn resolve_style(flag: Option<bool>, preference: Option<bool>, root: &Path) -> StyleDialect {
    let sass = flag
        .or(preference)
        .unwrap_or_else(|| contains_match(root, SASS_TOKENS));
    tracing::debug!(sass, explicit = flag.is_some(), "Resolved stylesheet dialect");
    StyleDialect::from_sass(sass)
}
