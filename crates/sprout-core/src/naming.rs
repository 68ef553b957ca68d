//! Component identifier normalization.

use std::fmt;

use heck::ToUpperCamelCase;

use crate::error::{Result, ScaffoldError};

/// A PascalCase component identifier.
///
/// Used as the directory name, the base name of every generated file and the
/// value substituted into the templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    /// Normalize a raw name. Names with no word characters are rejected.
    pub fn new(raw: &str) -> Result<Self> {
        let name = to_pascal_case(raw);
        if name.is_empty() {
            return Err(ScaffoldError::MissingName);
        }
        Ok(Self(name))
    }

    /// Normalize an optional CLI argument, treating `None` as a missing name.
    pub fn from_arg(raw: Option<&str>) -> Result<Self> {
        raw.ok_or(ScaffoldError::MissingName).and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Convert to PascalCase.
///
/// Names already in PascalCase form (`[A-Z][A-Za-z0-9]*`) are returned as-is,
/// which keeps the conversion a fixed point on its own output.
pub fn to_pascal_case(s: &str) -> String {
    if is_pascal_case(s) {
        return s.to_string();
    }
    s.to_upper_camel_case()
}

fn is_pascal_case(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
