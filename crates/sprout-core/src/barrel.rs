//! Barrel file maintenance.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::naming::ComponentName;

/// The export line added to a barrel file for `name`.
pub fn export_line(name: &ComponentName) -> String {
    format!("export {{ default as {name} }} from \"./{name}\"")
}

/// Append the export line for `name` to `barrel`, creating the file if needed.
///
/// Existing content is never rewritten and no newline is added. Appending the
/// same component twice yields two identical lines.
pub fn append_export(barrel: &Path, name: &ComponentName) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(barrel)?;
    file.write_all(export_line(name).as_bytes())?;
    tracing::debug!(barrel = %barrel.display(), component = %name, "Updated barrel file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_creates_barrel() {
        let dir = tempdir().unwrap();
        let barrel = dir.path().join("index.ts");
        let name = ComponentName::new("foo-bar").unwrap();

        append_export(&barrel, &name).unwrap();

        assert_eq!(
            fs::read_to_string(&barrel).unwrap(),
            "export { default as FooBar } from \"./FooBar\""
        );
    }

    #[test]
    fn test_appends_to_existing() {
        let dir = tempdir().unwrap();
        let barrel = dir.path().join("index.js");
        fs::write(&barrel, "// components\n").unwrap();

        append_export(&barrel, &ComponentName::new("Card").unwrap()).unwrap();

        assert_eq!(
            fs::read_to_string(&barrel).unwrap(),
            "// components\nexport { default as Card } from \"./Card\""
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let dir = tempdir().unwrap();
        let barrel = dir.path().join("index.ts");
        let name = ComponentName::new("Button").unwrap();

        append_export(&barrel, &name).unwrap();
        append_export(&barrel, &name).unwrap();

        let content = fs::read_to_string(&barrel).unwrap();
        assert_eq!(content.matches(&export_line(&name)).count(), 2);
    }
}
