//! Component directory generation.
//!
//! Files are written into a hidden staging directory next to the final
//! location and moved into place with a single rename, so a failed run never
//! leaves a half-populated component directory behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::conventions::{Language, StyleDialect};
use crate::error::{Result, ScaffoldError};
use crate::naming::ComponentName;
use crate::template::TemplateKind;

/// A fully resolved request to scaffold one component.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub name: ComponentName,
    pub target_path: PathBuf,
    pub language: Language,
    pub style: StyleDialect,
}

/// One file of the generated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name inside the component directory.
    pub file_name: String,
    pub content: String,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedComponent {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl CreateRequest {
    pub fn new(
        name: ComponentName,
        target_path: impl Into<PathBuf>,
        language: Language,
        style: StyleDialect,
    ) -> Self {
        Self {
            name,
            target_path: target_path.into(),
            language,
            style,
        }
    }

    /// `<target>/<Identifier>`.
    pub fn component_dir(&self) -> PathBuf {
        self.target_path.join(self.name.as_str())
    }

    /// `<target>/index.{ts|js}`.
    pub fn barrel_path(&self) -> PathBuf {
        self.target_path
            .join(format!("index.{}", self.language.module_ext()))
    }

    /// Fail if the component directory is already present.
    pub fn ensure_available(&self) -> Result<()> {
        if self.component_dir().exists() {
            return Err(ScaffoldError::ComponentExists {
                name: self.name.to_string(),
            });
        }
        Ok(())
    }

    /// The five files to generate, in write order.
    pub fn plan(&self) -> Vec<GeneratedFile> {
        let name = &self.name;
        let code = self.language.component_ext();
        let render = |kind: TemplateKind| kind.render(self.language, name, self.style);

        vec![
            GeneratedFile {
                file_name: format!("{name}.{code}"),
                content: render(TemplateKind::Component),
            },
            GeneratedFile {
                file_name: format!("{name}.{}", self.style.ext()),
                content: String::new(),
            },
            GeneratedFile {
                file_name: format!("{name}.stories.{code}"),
                content: render(TemplateKind::Story),
            },
            GeneratedFile {
                file_name: format!("{name}.test.{code}"),
                content: render(TemplateKind::Test),
            },
            GeneratedFile {
                file_name: format!("index.{}", self.language.module_ext()),
                content: render(TemplateKind::Index),
            },
        ]
    }
}

/// Create the component directory and its files.
///
/// Nothing is written when the component directory already exists.
pub fn generate(request: &CreateRequest) -> Result<GeneratedComponent> {
    generate_with(request, || {})
}

/// [`generate`] with a callback run after staging, right before the rename.
fn generate_with(
    request: &CreateRequest,
    before_commit: impl FnOnce(),
) -> Result<GeneratedComponent> {
    request.ensure_available()?;
    fs::create_dir_all(&request.target_path)?;

    let staging = staging_dir(&request.target_path, &request.name)?;
    let plan = request.plan();
    for file in &plan {
        fs::write(staging.path().join(&file.file_name), &file.content)?;
    }

    before_commit();

    // Re-check right before the rename: renaming onto an empty directory
    // succeeds on some platforms.
    request.ensure_available()?;
    let dir = request.component_dir();
    fs::rename(staging.path(), &dir)?;
    let _ = staging.keep();

    tracing::info!(component = %request.name, dir = %dir.display(), "Created component");

    Ok(GeneratedComponent {
        files: plan.iter().map(|file| dir.join(&file.file_name)).collect(),
        dir,
    })
}

/// Hidden directory inside `parent`, removed on drop unless kept.
fn staging_dir(parent: &Path, name: &ComponentName) -> Result<tempfile::TempDir> {
    let prefix = format!(".{name}-");
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix);

    // Same mode a plain create_dir would get once the umask applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o777));
    }

    Ok(builder.tempdir_in(parent)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn request(target: &Path, name: &str, language: Language, style: StyleDialect) -> CreateRequest {
        CreateRequest::new(ComponentName::new(name).unwrap(), target, language, style)
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_typed_css_extensions() {
        let req = request(Path::new("/work"), "Button", Language::Typed, StyleDialect::Css);
        let names: Vec<String> = req.plan().into_iter().map(|f| f.file_name).collect();
        assert_eq!(
            names,
            [
                "Button.tsx",
                "Button.css",
                "Button.stories.tsx",
                "Button.test.tsx",
                "index.ts"
            ]
        );
        assert_eq!(req.barrel_path(), PathBuf::from("/work/index.ts"));
    }

    #[test]
    fn test_untyped_sass_extensions() {
        let req = request(Path::new("/work"), "Button", Language::Untyped, StyleDialect::Sass);
        let names: Vec<String> = req.plan().into_iter().map(|f| f.file_name).collect();
        assert_eq!(
            names,
            [
                "Button.jsx",
                "Button.scss",
                "Button.stories.jsx",
                "Button.test.jsx",
                "index.js"
            ]
        );
        assert_eq!(req.barrel_path(), PathBuf::from("/work/index.js"));
    }

    #[test]
    fn test_generate_writes_five_files() {
        let dir = tempdir().unwrap();
        let req = request(dir.path(), "foo-bar", Language::Typed, StyleDialect::Sass);

        let created = generate(&req).unwrap();

        assert_eq!(created.dir, dir.path().join("FooBar"));
        assert_eq!(created.files.len(), 5);
        assert_eq!(
            file_names(&created.dir),
            [
                "FooBar.scss",
                "FooBar.stories.tsx",
                "FooBar.test.tsx",
                "FooBar.tsx",
                "index.ts"
            ]
        );
        assert_eq!(fs::read_to_string(created.dir.join("FooBar.scss")).unwrap(), "");
        assert_eq!(
            fs::read_to_string(created.dir.join("index.ts")).unwrap(),
            "export { default } from \"./FooBar\""
        );
        // Staging directory is gone.
        assert_eq!(file_names(dir.path()), ["FooBar"]);
    }

    #[test]
    fn test_generate_creates_missing_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("src/components");
        let req = request(&target, "Card", Language::Untyped, StyleDialect::Css);

        generate(&req).unwrap();

        assert!(target.join("Card/Card.jsx").is_file());
    }

    #[test]
    fn test_existing_directory_is_untouched() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("Button");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("notes.txt"), "keep me").unwrap();

        let req = request(dir.path(), "button", Language::Typed, StyleDialect::Css);
        let err = generate(&req).unwrap_err();

        assert!(matches!(err, ScaffoldError::ComponentExists { ref name } if name == "Button"));
        assert_eq!(file_names(&existing), ["notes.txt"]);
        assert_eq!(file_names(dir.path()), ["Button"]);
    }

    #[test]
    fn test_target_is_a_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("components");
        fs::write(&target, "not a directory").unwrap();

        let req = request(&target, "Button", Language::Typed, StyleDialect::Css);
        assert!(matches!(generate(&req), Err(ScaffoldError::Io(_))));

        assert_eq!(file_names(dir.path()), ["components"]);
        assert_eq!(fs::read_to_string(&target).unwrap(), "not a directory");
    }

    #[test]
    fn test_conflict_during_staging_cleans_up() {
        let dir = tempdir().unwrap();
        let req = request(dir.path(), "Button", Language::Typed, StyleDialect::Css);

        let err = generate_with(&req, || {
            fs::create_dir(dir.path().join("Button")).unwrap();
        })
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::ComponentExists { .. }));
        assert_eq!(file_names(dir.path()), ["Button"]);
        assert!(file_names(&dir.path().join("Button")).is_empty());
    }
}
