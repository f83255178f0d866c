//! Output targets and atomic writing.
//!
//! All three artifacts are staged into temporary files next to their
//! targets. Targets are only replaced once every artifact has been staged,
//! so a failed run never leaves a truncated file behind. Each target is
//! replaced by an atomic rename, but the three renames are not atomic as a
//! set.

use crate::error::CodegenError;
use crate::generator::GeneratedFiles;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Paths of the three generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Constant header (`<base>.h`).
    pub header: PathBuf,
    /// Lookup source (`<base>.c`).
    pub source: PathBuf,
    /// Documentation fragment (`<base>-gtk-doc.h`).
    pub docs: PathBuf,
}

impl OutputPaths {
    /// Derives the three paths from a common base name.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the base name is empty.
    pub fn from_basename(basename: impl AsRef<Path>) -> Result<Self, CodegenError> {
        let base = basename.as_ref().as_os_str();
        if base.is_empty() {
            return Err(CodegenError::config("output base name must not be empty"));
        }

        let with_suffix = |suffix: &str| {
            let mut name = OsString::from(base);
            name.push(suffix);
            PathBuf::from(name)
        };

        Ok(Self {
            header: with_suffix(".h"),
            source: with_suffix(".c"),
            docs: with_suffix("-gtk-doc.h"),
        })
    }

    /// Overrides the header path.
    #[must_use]
    pub fn header(mut self, path: impl Into<PathBuf>) -> Self {
        self.header = path.into();
        self
    }

    /// Overrides the source path.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    /// Overrides the documentation path.
    #[must_use]
    pub fn docs(mut self, path: impl Into<PathBuf>) -> Self {
        self.docs = path.into();
        self
    }

    /// Checks that the three targets are distinct.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if two targets share a path.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.header == self.source || self.header == self.docs || self.source == self.docs {
            return Err(CodegenError::config(
                "header, source and docs outputs must be distinct paths",
            ));
        }
        Ok(())
    }
}

impl GeneratedFiles {
    /// Writes the three artifacts, replacing any existing files.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` if a target cannot be written. No
    /// target is modified unless all three could be staged. Each target is
    /// then replaced by its own rename; if a later rename fails, targets
    /// renamed before it keep their new contents while the rest keep the
    /// old ones.
    pub fn write(&self, paths: &OutputPaths) -> Result<(), CodegenError> {
        paths.validate()?;

        let staged = [
            (stage(&paths.header, &self.header)?, paths.header.as_path()),
            (stage(&paths.source, &self.source)?, paths.source.as_path()),
            (stage(&paths.docs, &self.docs)?, paths.docs.as_path()),
        ];

        for (file, path) in staged {
            file.persist(path)
                .map_err(|e| CodegenError::write(path, e.error))?;
            info!(path = %path.display(), "wrote output");
        }

        Ok(())
    }
}

/// Writes `contents` to a temporary file in the directory of `path`.
fn stage(path: &Path, contents: &str) -> Result<NamedTempFile, CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| CodegenError::write(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| CodegenError::write(path, e))?;
    file.flush().map_err(|e| CodegenError::write(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| CodegenError::write(path, e))?;
    }

    Ok(file)
}
