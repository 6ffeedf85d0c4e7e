use std::path::{Path, PathBuf};

use crate::error::{CssGuardError, Result};
use crate::filesystem::FileSystem;

const EXTENSION: &str = ".png";

/// Which of the three screenshot directories an artifact lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Baseline,
    Current,
    Diff,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Baseline, Self::Current, Self::Diff];

    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Current => "current",
            Self::Diff => "diff",
        }
    }
}

/// Screenshot storage under `<root>/{baseline,current,diff}/<name>.png`.
///
/// The only writer of baseline artifacts: on first encounter of a case and on an
/// explicit baseline update.
pub struct ArtifactStore<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> ArtifactStore<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn dir(&self, role: Role) -> PathBuf {
        self.root.join(role.dir_name())
    }

    #[must_use]
    pub fn path(&self, role: Role, name: &str) -> PathBuf {
        self.dir(role).join(format!("{name}{EXTENSION}"))
    }

    /// Create the three role directories if absent.
    ///
    /// # Errors
    /// Returns `FileWrite` if a directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<()> {
        for role in Role::ALL {
            let dir = self.dir(role);
            self.fs
                .create_dir_all(&dir)
                .map_err(|source| CssGuardError::FileWrite { path: dir, source })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn exists(&self, role: Role, name: &str) -> bool {
        self.fs.exists(&self.path(role, name))
    }

    /// # Errors
    /// Returns `FileRead` if the artifact cannot be read.
    pub fn read(&self, role: Role, name: &str) -> Result<Vec<u8>> {
        let path = self.path(role, name);
        self.fs
            .read(&path)
            .map_err(|source| CssGuardError::FileRead { path, source })
    }

    /// Write an artifact and return its path.
    ///
    /// # Errors
    /// Returns `FileWrite` if the artifact cannot be written.
    pub fn write(&self, role: Role, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path(role, name);
        self.fs
            .write(&path, bytes)
            .map_err(|source| CssGuardError::FileWrite {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Copy `current/<name>.png` over `baseline/<name>.png` and return the baseline path.
    ///
    /// # Errors
    /// Returns `FileWrite` if the copy fails.
    pub fn promote(&self, name: &str) -> Result<PathBuf> {
        let from = self.path(Role::Current, name);
        let to = self.path(Role::Baseline, name);
        self.fs
            .copy(&from, &to)
            .map_err(|source| CssGuardError::FileWrite {
                path: to.clone(),
                source,
            })?;
        Ok(to)
    }

    /// Remove a diff left over from an earlier run. Returns whether one existed.
    ///
    /// # Errors
    /// Returns `FileWrite` if the stale diff exists but cannot be removed.
    pub fn clear_diff(&self, name: &str) -> Result<bool> {
        let path = self.path(Role::Diff, name);
        if !self.fs.exists(&path) {
            return Ok(false);
        }
        self.fs
            .remove_file(&path)
            .map_err(|source| CssGuardError::FileWrite { path, source })?;
        Ok(true)
    }

    /// Names (without extension) of every artifact in a role directory.
    ///
    /// # Errors
    /// Returns `FileRead` if the directory cannot be listed.
    pub fn names(&self, role: Role) -> Result<Vec<String>> {
        let dir = self.dir(role);
        if !self.fs.is_dir(&dir) {
            return Ok(Vec::new());
        }
        let files = self
            .fs
            .list_files(&dir)
            .map_err(|source| CssGuardError::FileRead { path: dir, source })?;
        Ok(files
            .into_iter()
            .filter_map(|file| file.strip_suffix(EXTENSION).map(str::to_string))
            .collect())
    }

    /// Copy every current artifact over its baseline, unconditionally.
    ///
    /// Returns the names updated, sorted.
    ///
    /// # Errors
    /// Returns an error on the first artifact that cannot be copied.
    pub fn update_baselines(&self) -> Result<Vec<String>> {
        let baseline_dir = self.dir(Role::Baseline);
        self.fs
            .create_dir_all(&baseline_dir)
            .map_err(|source| CssGuardError::FileWrite {
                path: baseline_dir,
                source,
            })?;

        let names = self.names(Role::Current)?;
        for name in &names {
            self.promote(name)?;
            tracing::debug!(case = %name, "baseline updated");
        }
        Ok(names)
    }
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
