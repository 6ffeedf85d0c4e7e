use std::path::{Path, PathBuf};

use crate::error::{CssGuardError, Result};
use crate::filesystem::FileSystem;

const COMPONENTS_DIR: &str = "components";
const BASE_DIR: &str = "base";

/// A component stylesheet read from `components/`.
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub source: String,
    pub size: u64,
}

/// Snapshot of the stylesheet tree the checks run against.
///
/// Only the component directory listing is taken eagerly; file contents are read
/// by each check so that one unreadable file degrades only the checks that need it.
pub struct CssTree<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
    component_names: Vec<String>,
}

impl<'a> CssTree<'a> {
    /// Enumerate `<root>/components/*.css`.
    ///
    /// # Errors
    /// Returns `MissingInput` if the components directory does not exist, or
    /// `FileRead` if it cannot be listed.
    pub fn load(fs: &'a dyn FileSystem, root: &Path) -> Result<Self> {
        let dir = root.join(COMPONENTS_DIR);
        if !fs.is_dir(&dir) {
            return Err(CssGuardError::MissingInput { path: dir });
        }
        let component_names = fs
            .list_files(&dir)
            .map_err(|source| CssGuardError::FileRead {
                path: dir.clone(),
                source,
            })?
            .into_iter()
            .filter(|name| name.ends_with(".css"))
            .collect();

        Ok(Self {
            fs,
            root: root.to_path_buf(),
            component_names,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }

    /// Sorted names of the `.css` files in `components/`.
    #[must_use]
    pub fn component_names(&self) -> &[String] {
        &self.component_names
    }

    /// Read every component file.
    ///
    /// # Errors
    /// Returns `FileRead` for the first file that cannot be read.
    pub fn read_components(&self) -> Result<Vec<Component>> {
        let dir = self.components_dir();
        self.component_names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                let read_err = |source| CssGuardError::FileRead {
                    path: path.clone(),
                    source,
                };
                let source = self.fs.read_to_string(&path).map_err(read_err)?;
                let size = self.fs.file_size(&path).map_err(read_err)?;
                Ok(Component {
                    name: name.clone(),
                    source,
                    size,
                })
            })
            .collect()
    }

    /// Path of a stylesheet under `base/`.
    #[must_use]
    pub fn base_file(&self, name: &str) -> PathBuf {
        self.root.join(BASE_DIR).join(name)
    }

    /// Read a `base/` stylesheet; `Ok(None)` when it does not exist.
    ///
    /// # Errors
    /// Returns `FileRead` if the file exists but cannot be read.
    pub fn read_base_file(&self, name: &str) -> Result<Option<String>> {
        let path = self.base_file(name);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs
            .read_to_string(&path)
            .map(Some)
            .map_err(|source| CssGuardError::FileRead { path, source })
    }
}
