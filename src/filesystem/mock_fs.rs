use std::collections::{BTreeMap, BTreeSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::FileSystem;

/// In-memory filesystem keyed by normalized `/`-separated paths.
pub struct MockFileSystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(BTreeMap::new()),
            dirs: Mutex::new(BTreeSet::new()),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/css-guard")),
        }
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.with_bytes(path, content.as_bytes())
    }

    pub fn with_bytes(self, path: impl AsRef<Path>, content: &[u8]) -> Self {
        let normalized = normalize_path(path.as_ref());
        self.add_parents(&normalized);
        self.files
            .lock()
            .unwrap()
            .insert(normalized, content.to_vec());
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        let normalized = normalize_path(path.as_ref());
        self.add_parents(&normalized);
        self.dirs.lock().unwrap().insert(normalized);
        self
    }

    pub fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(&normalize_path(path.as_ref()))
            .cloned()
    }

    fn add_parents(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn not_found() -> Error {
        Error::new(ErrorKind::NotFound, "file not found")
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.contents(path).ok_or_else(Self::not_found)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let normalized = normalize_path(path);
        let parent_exists = normalized
            .parent()
            .is_none_or(|p| p.as_os_str().is_empty() || self.is_dir(p));
        if !parent_exists {
            return Err(Self::not_found());
        }
        self.files
            .lock()
            .unwrap()
            .insert(normalized, contents.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        let bytes = self.read(from)?;
        self.write(to, &bytes)
    }

    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .remove(&normalize_path(path))
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        let normalized = normalize_path(path);
        self.add_parents(&normalized);
        self.dirs.lock().unwrap().insert(normalized);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<String>> {
        let dir = normalize_path(dir);
        if !self.is_dir(&dir) {
            return Err(Self::not_found());
        }
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter(|p| p.parent() == Some(dir.as_path()))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }

    fn file_size(&self, path: &Path) -> std::io::Result<u64> {
        self.read(path).map(|b| b.len() as u64)
    }

    fn exists(&self, path: &Path) -> bool {
        self.contents(path).is_some() || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(&normalize_path(path))
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}
