use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a path/content pair ready to be written
    fn to_spec(&self, base: &Path) -> FileSpec {
        FileSpec::new(self.path(base), self.render())
    }

    /// Write the file through the given filesystem
    fn write(&self, fs: &dyn FileSystem, base: &Path) -> Result<PathBuf> {
        self.to_spec(base).write(fs)
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    path: PathBuf,
    content: String,
}

impl FileSpec {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, returning the path that was written
    pub fn write(self, fs: &dyn FileSystem) -> Result<PathBuf> {
        fs.write_file(&self.path, &self.content)
            .map_err(|source| Error::write_file(&self.path, source))?;
        tracing::debug!(path = %self.path.display(), "wrote file");
        Ok(self.path)
    }
}

/// Filesystem primitives used by the generator.
pub trait FileSystem {
    /// Create `path` and any missing parents. An existing directory is not an error.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to `path`, creating missing parents and overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        write_file(path, content)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
