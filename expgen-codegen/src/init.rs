//! Package manifest initialization.

use std::{path::Path, process::Command};

use expgen_core::{Error, FileSystem, GeneratedFile, Result};

use crate::files::PackageJson;

/// Produces the default package manifest inside a freshly created project root.
pub trait ManifestInitializer {
    /// A short label for logs (e.g. `npm init -y`).
    fn describe(&self) -> String;

    fn initialize(&self, fs: &dyn FileSystem, root: &Path, project_name: &str) -> Result<()>;
}

/// Runs `<program> init -y` inside the project root.
#[derive(Debug, Clone)]
pub struct NpmInit {
    program: String,
}

impl NpmInit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmInit {
    fn default() -> Self {
        Self::new("npm")
    }
}

impl ManifestInitializer for NpmInit {
    fn describe(&self) -> String {
        format!("{} init -y", self.program)
    }

    fn initialize(&self, _fs: &dyn FileSystem, root: &Path, _project_name: &str) -> Result<()> {
        let output = Command::new(&self.program)
            .args(["init", "-y"])
            .current_dir(root)
            .output()
            .map_err(|source| {
                Box::new(Error::Spawn {
                    program: self.program.clone(),
                    source,
                })
            })?;

        if !output.status.success() {
            return Err(Box::new(Error::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }));
        }

        Ok(())
    }
}

/// Writes the default `package.json` directly, without a package manager.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonInit;

impl ManifestInitializer for PackageJsonInit {
    fn describe(&self) -> String {
        "write package.json".to_string()
    }

    fn initialize(&self, fs: &dyn FileSystem, root: &Path, project_name: &str) -> Result<()> {
        PackageJson::new(project_name).write(fs, root)?;
        Ok(())
    }
}
