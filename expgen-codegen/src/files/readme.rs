use std::path::{Path, PathBuf};

use expgen_core::GeneratedFile;

/// The project readme. Its content never varies.
pub struct Readme;

impl GeneratedFile for Readme {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("readme.md")
    }

    fn render(&self) -> String {
        "# Project created using expgen\n".to_string()
    }
}
