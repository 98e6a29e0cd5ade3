//! package.json generator used when the package manager is not run.

use std::path::{Path, PathBuf};

use expgen_core::GeneratedFile;
use serde::Serialize;

const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_MAIN: &str = "index.js";
const DEFAULT_LICENSE: &str = "ISC";
const DEFAULT_TEST_SCRIPT: &str = "echo \"Error: no test specified\" && exit 1";

/// The default manifest `npm init -y` would write.
///
/// The content does not depend on the project options: `main` stays
/// `index.js` and `test` is the only script, as with npm.
#[derive(Debug, Clone, Serialize)]
pub struct PackageJson {
    name: String,
    version: String,
    description: String,
    main: String,
    scripts: Scripts,
    keywords: Vec<String>,
    author: String,
    license: String,
}

#[derive(Debug, Clone, Serialize)]
struct Scripts {
    test: String,
}

impl PackageJson {
    /// Build the manifest for a project directory named `project_name`.
    ///
    /// Like npm, only the last path component is used and it is lowercased.
    pub fn new(project_name: &str) -> Self {
        Self {
            name: package_name(project_name),
            version: DEFAULT_VERSION.to_string(),
            description: String::new(),
            main: DEFAULT_MAIN.to_string(),
            scripts: Scripts {
                test: DEFAULT_TEST_SCRIPT.to_string(),
            },
            keywords: Vec::new(),
            author: String::new(),
            license: DEFAULT_LICENSE.to_string(),
        }
    }
}

fn package_name(project_name: &str) -> String {
    let base = Path::new(project_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(project_name);

    base.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn render(&self) -> String {
        // Serializing plain strings and vectors cannot fail.
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }
}
