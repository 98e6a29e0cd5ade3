//! tsconfig.json generator for TypeScript projects.

use std::path::{Path, PathBuf};

use expgen_core::GeneratedFile;

/// The tsconfig.json configuration file.
pub struct TsConfig;

impl GeneratedFile for TsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsconfig.json")
    }

    fn render(&self) -> String {
        r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "CommonJS",
    "outDir": "./dist",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true
  }
}
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&TsConfig.render()).unwrap();
        let options = &value["compilerOptions"];

        assert_eq!(options["rootDir"], "./src");
        assert_eq!(options["outDir"], "./dist");
        assert_eq!(options["strict"], true);
        assert_eq!(options["esModuleInterop"], true);
    }

    #[test]
    fn test_path_is_project_root() {
        assert_eq!(
            TsConfig.path(Path::new("api")),
            PathBuf::from("api/tsconfig.json")
        );
    }
}
