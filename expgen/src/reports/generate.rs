//! Report for a finished generation.

use std::path::{Path, PathBuf};

use expgen_codegen::GenerationContext;
use expgen_core::ProjectOptions;

use super::output::{Output, Report};

/// Summary of a successful run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Options the project was generated with.
    pub options: ProjectOptions,
    /// Project root.
    pub root: PathBuf,
    /// Written files, relative to the root.
    pub files: Vec<PathBuf>,
}

impl GenerateReport {
    pub fn from_context(ctx: &GenerationContext) -> Self {
        let root = ctx.root().to_path_buf();
        let files = ctx
            .written_files()
            .iter()
            .map(|p| p.strip_prefix(&root).unwrap_or(p).to_path_buf())
            .collect();

        Self {
            options: ctx.options().clone(),
            root,
            files,
        }
    }

    /// Commands to run next, in order.
    pub fn next_steps(&self) -> Vec<String> {
        let options = &self.options;
        let mut steps = vec![format!("cd {}", self.root.display())];

        let mut deps = vec!["express", "cors", "dotenv"];
        if options.uses_jwt() {
            deps.push("jsonwebtoken");
        }
        if options.uses_mongodb() {
            deps.push("mongoose");
        }
        steps.push(format!("npm install {}", deps.join(" ")));

        if options.is_typescript() {
            let mut dev_deps = vec!["typescript", "@types/node", "@types/express", "@types/cors"];
            if options.uses_jwt() {
                dev_deps.push("@types/jsonwebtoken");
            }
            steps.push(format!("npm install -D {}", dev_deps.join(" ")));
            steps.push("npx tsc && node dist/server.js".to_string());
        } else {
            steps.push("node src/server.js".to_string());
        }

        steps
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.success("Project setup completed!");
        out.newline();

        out.section(&format!("Created {}", self.root.display()));
        for file in &self.files {
            out.added_item(&display_path(file));
        }
        out.newline();

        out.section("Next steps");
        for step in self.next_steps() {
            out.list_item(&step);
        }
    }
}

/// Forward slashes on every platform.
fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
