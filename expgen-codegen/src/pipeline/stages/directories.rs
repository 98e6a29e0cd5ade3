//! Directory stage - lays out the source tree.

use expgen_core::{Error, FileSystem, Progress, ProjectOptions, Result, RunState};

use crate::pipeline::{GenerationContext, Stage};

/// Directories created under the project root, in creation order.
pub const PROJECT_DIRS: [&str; 8] = [
    "src",
    "src/configs",
    "src/controllers",
    "src/models",
    "src/routes",
    "src/services",
    "src/middlewares",
    "src/utils",
];

/// Creates [`PROJECT_DIRS`], one unit of work per directory.
///
/// The set is the same whatever options were selected.
pub struct DirectoriesStage;

impl Stage for DirectoriesStage {
    fn name(&self) -> &'static str {
        "directories"
    }

    fn state(&self) -> RunState {
        RunState::BuildingDirectories
    }

    fn units(&self, _options: &ProjectOptions) -> usize {
        PROJECT_DIRS.len()
    }

    fn run(
        &self,
        fs: &dyn FileSystem,
        ctx: &mut GenerationContext,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        for dir in PROJECT_DIRS {
            let path = ctx.root().join(dir);
            fs.create_dir(&path)
                .map_err(|source| Error::create_dir(&path, source))?;
            tracing::debug!(path = %path.display(), "created directory");
            ctx.record_dir(path);
            progress.tick();
        }

        Ok(())
    }
}
