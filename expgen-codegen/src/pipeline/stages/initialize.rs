//! Initialize stage - creates the project root and its package manifest.

use expgen_core::{Error, FileSystem, Progress, ProjectOptions, Result, RunState};

use crate::{
    init::ManifestInitializer,
    pipeline::{GenerationContext, Stage},
};

/// Creates the project root, then initializes the package manifest in it.
pub struct InitializeStage {
    initializer: Box<dyn ManifestInitializer>,
}

impl InitializeStage {
    pub fn new(initializer: impl ManifestInitializer + 'static) -> Self {
        Self {
            initializer: Box::new(initializer),
        }
    }
}

impl Stage for InitializeStage {
    fn name(&self) -> &'static str {
        "initialize"
    }

    fn state(&self) -> RunState {
        RunState::Initializing
    }

    fn units(&self, _options: &ProjectOptions) -> usize {
        2
    }

    fn run(
        &self,
        fs: &dyn FileSystem,
        ctx: &mut GenerationContext,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        let root = ctx.root().to_path_buf();

        fs.create_dir(&root)
            .map_err(|source| Error::create_dir(&root, source))?;
        tracing::debug!(path = %root.display(), "created project root");
        progress.tick();

        tracing::debug!(command = %self.initializer.describe(), "initializing manifest");
        self.initializer
            .initialize(fs, &root, ctx.options().project_name())?;
        progress.tick();

        Ok(())
    }
}
