//! Emit stage - renders and writes the project files.

use expgen_core::{FileSystem, Progress, ProjectOptions, Result, RunState};

use crate::{
    files::FileSet,
    pipeline::{GenerationContext, Stage},
};

/// Writes every file of the [`FileSet`] selected by the options.
pub struct EmitFilesStage;

impl Stage for EmitFilesStage {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn state(&self) -> RunState {
        RunState::EmittingFiles
    }

    fn units(&self, options: &ProjectOptions) -> usize {
        FileSet::for_options(options).len()
    }

    fn run(
        &self,
        fs: &dyn FileSystem,
        ctx: &mut GenerationContext,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        let files = FileSet::for_options(ctx.options());
        let root = ctx.root().to_path_buf();

        for file in files.iter() {
            let written = file.write(fs, &root)?;
            ctx.record_file(written);
            progress.tick();
        }

        Ok(())
    }
}
