//! Pipeline stage trait.

use expgen_core::{FileSystem, Progress, ProjectOptions, Result, RunState};

use super::GenerationContext;

/// A stage in the generation pipeline.
///
/// Stages run strictly one after another. Each one ticks `progress` exactly
/// once per unit of work it completes, so [`Stage::units`] must match what
/// [`Stage::run`] actually does for the same options.
pub trait Stage {
    /// The name of this stage (used in logs).
    fn name(&self) -> &'static str;

    /// The run state the pipeline is in while this stage runs.
    fn state(&self) -> RunState;

    /// Units of work this stage performs for `options`.
    fn units(&self, options: &ProjectOptions) -> usize;

    /// Run this stage.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or process error encountered. Work
    /// already done is left in place.
    fn run(
        &self,
        fs: &dyn FileSystem,
        ctx: &mut GenerationContext,
        progress: &mut dyn Progress,
    ) -> Result<()>;
}
