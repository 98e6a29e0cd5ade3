//! Project generation pipeline.
//!
//! A [`Pipeline`] runs its stages strictly in order:
//!
//! - `InitializeStage` - project root and package manifest (2 units)
//! - `DirectoriesStage` - the source tree (8 units)
//! - `EmitFilesStage` - templated files (2 to 5 units, depending on options)
//!
//! and halts on the first failure.
//!
//! # Example
//!
//! ```ignore
//! let pipeline = Pipeline::new(DiskFs, NpmInit::default());
//! let mut progress = ProgressTracker::new(pipeline.total_units(&options), |p: u32| print!("[{p}%] "));
//! let ctx = pipeline.run(options, &mut progress)?;
//! ```

mod context;
mod runner;
mod stage;
pub mod stages;

pub use context::GenerationContext;
pub use runner::Pipeline;
pub use stage::Stage;
