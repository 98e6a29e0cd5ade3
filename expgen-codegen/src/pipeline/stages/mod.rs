//! Built-in pipeline stages.

mod directories;
mod emit;
mod initialize;

pub use directories::{DirectoriesStage, PROJECT_DIRS};
pub use emit::EmitFilesStage;
pub use initialize::InitializeStage;
