//! Templates and generation pipeline for expgen.
//!
//! - [`files`] renders every project file from the option set, without I/O
//! - [`init`] provides the package manifest initializers
//! - [`pipeline`] drives initialization, directory layout and file emission

pub mod builder;
pub mod files;
pub mod init;
pub mod pipeline;

pub use expgen_core::{GeneratedFile, ProjectOptions};
pub use init::{ManifestInitializer, NpmInit, PackageJsonInit};
pub use pipeline::{GenerationContext, Pipeline};
