//! Pipeline driver.

use std::path::PathBuf;

use expgen_core::{Error, FileSystem, Progress, ProjectOptions, Result, RunState};

use super::{
    GenerationContext, Stage,
    stages::{DirectoriesStage, EmitFilesStage, InitializeStage},
};
use crate::init::ManifestInitializer;

/// The generation pipeline.
///
/// Owns the filesystem collaborator and the built-in stages. The progress
/// total is derived from the stages themselves, so it always matches the
/// work done for the selected options.
pub struct Pipeline {
    fs: Box<dyn FileSystem>,
    stages: Vec<Box<dyn Stage>>,
    base_dir: Option<PathBuf>,
}

impl Pipeline {
    /// Create a pipeline with the built-in stages.
    pub fn new(
        fs: impl FileSystem + 'static,
        initializer: impl ManifestInitializer + 'static,
    ) -> Self {
        Self {
            fs: Box::new(fs),
            stages: vec![
                Box::new(InitializeStage::new(initializer)),
                Box::new(DirectoriesStage),
                Box::new(EmitFilesStage),
            ],
            base_dir: None,
        }
    }

    /// Create projects under `base` instead of the working directory.
    pub fn in_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base.into());
        self
    }

    /// Where the project for `options` will be created.
    pub fn project_root(&self, options: &ProjectOptions) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(options.project_name()),
            None => PathBuf::from(options.project_name()),
        }
    }

    /// Total units of work a run with `options` performs.
    pub fn total_units(&self, options: &ProjectOptions) -> usize {
        self.stages.iter().map(|s| s.units(options)).sum()
    }

    /// Run every stage in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stage`] wrapping the first failure, tagged with the
    /// state the run was in. Later stages never run.
    pub fn run(
        &self,
        options: ProjectOptions,
        progress: &mut dyn Progress,
    ) -> Result<GenerationContext> {
        let root = self.project_root(&options);
        let mut ctx = GenerationContext::new(options, root);

        for stage in &self.stages {
            ctx.transition(stage.state());

            if let Err(err) = stage.run(self.fs.as_ref(), &mut ctx, progress) {
                let failed_in = ctx.state();
                tracing::debug!(stage = stage.name(), error = %err, "stage failed");
                ctx.transition(RunState::Failed);
                return Err(Error::stage(failed_in, err));
            }
        }

        ctx.transition(RunState::Completed);
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        io,
        path::Path,
    };

    use expgen_core::{AuthLibrary, Database, Language};

    use super::*;

    /// Records calls instead of touching the disk.
    #[derive(Default)]
    struct MemoryFs {
        dirs: RefCell<Vec<PathBuf>>,
        files: RefCell<Vec<PathBuf>>,
        fail_on_dir: Option<usize>,
        dir_calls: Cell<usize>,
    }

    impl FileSystem for MemoryFs {
        fn create_dir(&self, path: &Path) -> io::Result<()> {
            let call = self.dir_calls.get() + 1;
            self.dir_calls.set(call);
            if self.fail_on_dir == Some(call) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.dirs.borrow_mut().push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, _content: &str) -> io::Result<()> {
            self.files.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct NoopInit;

    impl ManifestInitializer for NoopInit {
        fn describe(&self) -> String {
            "noop".to_string()
        }

        fn initialize(&self, _fs: &dyn FileSystem, _root: &Path, _name: &str) -> Result<()> {
            Ok(())
        }
    }

    struct FailingInit;

    impl ManifestInitializer for FailingInit {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn initialize(&self, _fs: &dyn FileSystem, _root: &Path, _name: &str) -> Result<()> {
            Err(Box::new(Error::Spawn {
                program: "npm".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }))
        }
    }

    #[derive(Default)]
    struct CountingProgress(usize);

    impl Progress for CountingProgress {
        fn tick(&mut self) {
            self.0 += 1;
        }
    }

    fn demo() -> ProjectOptions {
        ProjectOptions::new("demo").unwrap()
    }

    fn api() -> ProjectOptions {
        ProjectOptions::new("api")
            .unwrap()
            .with_language(Language::TypeScript)
            .with_auth(AuthLibrary::Jwt)
            .with_database(Database::MongoDb)
    }

    #[test]
    fn test_total_units_follow_options() {
        let pipeline = Pipeline::new(MemoryFs::default(), NoopInit);

        assert_eq!(pipeline.total_units(&demo()), 12);
        assert_eq!(pipeline.total_units(&api()), 15);
        assert_eq!(
            pipeline.total_units(&demo().with_language(Language::TypeScript)),
            13
        );
    }

    #[test]
    fn test_ticks_match_total() {
        for options in [demo(), api()] {
            let pipeline = Pipeline::new(MemoryFs::default(), NoopInit);
            let total = pipeline.total_units(&options);
            let mut progress = CountingProgress::default();

            let ctx = pipeline.run(options, &mut progress).unwrap();

            assert_eq!(progress.0, total);
            assert_eq!(ctx.state(), RunState::Completed);
        }
    }

    #[test]
    fn test_records_dirs_and_files() {
        let pipeline = Pipeline::new(MemoryFs::default(), NoopInit).in_dir("out");
        let mut progress = CountingProgress::default();

        let ctx = pipeline.run(api(), &mut progress).unwrap();

        assert_eq!(ctx.root(), Path::new("out/api"));
        assert_eq!(ctx.created_dirs().len(), 8);
        assert_eq!(ctx.created_dirs()[0], PathBuf::from("out/api/src"));
        assert_eq!(ctx.written_files().len(), 5);
        assert_eq!(
            ctx.written_files().last(),
            Some(&PathBuf::from("out/api/readme.md"))
        );
    }

    #[test]
    fn test_project_root_without_base() {
        let pipeline = Pipeline::new(MemoryFs::default(), NoopInit);
        assert_eq!(pipeline.project_root(&demo()), PathBuf::from("demo"));
    }

    #[test]
    fn test_directory_failure_halts_pipeline() {
        // Call 1 creates the root, so call 4 is the third subdirectory
        let fs = MemoryFs {
            fail_on_dir: Some(4),
            ..Default::default()
        };
        let pipeline = Pipeline::new(fs, NoopInit);
        let mut progress = CountingProgress::default();

        let err = pipeline.run(demo(), &mut progress).unwrap_err();

        match *err {
            Error::Stage { stage, ref source } => {
                assert_eq!(stage, RunState::BuildingDirectories);
                assert!(matches!(**source, Error::CreateDir { .. }));
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        // 2 init + 2 directories
        assert_eq!(progress.0, 4);
    }

    #[test]
    fn test_initializer_failure_skips_later_stages() {
        let pipeline = Pipeline::new(MemoryFs::default(), FailingInit);
        let mut progress = CountingProgress::default();

        let err = pipeline.run(demo(), &mut progress).unwrap_err();

        assert!(matches!(
            *err,
            Error::Stage {
                stage: RunState::Initializing,
                ..
            }
        ));
        assert!(matches!(err.root(), Error::Spawn { .. }));
        // Only the root directory was created
        assert_eq!(progress.0, 1);
    }
}
