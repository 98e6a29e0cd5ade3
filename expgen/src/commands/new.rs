use std::io;

use clap::Args;
use expgen_codegen::{NpmInit, PackageJsonInit, Pipeline};
use expgen_core::{AuthLibrary, Database, DiskFs, Language, ProgressTracker, ProjectOptions};
use eyre::Result;

use super::{Outcome, report_failure};
use crate::{
    prompt,
    reports::{GenerateReport, Output, OutputProgress, Report},
};

#[derive(Args)]
pub struct NewCommand {
    /// Project name (read from stdin when omitted)
    pub name: Option<String>,

    /// Language of the generated project
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Authentication library to declare in the server entry
    #[arg(short, long)]
    pub auth: Option<AuthLibrary>,

    /// Database to scaffold a connector and user model for
    #[arg(short, long)]
    pub database: Option<Database>,

    /// Use defaults for every option not given on the command line
    #[arg(short, long)]
    pub yes: bool,

    /// Program used to initialize package.json
    #[arg(long, env = "EXPGEN_NPM", default_value = "npm")]
    pub npm: String,

    /// Write package.json directly instead of running the package manager
    #[arg(long)]
    pub offline: bool,
}

impl NewCommand {
    /// Generate one project, rendering progress and the result to `out`.
    ///
    /// Generator failures are rendered and returned as [`Outcome::Failed`];
    /// only prompt errors come back as `Err`.
    pub fn run(&self, out: &mut dyn Output) -> Result<Outcome> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => prompt::read_project_name(&mut io::stdin().lock(), &mut io::stdout())?,
        };
        let options = match ProjectOptions::new(&name) {
            Ok(options) => self.resolve_options(options)?,
            Err(err) => return Ok(report_failure(err, out)),
        };
        tracing::debug!(?options, "resolved project options");

        let pipeline = if self.offline {
            Pipeline::new(DiskFs, PackageJsonInit)
        } else {
            Pipeline::new(DiskFs, NpmInit::new(&self.npm))
        };

        let total = pipeline.total_units(&options);
        let result = {
            let mut progress = ProgressTracker::new(total, OutputProgress(&mut *out));
            pipeline.run(options, &mut progress)
        };

        match result {
            Ok(ctx) => {
                GenerateReport::from_context(&ctx).render(out);
                Ok(Outcome::Success)
            }
            Err(err) => {
                // Close the progress line first
                out.newline();
                Ok(report_failure(err, out))
            }
        }
    }

    /// Fill in options from flags, then prompts, then defaults.
    fn resolve_options(&self, options: ProjectOptions) -> Result<ProjectOptions> {
        let interactive = !self.yes && prompt::is_interactive();

        let language = match self.language {
            Some(language) => language,
            None if interactive => prompt::select_language()?,
            None => Language::default(),
        };
        let auth = match self.auth {
            Some(auth) => auth,
            None if interactive => prompt::select_auth()?,
            None => AuthLibrary::default(),
        };
        let database = match self.database {
            Some(database) => database,
            None if interactive => prompt::select_database()?,
            None => Database::default(),
        };

        Ok(options
            .with_language(language)
            .with_auth(auth)
            .with_database(database))
    }
}
