//! Project file templates.
//!
//! Every file the generator writes is a [`GeneratedFile`]. Rendering is pure;
//! writing goes through a [`expgen_core::FileSystem`].

mod db_connector;
mod package_json;
mod readme;
mod server_entry;
mod syntax;
mod tsconfig;
mod user_model;

use std::path::{Path, PathBuf};

use expgen_core::{Database, GeneratedFile, Language, ProjectOptions};

pub use db_connector::DbConnector;
pub use package_json::PackageJson;
pub use readme::Readme;
pub use server_entry::ServerEntry;
pub use syntax::ModuleSyntax;
pub use tsconfig::TsConfig;
pub use user_model::UserModel;

/// The files emitted for a given option set, in write order.
pub struct FileSet {
    files: Vec<Box<dyn GeneratedFile>>,
}

impl FileSet {
    /// Server entry, then tsconfig (TypeScript), then the database connector
    /// and user model (MongoDB), then the readme.
    pub fn for_options(options: &ProjectOptions) -> Self {
        let language = options.language();
        let mut files: Vec<Box<dyn GeneratedFile>> =
            vec![Box::new(ServerEntry::new(language, options.auth()))];

        if language == Language::TypeScript {
            files.push(Box::new(TsConfig));
        }

        match options.database() {
            Database::None => {}
            Database::MongoDb => {
                files.push(Box::new(DbConnector));
                files.push(Box::new(UserModel));
            }
        }

        files.push(Box::new(Readme));

        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GeneratedFile> {
        self.files.iter().map(|f| f.as_ref())
    }

    /// Paths the set would write under `base`.
    pub fn paths(&self, base: &Path) -> Vec<PathBuf> {
        self.iter().map(|f| f.path(base)).collect()
    }
}
