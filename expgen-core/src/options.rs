//! Project options selected once at startup.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Language variant of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Plain JavaScript (CommonJS)
    #[default]
    JavaScript,
    /// TypeScript, compiled with `tsc`
    TypeScript,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Source file extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    /// Human-readable label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(format!(
                "unknown language '{}', expected 'javascript' or 'typescript'",
                s
            )),
        }
    }
}

/// Authentication library wired into the server entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthLibrary {
    #[default]
    None,
    /// `jsonwebtoken`
    Jwt,
}

impl AuthLibrary {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthLibrary::None => "none",
            AuthLibrary::Jwt => "jwt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthLibrary::None => "None",
            AuthLibrary::Jwt => "JWT",
        }
    }
}

impl fmt::Display for AuthLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthLibrary {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(AuthLibrary::None),
            "jwt" | "jsonwebtoken" => Ok(AuthLibrary::Jwt),
            _ => Err(format!("unknown auth library '{}', expected 'none' or 'jwt'", s)),
        }
    }
}

/// Database integration scaffolded alongside the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[default]
    None,
    /// MongoDB through `mongoose`
    MongoDb,
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::None => "none",
            Database::MongoDb => "mongodb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Database::None => "None",
            Database::MongoDb => "MongoDB",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Database {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Database::None),
            "mongodb" | "mongo" => Ok(Database::MongoDb),
            _ => Err(format!("unknown database '{}', expected 'none' or 'mongodb'", s)),
        }
    }
}

/// Everything the generator needs to know about the project being created.
///
/// Built once from user input and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOptions {
    project_name: String,
    language: Language,
    auth: AuthLibrary,
    database: Database,
}

impl ProjectOptions {
    /// Create options for `project_name` with every feature turned off.
    ///
    /// The name is trimmed; an empty name is rejected.
    pub fn new(project_name: impl AsRef<str>) -> Result<Self> {
        let project_name = project_name.as_ref().trim();
        if project_name.is_empty() {
            return Err(Box::new(Error::EmptyProjectName));
        }

        Ok(Self {
            project_name: project_name.to_string(),
            language: Language::default(),
            auth: AuthLibrary::default(),
            database: Database::default(),
        })
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_auth(mut self, auth: AuthLibrary) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn auth(&self) -> AuthLibrary {
        self.auth
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn is_typescript(&self) -> bool {
        self.language == Language::TypeScript
    }

    pub fn uses_jwt(&self) -> bool {
        self.auth == AuthLibrary::Jwt
    }

    pub fn uses_mongodb(&self) -> bool {
        self.database == Database::MongoDb
    }
}
