//! Server entry point (`src/server.js` / `src/server.ts`).

use std::path::{Path, PathBuf};

use expgen_core::{AuthLibrary, GeneratedFile, Language};

use super::ModuleSyntax;
use crate::builder::CodeBuilder;

const MIDDLEWARES: [&str; 4] = [
    "app.use(cors());",
    "app.use(express.json());",
    "app.use(express.urlencoded({ extended: true }));",
    "app.use(express.static('static'));",
];

/// The Express server entry file.
///
/// Both language variants share the same routes and middleware; only the
/// module syntax and the error handler's type annotations differ.
pub struct ServerEntry {
    language: Language,
    auth: AuthLibrary,
}

impl ServerEntry {
    pub fn new(language: Language, auth: AuthLibrary) -> Self {
        Self { language, auth }
    }

    /// Module imports, in declaration order.
    fn imports(&self) -> Vec<String> {
        let syntax = ModuleSyntax::for_language(self.language);
        let mut modules = vec![("express", "express"), ("cors", "cors"), ("dotenv", "dotenv")];
        match self.auth {
            AuthLibrary::None => {}
            // Declared for the developer to wire up; no routes use it yet.
            AuthLibrary::Jwt => modules.push(("jwt", "jsonwebtoken")),
        }

        modules
            .into_iter()
            .map(|(binding, module)| syntax.import_default(binding, module))
            .collect()
    }

    fn error_handler_header(&self) -> &'static str {
        match self.language {
            Language::JavaScript => "app.use((err, req, res, next) => {",
            Language::TypeScript => {
                "app.use((err: Error, req: express.Request, res: express.Response, next: express.NextFunction) => {"
            }
        }
    }
}

impl GeneratedFile for ServerEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join(format!("server.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let syntax = ModuleSyntax::for_language(self.language);

        CodeBuilder::new()
            .lines(self.imports())
            .blank()
            .line("dotenv.config();")
            .blank()
            .line("const app = express();")
            .line("const PORT = process.env.PORT || 3000;")
            .blank()
            .line("// Middlewares")
            .lines(MIDDLEWARES)
            .blank()
            .line("// Routes")
            .block_with_close("app.get('/', (req, res) => {", "});", |b| {
                b.line("res.json({ message: 'Welcome to this new Express.js Project' });")
            })
            .blank()
            .line("// Error handling middleware")
            .block_with_close(self.error_handler_header(), "});", |b| {
                b.line("console.error(err.stack);")
                    .line("res.status(500).json({ error: 'Something went wrong!' });")
            })
            .blank()
            .block_with_close("app.listen(PORT, () => {", "});", |b| {
                b.line("console.log(`Server is running on http://localhost:${PORT}/`);")
            })
            .blank()
            .line(&syntax.export_default("app"))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ServerEntry> {
        let mut variants = Vec::new();
        for language in [Language::JavaScript, Language::TypeScript] {
            for auth in [AuthLibrary::None, AuthLibrary::Jwt] {
                variants.push(ServerEntry::new(language, auth));
            }
        }
        variants
    }

    #[test]
    fn test_path_follows_language() {
        let base = Path::new("demo");
        assert_eq!(
            ServerEntry::new(Language::JavaScript, AuthLibrary::None).path(base),
            PathBuf::from("demo/src/server.js")
        );
        assert_eq!(
            ServerEntry::new(Language::TypeScript, AuthLibrary::Jwt).path(base),
            PathBuf::from("demo/src/server.ts")
        );
    }

    #[test]
    fn test_one_root_route_and_one_error_handler() {
        for entry in all_variants() {
            let code = entry.render();
            assert_eq!(code.matches("app.get(").count(), 1, "{code}");
            assert_eq!(code.matches("app.get('/'").count(), 1);
            assert_eq!(code.matches("app.use((err").count(), 1);
            assert_eq!(code.matches("app.listen(").count(), 1);
        }
    }

    #[test]
    fn test_middleware_enabled() {
        for entry in all_variants() {
            let code = entry.render();
            for middleware in MIDDLEWARES {
                assert!(code.contains(middleware), "missing {middleware}");
            }
            assert!(code.contains("process.env.PORT"));
        }
    }

    #[test]
    fn test_jwt_is_declared_but_unused() {
        let js = ServerEntry::new(Language::JavaScript, AuthLibrary::Jwt).render();
        let ts = ServerEntry::new(Language::TypeScript, AuthLibrary::Jwt).render();

        assert!(js.contains("const jwt = require('jsonwebtoken');"));
        assert!(ts.contains("import jwt from 'jsonwebtoken';"));
        for code in [js, ts] {
            assert_eq!(code.matches("jwt").count(), 1);
        }
    }

    #[test]
    fn test_no_jwt_without_auth() {
        let code = ServerEntry::new(Language::TypeScript, AuthLibrary::None).render();
        assert!(!code.contains("jsonwebtoken"));
    }

    #[test]
    fn test_never_imports_database() {
        for entry in all_variants() {
            let code = entry.render();
            assert!(!code.contains("mongoose"));
            assert!(!code.contains("./configs/db"));
        }
    }

    #[test]
    fn test_languages_differ_only_in_syntax_and_annotations() {
        for auth in [AuthLibrary::None, AuthLibrary::Jwt] {
            let js = ServerEntry::new(Language::JavaScript, auth).render();
            let ts = ServerEntry::new(Language::TypeScript, auth).render();

            let differing: Vec<(&str, &str)> = js
                .lines()
                .zip(ts.lines())
                .filter(|(a, b)| a != b)
                .collect();

            assert_eq!(js.lines().count(), ts.lines().count());
            for (js_line, ts_line) in differing {
                let is_import = js_line.contains("require(") && ts_line.starts_with("import ");
                let is_export = js_line.starts_with("module.exports")
                    && ts_line.starts_with("export default");
                let is_annotation = js_line.starts_with("app.use((err")
                    && ts_line.contains("err: Error");
                assert!(
                    is_import || is_export || is_annotation,
                    "unexpected difference: {js_line:?} vs {ts_line:?}"
                );
            }
        }
    }
}
