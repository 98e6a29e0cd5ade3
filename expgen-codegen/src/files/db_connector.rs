//! MongoDB connection module (`src/configs/db.js`).

use std::path::{Path, PathBuf};

use expgen_core::GeneratedFile;

use super::ModuleSyntax;
use crate::builder::CodeBuilder;

/// Connects mongoose using `MONGO_URI` from the environment.
///
/// The file keeps its `.js` name in TypeScript projects too, so it is always
/// CommonJS and loads under Node without `"type": "module"`.
pub struct DbConnector;

impl GeneratedFile for DbConnector {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("configs").join("db.js")
    }

    fn render(&self) -> String {
        let syntax = ModuleSyntax::CommonJs;

        CodeBuilder::new()
            .line(&syntax.import_default("mongoose", "mongoose"))
            .blank()
            .block_with_close("const connectDB = async () => {", "};", |b| {
                b.block_with_close("try {", "} catch (error) {", |b| {
                    b.line("await mongoose.connect(process.env.MONGO_URI);")
                        .line("console.log('MongoDB connected successfully');")
                })
                .indent()
                .line("console.error('MongoDB connection error:', error);")
                .line("process.exit(1);")
                .dedent()
                .line("}")
            })
            .blank()
            .line(&syntax.export_default("connectDB"))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_js_module() {
        let code = DbConnector.render();

        assert!(code.starts_with("const mongoose = require('mongoose');\n"));
        assert!(code.ends_with("module.exports = connectDB;\n"));
        assert!(code.contains("    await mongoose.connect(process.env.MONGO_URI);\n"));
        assert!(code.contains("  } catch (error) {\n    console.error("));
        assert!(!code.contains("import "));
        assert!(!code.contains("export default"));
    }

    #[test]
    fn test_path() {
        assert_eq!(
            DbConnector.path(Path::new("api")),
            PathBuf::from("api/src/configs/db.js")
        );
    }
}
