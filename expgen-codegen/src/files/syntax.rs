//! Module syntax shared by every JavaScript/TypeScript template.

use expgen_core::Language;

/// How a generated module imports and exports values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSyntax {
    /// `require` / `module.exports`
    CommonJs,
    /// `import` / `export default`
    EsModule,
}

impl ModuleSyntax {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::JavaScript => ModuleSyntax::CommonJs,
            Language::TypeScript => ModuleSyntax::EsModule,
        }
    }

    /// Bind the default export of `module` to `binding`.
    pub fn import_default(&self, binding: &str, module: &str) -> String {
        match self {
            ModuleSyntax::CommonJs => format!("const {} = require('{}');", binding, module),
            ModuleSyntax::EsModule => format!("import {} from '{}';", binding, module),
        }
    }

    /// Make `expr` the module's default export.
    pub fn export_default(&self, expr: &str) -> String {
        match self {
            ModuleSyntax::CommonJs => format!("module.exports = {};", expr),
            ModuleSyntax::EsModule => format!("export default {};", expr),
        }
    }
}
