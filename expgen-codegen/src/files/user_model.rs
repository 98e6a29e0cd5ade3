//! Mongoose user model (`src/models/userModel.js`).

use std::path::{Path, PathBuf};

use expgen_core::GeneratedFile;

use super::ModuleSyntax;
use crate::builder::CodeBuilder;

const FIELDS: [&str; 3] = [
    "name: { type: String, required: true },",
    "email: { type: String, required: true, unique: true },",
    "password: { type: String, required: true },",
];

/// A `User` model with name, unique email and password. CommonJS, like
/// [`DbConnector`](super::DbConnector).
pub struct UserModel;

impl GeneratedFile for UserModel {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("models").join("userModel.js")
    }

    fn render(&self) -> String {
        let syntax = ModuleSyntax::CommonJs;

        CodeBuilder::new()
            .line(&syntax.import_default("mongoose", "mongoose"))
            .blank()
            .block_with_close("const userSchema = new mongoose.Schema(", ");", |b| {
                b.block_with_close("{", "},", |b| b.lines(FIELDS))
                    .line("{ timestamps: true },")
            })
            .blank()
            .line(&syntax.export_default("mongoose.model('User', userSchema)"))
            .build()
    }
}
