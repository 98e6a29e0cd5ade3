//! Interactive input: the project name and the option selections.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};
use expgen_core::{AuthLibrary, Database, Language};
use eyre::{Context, Result};

/// Print the name prompt and read one line from `input`.
///
/// The line is returned trimmed; end of input yields an empty name.
pub(crate) fn read_project_name(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, "{} ", "Enter Project Name:".blue())?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .wrap_err("Failed to read project name")?;

    Ok(line.trim().to_string())
}

/// Whether option prompts can be shown.
pub(crate) fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

pub(crate) fn select_language() -> Result<Language> {
    select(
        "Select a language",
        &[Language::JavaScript, Language::TypeScript],
        Language::label,
    )
}

pub(crate) fn select_auth() -> Result<AuthLibrary> {
    select(
        "Select an authentication library",
        &[AuthLibrary::None, AuthLibrary::Jwt],
        AuthLibrary::label,
    )
}

pub(crate) fn select_database() -> Result<Database> {
    select(
        "Select a database",
        &[Database::None, Database::MongoDb],
        Database::label,
    )
}

fn select<T: Copy>(prompt: &str, choices: &[T], label: fn(&T) -> &'static str) -> Result<T> {
    let items: Vec<&str> = choices.iter().map(label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .wrap_err_with(|| format!("Failed to get selection for '{}'", prompt))?;

    Ok(choices[selection])
}
