//! Command handlers.

mod fix;
mod languages;
mod review;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use codeify_core::Language;
use codeify_runtime::{ReviewSession, RuntimeConfig};

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Review {
            file,
            language,
            model,
        } => review::run(&file, language.as_deref(), model).await,
        Command::Fix {
            file,
            language,
            no_apply,
            model,
        } => fix::run(&file, language.as_deref(), no_apply, model).await,
        Command::Languages => languages::run(),
    }
}

/// Read the source snippet from a file, or stdin when `file` is "-".
fn read_source(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("failed to read {file}"))
    }
}

/// Resolve the language: explicit flag first, then the file extension,
/// defaulting to JavaScript like the original selector.
fn resolve_language(flag: Option<&str>, file: &str) -> Result<Language> {
    if let Some(value) = flag {
        return value.parse().map_err(|_| {
            let values: Vec<&str> = Language::all().iter().map(|l| l.value()).collect();
            anyhow::anyhow!(
                "unknown language '{value}'; supported: {}",
                values.join(", ")
            )
        });
    }
    let guessed = Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension);
    Ok(guessed.unwrap_or_default())
}

/// Build a session over the configured Gemini client.
fn build_session(file: &str, language: Option<&str>, model: Option<String>) -> Result<ReviewSession> {
    let code = read_source(file)?;
    if code.is_empty() {
        bail!("{file} is empty; nothing to send");
    }
    let language = resolve_language(language, file)?;

    let mut config = RuntimeConfig::from_env();
    if let Some(model) = model {
        config = config.with_model(model);
    }
    let client = Arc::new(config.client()?);

    let mut session = ReviewSession::new(client);
    session.set_code(code);
    session.set_language(language);
    tracing::debug!(language = %language, model = %config.model, "session ready");
    Ok(session)
}
