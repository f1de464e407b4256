//! `codeify fix` — ask the model for corrected code and apply or print it.

use anyhow::{bail, Result};
use codeify_core::Phase;

use crate::commands::build_session;
use crate::output;

pub async fn run(
    file: &str,
    language: Option<&str>,
    no_apply: bool,
    model: Option<String>,
) -> Result<()> {
    let mut session = build_session(file, language, model)?;
    let auto_apply = !no_apply;

    let spinner = output::spinner("Fixing…");
    let result = session.fix(auto_apply).await;
    spinner.finish_and_clear();
    result?;

    if session.phase() == Phase::Failure {
        // Parse fallback or API error; the response already carries the
        // raw reply or the error message.
        bail!("{}", session.response());
    }

    println!("{}", session.response());
    if auto_apply {
        if file == "-" {
            println!();
            println!("{}", session.code());
        } else {
            std::fs::write(file, session.code())?;
            output::success(&format!("Applied corrected code to {file}"));
        }
    } else if let Some(code) = session.pending_fix() {
        println!();
        println!("{code}");
    }
    Ok(())
}
