//! `codeify review` — send a source snippet for a senior-style review.

use anyhow::{bail, Result};
use codeify_core::Phase;

use crate::commands::build_session;
use crate::output;

pub async fn run(file: &str, language: Option<&str>, model: Option<String>) -> Result<()> {
    let mut session = build_session(file, language, model)?;

    let spinner = output::spinner("Reviewing…");
    let result = session.review().await;
    spinner.finish_and_clear();
    result?;

    if session.phase() == Phase::Failure {
        bail!("{}", session.response());
    }
    output::header(&format!("Review ({})", session.language()));
    println!("{}", session.response());
    Ok(())
}
