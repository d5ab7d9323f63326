//! CLI for the urlcheck URL risk evaluator.

use anyhow::Result;
use clap::Parser;
use std::any::Any;
use std::ffi::OsString;
use std::io::{self, Write};
use std::panic::{self, UnwindSafe};
use std::process::ExitCode;
use urlcheck_core::{check_url_safety, CheckError, Verdict};

/// Classify one URL and print the verdict as a JSON line.
///
/// There are no flags: `--help` and friends are evaluated as URLs, and the
/// argument is taken as raw OS bytes so every input yields a verdict.
#[derive(Debug, Parser)]
#[command(name = "urlcheck", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Classify a URL as safe or unsafe using fixed heuristics", long_about = None)]
pub struct Cli {
    /// URL to evaluate.
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub url: Option<OsString>,

    /// Anything after the URL is ignored.
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub rest: Vec<OsString>,
}

impl Cli {
    pub fn run_from_args() -> Result<ExitCode> {
        let (verdict, code) = match Cli::try_parse() {
            Ok(cli) => {
                let code = if cli.url.is_some() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                };
                (cli.verdict(), code)
            }
            Err(err) => {
                tracing::error!(error = %err, "argument parsing failed");
                (Verdict::internal_error(err.kind()), ExitCode::SUCCESS)
            }
        };

        emit(&verdict)?;
        Ok(code)
    }

    /// Verdict for the parsed arguments. Input that is not valid UTF-8 is
    /// an invalid URL.
    pub fn verdict(&self) -> Verdict {
        if !self.rest.is_empty() {
            tracing::debug!(ignored = self.rest.len(), "extra arguments ignored");
        }

        let Some(raw) = self.url.as_deref() else {
            return Verdict::no_url_provided();
        };
        match raw.to_str() {
            Some(url) => evaluate_guarded(url),
            None => {
                tracing::debug!(input = ?raw, "argument is not valid UTF-8");
                Verdict::invalid_format()
            }
        }
    }
}

/// Evaluate `raw`, turning any error or panic into an internal-error verdict.
pub fn evaluate_guarded(raw: &str) -> Verdict {
    guard(|| check_url_safety(raw))
}

pub(crate) fn guard<F>(f: F) -> Verdict
where
    F: FnOnce() -> Result<Verdict, CheckError> + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(Ok(verdict)) => verdict,
        Ok(Err(err)) => {
            tracing::error!(error = %err, "evaluation failed");
            Verdict::internal_error(err)
        }
        Err(payload) => Verdict::internal_error(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn emit(verdict: &Verdict) -> Result<()> {
    let line = verdict.to_json_line()?;
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
