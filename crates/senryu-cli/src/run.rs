//! Input handling and the detection loop

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use senryu::SenryuService;

use crate::args::Cli;
use crate::output::{render_results, render_tokens};

/// Processes one input and writes the rendered output.
///
/// # Errors
/// Analysis failures and write errors.
pub fn process_text<W: Write>(
  service: &SenryuService,
  cli: &Cli,
  text: &str,
  out: &mut W,
) -> Result<()> {
  let rendered = if cli.tokens {
    let tokens = service.analyze(text).with_context(|| format!("analysis failed: {text}"))?;
    render_tokens(text, &tokens, cli.json, cli.pretty)?
  } else {
    let results = service.detect(text).with_context(|| format!("detection failed: {text}"))?;
    debug!(found = results.len(), "detected");
    render_results(text, &results, cli.json, cli.pretty)?
  };

  out.write_all(rendered.as_bytes())?;
  if !rendered.ends_with('\n') {
    out.write_all(b"\n")?;
  }
  Ok(())
}

/// Processes the positional text, or every non-blank line of `input`.
///
/// Returns the number of processed inputs.
///
/// # Errors
/// Read, analysis and write errors.
pub fn run<R: BufRead, W: Write>(
  service: &SenryuService,
  cli: &Cli,
  input: R,
  out: &mut W,
) -> Result<usize> {
  if let Some(text) = cli.inline_text() {
    process_text(service, cli, &text, out)?;
    return Ok(1);
  }

  let mut processed = 0;
  for line in input.lines() {
    let line = line.context("failed to read stdin")?;
    if line.trim().is_empty() {
      continue;
    }
    process_text(service, cli, &line, out)?;
    processed += 1;
  }
  Ok(processed)
}
