//! senryu-cli エントリーポイント

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use senryu::SenryuService;
use senryu_cli::{Cli, run::run};

fn main() -> Result<()> {
  let cli = Cli::parse();
  let config = cli.to_config()?;

  // 結果は stdout、ログは stderr。RUST_LOG があれば優先
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let service = SenryuService::init(&config)?;

  let stdin = io::stdin();
  let mut stdout = io::stdout().lock();
  let processed = run(&service, &cli, stdin.lock(), &mut stdout)?;
  stdout.flush()?;

  tracing::debug!(processed, "done");
  Ok(())
}
