// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

mod cli;
mod logging;

use cli::{display::use_colors, run, Cli};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run(cli, &mut writer, use_colors())?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let message = format!("{:#}", err);
        error!(error = %message, "command failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
