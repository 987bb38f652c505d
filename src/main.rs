//! legacy-promote CLI - archive versioned build artifacts
//!
//! Usage: legacy-promote [--root DIR] [--overwrite[=BOOL] | --ask] [--json]
//!
//! Copies the promotable part of the staging directory (`dist`) into the
//! archive (`legacy`), asking once per release that is already archived.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use legacy_promote::JsonEventSink;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use ui::primitives::text::ColoredText;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        if cli.json {
            JsonEventSink::stdout().emit_error(&format!("{err:#}"));
        } else {
            let color =
                std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
            eprintln!("{} {err:#}", ColoredText::error("error:").bold().render(color));
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    commands::promote::cmd_promote(cli, &cwd)
}
