// Entrypoint for the roster CLI.
// - Keeps `main` small: set up logging, build an empty roster, pick a
//   console and hand both to the menu loop.
// - Logs go to stderr; stdout carries only the menu conversation.

use anyhow::Context;
use clap::Parser;
use roster_cli::{
    console::{LineConsole, TerminalConsole},
    ui::main_menu,
    Roster,
};
use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Interactive register of teachers and their students
#[derive(Parser, Debug)]
#[command(name = "roster-cli")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Use plain line prompts even when stdin is a terminal
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    // The roster lives for exactly one run of the menu.
    let mut roster = Roster::new();
    let stdin = io::stdin();
    if !args.plain && stdin.is_terminal() {
        tracing::info!("starting with terminal prompts");
        main_menu(&mut roster, &mut TerminalConsole::new()).context("terminal console failed")?;
    } else {
        tracing::info!("starting with line prompts");
        let mut console = LineConsole::new(stdin.lock(), io::stdout().lock());
        main_menu(&mut roster, &mut console).context("console I/O failed")?;
    }

    tracing::debug!(
        roster = %serde_json::to_string(&roster).context("serializing roster")?,
        "session finished"
    );
    Ok(())
}
