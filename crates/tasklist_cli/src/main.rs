//! Terminal host for the task list core.
//!
//! # Responsibility
//! - Read one command per line and feed it to the controller as UI events.
//! - Repaint the list after every mutation through a `ViewSink`.

mod command;
mod display;

use anyhow::Context;
use clap::Parser;
use command::{parse_line, Command, HELP};
use display::{format_view, TerminalSink};
use log::info;
use std::io::{self, BufRead, Write};
use tasklist_core::{default_log_level, init_logging, TaskListController};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Edit an in-memory task list from the terminal")]
#[command(version)]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(cli.log_level.as_str(), log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }
    info!("event=cli_start module=cli status=ok");

    let mut controller = TaskListController::new();
    controller.attach_sink(Box::new(TerminalSink));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Command::Events(events))) => {
                let mapped = events
                    .iter()
                    .filter(|event| controller.handle_event(event))
                    .count();
                if mapped == 0 {
                    writeln!(stdout, "(no effect)")?;
                }
            }
            Ok(Some(Command::Dispatch(intent))) => {
                let before = controller.revision();
                controller.dispatch(intent);
                if controller.revision() == before {
                    writeln!(stdout, "(no effect)")?;
                }
            }
            Ok(Some(Command::List)) => write!(stdout, "{}", format_view(controller.view()))?,
            Ok(Some(Command::Json)) => {
                let json = serde_json::to_string_pretty(controller.view())
                    .context("failed to encode view")?;
                writeln!(stdout, "{json}")?;
            }
            Ok(Some(Command::Help)) => writeln!(stdout, "{HELP}")?,
            Ok(Some(Command::Quit)) => break,
            Err(err) => writeln!(stdout, "{err}")?,
        }
        prompt(&mut stdout)?;
    }

    info!(
        "event=cli_exit module=cli status=ok tasks={}",
        controller.len()
    );
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "tasklist> ")?;
    stdout.flush()
}
