//! Interactive contact book.
//!
//! # Responsibility
//! - Load the address book, read commands line by line, print replies.
//! - Persist the whole book after every dispatched command.

mod command;
mod config;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use command::{execute, parse_input, Flow};
use config::Cli;
use contactbook_core::{init_logging, BookStore, ContactService, JsonFileStore};
use log::{error, info};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_log {
        let cwd = std::env::current_dir().context("failed to resolve working directory")?;
        init_logging(cli.log_level(), &cli.log_dir(&cwd)).map_err(anyhow::Error::msg)?;
    }

    let store = JsonFileStore::new(&cli.book);
    let mut service = ContactService::open(store).with_context(|| {
        format!("failed to load address book from `{}`", cli.book.display())
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut service,
        stdin.lock(),
        stdout.lock(),
        || Local::now().date_naive(),
    )?;
    Ok(())
}

/// Drives the prompt/reply loop until `exit`, `close` or end of input.
fn run<S, R, W, F>(
    service: &mut ContactService<S>,
    mut input: R,
    mut output: W,
    today: F,
) -> io::Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to assistant bot!")?;
    info!(
        "event=session_start module=cli status=ok records={}",
        service.book().len()
    );

    loop {
        write!(output, "Enter command: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let Some(parsed) = parse_input(&line) else {
            writeln!(output, "Please enter a command.")?;
            continue;
        };

        let reply = execute(service, &parsed, today());
        writeln!(output, "{}", reply.text)?;
        if reply.flow == Flow::Exit {
            break;
        }

        if let Err(err) = service.persist() {
            error!("event=session_save module=cli status=error error={}", err);
            writeln!(output, "Failed to save address book: {err}")?;
        }
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}
