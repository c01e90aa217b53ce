//! `dirnotes`: notes attached to the directory they were written in.
//!
//! Each invocation opens the store, performs one action for the current
//! working directory and exits. The connection is owned by `run_with`, so it
//! is closed on every return path before the exit code is produced.

mod args;
mod dispatch;
mod error;

use args::{Action, Cli};
use clap::Parser;
use dirnotes_core::{
    core_version, current_dir_key, init_logging, open_db, NotesConfig, SqliteNoteRepository,
};
use error::CliError;
use log::{error, info};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit here, before the store is touched.
    let action = Cli::parse().into_action();

    let result = run(&action);
    if let Err(err) = &result {
        error!(
            "event=cli_run module=cli status=error action={} error_code={} error={}",
            action.name(),
            err.code(),
            err
        );
        eprintln!("error: {err}");
    }
    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn run(action: &Action) -> Result<(), CliError> {
    let config = NotesConfig::resolve()?;
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_run module=cli status=start action={} version={}",
        action.name(),
        core_version()
    );

    let dir = current_dir_key()?;
    let mut stdout = std::io::stdout().lock();
    run_with(action, &config, &dir, &mut stdout)?;

    info!(
        "event=cli_run module=cli status=ok action={}",
        action.name()
    );
    Ok(())
}

fn run_with(
    action: &Action,
    config: &NotesConfig,
    dir: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let conn = open_db(&config.db_path)
        .map_err(CliError::storage("failed to open notes database"))?;
    let repo = SqliteNoteRepository::try_new(&conn)
        .map_err(CliError::storage("notes database is not usable"))?;

    dispatch::execute(&repo, dir, action, out)?;
    out.flush()?;
    Ok(())
}
