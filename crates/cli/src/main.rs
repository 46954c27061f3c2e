//! Vault CLI: redis-style access to a JSON document vault.
//!
//! Three modes:
//! - **Shell mode**: `vault [flags] COMMAND`, single command, exit
//! - **REPL mode**: `vault [flags]`, interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "find users.admin" | vault`, line-by-line from stdin
//!
//! The document lives for the process only. Use `--file` to start from a
//! JSON file and `list --format vault --raw` to dump it back out.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use clap::ArgMatches;
use tracing::{info, Level};
use vault_engine::{Document, VaultConfig};

use commands::build_cli;
use format::{format_error, OutputMode};
use parse::matches_to_action;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let mut state = match open_session(&matches, output_mode) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<VaultConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => VaultConfig::from_file(path)
            .map_err(|e| format!("(error) Failed to load config {}: {}", path, e))?,
        None => VaultConfig::default(),
    };

    if let Some(bytes) = matches.get_one::<usize>("max-bytes") {
        config = config.max_vault_bytes(*bytes);
    }
    if matches.get_flag("no-verify") {
        config = config.verify_reads(false);
    }

    config
        .validate()
        .map_err(|e| format!("(error) {}", e))?;
    Ok(config)
}

fn open_session(matches: &ArgMatches, mode: OutputMode) -> Result<SessionState, String> {
    let config = load_config(matches)?;

    let document = match matches.get_one::<String>("file") {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("(error) Failed to read {}: {}", path, e))?;
            let document =
                Document::from_json_str(&text).map_err(|e| format_error(&e, mode))?;
            let size = config
                .size_guard()
                .check(&document)
                .map_err(|e| format_error(&e, mode))?;
            info!(path = %path, keys = document.len(), size, "loaded starting document");
            Some(document)
        }
        None => None,
    };

    Ok(SessionState::new(config, document))
}

fn run_shell_mode(matches: &ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches) {
        Ok(action) => repl::run_action(state, action, mode),
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
