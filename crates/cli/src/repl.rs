//! REPL and pipe loops.
//!
//! Both read one command per line, split it with shlex and parse it with the
//! subcommand-only clap tree. The REPL keeps history in `~/.vault_history`.

use std::io::BufRead;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::commands::build_repl_cli;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

/// What the loop should do after a line.
enum LineResult {
    Continue(i32),
    Quit,
}

/// Interactive prompt. Returns when the user quits or sends EOF.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };

    let history = history_path();
    if let Some(path) = &history {
        // Missing on first run
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("vault> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                if let LineResult::Quit = run_line(state, &line, mode) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            warn!(error = %e, "failed to save history");
        }
    }
}

/// Read commands from stdin until EOF. Returns 1 if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) Failed to read stdin: {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match run_line(state, trimmed, mode) {
            LineResult::Continue(code) => exit_code = exit_code.max(code),
            LineResult::Quit => break,
        }
    }

    exit_code
}

fn run_line(state: &mut SessionState, line: &str, mode: OutputMode) -> LineResult {
    if let Some(meta) = check_meta_command(line) {
        return match meta {
            MetaCommand::Quit => LineResult::Quit,
            MetaCommand::Help { command } => {
                print_help(command.as_deref());
                LineResult::Continue(0)
            }
        };
    }

    let args = match shlex::split(line) {
        Some(args) => args,
        None => {
            eprintln!("(error) Unbalanced quotes");
            return LineResult::Continue(1);
        }
    };

    let matches = match build_repl_cli().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("{}", e.render());
            return LineResult::Continue(1);
        }
    };

    match matches_to_action(&matches) {
        Ok(action) => LineResult::Continue(run_action(state, action, mode)),
        Err(e) => {
            eprintln!("(error) {}", e);
            LineResult::Continue(1)
        }
    }
}

/// Execute a parsed action and print its result. Returns an exit code.
pub fn run_action(state: &mut SessionState, action: CliAction, mode: OutputMode) -> i32 {
    match action {
        CliAction::Execute(command) => {
            debug!(command = command.name(), "executing");
            match state.execute(command) {
                Ok(output) => {
                    print_output(&format_output(&output, mode));
                    0
                }
                Err(e) => {
                    eprintln!("{}", format_error(&e, mode));
                    1
                }
            }
        }
        CliAction::Batch {
            invocations,
            policy,
        } => {
            debug!(count = invocations.len(), ?policy, "executing batch");
            match state.execute_batch(invocations, policy) {
                Ok(outputs) => {
                    let mut code = 0;
                    for output in &outputs {
                        if !output.is_success() {
                            code = 1;
                        }
                        print_output(&format_output(output, mode));
                    }
                    code
                }
                Err(e) => {
                    eprintln!("{}", format_error(&e, mode));
                    1
                }
            }
        }
        CliAction::SetInput(value) => {
            state.set_input(value);
            if mode == OutputMode::Human {
                println!("OK");
            }
            0
        }
    }
}

fn print_output(formatted: &str) {
    if !formatted.is_empty() {
        println!("{}", formatted);
    }
}

fn print_help(command: Option<&str>) {
    let mut cli = build_repl_cli();
    let help = match command {
        Some(name) => match cli.find_subcommand_mut(name) {
            Some(sub) => sub.render_help(),
            None => {
                eprintln!("(error) Unknown command: {}", name);
                return;
            }
        },
        None => cli.render_help(),
    };
    println!("{}", help);
}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".vault_history"))
}
