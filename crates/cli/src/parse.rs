//! ArgMatches → Command/CliAction conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Vault operations → `CliAction::Execute(Command)`
//! - Batch files → `CliAction::Batch`
//! - Input item → `CliAction::SetInput`
//!
//! REPL meta-commands never reach clap; [`check_meta_command`] handles them.

use std::path::Path;

use clap::ArgMatches;
use vault_executor::{
    ClearScope, Command, FailurePolicy, Invocation, MergeMode, OutputFormat, Payload, Value,
};

/// The result of parsing user input.
pub enum CliAction {
    /// A single vault command.
    Execute(Command),
    /// A sequence of commands loaded from a file.
    Batch {
        invocations: Vec<Invocation>,
        policy: FailurePolicy,
    },
    /// Replace the session's input item.
    SetInput(Value),
}

/// REPL meta-commands.
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => {
            let command = parts
                .next()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "insert" => Ok(CliAction::Execute(Command::Insert {
            key: required(m, "key")?,
            payload: payload(m),
            mode: merge_mode(m),
        })),
        "update" => Ok(CliAction::Execute(Command::Update {
            key: required(m, "key")?,
            payload: payload(m),
            mode: merge_mode(m),
            create_if_not_exists: m.get_flag("create"),
        })),
        "delete" => Ok(CliAction::Execute(Command::Delete {
            key: required(m, "key")?,
            error_if_not_exists: m.get_flag("strict"),
        })),
        "find" => Ok(CliAction::Execute(Command::Find {
            key: required(m, "key")?,
            error_if_not_exists: m.get_flag("strict"),
        })),
        "clear" => {
            let scope = match m.get_one::<String>("key") {
                Some(key) => ClearScope::Key(key.clone()),
                None => ClearScope::All,
            };
            Ok(CliAction::Execute(Command::Clear { scope }))
        }
        "list" => Ok(CliAction::Execute(Command::List {
            format: output_format(m)?,
            include_nested: m.get_flag("nested"),
        })),
        "input" => {
            let raw = required(m, "value")?;
            Ok(CliAction::SetInput(parse_json_value(&raw)?))
        }
        "batch" => {
            let path = required(m, "path")?;
            let policy = if m.get_flag("continue") {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            };
            Ok(CliAction::Batch {
                invocations: load_batch(Path::new(&path))?,
                policy,
            })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

// =========================================================================
// Argument helpers
// =========================================================================

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

/// Manual JSON text, or the input item with `--input`.
///
/// The text is passed through unparsed so malformed JSON is reported by the
/// vault as `MalformedPayload`.
fn payload(m: &ArgMatches) -> Payload {
    match m.get_one::<String>("value") {
        Some(text) if !m.get_flag("input") => Payload::Manual(text.clone()),
        _ => Payload::Input,
    }
}

fn merge_mode(m: &ArgMatches) -> MergeMode {
    if m.get_flag("merge") {
        MergeMode::Merge
    } else {
        MergeMode::Replace
    }
}

fn output_format(m: &ArgMatches) -> Result<OutputFormat, String> {
    match m.get_one::<String>("format").map(String::as_str) {
        None | Some("keys") => Ok(OutputFormat::Keys),
        Some("full") => Ok(OutputFormat::Full),
        Some("vault") => Ok(OutputFormat::Vault),
        Some(other) => Err(format!("Unknown format: {}", other)),
    }
}

/// Parse JSON text into a vault value.
pub fn parse_json_value(raw: &str) -> Result<Value, String> {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .map_err(|e| format!("Invalid JSON: {}", e))
}

// =========================================================================
// Batch files
// =========================================================================

/// Load a batch file: a JSON array of command objects.
///
/// Each element is a serialized [`Command`] with an optional `input` field
/// holding that invocation's input item:
///
/// ```json
/// [
///   {"operation": "insert", "key": "a", "payload": {"dataSource": "manual", "data": "1"}},
///   {"operation": "insert", "key": "b", "payload": {"dataSource": "input"}, "input": {"id": 7}}
/// ]
/// ```
pub fn load_batch(path: &Path) -> Result<Vec<Invocation>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_batch(&text)
}

pub fn parse_batch(text: &str) -> Result<Vec<Invocation>, String> {
    let items: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| format!("Invalid batch file: {}", e))?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            let input = item
                .as_object_mut()
                .and_then(|obj| obj.remove("input"))
                .map(Value::from);
            let command: Command = serde_json::from_value(item)
                .map_err(|e| format!("Invalid command at index {}: {}", index, e))?;
            Ok(Invocation { command, input })
        })
        .collect()
}
