//! Clap command tree.
//!
//! The same subcommands serve shell mode (`vault insert k 1`) and the REPL,
//! where lines are split with shlex and parsed without a binary name.

use clap::{Arg, ArgAction, Command};

/// Full CLI: global flags plus every subcommand.
pub fn build_cli() -> Command {
    Command::new("vault")
        .about("Shared JSON document vault with dotted-path addressing")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .global(true)
                .help("Load the starting document from a JSON file"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .global(true)
                .help("Load vault settings from a TOML file"),
        )
        .arg(
            Arg::new("max-bytes")
                .long("max-bytes")
                .value_name("BYTES")
                .value_parser(clap::value_parser!(usize))
                .global(true)
                .help("Cap on the serialized document size"),
        )
        .arg(
            Arg::new("no-verify")
                .long("no-verify")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Skip read verification"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("raw")
                .help("Print output records as JSON"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print bare values without decoration"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Log to stderr (-v info, -vv debug, -vvv trace)"),
        )
        .subcommands(subcommands())
}

/// Subcommands only, for REPL and pipe lines.
pub fn build_repl_cli() -> Command {
    Command::new("vault")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommands(subcommands())
}

fn key_arg() -> Arg {
    Arg::new("key")
        .required(true)
        .help("Dotted path, e.g. users.admin.settings")
}

fn value_arg() -> Arg {
    Arg::new("value")
        .required_unless_present("input")
        .help("JSON value, e.g. '{\"theme\": \"dark\"}' or '\"text\"'")
}

fn input_flag() -> Arg {
    Arg::new("input")
        .long("input")
        .action(ArgAction::SetTrue)
        .conflicts_with("value")
        .help("Take the value from the current input item")
}

fn merge_flag() -> Arg {
    Arg::new("merge")
        .long("merge")
        .short('m')
        .action(ArgAction::SetTrue)
        .help("Deep-merge into an existing object instead of replacing")
}

fn strict_flag() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail if the key does not exist")
}

fn subcommands() -> Vec<Command> {
    vec![
        Command::new("insert")
            .about("Write a value at a new key")
            .arg(key_arg())
            .arg(value_arg())
            .arg(input_flag())
            .arg(merge_flag()),
        Command::new("update")
            .about("Change the value at an existing key")
            .arg(key_arg())
            .arg(value_arg())
            .arg(input_flag())
            .arg(merge_flag())
            .arg(
                Arg::new("create")
                    .long("create")
                    .action(ArgAction::SetTrue)
                    .help("Create the key if it does not exist"),
            ),
        Command::new("delete")
            .visible_alias("del")
            .about("Remove a key")
            .arg(key_arg())
            .arg(strict_flag()),
        Command::new("find")
            .visible_alias("get")
            .about("Read the value at a key")
            .arg(key_arg())
            .arg(strict_flag()),
        Command::new("clear")
            .about("Empty the vault, or remove one key")
            .arg(Arg::new("key").help("Key to remove; omit to clear everything")),
        Command::new("list")
            .visible_alias("ls")
            .about("List keys, entries or the whole vault")
            .arg(
                Arg::new("nested")
                    .long("nested")
                    .short('n')
                    .action(ArgAction::SetTrue)
                    .help("Include every nested dotted path"),
            )
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["keys", "full", "vault"])
                    .default_value("keys")
                    .help("Output shape"),
            ),
        Command::new("input")
            .about("Set the current input item used by --input")
            .arg(Arg::new("value").required(true).help("JSON value")),
        Command::new("batch")
            .about("Run a JSON array of commands from a file")
            .arg(Arg::new("path").required(true).help("Batch file"))
            .arg(
                Arg::new("continue")
                    .long("continue")
                    .action(ArgAction::SetTrue)
                    .help("Keep going after a failing command"),
            ),
    ]
}
