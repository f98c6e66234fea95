//! `change-case` binary.
//!
//! Loads a file into the in-memory editor, places the requested selections, runs one
//! change-case command and prints the converted text followed by the resulting selections.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use change_case_core::{
    ChangeCase, ChangeCaseConfig, CommandResult, JsonConfig, MemoryEditor, Position, Selection,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "change-case")]
#[command(about = "Convert words and selections between naming conventions")]
#[command(version)]
struct Args {
    /// File to convert (`-` reads stdin)
    #[arg(required_unless_present = "list")]
    file: Option<PathBuf>,

    /// Transformation name or command id (e.g. `snakeCase`)
    #[arg(required_unless_present = "list")]
    transformation: Option<String>,

    /// Selection as zero-based `LINE:COL` (caret) or `LINE:COL..LINE:COL`; repeatable
    #[arg(long = "at", value_name = "SELECTION", value_parser = parse_selection)]
    at: Vec<Selection>,

    /// JSON settings file (`{"changeCase": {"includeDotInCurrentWord": true}}`)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Treat `.` as part of the word under a caret
    #[arg(long)]
    include_dot: bool,

    /// Write the result back to the file instead of printing it
    #[arg(short, long)]
    write: bool,

    /// List the available transformations and exit
    #[arg(long)]
    list: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (line, character) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got `{s}`"))?;
    let line = line
        .trim()
        .parse()
        .map_err(|e| format!("invalid line `{line}`: {e}"))?;
    let character = character
        .trim()
        .parse()
        .map_err(|e| format!("invalid column `{character}`: {e}"))?;
    Ok(Position::new(line, character))
}

fn parse_selection(s: &str) -> Result<Selection, String> {
    match s.split_once("..") {
        Some((anchor, active)) => Ok(Selection::new(
            parse_position(anchor)?,
            parse_position(active)?,
        )),
        None => Ok(Selection::caret(parse_position(s)?)),
    }
}

fn format_selection(selection: &Selection) -> String {
    let range = selection.range();
    format!(
        "{}:{}..{}:{}",
        range.start.line, range.start.character, range.end.line, range.end.character
    )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<ChangeCaseConfig> {
    let mut config = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading settings {}", path.display()))?;
            let settings = JsonConfig::from_json(&text)
                .with_context(|| format!("parsing settings {}", path.display()))?;
            ChangeCaseConfig::resolve(&settings)
        }
        None => ChangeCaseConfig::default(),
    };
    config.include_dot_in_current_word |= args.include_dot;
    Ok(config)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn list(commands: &ChangeCase) {
    for t in commands.catalog().iter() {
        println!("{:<16} {}", t.name, t.description);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let commands = ChangeCase::default();
    if args.list {
        list(&commands);
        return Ok(());
    }

    let (Some(path), Some(transformation)) = (&args.file, &args.transformation) else {
        bail!("a file and a transformation are required");
    };
    let name = match commands.transformation_for_command_id(transformation) {
        Some(t) => t.name,
        None => transformation.as_str(),
    };

    let config = load_config(&args)?;
    let text = read_input(path)?;
    let selections = if args.at.is_empty() {
        vec![Selection::caret(Position::new(0, 0))]
    } else {
        args.at.clone()
    };
    tracing::debug!(file = %path.display(), selections = selections.len(), "Loaded input");

    let mut editor = MemoryEditor::new(&text).with_selections(selections);
    let result = commands
        .run_command(name, Some(&mut editor), &config)
        .with_context(|| format!("running {name}"))?;

    let output = editor.text();
    if args.write && path.as_os_str() != "-" {
        fs::write(path, &output).with_context(|| format!("writing {}", path.display()))?;
    } else {
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
    }

    if let CommandResult::Converted { selections } = result {
        for selection in &selections {
            eprintln!("{}", format_selection(selection));
        }
    }
    Ok(())
}
