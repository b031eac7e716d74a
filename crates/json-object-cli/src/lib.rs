//! Command-line front end over `json-object`.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use json_object::{Beautifier, CodecError, Document, DocumentError, Value};
use json_object_path::{validate_path_str, PathError};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "json-object",
    about = "Read and edit JSON documents by dotted path",
    version
)]
pub struct Cli {
    /// Read the document from FILE instead of stdin
    #[arg(long, short, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the value at a dotted path
    Get {
        #[arg(value_parser = dotted_path)]
        path: String,
        /// Coerce the value before printing
        #[arg(long = "as", value_enum, default_value_t = Target::Json)]
        target: Target,
    },
    /// Print whether a dotted path resolves
    Has {
        #[arg(value_parser = dotted_path)]
        path: String,
    },
    /// Store a value (raw JSON, or a plain string) at a dotted path
    Put {
        #[arg(value_parser = dotted_path)]
        path: String,
        value: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Remove the value at a dotted path
    Remove {
        #[arg(value_parser = dotted_path)]
        path: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the document indented
    Fmt,
}

/// Reject paths over the length and depth limits before touching the document.
fn dotted_path(raw: &str) -> Result<String, PathError> {
    validate_path_str(raw)?;
    Ok(raw.to_string())
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Json,
    Float,
    Int,
    String,
    Bool,
}

/// Whether the command found what it looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Missing,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Read the document from `input`, or from stdin when there is none.
pub fn load(input: Option<&Path>) -> Result<Document, CliError> {
    match input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading document");
            Ok(Document::parse_file(path)?)
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).map_err(CliError::Stdin)?;
            tracing::debug!(len = buf.len(), "read document from stdin");
            Ok(Document::parse(&buf)?)
        }
    }
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome, CliError> {
    let doc = load(cli.input.as_deref())?;
    execute(&cli.command, doc, out)
}

pub fn execute(command: &Command, mut doc: Document, out: &mut impl Write) -> Result<Outcome, CliError> {
    match command {
        Command::Get { path, target } => match render(&doc, path, *target) {
            Some(text) => {
                writeln!(out, "{text}")?;
                Ok(Outcome::Found)
            }
            None => {
                tracing::info!(path = %path, "no value to print");
                Ok(Outcome::Missing)
            }
        },
        Command::Has { path } => {
            writeln!(out, "{}", doc.has(path))?;
            Ok(Outcome::Found)
        }
        Command::Put {
            path,
            value,
            pretty,
        } => {
            doc.put_value(path, parse_value(value))?;
            print_document(&doc, *pretty, out)
        }
        Command::Remove { path, pretty } => {
            if doc.remove(path).is_none() {
                tracing::info!(path = %path, "nothing removed");
            }
            print_document(&doc, *pretty, out)
        }
        Command::Fmt => print_document(&doc, true, out),
    }
}

/// Raw JSON when it parses, the literal text otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn render(doc: &Document, path: &str, target: Target) -> Option<String> {
    match target {
        Target::Json => doc.get(path).map(Value::to_string),
        Target::Float => doc.get_float_opt(path).map(|n| n.to_string()),
        Target::Int => doc.get_int_opt(path).map(|n| n.to_string()),
        Target::String => doc.get_string_opt(path),
        Target::Bool => doc.get_bool_opt(path).map(|b| b.to_string()),
    }
}

fn print_document(doc: &Document, pretty: bool, out: &mut impl Write) -> Result<Outcome, CliError> {
    if pretty {
        writeln!(out, "{}", doc.beautified_string())?;
    } else {
        writeln!(out, "{doc}")?;
    }
    Ok(Outcome::Found)
}
