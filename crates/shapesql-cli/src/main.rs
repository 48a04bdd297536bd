//! shapesql CLI
//!
//! Reads a JSON schema document and prints the matching `CREATE TABLE`
//! statement.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug, warn};
use tracing_subscriber::FmtSubscriber;

use shapesql_core::{DialectRegistry, NodeKind, SchemaNode, TypeNode, flatten};

/// Generate CREATE TABLE statements from schema documents.
#[derive(Parser)]
#[command(name = "shapesql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema document (JSON). Reads stdin when omitted or `-`.
    #[arg(default_value = "-")]
    schema: PathBuf,

    /// Name of the table to create.
    #[arg(short, long, required_unless_present = "list_dialects")]
    table: Option<String>,

    /// Target SQL dialect (the registry default, postgres, when omitted).
    #[arg(short, long, env = "SHAPESQL_DIALECT")]
    dialect: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Sql)]
    format: Format,

    /// List the available dialects and exit.
    #[arg(long)]
    list_dialects: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The CREATE TABLE statement.
    Sql,
    /// The flattened columns as JSON.
    Columns,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the generated output
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = DialectRegistry::builtin();
    let mut out = io::stdout().lock();

    if cli.list_dialects {
        for name in registry.names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let dialect = registry.resolve(cli.dialect.as_deref())?;
    let schema = read_schema(&cli.schema)?;
    let table = cli.table.context("--table is required")?;

    if schema.kind() != NodeKind::Object {
        warn!(
            "Schema root is {:?}, not an object; no table generated",
            schema.kind()
        );
        return Ok(());
    }

    match cli.format {
        Format::Sql => {
            let sql = shapesql_core::convert(&schema, &table, dialect);
            writeln!(out, "{sql}")?;
        }
        Format::Columns => {
            let columns = flatten(&schema, dialect);
            debug!(columns = columns.len(), "Flattened schema");
            serde_json::to_writer_pretty(&mut out, &columns)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn read_schema(path: &Path) -> anyhow::Result<TypeNode> {
    if path.as_os_str() == "-" {
        debug!("Reading schema from stdin");
        return TypeNode::from_reader(io::stdin().lock())
            .context("Failed to read schema from stdin");
    }

    debug!(path = %path.display(), "Reading schema");
    let file = File::open(path)
        .with_context(|| format!("Failed to open schema file {}", path.display()))?;
    TypeNode::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read schema from {}", path.display()))
}
