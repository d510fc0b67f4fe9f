use std::fs::File;
use std::io::{self, BufWriter, Write, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// `key,col0,col1,...` per row
    Csv,
    /// Rows grouped under each key
    List,
}

#[derive(Parser, Debug)]
#[command(name = "scsv-cli", about = "Convert SCSV to CSV", version)]
struct Args {
    /// Start in strict mode (directives can still change it)
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Let flow values win over a flow key declared on the same line
    #[arg(long, default_value_t = false)]
    value_precedence: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    format: FormatArg,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_list<W: Write>(mut out: W, doc: &scsv::ParsedDocument) -> io::Result<()> {
    for (key, rows) in doc {
        writeln!(out, "{key}:")?;
        for value in rows.iter().flatten() {
            writeln!(out, " - {value}")?;
        }
    }
    out.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = scsv::Options {
        strict: args.strict,
        value_precedence: args.value_precedence,
    };

    let doc = match &args.input {
        Some(path) => scsv::parse_file(path, &options)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        None => scsv::parse_reader(stdin().lock(), &options).context("failed to parse stdin")?,
    };
    tracing::info!(keys = doc.len(), rows = doc.row_count(), "parsed");

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        FormatArg::Csv => scsv::write_csv(out, &doc)?,
        FormatArg::List => write_list(out, &doc)?,
    }

    Ok(())
}
