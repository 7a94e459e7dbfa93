use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use simpol_groups::{count_batch, input_lines, Column, Counted, EngineConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One header row, then one row per molecule
    Csv,
    /// One JSON object per molecule
    Json,
}

#[derive(Parser)]
#[command(
    name = "simpol-groups",
    about = "Count SIMPOL.1 functional groups in SMILES strings",
    version,
    author
)]
struct Cli {
    /// File with one SMILES per line (stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Reject molecules with atoms outside the supported subset
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("error: setting default subscriber failed: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            warn!(failed, "some molecules could not be counted");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of molecules that failed.
fn run(cli: &Cli) -> Result<usize, Box<dyn std::error::Error>> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = if cli.strict {
        EngineConfig::strict()
    } else {
        EngineConfig::default()
    };

    let lines = input_lines(&text);
    info!(molecules = lines.len(), "read input");
    let results = count_batch(&lines, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Format::Csv = cli.format {
        write_csv_header(&mut out)?;
    }

    let mut failed = 0;
    for result in &results {
        match result {
            Ok(counted) => match cli.format {
                Format::Csv => write_csv_row(&mut out, counted)?,
                Format::Json => {
                    serde_json::to_writer(&mut out, counted)?;
                    writeln!(out)?;
                }
            },
            Err(e) => {
                warn!(line = e.line, smiles = %e.smiles, error = %e.source, "skipping molecule");
                failed += 1;
            }
        }
    }
    out.flush()?;

    Ok(failed)
}

fn write_csv_header(out: &mut impl Write) -> io::Result<()> {
    write!(out, "line,smiles")?;
    for column in Column::ALL {
        write!(out, ",{}", column.name())?;
    }
    writeln!(out)
}

fn write_csv_row(out: &mut impl Write, counted: &Counted) -> io::Result<()> {
    write!(out, "{},{}", counted.line, counted.smiles)?;
    for n in counted.counts.as_slice() {
        write!(out, ",{}", n)?;
    }
    writeln!(out)
}
