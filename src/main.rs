#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dag_parser::diagnostics::TracingDiagnostics;
use dag_parser::emit;
use dag_parser::parse::{DuplicatePolicy, GraphBuilder, MalformedPolicy, ParseOptions, Workflow};

/// Parse a Pegasus DAG file to generate a workflow description in JSON format.
#[derive(Parser, Debug)]
#[command(name = "dag-parser", version, about, long_about = None)]
struct Cli {
    /// Pegasus DAG file
    #[arg(value_name = "DAG_FILE")]
    dag_file: PathBuf,

    /// Output filename (the trace goes to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print debug messages to stderr
    #[arg(short, long)]
    debug: bool,

    /// Skip JOB/PARENT lines with missing fields instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Fail when a job name is declared more than once
    #[arg(long)]
    reject_duplicates: bool,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            malformed: if self.skip_malformed {
                MalformedPolicy::Skip
            } else {
                MalformedPolicy::Reject
            },
            duplicates: if self.reject_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::FirstWins
            },
        }
    }
}

/// `DAG_PARSER_LOG` overrides the level picked from `--debug`.
fn log_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env("DAG_PARSER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::registry().with(log_filter(cli.debug)).with(
        fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr),
    );

    tracing::subscriber::with_default(subscriber, || match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    })
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.dag_file.is_file() {
        bail!(
            "The provided path does not exist or is not a file:\n\t{}",
            cli.dag_file.display()
        );
    }

    debug!("Processing DAG file.");
    let workflow = read_workflow(&cli.dag_file, &cli.parse_options())?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            emit::write_json(&workflow, BufWriter::new(file))
                .with_context(|| format!("failed to write output file {}", path.display()))?;
            info!("JSON trace file written to \"{}\".", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            emit::write_json(&workflow, &mut stdout).context("failed to write to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        }
    }

    Ok(())
}

/// One forward pass over the file; the handle is dropped before emitting.
fn read_workflow(path: &Path, options: &ParseOptions) -> Result<Workflow> {
    let file =
        File::open(path).with_context(|| format!("failed to open DAG file {}", path.display()))?;

    let mut diag = TracingDiagnostics;
    let mut builder = GraphBuilder::new(*options);
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read DAG file {}", path.display()))?;
        builder.push_line(&line, &mut diag);
    }

    builder.finish(&mut diag).map_err(|errors| {
        for e in &errors {
            error!("{e}");
        }
        anyhow!(
            "{} rejected with {} error(s)",
            path.display(),
            errors.len()
        )
    })
}
