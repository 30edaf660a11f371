//! CLI entry point for the `msf` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use spanning_forest::io::{load_graph, ForestReport, LoaderConfig, ReportFormat};
use spanning_forest::minimum_spanning_forest;

#[derive(Parser)]
#[command(
    name = "msf",
    about = "Minimum spanning forest of a weighted place graph read from CSV"
)]
struct Cli {
    /// Input file with one `<nodeA>,<nodeB>,<meters>` record per line
    input: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> spanning_forest::Result<()> {
    let config = LoaderConfig {
        delimiter: cli.delimiter,
    };

    let graph = load_graph(&cli.input, &config)?;
    let forest = minimum_spanning_forest(&graph)?;
    let report = ForestReport::from_forest(&forest);

    println!("{}", report.render(cli.format)?);
    Ok(())
}
