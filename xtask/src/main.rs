use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod bench;
mod docs;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "boxslice workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a markdown API reference from `///` comments
    Docs {
        /// Directory of Rust sources to scan
        #[arg(long, default_value = "src")]
        src: PathBuf,

        /// Markdown file to write
        #[arg(long, default_value = "API.md")]
        out: PathBuf,
    },
    /// Run the criterion benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Docs { src, out } => docs::write_api_reference(&src, &out)?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                bench::run_benchmarks(quick)?;
            }
            bench::generate_report()?;
        }
    }

    Ok(())
}
