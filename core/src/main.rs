use clap::Parser;
use log::{error, info};
use rdsr_core::cli::report::TextReport;
use rdsr_core::cli::{Cli, OutputFormat};
use rdsr_core::setup::{prompt_line, resolve_destination, resolve_root};
use rdsr_core::{RdsrLocator, Result, ScanReport};
use std::io;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.log_config().install() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match run(&cli) {
        Ok(report) => {
            output_report(&report, &cli.format);
            if !report.is_complete() {
                process::exit(2);
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<ScanReport> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => PathBuf::from(ask("Enter the root folder: ")?),
    };
    let root = resolve_root(&root)?;

    let dest = match &cli.dest {
        Some(dest) => Some(dest.clone()),
        None => {
            let answer =
                ask("Enter the destination folder (\"Enter\" to use \"RDSR\" in current dir): ")?;
            (!answer.is_empty()).then(|| PathBuf::from(answer))
        }
    };
    let dest = resolve_destination(dest.as_deref())?;

    let options = cli.scan_options();
    info!("Using collision policy: {}", options.collision_policy);
    RdsrLocator::new(options).run(&root, &dest)
}

fn ask(prompt: &str) -> io::Result<String> {
    prompt_line(prompt, &mut io::stdin().lock(), &mut io::stdout())
}

fn output_report(report: &ScanReport, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", TextReport::new(report)),
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize to JSON: {}", e);
                eprintln!("Error: Failed to serialize to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}
