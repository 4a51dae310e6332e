use clap::{Parser, ValueEnum};
use log::error;
use rdsr_core::dose::{compute_skin_dose, CommandDoseEngine, DoseMode, DoseSettings};
use rdsr_core::logging::LogConfig;
use std::path::PathBuf;
use std::process;

/// CLI tool forwarding an RDSR file to an external skin-dose engine
#[derive(Parser, Debug)]
#[command(name = "rdsrdose")]
#[command(about = "Estimate peak skin dose of an RDSR file with an external dose engine")]
#[command(version)]
struct Cli {
    /// RDSR file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Engine program; receives settings JSON on stdin and FILE as last argument
    #[arg(short, long, value_name = "PROGRAM")]
    engine: PathBuf,

    /// Extra arguments placed before FILE (repeatable)
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    engine_args: Vec<String>,

    /// Settings JSON file; built-in defaults when omitted
    #[arg(short, long, value_name = "JSON")]
    settings: Option<PathBuf>,

    /// Override the settings mode
    #[arg(short, long)]
    mode: Option<ModeArg>,

    /// Print the full engine result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    CalculateDose,
    PlotSetup,
    PlotProcedure,
}

impl From<ModeArg> for DoseMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::CalculateDose => DoseMode::CalculateDose,
            ModeArg::PlotSetup => DoseMode::PlotSetup,
            ModeArg::PlotProcedure => DoseMode::PlotProcedure,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = LogConfig::default().level(level).install() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let mut settings = match &cli.settings {
        Some(path) => match DoseSettings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to load settings {}: {}", path.display(), e);
                eprintln!("Error: Failed to load settings: {}", e);
                process::exit(1);
            }
        },
        None => DoseSettings::default(),
    };
    if let Some(mode) = cli.mode {
        settings.mode = mode.into();
    }

    let engine = CommandDoseEngine::new(&cli.engine).args(cli.engine_args.iter().cloned());

    match compute_skin_dose(&engine, &settings, &cli.file) {
        Ok(output) => {
            if cli.json {
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                println!("estimated psd {:.1} mGy", output.psd);
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
