use clap::{Parser, ValueEnum};
use eurocountries::core::config::{self, CliOverrides};
use eurocountries::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "eurocountries", about = "Browse facts about European countries")]
struct Args {
    /// Country data file to use instead of the bundled list
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Skip the disclaimer screen
    #[arg(long)]
    no_disclaimer: bool,

    /// Screen width in columns (0 = terminal width)
    #[arg(long)]
    width: Option<u16>,

    /// Screen height in rows (0 = terminal height)
    #[arg(long)]
    height: Option<u16>,

    /// Log verbosity written to eurocountries.log
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to eurocountries.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("eurocountries.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("European countries browser starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("eurocountries: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cli = CliOverrides {
        data_file: args.data,
        no_disclaimer: args.no_disclaimer,
        width: args.width,
        height: args.height,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Catalog source: {}", resolved.catalog_source);

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("eurocountries: {}", e);
            ExitCode::FAILURE
        }
    }
}
