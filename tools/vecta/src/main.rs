use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use vecta_data::HotspotTable;

mod assess;
mod config;
mod error;
mod newsletter;
mod scan;

use assess::{run_assess, AssessArgs};
use config::{generate_template, Config, CONFIG_FILE};
use error::CliError;
use newsletter::{run_newsletter, NewsletterCommand};
use scan::{run_scan, ScanArgs};

#[derive(Debug, Parser)]
#[command(
    name = "vecta",
    version,
    about = "Dengue risk assessment for public-health teams",
    long_about = "vecta scores dengue danger for an area from construction activity,\n\
        weather and reported cases, and scores breeding-site scans from\n\
        object-detector counts.\n\n\
        EXAMPLES:\n\
        \n  vecta assess --area \"Ang Mo Kio\" --humidity 78    Score an area\n\
        \n  vecta assess --weather-json owm.json --explain    Use a saved weather response\n\
        \n  vecta scan --count Tire=2 --count Bottle=1         Score a breeding-site scan\n\
        \n  vecta hotspots                                    List known hotspots\n\
        \n  vecta newsletter add \"Clear your gutters\"       Save a newsletter issue\n\
        \n  vecta config init                                 Write a vecta.toml template"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file
    #[arg(long, value_name = "FILE", default_value = CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score dengue danger for an area
    Assess(AssessArgs),

    /// Score breeding sites found in a photo scan
    Scan(ScanArgs),

    /// List dengue hotspot locations
    Hotspots(HotspotsArgs),

    /// Save or read community newsletters
    #[command(subcommand)]
    Newsletter(NewsletterCommand),

    /// Manage vecta.toml
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args, Clone)]
struct HotspotsArgs {
    /// Hotspot CSV with lat,lon,cases columns
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print hotspots as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand, Clone)]
enum ConfigCommand {
    /// Write a commented vecta.toml with the default values
    Init,
    /// Print the effective configuration
    Show,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn run_hotspots(args: &HotspotsArgs, config: &Config) -> Result<String, CliError> {
    let path = args.csv.as_ref().unwrap_or(&config.hotspots_csv);
    let table = if path.exists() {
        HotspotTable::from_path(path)?
    } else {
        eprintln!(
            "note: {} not found, showing demo hotspot data",
            path.display()
        );
        HotspotTable::demo()
    };

    if args.json {
        return Ok(serde_json::to_string_pretty(&table)?);
    }
    let mut out = String::from("lat,lon,cases\n");
    for h in &table.hotspots {
        out.push_str(&format!("{},{},{}\n", h.lat, h.lon, h.cases));
    }
    out.push_str(&format!(
        "# {} hotspots, {} cases\n",
        table.hotspots.len(),
        table.total_cases()
    ));
    Ok(out)
}

fn run_config(cmd: &ConfigCommand, path: &Path, config: &Config) -> Result<String, CliError> {
    match cmd {
        ConfigCommand::Init => {
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "'{}' already exists",
                    path.display()
                )));
            }
            fs::write(path, generate_template())?;
            Ok(format!("Created {}\n", path.display()))
        }
        ConfigCommand::Show => Ok(config.to_toml()?),
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = Config::load(&cli.config)?;
    match &cli.command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Scan(args) => run_scan(args, &config),
        Command::Hotspots(args) => run_hotspots(args, &config),
        Command::Newsletter(cmd) => run_newsletter(cmd, &config),
        Command::Config(cmd) => run_config(cmd, &cli.config, &config),
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
