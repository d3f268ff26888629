use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracku::display::{DetailsPanel, DisplayConfig};
use tracku::telemetry::{self, LocationUpdate};
use tracku::units::{self, Conversion};

#[derive(Parser)]
#[command(name = "tracku")]
#[command(about = "Format live-location telemetry for display", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a speed in m/s to mph
    Speed {
        /// Speed reading (e.g., "10" or "10 m/s")
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Convert a distance in meters to feet
    Feet {
        /// Distance reading (e.g., "1609.344" or "1609.344 m")
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Convert a distance in meters to miles
    Miles {
        /// Distance reading (e.g., "1609.344" or "1609.344 m")
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Render the device details panel for captured location updates
    Details {
        /// Update file: one feature, a JSON array, or one feature per line ("-" for stdin).
        /// Shows the initial location when omitted.
        path: Option<String>,

        /// Display config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(clap::Args)]
struct FormatArgs {
    /// Digits after the decimal point
    #[arg(
        short,
        long,
        default_value_t = units::DEFAULT_PRECISION,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=units::MAX_PRECISION as u64)
    )]
    precision: usize,

    /// Append the unit suffix (mph, ft, mi)
    #[arg(short, long)]
    unit: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Speed { value, format } => convert(Conversion::SpeedToImperial, &value, &format),
        Commands::Feet { value, format } => convert(Conversion::DistanceToFeet, &value, &format),
        Commands::Miles { value, format } => convert(Conversion::DistanceToMiles, &value, &format),
        Commands::Details {
            path,
            config,
            format,
        } => render_details(path.as_deref(), config.as_ref(), format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn convert(
    conversion: Conversion,
    value: &str,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let reading = units::parse_quantity(value, conversion.base_unit())?;
    let formatted = conversion.apply(reading, args.precision)?;

    if args.unit {
        println!("{} {}", formatted, conversion.target_symbol());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn render_details(
    path: Option<&str>,
    config_path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => DisplayConfig::load_from_file(path)?,
        None => DisplayConfig::empty(),
    };

    let (updates, validation) = match path {
        None => (vec![LocationUpdate::initial()], telemetry::ValidationResult::new()),
        Some("-") => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            telemetry::load_location_updates_from_str(&content)?
        }
        Some(path) => telemetry::load_location_updates(path)?,
    };

    // Print validation issues if any
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    if updates.is_empty() {
        log::warn!("no location updates to render");
        return Ok(());
    }

    let panels = updates
        .iter()
        .map(|update| DetailsPanel::build(update, &config))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Text => {
            let text: Vec<String> = panels.iter().map(|panel| panel.to_string()).collect();
            print!("{}", text.join("\n"));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&panels)?);
        }
    }

    Ok(())
}
