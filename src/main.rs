use clap::{Parser, Subcommand};
use unitconv::config::Config;
use unitconv::units::{compare, convert, RawValue};

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Unit conversion and comparison tool", long_about = None)]
struct Cli {
    /// Defaults file (TOML); built-in defaults are used when absent
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of one dimension
    Convert {
        /// Dimension name: temperature, distance, or weight
        dimension: String,

        /// Value to convert
        value: String,

        /// Source unit (temperature falls back to the configured default)
        from: Option<String>,

        /// Target unit (temperature falls back to the configured default)
        to: Option<String>,
    },

    /// Compare two quantities of the same dimension
    Compare {
        value1: String,
        unit1: String,
        value2: String,
        unit2: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Convert {
            dimension,
            value,
            from,
            to,
        } => match run_convert(&config, &dimension, &value, from.as_deref(), to.as_deref(), cli.json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Compare {
            value1,
            unit1,
            value2,
            unit2,
        } => match run_compare(&config, &value1, &unit1, &value2, &unit2, cli.json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Load defaults from the given path; an absent flag or nonexistent file
/// falls back to built-in defaults, a malformed file is an error.
fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) if std::path::Path::new(path).exists() => Config::load_from_file(path),
        _ => Ok(Config::default()),
    }
}

fn run_convert(
    config: &Config,
    dimension: &str,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(config, dimension, &RawValue::from(value), from, to)?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}

fn run_compare(
    config: &Config,
    value1: &str,
    unit1: &str,
    value2: &str,
    unit2: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = compare(
        config,
        &RawValue::from(value1),
        unit1,
        &RawValue::from(value2),
        unit2,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.equal {
        println!("{} {} equals {} {}", value1, unit1, value2, unit2);
    } else {
        println!("{} is larger than {}", result.larger, result.smaller);
        println!("Difference: {} {}", result.difference, result.difference_unit);
    }

    Ok(())
}
